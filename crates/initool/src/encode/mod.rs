//! Encoding pipeline: document back to INI text

pub mod primitives;
pub mod writer;

use crate::document::Document;
use crate::options::Options;

/// Serialize `doc`. Keys before any header (section `""`) come first and
/// unheaded; an empty `""` section is kept as an explicit `[""]` header so
/// it survives a re-parse.
pub fn encode_document(doc: &Document, options: &Options) -> String {
    let mut w = writer::LineWriter::new(options.separator);
    if let Some(top) = doc.data().get("") {
        if top.is_empty() {
            w.section_header("");
        }
        for (key, value) in top {
            w.line_kv(key, value);
        }
    }
    for (name, keys) in doc.data() {
        if name.is_empty() {
            continue;
        }
        w.section_header(name);
        for (key, value) in keys {
            w.line_kv(key, value);
        }
    }
    w.into_string()
}
