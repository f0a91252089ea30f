#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod document;
pub mod decode;
pub mod encode;

mod number;

pub use crate::document::{Document, IntoValue, Section};
pub use crate::error::{Error, Result};
pub use crate::options::{Options, Separator};

use std::io::{Read, Write};
use std::path::Path;

use tracing::warn;

/// Parse permissively: input after the first construct that does not
/// match is ignored. Never fails.
pub fn parse(src: &str) -> Document {
    crate::decode::parser::parse_document(src)
}

/// Serialize with default options.
pub fn stringify(doc: &Document) -> String {
    encode_to_string(doc, &Options::default())
}

pub fn decode_from_str(s: &str, options: &Options) -> Result<Document> {
    crate::decode::parser::parse_document_with_strict(s, options.strict)
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Document> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    decode_from_str(&s, options)
}

pub fn encode_to_string(doc: &Document, options: &Options) -> String {
    crate::encode::encode_document(doc, options)
}

pub fn encode_to_writer<W: Write>(mut writer: W, doc: &Document, options: &Options) -> Result<()> {
    let s = encode_to_string(doc, options);
    writer.write_all(s.as_bytes())?;
    Ok(())
}

/// Read a whole file as text. A file that cannot be read yields `""`,
/// which parses as an empty document.
pub fn load_file(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot read file, using empty input");
            String::new()
        }
    }
}
