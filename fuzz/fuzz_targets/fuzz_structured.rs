#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use initool::{Document, parse, stringify};
use arbitrary::Arbitrary;

const MAX_ENTRIES: usize = 40;

#[derive(Arbitrary, Debug)]
enum FuzzValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

#[derive(Arbitrary, Debug)]
struct FuzzEntry {
    section: String,
    key: String,
    value: FuzzValue,
}

fuzz_target!(|entries: Vec<FuzzEntry>| {
    let mut doc = Document::new();
    for e in entries.into_iter().take(MAX_ENTRIES) {
        match e.value {
            FuzzValue::Text(s) => doc.set(&e.section, &e.key, s),
            FuzzValue::Int(n) => doc.set(&e.section, &e.key, n),
            FuzzValue::Float(f) => doc.set(&e.section, &e.key, f),
            FuzzValue::Bool(b) => doc.set(&e.section, &e.key, b),
        }
    }

    let text = stringify(&doc);
    let decoded = parse(&text);
    if decoded != doc {
        panic!(
            "Structured roundtrip mismatch!\nOriginal: {:?}\nINI: {}\nDecoded: {:?}",
            doc, text, decoded
        );
    }
});
