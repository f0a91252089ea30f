use crate::encode::primitives::{format_key_into, format_value_into};
use crate::options::Separator;

pub struct LineWriter {
    out: String,
    separator: char,
}

impl LineWriter {
    pub fn new(separator: Separator) -> Self {
        Self {
            out: String::new(),
            separator: separator.as_char(),
        }
    }

    /// `[name]`, with the name quoted like a key when needed.
    pub fn section_header(&mut self, name: &str) {
        self.out.push('[');
        format_key_into(&mut self.out, name);
        self.out.push(']');
        self.out.push('\n');
    }

    pub fn line_kv(&mut self, key: &str, value: &str) {
        format_key_into(&mut self.out, key);
        self.out.push(self.separator);
        format_value_into(&mut self.out, value);
        self.out.push('\n');
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
