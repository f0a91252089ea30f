use tracing::{debug, trace};

use crate::decode::scanner::Scanner;
use crate::document::Document;
use crate::error::Error;

/// Where the parse loop gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Key,
    Assign,
    Value,
}

impl Stop {
    fn expected(self) -> &'static str {
        match self {
            Stop::Key => "expected key",
            Stop::Assign => "expected '=' or ':'",
            Stop::Value => "expected value",
        }
    }
}

pub struct Parser<'a> {
    scanner: Scanner<'a>,
    strict: bool,
    error: Option<Error>,
}

impl<'a> Parser<'a> {
    pub fn from_input(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
            strict: false,
            error: None,
        }
    }

    pub fn from_input_with_strict(input: &'a str, strict: bool) -> Self {
        Self {
            scanner: Scanner::new(input),
            strict,
            error: None,
        }
    }

    /// Read `[section]`* `key` `=` `value` groups until one of them fails
    /// to match. Returns the document and the reason the loop stopped.
    fn parse_pairs(&mut self) -> (Document, Stop) {
        let mut doc = Document::new();
        let mut section = String::new();
        loop {
            while let Some(name) = self.scanner.match_section() {
                trace!(section = %name, "section header");
                doc.add_section(name.as_str());
                section = name;
            }
            // a half-read pair leaves the cursor at its key
            let checkpoint = self.scanner;
            let Some(key) = self.scanner.match_key() else {
                return (doc, Stop::Key);
            };
            if !self.scanner.match_assign() {
                self.scanner = checkpoint;
                return (doc, Stop::Assign);
            }
            let Some(value) = self.scanner.match_value() else {
                self.scanner = checkpoint;
                return (doc, Stop::Value);
            };
            trace!(section = %section, key = %key, value = %value, "pair");
            doc.set(&section, &key, value);
        }
    }

    /// In strict mode, leftover input is recorded as a syntax error; the
    /// document read up to that point is returned either way.
    pub fn parse_document(&mut self) -> Document {
        let (doc, stop) = self.parse_pairs();
        self.scanner.skip_space_and_comment();
        if self.scanner.is_at_end() {
            return doc;
        }
        debug!(
            offset = self.scanner.pos(),
            line = self.scanner.line(),
            reason = stop.expected(),
            "parse stopped before end of input"
        );
        if self.strict {
            self.error = Some(Error::Syntax {
                line: self.scanner.line(),
                message: stop.expected().to_string(),
            });
        }
        doc
    }
}

/// Permissive parse: anything after the first unmatched construct is
/// dropped.
pub fn parse_document(input: &str) -> Document {
    Parser::from_input(input).parse_document()
}

pub fn parse_document_with_strict(input: &str, strict: bool) -> Result<Document, Error> {
    let mut p = Parser::from_input_with_strict(input, strict);
    let doc = p.parse_document();
    if let Some(err) = p.error {
        Err(err)
    } else {
        Ok(doc)
    }
}
