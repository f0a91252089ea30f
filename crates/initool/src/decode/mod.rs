//! Decoding pipeline: scanner matchers and the parse loop

pub mod parser;
pub mod scanner;
