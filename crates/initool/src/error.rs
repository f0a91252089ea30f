use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Only produced in strict mode; the permissive parser never fails.
    #[error("syntax at line {line}: {message}")]
    Syntax { line: usize, message: String },
}

pub type Result<T> = core::result::Result<T, Error>;
