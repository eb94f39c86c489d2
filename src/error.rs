use thiserror::Error;

use crate::diagnostic::Diagnostics;
use crate::interpret::RuntimeError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Found {} error(s) while scanning and parsing", .0.len())]
    Static(Diagnostics),

    #[error("{0}\n[line {}]", .0.line())]
    Runtime(#[from] RuntimeError),

    #[error("Writing the result failed with error: {0}")]
    Write(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for a failed run, following sysexits.h.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Static(_) => 65,
            Error::Runtime(_) => 70,
            Error::Write(_) => 74,
        }
    }
}
