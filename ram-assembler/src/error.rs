//! Loader errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}: {message}")]
    SyntaxError { line: usize, message: String },

    #[error("Invalid register value `{token}` at line {line}")]
    InvalidRegisterValue { line: usize, token: String },

    #[error("Program has no register initialisation line")]
    MissingRegisters,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
