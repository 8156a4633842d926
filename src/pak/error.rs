#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PakError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("input not found: {0}")]
    NotFound(String),

    /// Symlinks, sockets, fifos and devices are never packed.
    #[error("not a regular file: {0}")]
    NotRegular(String),

    #[error("path is outside input dir: {0}")]
    Outside(String),

    #[error("duplicate entry name: {first} collides with {second}")]
    DuplicateName { first: String, second: String },

    #[error("invalid entry: {0}")]
    Invalid(String),

    #[error("corrupt archive: {0}")]
    Corrupt(String),
}

pub type PakResult<T> = Result<T, PakError>;
