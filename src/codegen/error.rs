#![forbid(unsafe_code)]

use std::path::PathBuf;
use thiserror::Error;

use crate::license::LicenseError;
use crate::pak::PakError;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("invalid input source: {0}")]
    Input(String),

    #[error(transparent)]
    Pack(#[from] PakError),

    #[error(transparent)]
    License(#[from] LicenseError),

    #[error("can only embed a single configuration file, found {0}")]
    TooManyFiles(usize),

    #[error("cannot read spec from {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("duplicate spec key {key:?}: {first} and {second}")]
    DuplicateName {
        key: String,
        first: String,
        second: String,
    },

    #[error("generated source is not valid rust: {0}")]
    Format(String),

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GenResult<T> = Result<T, GenError>;
