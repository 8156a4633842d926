#![forbid(unsafe_code)]

//! Deterministic codec for sets of named byte blobs.
//!
//! [`pack`] turns a file or directory into a base64 blob that can live inside
//! a Rust string literal; [`unpack`] and [`must_unpack`] give the exact bytes
//! back at runtime.

mod build;
mod error;
mod format;
mod io;
mod ops;
mod path;
mod read;

pub use build::{encode, pack};
pub use error::{PakError, PakResult};
pub use format::{Entry, NameRule, Packed};
pub use ops::list;
pub use read::{must_unpack, unpack};
