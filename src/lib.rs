#![forbid(unsafe_code)]

//! Build-time asset embedding.
//!
//! Files are packed into a deterministic base64 archive ([`pak`]), prefixed
//! with a license header ([`license`]) and rendered into Rust source with
//! accessors ([`codegen`]). Generated code depends on this crate only for
//! [`pak::must_unpack`].

pub mod codegen;
pub mod license;
pub mod pak;

/// License used when the caller does not pick one.
pub const DEFAULT_LICENSE: &str = "Elastic";
