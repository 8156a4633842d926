#![forbid(unsafe_code)]

use crate::codegen::error::{GenError, GenResult};
use crate::pak::Packed;

/// Leading part shared by every generated file: license, marker, manifest
/// and the archive literal.
pub(crate) fn render_preamble(license: &str, mode: &str, packed: &Packed) -> String {
    let mut out = String::with_capacity(license.len() + packed.blob.len() + 512);
    out.push_str(license);
    if !license.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!("// Code generated by embedpak {mode} - DO NOT EDIT.\n"));
    out.push('\n');

    out.push_str("// Packed files:\n");
    for (name, digest) in packed.digests() {
        out.push_str(&format!("// - {name:?} blake3:{digest}\n"));
    }
    out.push_str(&format!("const PACKED: &str = \"{}\";\n", packed.blob));
    out
}

/// Rejects anything that does not parse as a Rust file.
pub(crate) fn check_source(source: &str) -> GenResult<()> {
    syn::parse_file(source)
        .map(|_| ())
        .map_err(|e| GenError::Format(e.to_string()))
}

pub(crate) fn check_ident(what: &str, value: &str) -> GenResult<()> {
    syn::parse_str::<syn::Ident>(value)
        .map(|_| ())
        .map_err(|e| GenError::Format(format!("{what} {value:?} is not an identifier: {e}")))
}

pub(crate) fn check_type(what: &str, value: &str) -> GenResult<()> {
    syn::parse_str::<syn::Type>(value)
        .map(|_| ())
        .map_err(|e| GenError::Format(format!("{what} {value:?} is not a type: {e}")))
}

pub(crate) fn check_path(what: &str, value: &str) -> GenResult<()> {
    syn::parse_str::<syn::Path>(value)
        .map(|_| ())
        .map_err(|e| GenError::Format(format!("{what} {value:?} is not a path: {e}")))
}
