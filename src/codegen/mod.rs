#![forbid(unsafe_code)]

//! Renders packed archives into Rust source.
//!
//! Two embed modes share the packing, license and output plumbing:
//! [`generate_config`] embeds one document behind an accessor function,
//! [`generate_specs`] embeds a directory of spec documents and validates each
//! of them with a [`SpecParser`] before anything is rendered.

mod config;
mod error;
mod output;
mod specs;
mod template;

/// Crate path the generated code calls back into.
pub const DEFAULT_RUNTIME: &str = "::embedpak";

pub use config::{generate_config, ConfigOptions, DEFAULT_ACCESSOR};
pub use error::{GenError, GenResult};
pub use output::{GeneratedModule, Output};
pub use specs::{
    generate_specs, parse_specs, GeneratedSpecs, SpecParser, SpecSet, SpecsOptions, YamlSpec,
    YamlSpecError, YamlSpecParser, DEFAULT_KEY_FIELD, DEFAULT_SPEC_TYPE,
};
