#![forbid(unsafe_code)]

use log::{debug, info};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

use crate::codegen::error::{GenError, GenResult};
use crate::codegen::output::GeneratedModule;
use crate::codegen::template::{check_ident, check_path, check_type, render_preamble};
use crate::codegen::DEFAULT_RUNTIME;
use crate::license::LicenseRegistry;
use crate::pak::{pack, unpack, NameRule};

pub const DEFAULT_SPEC_TYPE: &str = "Spec";
pub const DEFAULT_KEY_FIELD: &str = "cmd";

/// Structural parser for one packed spec document.
///
/// The generator only needs the parsed value and its identifying key; what a
/// spec looks like beyond that belongs to the embedding program.
pub trait SpecParser {
    type Spec;
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse(&self, raw: &[u8]) -> Result<Self::Spec, Self::Error>;

    /// Identifying field, compared case-insensitively.
    fn key<'a>(&self, spec: &'a Self::Spec) -> &'a str;
}

/// Parsed specs in packed name order plus a lower-cased key index.
#[derive(Debug, Clone)]
pub struct SpecSet<S> {
    specs: Vec<(String, S)>,
    index: HashMap<String, usize>,
}

impl<S> SpecSet<S> {
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.specs.iter().map(|(_, s)| s)
    }

    /// Packed entry names, in the same order as [`SpecSet::iter`].
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|(n, _)| n.as_str())
    }

    /// Case-insensitive lookup by key.
    pub fn get(&self, key: &str) -> Option<&S> {
        self.index
            .get(&key.to_lowercase())
            .map(|&i| &self.specs[i].1)
    }

    /// Lower-cased keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.index.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Parses every unpacked entry. The first failure aborts the whole batch.
pub fn parse_specs<P: SpecParser>(
    unpacked: BTreeMap<String, Vec<u8>>,
    parser: &P,
) -> GenResult<SpecSet<P::Spec>> {
    let mut specs: Vec<(String, P::Spec)> = Vec::with_capacity(unpacked.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(unpacked.len());

    for (name, raw) in unpacked {
        let spec = parser.parse(&raw).map_err(|e| GenError::Parse {
            name: name.clone(),
            source: Box::new(e),
        })?;

        let key = parser.key(&spec).to_lowercase();
        if let Some(&first) = index.get(&key) {
            return Err(GenError::DuplicateName {
                key,
                first: specs[first].0.clone(),
                second: name,
            });
        }
        debug!("parsed {name} as {key:?}");
        index.insert(key, specs.len());
        specs.push((name, spec));
    }

    Ok(SpecSet { specs, index })
}

/// Options of the multi-file embed mode.
#[derive(Debug, Clone)]
pub struct SpecsOptions {
    pub license: String,
    /// Type in the embedding program exposing `from_bytes(&[u8]) -> Result<Self, E>`.
    pub spec_type: String,
    /// Field of that type used as the lookup key.
    pub key_field: String,
    pub runtime: String,
}

impl Default for SpecsOptions {
    fn default() -> Self {
        Self {
            license: crate::DEFAULT_LICENSE.to_string(),
            spec_type: DEFAULT_SPEC_TYPE.to_string(),
            key_field: DEFAULT_KEY_FIELD.to_string(),
            runtime: DEFAULT_RUNTIME.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct GeneratedSpecs<S> {
    pub module: GeneratedModule,
    pub specs: SpecSet<S>,
}

/// Embeds a directory of spec documents, validating each one up front.
pub fn generate_specs<P: SpecParser>(
    registry: &LicenseRegistry,
    input: &Path,
    parser: &P,
    opts: &SpecsOptions,
) -> GenResult<GeneratedSpecs<P::Spec>> {
    if input.as_os_str().is_empty() {
        return Err(GenError::Input("empty input path".into()));
    }
    let license = registry.find(&opts.license)?;
    check_type("spec type", &opts.spec_type)?;
    check_ident("key field", &opts.key_field)?;
    check_path("runtime", &opts.runtime)?;

    let packed = pack(input, NameRule::CaseInsensitive)?;
    let specs = parse_specs(unpack(&packed.blob)?, parser)?;

    let mut source = render_preamble(license, "specs", &packed);
    source.push_str(&format!(
        r#"
/// Embedded specs in packed name order, with a lookup keyed by the
/// lower-cased `{key}` field.
pub struct Supported {{
    pub specs: ::std::vec::Vec<{ty}>,
    pub by_key: ::std::collections::HashMap<::std::string::String, {ty}>,
}}

impl Supported {{
    /// Case-insensitive lookup.
    pub fn get(&self, key: &str) -> ::std::option::Option<&{ty}> {{
        self.by_key.get(&key.to_lowercase())
    }}
}}

/// Decodes and parses every embedded spec.
pub fn supported() -> Supported {{
    let unpacked = {runtime}::pak::must_unpack(PACKED);
    let mut specs = ::std::vec::Vec::with_capacity(unpacked.len());
    let mut by_key = ::std::collections::HashMap::with_capacity(unpacked.len());
    for (name, raw) in unpacked {{
        let spec = <{ty}>::from_bytes(&raw)
            .unwrap_or_else(|err| panic!("cannot read spec from {{}}: {{}}", name, err));
        by_key.insert(spec.{key}.to_lowercase(), spec.clone());
        specs.push(spec);
    }}
    Supported {{ specs, by_key }}
}}
"#,
        key = opts.key_field,
        ty = opts.spec_type,
        runtime = opts.runtime,
    ));

    info!("embedding {} spec(s) from {}", specs.len(), input.display());
    let module = GeneratedModule::new(source, packed.names())?;
    Ok(GeneratedSpecs { module, specs })
}

#[derive(Debug, Error)]
pub enum YamlSpecError {
    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("missing string field {0:?}")]
    MissingKey(String),
}

/// A YAML spec document with its key extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlSpec {
    pub key: String,
    pub doc: serde_yaml::Value,
}

/// Parses each entry as a YAML mapping keyed by one of its string fields.
#[derive(Debug, Clone)]
pub struct YamlSpecParser {
    pub key_field: String,
}

impl Default for YamlSpecParser {
    fn default() -> Self {
        Self {
            key_field: DEFAULT_KEY_FIELD.to_string(),
        }
    }
}

impl SpecParser for YamlSpecParser {
    type Spec = YamlSpec;
    type Error = YamlSpecError;

    fn parse(&self, raw: &[u8]) -> Result<YamlSpec, YamlSpecError> {
        let doc: serde_yaml::Value = serde_yaml::from_slice(raw)?;
        let key = doc
            .get(self.key_field.as_str())
            .and_then(serde_yaml::Value::as_str)
            .ok_or_else(|| YamlSpecError::MissingKey(self.key_field.clone()))?
            .to_string();
        Ok(YamlSpec { key, doc })
    }

    fn key<'a>(&self, spec: &'a YamlSpec) -> &'a str {
        &spec.key
    }
}
