#![forbid(unsafe_code)]

use log::info;
use std::path::Path;

use crate::codegen::error::{GenError, GenResult};
use crate::codegen::output::GeneratedModule;
use crate::codegen::template::{check_ident, check_path, render_preamble};
use crate::codegen::DEFAULT_RUNTIME;
use crate::license::LicenseRegistry;
use crate::pak::{pack, NameRule};

pub const DEFAULT_ACCESSOR: &str = "default_fleet_config";

/// Options of the single-file embed mode.
#[derive(Debug, Clone)]
pub struct ConfigOptions {
    pub license: String,
    /// Name of the generated accessor function.
    pub accessor: String,
    /// Path of the crate providing `pak::must_unpack` to the generated code.
    pub runtime: String,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            license: crate::DEFAULT_LICENSE.to_string(),
            accessor: DEFAULT_ACCESSOR.to_string(),
            runtime: DEFAULT_RUNTIME.to_string(),
        }
    }
}

/// Embeds exactly one configuration document behind a single accessor.
pub fn generate_config(
    registry: &LicenseRegistry,
    input: &Path,
    opts: &ConfigOptions,
) -> GenResult<GeneratedModule> {
    if input.as_os_str().is_empty() {
        return Err(GenError::Input("empty input path".into()));
    }
    let license = registry.find(&opts.license)?;
    check_ident("accessor", &opts.accessor)?;
    check_path("runtime", &opts.runtime)?;

    let packed = pack(input, NameRule::Exact)?;
    let entry = match packed.entries.as_slice() {
        [one] => one,
        [] => {
            return Err(GenError::Input(format!(
                "no file to embed under {}",
                input.display()
            )))
        }
        many => return Err(GenError::TooManyFiles(many.len())),
    };

    let mut source = render_preamble(license, "config", &packed);
    source.push_str(&format!(
        r#"const ENTRY: &str = {entry:?};

/// Raw bytes of the embedded {entry:?} document.
pub fn {accessor}() -> &'static [u8] {{
    static RAW: ::std::sync::OnceLock<::std::vec::Vec<u8>> = ::std::sync::OnceLock::new();
    RAW.get_or_init(|| {{
        {runtime}::pak::must_unpack(PACKED)
            .remove(ENTRY)
            .unwrap_or_else(|| panic!("{{}} is not included in the binary", ENTRY))
    }})
}}
"#,
        entry = entry.name,
        accessor = opts.accessor,
        runtime = opts.runtime,
    ));

    info!(
        "embedding {} ({} bytes) as {}()",
        entry.name,
        entry.content.len(),
        opts.accessor
    );
    GeneratedModule::new(source, packed.names())
}
