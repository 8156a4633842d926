#![forbid(unsafe_code)]

use std::path::Path;

use crate::pak::error::{PakError, PakResult};

/// Relative path of `file_path` under `input_root`, joined with `/` whatever
/// the host separator is.
pub fn normalize_rel_path(input_root: &Path, file_path: &Path) -> PakResult<String> {
    let rel = file_path
        .strip_prefix(input_root)
        .map_err(|_| PakError::Outside(file_path.to_string_lossy().into_owned()))?;

    let mut out = String::new();
    for (i, comp) in rel.components().enumerate() {
        if i != 0 {
            out.push('/');
        }
        let part = comp.as_os_str().to_str().ok_or_else(|| not_utf8(file_path))?;
        out.push_str(part);
    }

    out = out.replace('\\', "/");
    let out = out.trim_start_matches('/').to_string();

    if out.is_empty() {
        return Err(PakError::Invalid("empty relative path".into()));
    }

    Ok(out)
}

pub fn base_name(file_path: &Path) -> PakResult<String> {
    let name = file_path
        .file_name()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| PakError::Invalid(format!("no file name: {}", file_path.display())))?;
    name.to_str()
        .map(str::to_string)
        .ok_or_else(|| not_utf8(file_path))
}

/// Entry names are stored byte-exact; names that are not UTF-8 are refused.
fn not_utf8(file_path: &Path) -> PakError {
    PakError::Invalid(format!("entry name is not utf8: {}", file_path.display()))
}
