#![forbid(unsafe_code)]

use base64::Engine;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

use crate::pak::error::{PakError, PakResult};
use crate::pak::format::{Entry, NameRule, Packed, BLOB_ENGINE, MAX_FIELD_LEN};
use crate::pak::io::write_field;
use crate::pak::path::{base_name, normalize_rel_path};

/// Archive layout, before base64:
/// - entries, sorted by name bytes, each:
///   - [u32 name_len][name bytes UTF-8]
///   - [u32 content_len][content bytes]
///
/// Determinism rules:
/// - names are relative paths normalized to forward slashes
/// - entries are sorted lexicographically by name bytes
/// - no timestamps, permissions or host data enter the archive
pub fn pack(input: &Path, rule: NameRule) -> PakResult<Packed> {
    let meta = match fs::metadata(input) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PakError::NotFound(input.display().to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    let entries = if meta.is_file() {
        vec![Entry::new(base_name(input)?, fs::read(input)?)]
    } else if meta.is_dir() {
        walk_dir(input)?
    } else {
        return Err(PakError::NotRegular(input.display().to_string()));
    };

    debug!("collected {} file(s) under {}", entries.len(), input.display());
    encode(entries, rule)
}

fn walk_dir(input: &Path) -> PakResult<Vec<Entry>> {
    let mut entries = Vec::new();
    for ent in WalkDir::new(input).follow_links(false).into_iter() {
        let ent = ent.map_err(|e| {
            let msg = e.to_string();
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::new(ErrorKind::Other, msg));
            PakError::Io(io)
        })?;

        let ft = ent.file_type();
        if ft.is_dir() {
            continue;
        }
        if !ft.is_file() {
            return Err(PakError::NotRegular(ent.path().display().to_string()));
        }

        let name = normalize_rel_path(input, ent.path())?;
        entries.push(Entry::new(name, fs::read(ent.path())?));
    }
    Ok(entries)
}

/// Sorts, checks and frames in-memory entries into a [`Packed`] archive.
pub fn encode(mut entries: Vec<Entry>, rule: NameRule) -> PakResult<Packed> {
    entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

    let mut seen: HashMap<String, &str> = HashMap::with_capacity(entries.len());
    for e in &entries {
        if let Some(first) = seen.insert(rule.key(&e.name), &e.name) {
            return Err(PakError::DuplicateName {
                first: first.to_string(),
                second: e.name.clone(),
            });
        }
    }

    let mut raw: Vec<u8> = Vec::new();
    for e in &entries {
        if e.name.is_empty() {
            return Err(PakError::Invalid("empty entry name".into()));
        }
        if e.name.len() > MAX_FIELD_LEN || e.content.len() > MAX_FIELD_LEN {
            return Err(PakError::Invalid(format!("entry too large: {}", e.name)));
        }
        write_field(&mut raw, e.name.as_bytes());
        write_field(&mut raw, &e.content);
    }

    let blob = BLOB_ENGINE.encode(&raw);
    debug!(
        "framed {} entries into {} bytes ({} encoded)",
        entries.len(),
        raw.len(),
        blob.len()
    );

    Ok(Packed { blob, entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_sorts_by_name_bytes() {
        let packed = encode(
            vec![
                Entry::new("b.yml", "b"),
                Entry::new("B.yml", "B"),
                Entry::new("a/z.yml", "z"),
            ],
            NameRule::Exact,
        )
        .unwrap();
        assert_eq!(packed.names(), vec!["B.yml", "a/z.yml", "b.yml"]);
    }

    #[test]
    fn case_insensitive_rule_rejects_case_twins() {
        let err = encode(
            vec![Entry::new("Foo.yml", "1"), Entry::new("foo.yml", "2")],
            NameRule::CaseInsensitive,
        )
        .unwrap_err();
        match err {
            PakError::DuplicateName { first, second } => {
                assert_eq!(first, "Foo.yml");
                assert_eq!(second, "foo.yml");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn exact_rule_keeps_case_twins() {
        let packed = encode(
            vec![Entry::new("Foo.yml", "1"), Entry::new("foo.yml", "2")],
            NameRule::Exact,
        )
        .unwrap();
        assert_eq!(packed.len(), 2);
    }

    #[test]
    fn exact_duplicates_are_rejected() {
        let err = encode(
            vec![Entry::new("a", "1"), Entry::new("a", "2")],
            NameRule::Exact,
        )
        .unwrap_err();
        assert!(matches!(err, PakError::DuplicateName { .. }));
    }

    #[test]
    fn blob_uses_literal_safe_alphabet() {
        let packed = encode(
            vec![Entry::new("q\"`\\.txt", b"\"`\\\n\0\x7f".to_vec())],
            NameRule::Exact,
        )
        .unwrap();
        assert!(packed
            .blob
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'='));
    }

    #[test]
    fn empty_archive_encodes_to_empty_blob() {
        let packed = encode(Vec::new(), NameRule::Exact).unwrap();
        assert!(packed.is_empty());
        assert_eq!(packed.blob, "");
    }
}
