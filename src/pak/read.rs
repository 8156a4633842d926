#![forbid(unsafe_code)]

use base64::Engine;
use std::collections::BTreeMap;

use crate::pak::error::{PakError, PakResult};
use crate::pak::format::BLOB_ENGINE;
use crate::pak::io::Cursor;

/// Decodes a blob produced by [`crate::pak::pack`] back into its entries.
///
/// Fails with [`PakError::Corrupt`] on any encoding or framing problem; no
/// partial map is ever returned.
pub fn unpack(blob: &str) -> PakResult<BTreeMap<String, Vec<u8>>> {
    let raw = BLOB_ENGINE
        .decode(blob.as_bytes())
        .map_err(|e| PakError::Corrupt(format!("bad encoding: {e}")))?;

    let mut cur = Cursor::new(&raw);
    let mut out = BTreeMap::new();
    while !cur.is_empty() {
        let name = std::str::from_utf8(cur.read_field()?)
            .map_err(|_| PakError::Corrupt("entry name is not utf8".into()))?
            .to_string();
        let content = cur.read_field()?.to_vec();

        if out.insert(name.clone(), content).is_some() {
            return Err(PakError::Corrupt(format!("entry repeated: {name}")));
        }
    }

    Ok(out)
}

/// Runtime form of [`unpack`] used by generated code.
///
/// The blob it sees was produced by the same build, so a decode failure means
/// the build itself is broken and there is nothing sensible to recover to.
pub fn must_unpack(blob: &str) -> BTreeMap<String, Vec<u8>> {
    match unpack(blob) {
        Ok(m) => m,
        Err(e) => panic!("embedded archive is unreadable: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pak::build::encode;
    use crate::pak::format::{Entry, NameRule};
    use crate::pak::io::{write_field, write_u32};

    fn blob_of(raw: &[u8]) -> String {
        BLOB_ENGINE.encode(raw)
    }

    #[test]
    fn empty_blob_is_empty_map() {
        assert!(unpack("").unwrap().is_empty());
    }

    #[test]
    fn keeps_empty_content() {
        let packed = encode(vec![Entry::new("empty.yml", Vec::<u8>::new())], NameRule::Exact).unwrap();
        let out = unpack(&packed.blob).unwrap();
        assert_eq!(out.get("empty.yml").map(Vec::len), Some(0));
    }

    #[test]
    fn rejects_non_base64() {
        assert!(matches!(unpack("not base64!"), Err(PakError::Corrupt(_))));
    }

    #[test]
    fn rejects_truncated_content() {
        let mut raw = Vec::new();
        write_field(&mut raw, b"a.yml");
        write_u32(&mut raw, 100);
        raw.extend_from_slice(b"tiny");
        assert!(matches!(unpack(&blob_of(&raw)), Err(PakError::Corrupt(_))));
    }

    #[test]
    fn rejects_dangling_name() {
        let mut raw = Vec::new();
        write_field(&mut raw, b"a.yml");
        assert!(matches!(unpack(&blob_of(&raw)), Err(PakError::Corrupt(_))));
    }

    #[test]
    fn rejects_partial_length_prefix() {
        let raw = [1u8, 0];
        assert!(matches!(unpack(&blob_of(&raw)), Err(PakError::Corrupt(_))));
    }

    #[test]
    fn rejects_non_utf8_name() {
        let mut raw = Vec::new();
        write_field(&mut raw, &[0xff, 0xfe]);
        write_field(&mut raw, b"x");
        assert!(matches!(unpack(&blob_of(&raw)), Err(PakError::Corrupt(_))));
    }

    #[test]
    fn rejects_repeated_name() {
        let mut raw = Vec::new();
        for _ in 0..2 {
            write_field(&mut raw, b"a.yml");
            write_field(&mut raw, b"x");
        }
        assert!(matches!(unpack(&blob_of(&raw)), Err(PakError::Corrupt(_))));
    }

    #[test]
    #[should_panic(expected = "embedded archive is unreadable")]
    fn must_unpack_panics_on_corruption() {
        must_unpack("%%%");
    }
}
