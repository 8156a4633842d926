#![forbid(unsafe_code)]

use base64::engine::general_purpose::STANDARD;

/// Engine used to turn the framed bytes into a literal-safe string.
///
/// The standard alphabet has no quote, backslash, backtick or control
/// characters, so the blob embeds as a plain `"..."` string literal.
pub(crate) const BLOB_ENGINE: base64::engine::GeneralPurpose = STANDARD;

/// Upper bound of a single framed field (name or content).
pub(crate) const MAX_FIELD_LEN: usize = u32::MAX as usize;

/// How entry names are compared when checking for collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameRule {
    /// Byte-exact comparison.
    #[default]
    Exact,
    /// Names that differ only by case collide.
    CaseInsensitive,
}

impl NameRule {
    pub(crate) fn key(self, name: &str) -> String {
        match self {
            NameRule::Exact => name.to_string(),
            NameRule::CaseInsensitive => name.to_lowercase(),
        }
    }
}

/// One named byte blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub content: Vec<u8>,
}

impl Entry {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Blake3 hash (hex) of the content.
    pub fn digest_hex(&self) -> String {
        blake3::hash(&self.content).to_hex().to_string()
    }
}

/// Output of a packing run: the encoded blob plus the entries it holds, in
/// the order they were framed.
#[derive(Debug, Clone)]
pub struct Packed {
    pub blob: String,
    pub entries: Vec<Entry>,
}

impl Packed {
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, blake3 hex)` per entry, in packed order.
    pub fn digests(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), e.digest_hex()))
            .collect()
    }
}
