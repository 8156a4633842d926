#![forbid(unsafe_code)]

use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Header sources known to the registry: `(name, file name)`.
pub const KNOWN_HEADERS: [(&str, &str); 3] = [
    ("ASL2", "APACHE-LICENSE-2.0-header.txt"),
    ("Elastic", "ELASTIC-LICENSE-header.txt"),
    ("Elasticv2", "ELASTIC-LICENSE-2.0-header.txt"),
];

pub const ASL2_HEADER: &str = include_str!("../licenses/APACHE-LICENSE-2.0-header.txt");
pub const ELASTIC_HEADER: &str = include_str!("../licenses/ELASTIC-LICENSE-header.txt");
pub const ELASTIC_V2_HEADER: &str = include_str!("../licenses/ELASTIC-LICENSE-2.0-header.txt");

#[derive(Debug, Error)]
pub enum LicenseError {
    #[error("unknown license: {0}")]
    Unknown(String),

    #[error("could not read license header {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseHeader {
    pub name: String,
    pub text: String,
}

/// Read-only lookup from license name to header text.
#[derive(Debug, Clone)]
pub struct LicenseRegistry {
    headers: BTreeMap<String, LicenseHeader>,
}

impl LicenseRegistry {
    /// Registry over the headers compiled into this crate.
    pub fn builtin() -> Self {
        Self::from_headers([
            ("ASL2", ASL2_HEADER),
            ("Elastic", ELASTIC_HEADER),
            ("Elasticv2", ELASTIC_V2_HEADER),
        ])
    }

    /// Reads every file in [`KNOWN_HEADERS`] from `dir`. All of them must be
    /// present.
    pub fn load(dir: &Path) -> Result<Self, LicenseError> {
        let mut headers = Vec::with_capacity(KNOWN_HEADERS.len());
        for (name, file) in KNOWN_HEADERS {
            let path = dir.join(file);
            let text = std::fs::read_to_string(&path)
                .map_err(|source| LicenseError::Io { path: path.clone(), source })?;
            debug!("loaded {name} header from {}", path.display());
            headers.push((name, text));
        }
        Ok(Self::from_headers(headers))
    }

    pub fn from_headers<N, T>(headers: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        let headers = headers
            .into_iter()
            .map(|(name, text)| {
                let name = name.into();
                let header = LicenseHeader {
                    name: name.clone(),
                    text: text.into(),
                };
                (name, header)
            })
            .collect();
        Self { headers }
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, name: &str) -> Result<&str, LicenseError> {
        self.headers
            .get(name)
            .map(|h| h.text.as_str())
            .ok_or_else(|| LicenseError::Unknown(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.headers.keys().map(String::as_str)
    }
}
