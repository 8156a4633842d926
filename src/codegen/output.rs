#![forbid(unsafe_code)]

use log::info;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::codegen::error::{GenError, GenResult};
use crate::codegen::template::check_source;

/// Where generated source goes. `-` means standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Output::Stdout
        } else {
            Output::File(PathBuf::from(arg))
        }
    }
}

impl std::str::FromStr for Output {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Output::from_arg(s))
    }
}

/// Rendered source that already passed the syntax check.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    source: String,
    names: Vec<String>,
}

impl GeneratedModule {
    pub(crate) fn new(source: String, names: Vec<String>) -> GenResult<Self> {
        check_source(&source)?;
        Ok(Self { source, names })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of the packed entries, in archive order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Writes the whole module, replacing any previous file content.
    pub fn write_to(&self, output: &Output) -> GenResult<()> {
        match output {
            Output::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(self.source.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|source| GenError::Write {
                        path: PathBuf::from("-"),
                        source,
                    })
            }
            Output::File(path) => {
                let mut opts = OpenOptions::new();
                opts.write(true).create(true).truncate(true);
                #[cfg(unix)]
                {
                    use std::os::unix::fs::OpenOptionsExt;
                    opts.mode(0o640);
                }
                opts.open(path)
                    .and_then(|mut f| {
                        f.write_all(self.source.as_bytes())?;
                        f.flush()
                    })
                    .map_err(|source| GenError::Write {
                        path: path.clone(),
                        source,
                    })?;
                info!(
                    "wrote {} ({} entries, {} bytes)",
                    path.display(),
                    self.names.len(),
                    self.source.len()
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-", Output::Stdout)]
    #[case("out.rs", Output::File(PathBuf::from("out.rs")))]
    #[case("./-", Output::File(PathBuf::from("./-")))]
    fn output_from_arg(#[case] arg: &str, #[case] expected: Output) {
        assert_eq!(Output::from_arg(arg), expected);
    }

    #[test]
    fn invalid_source_never_becomes_a_module() {
        let err = GeneratedModule::new("const X: &str = \"".to_string(), vec![]).unwrap_err();
        assert!(matches!(err, GenError::Format(_)));
    }

    #[test]
    fn write_replaces_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.rs");
        std::fs::write(&path, "old content that is much longer than the new one\n").unwrap();

        let module = GeneratedModule::new("pub const A: u8 = 1;\n".to_string(), vec![]).unwrap();
        module.write_to(&Output::File(path.clone())).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pub const A: u8 = 1;\n");
    }

    #[test]
    fn write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("generated.rs");
        let module = GeneratedModule::new(String::new(), vec![]).unwrap();
        let err = module.write_to(&Output::File(path)).unwrap_err();
        assert!(matches!(err, GenError::Write { .. }));
    }
}
