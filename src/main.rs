#![forbid(unsafe_code)]

use clap::{Args, Parser, Subcommand};
use embedpak::codegen::{
    self, ConfigOptions, GenError, GenResult, Output, SpecsOptions, YamlSpecParser,
};
use embedpak::license::LicenseRegistry;
use embedpak::pak;
use log::debug;
use pretty_env_logger::formatted_timed_builder;
use std::path::{Path, PathBuf};

const DEFAULT_DEBUG_LOG_LEVEL: &str = "embedpak=debug";
const DEFAULT_RELEASE_LOG_LEVEL: &str = "embedpak=info";

#[derive(Debug, Parser)]
#[command(
    name = "embedpak",
    version,
    about = "Embed build assets into generated Rust source"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Args)]
struct CommonArgs {
    /// File or directory to embed.
    #[arg(long = "in", default_value = "")]
    input: String,
    /// Output path. "-" means writing to stdout.
    #[arg(long = "out", default_value = "-")]
    output: Output,
    /// License header for the generated file.
    #[arg(long, default_value = embedpak::DEFAULT_LICENSE)]
    license: String,
    /// Read license headers from this directory instead of the built-in ones.
    #[arg(long)]
    license_dir: Option<PathBuf>,
    /// Crate path providing `pak::must_unpack` to the generated code.
    #[arg(long, default_value = codegen::DEFAULT_RUNTIME)]
    runtime: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Embed a single configuration file behind one accessor.
    Config {
        #[command(flatten)]
        common: CommonArgs,
        /// Name of the generated accessor function.
        #[arg(long, default_value = codegen::DEFAULT_ACCESSOR)]
        accessor: String,
    },

    /// Embed a directory of YAML spec files, validating each one.
    Specs {
        #[command(flatten)]
        common: CommonArgs,
        /// Spec type in the embedding program (must provide `from_bytes`).
        #[arg(long, default_value = codegen::DEFAULT_SPEC_TYPE)]
        spec_type: String,
        /// Field used as the case-insensitive lookup key.
        #[arg(long, default_value = codegen::DEFAULT_KEY_FIELD)]
        key_field: String,
    },

    /// List the entries a file or directory would pack into.
    List {
        #[arg(long = "in")]
        input: PathBuf,
        /// Print sizes and hashes too.
        #[arg(long, default_value_t = false)]
        verbose: bool,
    },

    /// List registered license headers.
    Licenses {
        #[arg(long)]
        license_dir: Option<PathBuf>,
    },
}

fn registry(dir: Option<&Path>) -> GenResult<LicenseRegistry> {
    match dir {
        Some(dir) => Ok(LicenseRegistry::load(dir)?),
        None => Ok(LicenseRegistry::builtin()),
    }
}

fn input_path(common: &CommonArgs) -> GenResult<&Path> {
    if common.input.trim().is_empty() {
        return Err(GenError::Input("--in is required".into()));
    }
    Ok(Path::new(&common.input))
}

fn run(cli: Cli) -> GenResult<()> {
    match cli.cmd {
        Command::Config { common, accessor } => {
            let input = input_path(&common)?;
            let registry = registry(common.license_dir.as_deref())?;
            let opts = ConfigOptions {
                license: common.license.clone(),
                accessor,
                runtime: common.runtime.clone(),
            };
            codegen::generate_config(&registry, input, &opts)?.write_to(&common.output)
        }
        Command::Specs {
            common,
            spec_type,
            key_field,
        } => {
            let input = input_path(&common)?;
            let registry = registry(common.license_dir.as_deref())?;
            let parser = YamlSpecParser {
                key_field: key_field.clone(),
            };
            let opts = SpecsOptions {
                license: common.license.clone(),
                spec_type,
                key_field,
                runtime: common.runtime.clone(),
            };
            let generated = codegen::generate_specs(&registry, input, &parser, &opts)?;
            debug!("spec keys: {:?}", generated.specs.keys());
            generated.module.write_to(&common.output)
        }
        Command::List { input, verbose } => Ok(pak::list(&input, verbose)?),
        Command::Licenses { license_dir } => {
            for name in registry(license_dir.as_deref())?.names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn main() {
    let default_log_level = if cfg!(debug_assertions) {
        DEFAULT_DEBUG_LOG_LEVEL
    } else {
        DEFAULT_RELEASE_LOG_LEVEL
    };

    let mut log_builder = formatted_timed_builder();
    log_builder.parse_filters(
        &std::env::var("RUST_LOG").unwrap_or_else(|_| default_log_level.to_string()),
    );
    let _ = log_builder.try_init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
