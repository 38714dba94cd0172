//! # fhir-stu3 command line tool
//!
//! Reads FHIR STU3 JSON resources through the typed model.
//!
//! ```text
//! fhir-stu3 decode <FILE|->    Decode a resource and print the re-encoded JSON
//!     --pretty                 Indent the output
//!     --strict                 Reject keys that match no declared field
//! fhir-stu3 check <FILE|->...  Decode each file and report the first error
//!     --strict
//! fhir-stu3 types              List every supported resourceType
//!     --log-level <LEVEL>      Log level when RUST_LOG is unset [default: warn]
//! ```
//!
//! Re-encoding drops keys the model does not declare, so `decode` doubles as
//! a normalizer:
//!
//! ```bash
//! cat observation.json | fhir-stu3 decode - --pretty
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::codec::DecodeOptions;
use crate::stu3::{FHIR_VERSION, Resource};

#[derive(Parser, Debug)]
#[command(name = "fhir-stu3")]
#[command(about = "Decode and check FHIR STU3 JSON resources")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a resource and print it re-encoded
    Decode {
        /// Path to a FHIR JSON file (use '-' for stdin)
        input: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Reject keys that match no declared field
        #[arg(long)]
        strict: bool,
    },
    /// Decode resources and report whether they are valid
    Check {
        /// Paths to FHIR JSON files (use '-' for stdin)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[arg(long)]
        strict: bool,
    },
    /// List the supported resource types
    Types,
}

fn init_tracing(log_level: &str) {
    let filter = format!("atrius_fhir_stu3={log_level}");
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with_writer(io::stderr)
        .try_init();
}

/// What to do, once the flags have been resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Decode { input: PathBuf, pretty: bool },
    Check { inputs: Vec<PathBuf> },
    Types,
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub action: Action,
    /// Decode options shared by every input
    pub options: DecodeOptions,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

fn options(strict: bool) -> DecodeOptions {
    if strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::default()
    }
}

impl From<Args> for CliConfig {
    fn from(args: Args) -> Self {
        let (action, options) = match args.command {
            Command::Decode {
                input,
                pretty,
                strict,
            } => (Action::Decode { input, pretty }, options(strict)),
            Command::Check { inputs, strict } => (Action::Check { inputs }, options(strict)),
            Command::Types => (Action::Types, DecodeOptions::default()),
        };
        CliConfig {
            action,
            options,
            log_level: args.log_level,
        }
    }
}

/// Main CLI execution function
pub fn run_cli(args: Args) -> Result<()> {
    run(CliConfig::from(args))
}

pub fn run(config: CliConfig) -> Result<()> {
    init_tracing(&config.log_level);
    debug!(?config, "starting");
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.action {
        Action::Decode { input, pretty } => {
            let resource = decode_file(input, &config.options)?;
            let output = if *pretty {
                crate::to_string_pretty(&resource)?
            } else {
                crate::to_string(&resource)
            };
            writeln!(out, "{output}")?;
        }
        Action::Check { inputs } => {
            let mut failed = 0usize;
            for input in inputs {
                match decode_file(input, &config.options) {
                    Ok(resource) => {
                        writeln!(out, "{}: ok ({})", input.display(), resource.resource_type())?;
                    }
                    Err(err) => {
                        failed += 1;
                        writeln!(out, "{}: {err:#}", input.display())?;
                    }
                }
            }
            if failed > 0 {
                bail!("{failed} of {} inputs failed to decode", inputs.len());
            }
        }
        Action::Types => {
            debug!(count = Resource::RESOURCE_TYPES.len(), "listing resource types");
            writeln!(out, "FHIR {FHIR_VERSION}")?;
            for resource_type in Resource::RESOURCE_TYPES {
                writeln!(out, "{resource_type}")?;
            }
        }
    }
    Ok(())
}

fn decode_file(path: &Path, options: &DecodeOptions) -> Result<Resource> {
    let content = read_input(path)?;
    let resource: Resource = crate::from_str_with(&content, options)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    info!(
        resource_type = resource.resource_type(),
        id = resource.id().and_then(|id| id.value.as_deref()),
        "decoded resource"
    );
    Ok(resource)
}

/// Read input from file or stdin
fn read_input(path: &Path) -> Result<String> {
    if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_decode_flags() {
        let args = Args::try_parse_from(["fhir-stu3", "decode", "-", "--pretty", "--strict"]).unwrap();
        match args.command {
            Command::Decode {
                input,
                pretty,
                strict,
            } => {
                assert_eq!(input, PathBuf::from("-"));
                assert!(pretty);
                assert!(strict);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_args_convert_into_config() {
        let args = Args::try_parse_from(["fhir-stu3", "check", "a.json", "b.json", "--strict"]).unwrap();
        let config = CliConfig::from(args);
        assert_eq!(
            config.action,
            Action::Check {
                inputs: vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
            }
        );
        assert!(config.options.is_strict());
        assert_eq!(config.log_level, "warn");

        let args = Args::try_parse_from(["fhir-stu3", "decode", "-", "--log-level", "debug"]).unwrap();
        let config = CliConfig::from(args);
        assert_eq!(
            config.action,
            Action::Decode {
                input: PathBuf::from("-"),
                pretty: false
            }
        );
        assert_eq!(config.options, DecodeOptions::default());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_check_requires_an_input() {
        assert!(Args::try_parse_from(["fhir-stu3", "check"]).is_err());
    }

    #[test]
    fn test_decode_file_reports_the_path() {
        let dir = std::env::temp_dir().join(format!("fhir-stu3-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("unknown.json");
        fs::write(&path, r#"{"resourceType":"Spaceship"}"#).unwrap();

        let err = decode_file(&path, &DecodeOptions::default()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("unknown.json"));
        assert!(message.contains("Spaceship"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
