//! Command-line configuration for the `confstore` binary.
//!
//! # Configuration Sources
//!
//! - CLI arguments (`--file`, subcommand arguments)
//! - Environment variables (`CONFSTORE_FILE`)
//! - Default values

use crate::error::ConfigError;
use crate::store::ConfigStore;
use crate::tag::{DEFAULT_SECTION_NAME, TagWriteOptions};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments loaded from the command line and environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "confstore",
    about = "Query and edit sectioned INI-style configuration files",
    version
)]
pub struct Cli {
    /// Configuration file to operate on
    #[arg(
        short,
        long,
        global = true,
        env = "CONFSTORE_FILE",
        default_value = "./config.ini"
    )]
    pub file: PathBuf,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the value at a dotted path (`section.key` or `section.a.b`)
    Get {
        /// Dotted path
        path: String,

        /// Interpret the value as this type
        #[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
    },

    /// Print every section and key, sorted
    Dump,

    /// Print the value of the first assignment of a tag in the raw file
    ReadTag {
        /// Tag name
        tag: String,
    },

    /// Set a tag in the raw file, leaving everything else untouched
    WriteTag {
        /// Tag name
        tag: String,

        /// New value
        value: String,

        /// Header to start the file with if it does not exist
        #[arg(long, default_value = DEFAULT_SECTION_NAME, conflicts_with = "no_default_section")]
        default_section: String,

        /// Create a missing file without any section header
        #[arg(long)]
        no_default_section: bool,
    },

    /// Resolve a dotted path and split its value as a column list
    Columns {
        /// Dotted path
        path: String,
    },

    /// Append a timestamped message to `<base>_YYYY-MM-DD.txt`
    Log {
        /// Log file base path
        base: PathBuf,

        /// Message to append
        message: String,
    },
}

/// Value interpretation for `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    /// Raw string
    String,
    /// 32-bit integer
    Int,
    /// 64-bit integer
    Int64,
    /// 64-bit float
    Float,
}

impl ValueKind {
    /// Resolve `path` in `store` and render it as this kind.
    pub fn render(self, store: &ConfigStore, path: &str) -> Result<String, ConfigError> {
        Ok(match self {
            Self::String => store.get(path),
            Self::Int => store.get_int(path)?.to_string(),
            Self::Int64 => store.get_int64(path)?.to_string(),
            Self::Float => store.get_float64(path)?.to_string(),
        })
    }
}

impl Cli {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }
}

impl Command {
    /// Tag write options for `write-tag`; `None` for other subcommands.
    pub fn write_options(&self) -> Option<TagWriteOptions> {
        match self {
            Self::WriteTag {
                no_default_section: true,
                ..
            } => Some(TagWriteOptions::without_default_section()),
            Self::WriteTag {
                default_section, ..
            } => Some(TagWriteOptions::with_default_section(default_section.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_with_kind() {
        let cli = Cli::try_parse_from([
            "confstore",
            "-f",
            "app.ini",
            "get",
            "mysql.Port",
            "--as",
            "int",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("app.ini"));
        match cli.command {
            Command::Get { path, kind } => {
                assert_eq!(path, "mysql.Port");
                assert_eq!(kind, ValueKind::Int);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_write_tag_options() {
        let cli = Cli::try_parse_from(["confstore", "write-tag", "Port", "1234"]).unwrap();
        assert_eq!(cli.command.write_options(), Some(TagWriteOptions::default()));

        let cli = Cli::try_parse_from([
            "confstore",
            "write-tag",
            "Port",
            "1234",
            "--no-default-section",
        ])
        .unwrap();
        assert_eq!(
            cli.command.write_options(),
            Some(TagWriteOptions::without_default_section())
        );

        let cli = Cli::try_parse_from([
            "confstore",
            "write-tag",
            "Port",
            "1",
            "--default-section",
            "app",
        ])
        .unwrap();
        assert_eq!(
            cli.command.write_options().unwrap().default_section.as_deref(),
            Some("app")
        );
    }

    #[test]
    fn test_render_kinds() {
        let store: ConfigStore = "[n]\ni=7\nf=1.5\ns=x\n".parse().unwrap();
        assert_eq!(ValueKind::String.render(&store, "n.s").unwrap(), "x");
        assert_eq!(ValueKind::Int.render(&store, "n.i").unwrap(), "7");
        assert_eq!(ValueKind::Int64.render(&store, "n.i").unwrap(), "7");
        assert_eq!(ValueKind::Float.render(&store, "n.f").unwrap(), "1.5");
        assert!(ValueKind::Int.render(&store, "n.s").is_err());
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
