//! confstore binary entry point.
//!
//! Thin wrapper around the confstore library that parses command-line
//! arguments, initializes logging and runs one subcommand.

use anyhow::{Context, Result};
use confstore::cli::{Cli, Command};
use confstore::{ConfigStore, DailyLog, parse_columns, read_tag, write_tag_with};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::from_args();
    tracing::debug!("Using configuration file {:?}", cli.file);

    let write_options = cli.command.write_options();
    match cli.command {
        Command::Get { path, kind } => {
            let store = ConfigStore::load(&cli.file)?;
            println!("{}", kind.render(&store, &path)?);
        }
        Command::Dump => {
            let store = ConfigStore::load(&cli.file)?;
            let mut sections: Vec<_> = store.sections().collect();
            sections.sort_by_key(|(name, _)| *name);

            for (name, keys) in sections {
                println!("[{name}]");
                let mut keys: Vec<_> = keys.iter().collect();
                keys.sort();
                for (key, value) in keys {
                    println!("{key} = {value}");
                }
            }
        }
        Command::ReadTag { tag } => {
            println!("{}", read_tag(&cli.file, &tag)?);
        }
        Command::WriteTag { tag, value, .. } => {
            let options = write_options.unwrap_or_default();
            write_tag_with(&cli.file, &tag, &value, &options)?;
            tracing::info!("Set {tag} in {}", cli.file.display());
        }
        Command::Columns { path } => {
            let store = ConfigStore::load(&cli.file)?;
            for column in parse_columns(&store.get(&path)) {
                match column.col_type {
                    Some(col_type) => println!("{}\t{col_type}", column.name),
                    None => println!("{}", column.name),
                }
            }
        }
        Command::Log { base, message } => {
            let log = DailyLog::new(base);
            let path = log
                .append(&message)
                .with_context(|| format!("Failed to append to log {}", log.base().display()))?;
            tracing::debug!("Appended to {}", path.display());
        }
    }

    Ok(())
}
