//! Sectioned INI-style configuration store.
//!
//! This crate loads configuration files made of `[section]` headers,
//! `key = value` assignments and `;` comments into a read-only
//! section → key → value store, and separately edits single values in the raw
//! file text without touching anything else.
//!
//! # Architecture
//!
//! - `line`: classification of a single trimmed line
//! - `store`: the store builder and dotted-path accessor
//! - `path`: dotted path splitting (`section.k1.k2` → key `k1_k2`)
//! - `tag`: raw tag editor for surgical reads and writes
//! - `columns`: column list values (`id:int,name:text`)
//! - `daylog`: append-only daily log files
//! - `cli`: command-line configuration for the `confstore` binary
//!
//! # Example
//!
//! ```
//! use confstore::ConfigStore;
//!
//! let store: ConfigStore = "[mysql]\ndb1.Host = 127.0.0.1\nPort = 3306\n"
//!     .parse()
//!     .expect("valid configuration");
//!
//! assert_eq!(store.get("mysql.db1.Host"), "127.0.0.1");
//! assert_eq!(store.get_int("mysql.Port").expect("numeric port"), 3306);
//! assert_eq!(store.get("mysql.Missing"), "");
//! ```
//!
//! Editing a value in place:
//!
//! ```no_run
//! use confstore::{read_tag, write_tag};
//!
//! write_tag("app.ini", "Port", "1234")?;
//! assert_eq!(read_tag("app.ini", "Port")?, "1234");
//! # Ok::<(), confstore::ConfigError>(())
//! ```
//!
//! # Limitations
//!
//! There are no nested sections, multi-valued keys, quoting or escapes.
//! Whitespace handling is ASCII-only, and spaces inside values are removed
//! by the store builder. Tag writes are not synchronized between processes;
//! see [`tag`] for the concurrency contract.

#![warn(missing_docs)]

pub mod cli;
pub mod columns;
pub mod daylog;
pub mod error;
pub mod line;
pub mod path;
pub mod store;
pub mod tag;

pub use columns::{DbColumn, column_names, normalize_whitespace, parse_columns};
pub use daylog::DailyLog;
pub use error::{ConfigError, Result};
pub use line::{Line, MalformedLine, classify};
pub use path::DottedPath;
pub use store::{ConfigStore, Section};
pub use tag::{
    DEFAULT_SECTION_NAME, TagEdit, TagMatch, TagWriteOptions, find_tag, read_tag, set_tag,
    validate_tag, validate_value, write_tag, write_tag_with,
};
