//! Error types for configuration loading, lookups and tag editing.
//!
//! All errors use thiserror for consistent error handling across the crate.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the store builder, typed accessors and tag editor.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Configuration file exists but could not be opened
    #[error("Failed to open {}: {source}", path.display())]
    FileOpen {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file was opened but reading it failed
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading an in-memory or caller-supplied stream failed
    #[error("Failed to read configuration stream: {0}")]
    Stream(#[from] std::io::Error),

    /// Malformed section header or key-value line
    #[error("Failed to parse line {line}: \"{text}\"")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Offending line, trimmed
        text: String,
    },

    /// Key-value line appeared before any section header
    #[error("Key outside of any section at line {line}: \"{text}\"")]
    MissingSection {
        /// 1-based line number
        line: usize,
        /// Offending line, trimmed
        text: String,
    },

    /// No assignment for the tag exists in the file
    #[error("Tag not found: {tag}")]
    TagNotFound {
        /// Tag that was searched for
        tag: String,
    },

    /// Tag cannot be matched by the tag editor
    #[error("Invalid tag {tag:?}: {reason}")]
    InvalidTag {
        /// Rejected tag
        tag: String,
        /// Why the tag was rejected
        reason: &'static str,
    },

    /// Value would not read back unchanged after a tag write
    #[error("Invalid value for tag {tag} ({value:?}): {reason}")]
    InvalidValue {
        /// Tag being written
        tag: String,
        /// Rejected value
        value: String,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Value could not be parsed as an integer
    #[error("Invalid integer for {path} ({value:?}): {source}")]
    InvalidInteger {
        /// Dotted path that was resolved
        path: String,
        /// Resolved string value
        value: String,
        /// Underlying conversion error
        #[source]
        source: ParseIntError,
    },

    /// Value could not be parsed as a float
    #[error("Invalid float for {path} ({value:?}): {source}")]
    InvalidFloat {
        /// Dotted path that was resolved
        path: String,
        /// Resolved string value
        value: String,
        /// Underlying conversion error
        #[source]
        source: ParseFloatError,
    },

    /// Target file could not be written or replaced
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Whether the error came from a typed accessor failing to convert a value.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::InvalidInteger { .. } | Self::InvalidFloat { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
