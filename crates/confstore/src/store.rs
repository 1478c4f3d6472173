//! Sectioned configuration store built from an INI-style file.
//!
//! The store is built once by [`ConfigStore::load`] and is read-only
//! afterwards. Loading is all-or-nothing: the first malformed line aborts the
//! load and no partial store is returned.

use crate::error::{ConfigError, Result};
use crate::line::{Line, MalformedLine, classify};
use crate::path::DottedPath;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Key-value pairs of one section.
pub type Section = HashMap<String, String>;

/// Section name → key → value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    sections: HashMap<String, Section>,
}

impl ConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and parse a configuration file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::FileNotFound`] if `path` does not exist
    /// - [`ConfigError::FileOpen`] for any other open failure
    /// - [`ConfigError::Read`] if reading fails after the file is open,
    ///   including invalid UTF-8
    /// - [`ConfigError::Parse`] or [`ConfigError::MissingSection`] from
    ///   [`ConfigStore::from_reader`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::FileOpen {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let store = Self::from_reader(BufReader::new(file))
            .map_err(|e| match e {
                ConfigError::Stream(source) => ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })
            .inspect_err(|e| {
                warn!("Rejected configuration {}: {e}", path.display());
            })?;

        debug!(
            "Loaded {} sections from {}",
            store.sections.len(),
            path.display()
        );
        Ok(store)
    }

    /// Parse configuration text from any buffered reader.
    ///
    /// A failing reader is reported as [`ConfigError::Stream`].
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut store = Self::new();
        let mut current: Option<String> = None;
        let mut buf = String::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e.into()),
                Ok(_) => (),
            }
            line_number += 1;

            let line = buf.trim();
            match classify(line) {
                Ok(Line::Blank | Line::Comment) => {}
                Ok(Line::Section(name)) => {
                    store.sections.entry(name.to_string()).or_default();
                    current = Some(name.to_string());
                }
                Ok(Line::Entry { key, value }) => {
                    let Some(section) = current
                        .as_deref()
                        .and_then(|name| store.sections.get_mut(name))
                    else {
                        return Err(ConfigError::MissingSection {
                            line: line_number,
                            text: line.to_string(),
                        });
                    };
                    section.insert(key, value);
                }
                Err(MalformedLine(text)) => {
                    return Err(ConfigError::Parse {
                        line: line_number,
                        text,
                    });
                }
            }
        }

        Ok(store)
    }

    /// Resolve a dotted path, returning `None` when the path is malformed or
    /// the section or key is absent.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let path = DottedPath::parse(path)?;
        self.sections
            .get(path.section)?
            .get(&path.key)
            .map(String::as_str)
    }

    /// Resolve a dotted path to its value. Anything unresolved yields `""`.
    pub fn get(&self, path: &str) -> String {
        self.lookup(path).unwrap_or_default().to_string()
    }

    /// Resolve a dotted path and parse it as `i32`.
    pub fn get_int(&self, path: &str) -> Result<i32> {
        self.parse_int(path)
    }

    /// Resolve a dotted path and parse it as `i64`.
    pub fn get_int64(&self, path: &str) -> Result<i64> {
        self.parse_int(path)
    }

    /// Resolve a dotted path and parse it as `f64`.
    pub fn get_float64(&self, path: &str) -> Result<f64> {
        let value = self.get(path);
        value
            .parse()
            .map_err(|source| ConfigError::InvalidFloat {
                path: path.to_string(),
                value,
                source,
            })
    }

    fn parse_int<T>(&self, path: &str) -> Result<T>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        let value = self.get(path);
        value
            .parse()
            .map_err(|source| ConfigError::InvalidInteger {
                path: path.to_string(),
                value,
                source,
            })
    }

    /// Key-value pairs of a section
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Whether a section header with this exact name was seen
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Iterate over all sections in unspecified order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, keys)| (name.as_str(), keys))
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no section was loaded
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FromStr for ConfigStore {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}
