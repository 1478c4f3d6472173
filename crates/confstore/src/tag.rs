//! Targeted read and rewrite of a single `tag = value` assignment.
//!
//! The tag editor works on the raw file text and never builds a
//! [`ConfigStore`](crate::ConfigStore). Tags are not scoped by section: the
//! first assignment of the tag anywhere in the file wins.
//!
//! A line is an assignment of `tag` when, after leading whitespace, it starts
//! with `tag`, optional spaces or tabs, `=`, optional spaces or tabs. Lines
//! whose first non-whitespace character is `;` are comments and never match.
//! The value runs to the end of the line, excluding the line terminator and a
//! preceding `\r`.
//!
//! # Concurrency
//!
//! [`write_tag`] is an unlocked read-modify-write. Two writers on the same path,
//! or a writer racing [`read_tag`], can lose an update. Callers must serialize
//! access to a path themselves. The replacement itself is atomic: the new text
//! is written to a uniquely named temporary file in the target's directory and
//! renamed over the target, so a reader sees either the old or the new file.
//!
//! # Accepted input
//!
//! Tags must be non-empty, must not start or end with whitespace or start with
//! `;`, and must not contain `=` or a line break. Values must not start with a
//! space or tab and must not contain `\r` or `\n`. Anything else could not be
//! read back unchanged and is rejected with [`ConfigError::InvalidTag`] or
//! [`ConfigError::InvalidValue`].

use crate::error::{ConfigError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::ops::Range;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Section header synthesized when [`write_tag`] creates a new file.
pub const DEFAULT_SECTION_NAME: &str = "MicETL";

/// Location of a tag assignment inside scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// 1-based line number of the assignment
    pub line: usize,
    /// Byte range of the value within the scanned text
    pub span: Range<usize>,
}

impl TagMatch {
    /// Slice the value out of the text this match was produced from.
    pub fn value<'a>(&self, text: &'a str) -> &'a str {
        &text[self.span.clone()]
    }
}

/// How [`set_tag`] changed the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagEdit {
    /// Existing value on this line was replaced
    Replaced {
        /// 1-based line number
        line: usize,
    },
    /// A new assignment was appended
    Appended,
}

/// Behavior of [`write_tag_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagWriteOptions {
    /// Header to start a file with when the target does not exist yet.
    /// `None` creates the file with only the new assignment.
    pub default_section: Option<String>,
}

impl Default for TagWriteOptions {
    fn default() -> Self {
        Self {
            default_section: Some(DEFAULT_SECTION_NAME.to_string()),
        }
    }
}

impl TagWriteOptions {
    /// Create missing files without a section header
    pub fn without_default_section() -> Self {
        Self {
            default_section: None,
        }
    }

    /// Create missing files under a custom section header
    pub fn with_default_section(name: impl Into<String>) -> Self {
        Self {
            default_section: Some(name.into()),
        }
    }
}

/// Check that `tag` can be found again by [`find_tag`] once written.
pub fn validate_tag(tag: &str) -> Result<()> {
    let reason = if tag.is_empty() {
        "tag is empty"
    } else if tag.trim() != tag {
        "tag starts or ends with whitespace"
    } else if tag.starts_with(';') {
        "tag starts with a comment marker"
    } else if tag.contains('=') {
        "tag contains '='"
    } else if tag.contains(['\r', '\n']) {
        "tag contains a line break"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidTag {
        tag: tag.to_string(),
        reason,
    })
}

/// Check that `content` reads back unchanged after being written as a value.
pub fn validate_value(tag: &str, content: &str) -> Result<()> {
    let reason = if content.starts_with([' ', '\t']) {
        "value starts with a space or tab"
    } else if content.contains(['\r', '\n']) {
        "value contains a line break"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidValue {
        tag: tag.to_string(),
        value: content.to_string(),
        reason,
    })
}

/// Find the first assignment of `tag` in `text`.
pub fn find_tag(text: &str, tag: &str) -> Option<TagMatch> {
    if tag.is_empty() {
        return None;
    }

    let mut offset = 0;
    for (index, raw) in text.split_inclusive('\n').enumerate() {
        let start = offset;
        offset += raw.len();

        let content = raw.strip_suffix('\n').unwrap_or(raw);
        let content = content.strip_suffix('\r').unwrap_or(content);

        let body = content.trim_start();
        if body.starts_with(';') {
            continue;
        }

        let Some(rest) = body.strip_prefix(tag) else {
            continue;
        };
        let Some(value) = rest
            .trim_start_matches([' ', '\t'])
            .strip_prefix('=')
            .map(|v| v.trim_start_matches([' ', '\t']))
        else {
            continue;
        };

        let value_start = start + content.len() - value.len();
        return Some(TagMatch {
            line: index + 1,
            span: value_start..value_start + value.len(),
        });
    }

    None
}

/// Set `tag` to `content` in `text`.
///
/// An existing value is replaced in place and every other byte is kept. A
/// missing tag is appended as `tag = content` on a new line, using `\r\n` when
/// the text already does.
///
/// No validation happens here; [`write_tag_with`] runs [`validate_tag`] and
/// [`validate_value`] first.
pub fn set_tag(text: &str, tag: &str, content: &str) -> (String, TagEdit) {
    if let Some(found) = find_tag(text, tag) {
        let mut out = String::with_capacity(text.len() + content.len());
        out.push_str(&text[..found.span.start]);
        out.push_str(content);
        out.push_str(&text[found.span.end..]);
        return (out, TagEdit::Replaced { line: found.line });
    }

    let eol = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let mut out = String::with_capacity(text.len() + tag.len() + content.len() + 5);
    out.push_str(text);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push_str(eol);
    }
    out.push_str(tag);
    out.push_str(" = ");
    out.push_str(content);
    out.push_str(eol);
    (out, TagEdit::Appended)
}

/// Read the value of the first assignment of `tag` in the file at `path`.
///
/// # Errors
///
/// - [`ConfigError::InvalidTag`] if `tag` could never match
/// - [`ConfigError::FileNotFound`] or [`ConfigError::Read`] if the file
///   cannot be read
/// - [`ConfigError::TagNotFound`] if no assignment exists; a present but
///   empty value is `Ok("")`
pub fn read_tag<P: AsRef<Path>>(path: P, tag: &str) -> Result<String> {
    validate_tag(tag)?;

    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    find_tag(&text, tag)
        .map(|found| found.value(&text).to_string())
        .ok_or_else(|| ConfigError::TagNotFound {
            tag: tag.to_string(),
        })
}

/// Set `tag` to `content` in the file at `path` with default options.
pub fn write_tag<P: AsRef<Path>>(path: P, tag: &str, content: &str) -> Result<()> {
    write_tag_with(path, tag, content, &TagWriteOptions::default())
}

/// Set `tag` to `content` in the file at `path`.
///
/// A missing file is created, starting with the configured default section
/// header. Any other read failure is returned rather than overwriting a file
/// that could not be read.
///
/// # Errors
///
/// - [`ConfigError::InvalidTag`] or [`ConfigError::InvalidValue`] if the
///   assignment would not read back unchanged; the file is not touched
/// - [`ConfigError::Read`] if an existing file cannot be read
/// - [`ConfigError::WriteFailure`] if the new content cannot be persisted
pub fn write_tag_with<P: AsRef<Path>>(
    path: P,
    tag: &str,
    content: &str,
    options: &TagWriteOptions,
) -> Result<()> {
    validate_tag(tag)?;
    validate_value(tag, content)?;

    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => options
            .default_section
            .as_deref()
            .map(|name| format!("[{name}]\n"))
            .unwrap_or_default(),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let (updated, edit) = set_tag(&text, tag, content);
    persist(path, updated.as_bytes()).map_err(|source| ConfigError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;

    match edit {
        TagEdit::Replaced { line } => {
            debug!("Replaced {tag} at line {line} of {}", path.display());
        }
        TagEdit::Appended => debug!("Appended {tag} to {}", path.display()),
    }
    Ok(())
}

/// Replace `path` with `data` via a uniquely named temporary file in the same
/// directory. The temporary file is removed on drop if anything fails.
fn persist(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        file.as_file().set_permissions(metadata.permissions())?;
    }

    file.persist(path)?;
    Ok(())
}
