//! Line classification for the INI-style format.
//!
//! ## Format
//!
//! ```text
//! ; comment, skipped
//! [mysql]
//! db1.Host = 127.0.0.1
//! Port=3306
//! ```
//!
//! Every space inside a key-value line is removed, including spaces inside
//! the value. Tabs are not spaces for this purpose.

use thiserror::Error;

/// One classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after trimming
    Blank,
    /// Starts with `;` once spaces are removed
    Comment,
    /// `[name]` header; holds `name`
    Section(&'a str),
    /// Assignment with spaces stripped and `.` in the key replaced by `_`
    Entry {
        /// Stored key name
        key: String,
        /// Stored value
        value: String,
    },
}

/// A line that is neither blank, a comment, a header nor an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed line: {0:?}")]
pub struct MalformedLine(pub String);

/// Classify a single line that has already been trimmed.
///
/// Any line containing `[` is treated as a header and must end with `]`.
/// This check runs before comment detection, so `; see [docs]` is a header.
pub fn classify(line: &str) -> Result<Line<'_>, MalformedLine> {
    if line.is_empty() {
        return Ok(Line::Blank);
    }

    if line.contains('[') {
        return section_name(line)
            .map(Line::Section)
            .ok_or_else(|| MalformedLine(line.to_string()));
    }

    let collapsed: String = line.chars().filter(|&c| c != ' ').collect();
    if collapsed.starts_with(';') {
        return Ok(Line::Comment);
    }

    let Some((key, value)) = collapsed.split_once('=') else {
        return Err(MalformedLine(line.to_string()));
    };

    Ok(Line::Entry {
        key: key.replace('.', "_"),
        value: value.to_string(),
    })
}

/// Strip the first character and the closing `]`.
fn section_name(line: &str) -> Option<&str> {
    let inner = line.strip_suffix(']')?;
    let mut chars = inner.chars();
    chars.next()?;
    Some(chars.as_str())
}
