//! Dotted path addressing: `section.k1.k2...kn`.
//!
//! The section is the first segment. Remaining segments are joined with `_`
//! to form the stored key, so `mysql.db1.Host` addresses key `db1_Host` in
//! section `mysql`.

/// A resolved dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath<'a> {
    /// Section name
    pub section: &'a str,
    /// Composite key as stored on disk
    pub key: String,
}

impl<'a> DottedPath<'a> {
    /// Split a dotted path. Returns `None` when there are fewer than two
    /// segments or the second segment is empty.
    pub fn parse(path: &'a str) -> Option<Self> {
        let mut segments = path.split('.');
        let section = segments.next()?;
        let rest: Vec<&str> = segments.collect();

        match rest.first() {
            Some(first) if !first.is_empty() => Some(Self {
                section,
                key: rest.join("_"),
            }),
            _ => None,
        }
    }
}
