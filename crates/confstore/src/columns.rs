//! Column list values such as `id:int, name:varchar(32), note`.
//!
//! A column list is a comma-separated sequence of `name[:type]` entries, read
//! from a config value and turned into column metadata for SQL statements.

/// One column of a column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbColumn {
    /// Column name
    pub name: String,
    /// Column type, when the entry has a `:type` suffix
    pub col_type: Option<String>,
}

/// Replace tabs with spaces and collapse every whitespace run of two or more
/// characters to its first character.
pub fn normalize_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;

    for c in s.chars() {
        let c = if c == '\t' { ' ' } else { c };
        if c.is_whitespace() {
            if !in_run {
                out.push(c);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Split a column list into columns.
///
/// Entries are trimmed; text after a second `:` is ignored. An empty input
/// yields a single column with an empty name.
pub fn parse_columns(s: &str) -> Vec<DbColumn> {
    normalize_whitespace(s)
        .split(',')
        .map(|entry| {
            let mut parts = entry.split(':').map(str::trim);
            let name = parts.next().unwrap_or_default().to_string();
            let col_type = parts.next().map(str::to_string);
            DbColumn { name, col_type }
        })
        .collect()
}

/// Column names joined with `,`, ready for a SQL column list.
pub fn column_names(columns: &[DbColumn]) -> String {
    columns
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
