//! Append-only daily log files.
//!
//! Messages for base path `logs/etl` on 2024-05-01 go to
//! `logs/etl_2024-05-01.txt`, one line each:
//!
//! ```text
//! 2024-05-01 13:45:10  message
//! ```

use chrono::{Local, NaiveDateTime};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writer that appends timestamped lines to one file per calendar day.
#[derive(Debug, Clone)]
pub struct DailyLog {
    base: PathBuf,
}

impl DailyLog {
    /// Create a log rooted at `base`; the date and `.txt` are appended.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Base path without the date suffix
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File that receives messages written at `at`
    pub fn path_for(&self, at: NaiveDateTime) -> PathBuf {
        let mut name = self.base.clone().into_os_string();
        name.push(format!("_{}.txt", at.format("%Y-%m-%d")));
        PathBuf::from(name)
    }

    /// Append `message` stamped with the current local time.
    pub fn append(&self, message: &str) -> std::io::Result<PathBuf> {
        self.append_at(Local::now().naive_local(), message)
    }

    /// Append `message` stamped with `at`. Returns the file written to.
    pub fn append_at(&self, at: NaiveDateTime, message: &str) -> std::io::Result<PathBuf> {
        let path = self.path_for(at);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}  {message}", at.format("%Y-%m-%d %H:%M:%S"))?;
        writer.flush()?;
        Ok(path)
    }
}
