//! Append-only text log of generated citations.
//!
//! The first write creates the file with a header block; every citation after
//! that appends a `Type` / `Reference` / `In-text` record closed by an
//! 80-dash separator. The file is never truncated or read back.

use crate::models::Citation;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default log file name, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "harvard_citations.txt";

const HEADER_TITLE: &str = "Harvard Style Citations";

/// Citation log errors
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to write citation log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Citation log service
#[derive(Debug, Clone)]
pub struct CitationLog {
    /// Log file path
    path: PathBuf,
}

impl CitationLog {
    /// Create a log writing to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append a citation, writing the header first if the file is new
    pub fn append(&self, citation: &Citation) -> Result<&Path, LogError> {
        self.write_entry(citation).map_err(|source| LogError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "Appended citation to log");
        Ok(&self.path)
    }

    fn write_entry(&self, citation: &Citation) -> io::Result<()> {
        let is_new = !self.path.exists();
        if is_new {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if is_new {
            writeln!(file, "{}", HEADER_TITLE)?;
            writeln!(file, "{}", "=".repeat(50))?;
            writeln!(file, "Generated: {}", now())?;
            writeln!(file, "{}", "=".repeat(50))?;
            writeln!(file)?;
        }

        writeln!(file, "Type: {}", citation.source_type)?;
        writeln!(file, "Reference: {}", citation.reference)?;
        writeln!(file, "In-text: {}", citation.intext)?;
        writeln!(file, "{}", "-".repeat(80))?;
        writeln!(file)?;
        Ok(())
    }

    /// Get log file path (for display)
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CitationLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`
fn now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
