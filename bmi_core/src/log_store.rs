//! Append-only calculation log.
//!
//! Every successful computation is appended as one plain-text line, with
//! file locking for safe concurrent appends. The store owns the on-disk
//! resource exclusively; request logic only goes through the [`LogStore`]
//! trait.

use crate::{LogRecord, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Name of the on-disk calculation log
pub const LOG_FILE_NAME: &str = "bmi_data.txt";

/// Persistence seam for calculation records
///
/// `append` failures are recoverable; callers surface them as metadata
/// rather than failing the computation that produced the record.
pub trait LogStore {
    /// Append one record as a newline-terminated line
    fn append(&mut self, record: &LogRecord) -> Result<()>;

    /// All stored lines, most recent first
    ///
    /// A store that has never been written to returns an empty list, not
    /// an error.
    fn read_all(&self) -> Result<Vec<String>>;

    /// Human-readable name of the underlying resource, used in save messages
    fn describe(&self) -> String;
}

/// File-backed log store with advisory locking
pub struct FileLogStore {
    path: PathBuf,
}

impl FileLogStore {
    /// Create a new file store for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The on-disk location of the log
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl LogStore for FileLogStore {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.ensure_parent_dir()?;

        // Open file for appending
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Acquire exclusive lock; released on drop if any write below fails
        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        writer.write_all(record.to_line().as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Appended calculation to {:?}", self.path);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        // Shared lock for reading
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        let mut lines: Vec<String> = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect();
        lines.reverse();

        tracing::debug!("Read {} log lines from {:?}", lines.len(), self.path);
        Ok(lines)
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// In-memory log store for tests and ephemeral deployments
#[derive(Debug, Default)]
pub struct MemoryLogStore {
    lines: Vec<String>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogStore for MemoryLogStore {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.lines.push(record.to_line());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<String>> {
        Ok(self.lines.iter().rev().cloned().collect())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
