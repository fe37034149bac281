use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::project::ProjectError;

/// Destination for a finished report document.
pub trait ReportSink {
    fn write_report(&mut self, document: &str) -> Result<(), ProjectError>;

    /// Human-readable destination, used in command output.
    fn describe(&self) -> String;
}

/// Writes the report to a Markdown file, replacing any previous report.
#[derive(Debug, Clone)]
pub struct MarkdownFileSink {
    path: PathBuf,
}

impl MarkdownFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for MarkdownFileSink {
    fn write_report(&mut self, document: &str) -> Result<(), ProjectError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = AtomicWriteFile::open(&self.path)?;
        file.write_all(document.as_bytes())?;
        file.commit()?;

        debug!(path = %self.path.display(), bytes = document.len(), "wrote report");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Prints the report to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn write_report(&mut self, document: &str) -> Result<(), ProjectError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}
