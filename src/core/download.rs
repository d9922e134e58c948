//! Export-to-file writer.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::error::ExportError;
use super::export::ExportFormat;

/// Writes exported documents into a directory as
/// `{stem}-{YYYYmmdd-HHMMSS}.{ext}`.
#[derive(Debug, Clone)]
pub struct ExportWriter {
    dir: PathBuf,
}

impl ExportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `contents` and return the path of the new file.
    pub fn write(
        &self,
        stem: &str,
        format: ExportFormat,
        contents: &str,
    ) -> Result<PathBuf, ExportError> {
        self.write_at(stem, format, contents, Local::now())
    }

    fn write_at(
        &self,
        stem: &str,
        format: ExportFormat,
        contents: &str,
        at: DateTime<Local>,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let file_name = format!(
            "{stem}-{}.{}",
            at.format("%Y%m%d-%H%M%S"),
            format.extension()
        );
        let path = self.dir.join(file_name);
        fs::write(&path, contents).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        log::info!("Exported {} to {}", stem, path.display());
        Ok(path)
    }
}
