use crate::ja_date::JaDate;
use crate::schedule::ScheduleRecord;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, info};

/// Flat-file storage for schedule records, one record per line
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read every record in file order. A missing file is an empty schedule.
    ///
    /// The first bad line aborts the read, since rewriting the file later
    /// would otherwise drop it.
    pub fn load(&self, today: JaDate) -> Result<Vec<ScheduleRecord>> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "schedule file not found, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;

        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = ScheduleRecord::from_record(line, today)
                .with_context(|| format!("{}:{}", self.file_path.display(), index + 1))?;
            records.push(record);
        }
        debug!(count = records.len(), "loaded schedule");
        Ok(records)
    }

    /// Replace the file with `records`, sorted by date.
    ///
    /// The content goes to a temporary file next to the target which is then
    /// renamed over it, so an interrupted write never leaves a truncated file.
    pub fn save(&self, records: &mut [ScheduleRecord]) -> Result<()> {
        records.sort_by_key(|r| r.date());

        let mut content = String::new();
        for record in records.iter() {
            content.push_str(&record.to_record());
            content.push('\n');
        }

        let dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        // dropped (and removed) on any error below, including a failed rename
        let mut tmp = Builder::new()
            .prefix(&format!(".{}.", self.file_name()))
            .suffix(".tmp")
            .tempfile_in(&dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
        tmp.persist(&self.file_path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace {}", self.file_path.display()))?;
        info!(path = %self.file_path.display(), count = records.len(), "saved schedule");
        Ok(())
    }

    fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "schedule".to_string())
    }
}
