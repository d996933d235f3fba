//! JSON-lines audit trail
//!
//! The file is opened once in append mode when the store is opened. Each
//! entry goes out as one `write_all` of a complete line.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{StokvelError, StokvelResult};

use super::entry::AuditEntry;

/// Append handle on the audit log
pub struct AuditLogger {
    path: PathBuf,
    file: File,
}

impl AuditLogger {
    /// Open (or create) the log for appending
    pub fn open(path: impl Into<PathBuf>) -> StokvelResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                StokvelError::Io(format!("Cannot open audit log {}: {}", path.display(), e))
            })?;

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry
    pub fn record(&self, entry: &AuditEntry) -> StokvelResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');
        (&self.file).write_all(&line)?;
        Ok(())
    }

    /// Every entry in the log, oldest first
    pub fn read_all(&self) -> StokvelResult<Vec<AuditEntry>> {
        let reader = BufReader::new(File::open(&self.path)?);
        serde_json::Deserializer::from_reader(reader)
            .into_iter::<AuditEntry>()
            .map(|entry| entry.map_err(StokvelError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::EntityType;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_new_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::open(temp_dir.path().join("audit.log")).unwrap();

        assert!(logger.path().exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_one_line_per_entry() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::open(temp_dir.path().join("audit.log")).unwrap();

        for (id, name) in [("1", "Savers"), ("2", "Burial Society")] {
            let entry = AuditEntry::created(
                EntityType::Group,
                id,
                Some(name.to_string()),
                &json!({"id": id, "name": name}),
            );
            logger.record(&entry).unwrap();
        }

        let text = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(text.lines().count(), 2);

        let entries = logger.read_all().unwrap();
        assert_eq!(entries[1].entity_name.as_deref(), Some("Burial Society"));
    }

    #[test]
    fn test_reopen_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");
        let entry = AuditEntry::created(EntityType::Goal, "1", None, &json!({"amount": 500.0}));

        AuditLogger::open(&path).unwrap().record(&entry).unwrap();
        AuditLogger::open(&path).unwrap().record(&entry).unwrap();

        assert_eq!(AuditLogger::open(&path).unwrap().read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_directory_in_the_way() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");
        std::fs::create_dir(&path).unwrap();

        assert!(matches!(AuditLogger::open(&path), Err(StokvelError::Io(_))));
    }
}
