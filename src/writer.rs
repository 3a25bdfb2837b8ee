use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::Snapshot;
use crate::utils::error::Result;

/// Replaces the report file's contents with the rendered snapshot.
///
/// The replacement is a single write call, so it is best-effort atomic
/// only; a crash mid-write can truncate the file. The file never
/// accumulates history, each write discards the previous snapshot
/// entirely.
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, snapshot: &Snapshot) -> Result<()> {
        fs::write(&self.path, snapshot.render())?;
        debug!(
            "Wrote {} records to {}",
            snapshot.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowRecord;
    use chrono::{DateTime, Local, TimeZone};

    fn fixed_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_write_exact_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("futures_prices.txt");
        let writer = SnapshotWriter::new(&path);

        let snapshot = Snapshot::new(
            fixed_timestamp(),
            vec![
                RowRecord::new("Gold", "1923.40"),
                RowRecord::new("Oil", "78.12"),
            ],
        );
        writer.write(&snapshot).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let separator = "-".repeat(40) + "\n";
        let body = contents
            .split_once(&separator)
            .map(|(_, rest)| rest)
            .unwrap();
        assert_eq!(body, "Gold | 1923.40\nOil | 78.12\n\n");
    }

    #[test]
    fn test_second_write_replaces_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("futures_prices.txt");
        let writer = SnapshotWriter::new(&path);

        let first = Snapshot::new(fixed_timestamp(), vec![RowRecord::new("Gold", "1923.40")]);
        writer.write(&first).unwrap();

        let second = Snapshot::new(fixed_timestamp(), vec![RowRecord::new("Oil", "78.12")]);
        writer.write(&second).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("Gold"));
        assert!(contents.contains("Oil | 78.12"));
        // Exactly one snapshot: one header line
        assert_eq!(contents.matches("Updated at:").count(), 1);
    }

    #[test]
    fn test_write_to_missing_directory_errors() {
        let writer = SnapshotWriter::new("/nonexistent-dir/futures_prices.txt");
        let snapshot = Snapshot::new(fixed_timestamp(), vec![]);

        assert!(writer.write(&snapshot).is_err());
    }
}
