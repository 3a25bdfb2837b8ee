use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::row::RowRecord;

const SEPARATOR_WIDTH: usize = 40;

/// The full set of records captured in one update cycle, plus its capture
/// timestamp. Rendering the report lives here so the writer stays a thin
/// file-replacement step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub captured_at: DateTime<Local>,
    pub records: Vec<RowRecord>,
}

impl Snapshot {
    pub fn new(captured_at: DateTime<Local>, records: Vec<RowRecord>) -> Self {
        Self {
            captured_at,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the report text: timestamp header, column header, separator,
    /// one `name | price` line per record, then a trailing blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Updated at: {}\n",
            self.captured_at.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str("Currency | Current Price\n");
        out.push_str(&"-".repeat(SEPARATOR_WIDTH));
        out.push('\n');

        for record in &self.records {
            out.push_str(&format!("{} | {}\n", record.name, record.price));
        }

        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_render_header() {
        let snapshot = Snapshot::new(fixed_timestamp(), vec![]);
        let text = snapshot.render();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("Updated at: 2024-03-15 10:30:00"));
        assert_eq!(lines.next(), Some("Currency | Current Price"));
        assert_eq!(lines.next(), Some("-".repeat(40).as_str()));
    }

    #[test]
    fn test_render_body_exact() {
        let snapshot = Snapshot::new(
            fixed_timestamp(),
            vec![
                RowRecord::new("Gold", "1923.40"),
                RowRecord::new("Oil", "78.12"),
            ],
        );
        let text = snapshot.render();
        let separator = "-".repeat(40) + "\n";
        let body = text.split_once(&separator).map(|(_, rest)| rest).unwrap();

        assert_eq!(body, "Gold | 1923.40\nOil | 78.12\n\n");
    }

    #[test]
    fn test_render_empty_snapshot() {
        let snapshot = Snapshot::new(fixed_timestamp(), vec![]);
        let text = snapshot.render();

        assert!(snapshot.is_empty());
        assert!(text.ends_with("\n\n"));
    }
}
