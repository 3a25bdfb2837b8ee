use serde::{Deserialize, Serialize};

/// One (name, price) pair extracted from a single table row.
///
/// Records carry no identity across update cycles; every cycle extracts a
/// fresh set in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub name: String,
    pub price: String,
}

impl RowRecord {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_record_creation() {
        let record = RowRecord::new("Gold", "1923.40");
        assert_eq!(record.name, "Gold");
        assert_eq!(record.price, "1923.40");
    }
}
