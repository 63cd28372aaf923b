//! Row and row-set types.

use serde::{Deserialize, Serialize};

/// One logical row of a delimited file, terminator already stripped.
///
/// Serializes transparently as a plain sequence of field strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Creates a record from its fields.
    #[must_use]
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Returns the field at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields in file order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl FromIterator<String> for Record {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Everything read from a file in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    /// Header columns, when the first row was designated a header.
    pub header: Option<Record>,
    /// Data records in file order.
    pub records: Vec<Record>,
}

impl RowSet {
    /// Number of data records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when no data records were read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(fields: &[&str]) -> Record {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    #[test]
    fn test_get_in_and_out_of_range() {
        let record = rec(&["1", "alice"]);
        assert_eq!(record.get(0), Some("1"));
        assert_eq!(record.get(1), Some("alice"));
        assert_eq!(record.get(2), None);
    }

    #[test]
    fn test_from_vec_matches_collected() {
        let record = Record::from(vec!["1".to_string(), "a".to_string()]);
        assert_eq!(record, rec(&["1", "a"]));
    }

    #[test]
    fn test_serializes_as_plain_sequence() {
        let record = rec(&["1", "a"]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"["1","a"]"#);
    }

    #[test]
    fn test_empty_row_set() {
        let rows = RowSet::default();
        assert!(rows.is_empty());
        assert_eq!(rows.len(), 0);
        assert!(rows.header.is_none());
    }
}
