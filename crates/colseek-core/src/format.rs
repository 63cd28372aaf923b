//! Row formatting for display.

use crate::config::ScanConfig;
use crate::record::Record;

/// Renders a record back to one line of delimited text.
///
/// Joins the fields with the configured separator and appends the
/// terminator after the last field. No quoting or escaping is reapplied:
/// this is a display convenience for rows that came out of a file, not a
/// round-trip-safe serializer for arbitrary field values.
#[must_use]
pub fn format_row(record: &Record, config: &ScanConfig) -> String {
    let mut line = String::new();
    for (index, field) in record.fields().iter().enumerate() {
        if index > 0 {
            line.push(config.separator as char);
        }
        line.push_str(field);
    }
    line.push_str(&config.terminator);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(fields: &[&str]) -> Record {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    #[test]
    fn test_format_row_joins_with_separator() {
        let config = ScanConfig::default();
        assert_eq!(format_row(&rec(&["1", "a", "x"]), &config), "1,a,x");
    }

    #[test]
    fn test_format_row_appends_terminator() {
        let config = ScanConfig::default().with_terminator(";");
        assert_eq!(format_row(&rec(&["2", "b"]), &config), "2,b;");
    }

    #[test]
    fn test_format_row_custom_separator() {
        let config = ScanConfig::default().with_separator(b'\t');
        assert_eq!(format_row(&rec(&["x", "y"]), &config), "x\ty");
    }

    #[test]
    fn test_format_row_single_field() {
        let config = ScanConfig::default().with_terminator(";");
        assert_eq!(format_row(&rec(&["only"]), &config), "only;");
    }

    #[test]
    fn test_format_row_empty_record() {
        let config = ScanConfig::default().with_terminator(";");
        assert_eq!(format_row(&Record::default(), &config), ";");
    }

    #[test]
    fn test_format_row_does_not_requote() {
        let config = ScanConfig::default();
        assert_eq!(format_row(&rec(&["a,b", "c"]), &config), "a,b,c");
    }
}
