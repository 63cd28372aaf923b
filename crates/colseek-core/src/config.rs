//! Scan configuration.

use serde::{Deserialize, Serialize};

/// Configuration for reading and formatting a delimited file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Field separator (one byte).
    pub separator: u8,
    /// Field enclosure (one byte).
    pub quote: u8,
    /// Escape byte inside enclosed fields; `None` disables escaping.
    pub escape: Option<u8>,
    /// Trailing string carried at the end of every physical row and
    /// stripped from the last field when present. Empty disables stripping.
    pub terminator: String,
    /// Read-buffer capacity hint in bytes. Set it above the longest line
    /// to avoid buffer growth mid-scan; `None` keeps the parser default.
    pub max_line_length: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            separator: b',',
            quote: b'"',
            escape: Some(b'\\'),
            terminator: String::new(),
            max_line_length: None,
        }
    }
}

impl ScanConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field separator.
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the field enclosure.
    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Sets the escape byte (`None` disables escaping).
    #[must_use]
    pub fn with_escape(mut self, escape: Option<u8>) -> Self {
        self.escape = escape;
        self
    }

    /// Sets the trailing row terminator string.
    #[must_use]
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Sets the read-buffer capacity hint.
    #[must_use]
    pub fn with_max_line_length(mut self, length: usize) -> Self {
        self.max_line_length = Some(length);
        self
    }
}
