//! Record-at-a-time reading with shape validation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::record::Record;

/// Reads validated, terminator-stripped records from delimited input.
///
/// The first record read establishes the file's shape (its field count);
/// every later record must match it or the read aborts with
/// [`ScanError::ColumnMismatch`]. Row numbers in errors are 1-based and
/// count data rows only; a designated header row is row 0.
///
/// The reader owns its handle exclusively, so dropping it releases the
/// file on every exit path, error returns included.
pub struct RowReader<R: Read> {
    inner: csv::Reader<R>,
    buffer: StringRecord,
    terminator: String,
    shape: Option<usize>,
    rows_read: u64,
}

impl RowReader<File> {
    /// Opens a file for reading with the given configuration.
    pub fn open(path: &Path, config: &ScanConfig) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ScanError::Io(e)
            }
        })?;
        Ok(Self::from_reader(file, config))
    }
}

impl<R: Read> RowReader<R> {
    /// Wraps any byte source with the given configuration.
    pub fn from_reader(reader: R, config: &ScanConfig) -> Self {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(config.separator)
            .quote(config.quote)
            .escape(config.escape);
        if let Some(capacity) = config.max_line_length {
            builder.buffer_capacity(capacity);
        }
        Self {
            inner: builder.from_reader(reader),
            buffer: StringRecord::new(),
            terminator: config.terminator.clone(),
            shape: None,
            rows_read: 0,
        }
    }

    /// Reads the first record and establishes the shape.
    ///
    /// Returns `Ok(None)` for an empty file. When `header` is true the
    /// record is the header row: it still sets the shape and has its
    /// terminator stripped, but data-row numbering starts after it and a
    /// parse failure in it reports row 0.
    pub fn read_first(&mut self, header: bool) -> Result<Option<Record>> {
        let first = self.next_raw().map_err(|error| match error {
            ScanError::Read { source, .. } if header => ScanError::Read { row: 0, source },
            other => other,
        })?;
        let Some(record) = first else {
            return Ok(None);
        };
        self.shape = Some(record.len());
        if !header {
            self.rows_read = 1;
        }
        Ok(Some(record))
    }

    /// Reads the next record, validating its field count against the shape.
    ///
    /// Returns `Ok(None)` once the input is exhausted. When no record has
    /// been read yet, the first one seen establishes the shape.
    pub fn read_next(&mut self) -> Result<Option<Record>> {
        let Some(record) = self.next_raw()? else {
            return Ok(None);
        };
        let expected = *self.shape.get_or_insert(record.len());
        if record.len() != expected {
            return Err(ScanError::ColumnMismatch {
                row: self.rows_read + 1,
                expected,
                actual: record.len(),
            });
        }
        self.rows_read += 1;
        Ok(Some(record))
    }

    /// The field count established by the first record, once one is read.
    pub fn shape(&self) -> Option<usize> {
        self.shape
    }

    /// Data rows read so far, header row excluded.
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    fn next_raw(&mut self) -> Result<Option<Record>> {
        let more = self
            .inner
            .read_record(&mut self.buffer)
            .map_err(|source| ScanError::Read {
                row: self.rows_read + 1,
                source,
            })?;
        if !more {
            return Ok(None);
        }
        let mut fields: Vec<String> = self.buffer.iter().map(str::to_string).collect();
        if let Some(last) = fields.last_mut() {
            strip_terminator(last, &self.terminator);
        }
        Ok(Some(Record::new(fields)))
    }
}

/// Removes `terminator` from the end of `field` when it is actually there.
///
/// A field shorter than the terminator, or one that does not end with it,
/// is left untouched rather than truncated blindly.
fn strip_terminator(field: &mut String, terminator: &str) {
    if terminator.is_empty() {
        return;
    }
    if field.ends_with(terminator) {
        field.truncate(field.len() - terminator.len());
    }
}
