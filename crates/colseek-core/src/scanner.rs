//! Chunked scanning over a delimited file.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::reader::RowReader;
use crate::record::{Record, RowSet};

/// Scans a delimited file in bounded chunks of records.
///
/// Construction is cheap and does not touch the filesystem. Each scan call
/// opens the file, drives a [`RowReader`] for the duration of the call,
/// and releases the handle when it returns, on success and on error alike.
/// Only one chunk of records is resident at a time, so peak memory stays
/// independent of file size.
pub struct ChunkedScanner {
    path: PathBuf,
    config: ScanConfig,
}

impl ChunkedScanner {
    /// Creates a scanner for `path` with the given configuration.
    pub fn new(path: impl Into<PathBuf>, config: ScanConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// The file this scanner reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The scan configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Searches chunk by chunk, returning the first match.
    ///
    /// Fills chunks of up to `chunk_size` records and hands each to
    /// `search` in file order. The first `Some` return ends the scan
    /// without reading further chunks; `Ok(None)` means the file was
    /// exhausted (or empty) without a match. With `has_header` the first
    /// record never enters a chunk.
    ///
    /// The chunk slice is only valid for the duration of one call, so
    /// `search` clones out whatever it wants to keep.
    pub fn search_first<F>(
        &self,
        chunk_size: usize,
        has_header: bool,
        mut search: F,
    ) -> Result<Option<Record>>
    where
        F: FnMut(&[Record]) -> Option<Record>,
    {
        if chunk_size == 0 {
            return Err(ScanError::InvalidChunkSize);
        }
        let mut reader = RowReader::open(&self.path, &self.config)?;
        let mut chunk = Vec::with_capacity(chunk_size);
        let Some(first) = reader.read_first(has_header)? else {
            return Ok(None);
        };
        if !has_header {
            chunk.push(first);
        }
        let mut chunks_scanned = 0u64;
        loop {
            let exhausted = fill_chunk(&mut reader, &mut chunk, chunk_size)?;
            if !chunk.is_empty() {
                chunks_scanned += 1;
                if let Some(found) = search(&chunk) {
                    debug!(
                        path = %self.path.display(),
                        rows = reader.rows_read(),
                        chunks = chunks_scanned,
                        "match found, stopping scan"
                    );
                    return Ok(Some(found));
                }
                chunk.clear();
            }
            if exhausted {
                break;
            }
        }
        debug!(
            path = %self.path.display(),
            rows = reader.rows_read(),
            chunks = chunks_scanned,
            "scan exhausted without a match"
        );
        Ok(None)
    }

    /// Searches chunk by chunk, accumulating every match in file order.
    ///
    /// `search` returns the matches it finds in each chunk; results are
    /// concatenated in scan order. When `max_matches` is set the scan
    /// stops as soon as that many matches are collected and the result is
    /// capped to exactly that length.
    pub fn search_all<F>(
        &self,
        chunk_size: usize,
        has_header: bool,
        max_matches: Option<usize>,
        mut search: F,
    ) -> Result<Vec<Record>>
    where
        F: FnMut(&[Record]) -> Vec<Record>,
    {
        if chunk_size == 0 {
            return Err(ScanError::InvalidChunkSize);
        }
        let mut reader = RowReader::open(&self.path, &self.config)?;
        let mut chunk = Vec::with_capacity(chunk_size);
        let mut found = Vec::new();
        let Some(first) = reader.read_first(has_header)? else {
            return Ok(found);
        };
        if !has_header {
            chunk.push(first);
        }
        loop {
            let exhausted = fill_chunk(&mut reader, &mut chunk, chunk_size)?;
            if !chunk.is_empty() {
                found.extend(search(&chunk));
                if let Some(cap) = max_matches
                    && found.len() >= cap
                {
                    found.truncate(cap);
                    debug!(
                        path = %self.path.display(),
                        rows = reader.rows_read(),
                        matches = found.len(),
                        "match cap reached, stopping scan"
                    );
                    return Ok(found);
                }
                chunk.clear();
            }
            if exhausted {
                break;
            }
        }
        debug!(
            path = %self.path.display(),
            rows = reader.rows_read(),
            matches = found.len(),
            "scan complete"
        );
        Ok(found)
    }

    /// Reads the whole file into a [`RowSet`].
    ///
    /// With `has_header` the first record is captured as header columns
    /// instead of entering the data records. An empty file yields an
    /// empty row set, not an error.
    pub fn read_all(&self, has_header: bool) -> Result<RowSet> {
        let mut reader = RowReader::open(&self.path, &self.config)?;
        let mut rows = RowSet::default();
        match reader.read_first(has_header)? {
            None => return Ok(rows),
            Some(first) if has_header => rows.header = Some(first),
            Some(first) => rows.records.push(first),
        }
        while let Some(record) = reader.read_next()? {
            rows.records.push(record);
        }
        debug!(
            path = %self.path.display(),
            rows = rows.records.len(),
            "read all records"
        );
        Ok(rows)
    }

    /// Reads just the first record as header columns.
    ///
    /// Returns `Ok(None)` for an empty file.
    pub fn read_header(&self) -> Result<Option<Record>> {
        let mut reader = RowReader::open(&self.path, &self.config)?;
        reader.read_first(true)
    }
}

/// Fills `chunk` with records until it holds `chunk_size` of them.
///
/// Returns `true` once the reader is exhausted, which can leave the chunk
/// partially filled or empty.
fn fill_chunk<R: Read>(
    reader: &mut RowReader<R>,
    chunk: &mut Vec<Record>,
    chunk_size: usize,
) -> Result<bool> {
    while chunk.len() < chunk_size {
        match reader.read_next()? {
            Some(record) => chunk.push(record),
            None => return Ok(true),
        }
    }
    Ok(false)
}
