//! Bounded-memory scanning of delimited text files.
//!
//! This crate reads CSV-style files a record at a time, validates that
//! every record matches the shape (field count) established by the first
//! one, strips a configurable trailing terminator from each row, and
//! drives caller-supplied predicates over fixed-size chunks of records so
//! that files far larger than memory can be searched.
//!
//! # Example
//!
//! ```no_run
//! use colseek_core::{ChunkedScanner, ScanConfig};
//!
//! # fn main() -> colseek_core::Result<()> {
//! let config = ScanConfig::default().with_terminator(";");
//! let scanner = ChunkedScanner::new("users.csv", config);
//! let hit = scanner.search_first(200, false, |chunk| {
//!     chunk.iter().find(|row| row.get(0) == Some("42")).cloned()
//! })?;
//! if let Some(row) = hit {
//!     println!("{}", row.get(1).unwrap_or(""));
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod format;
mod reader;
mod record;
mod scanner;

pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use format::format_row;
pub use reader::RowReader;
pub use record::{Record, RowSet};
pub use scanner::ChunkedScanner;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
