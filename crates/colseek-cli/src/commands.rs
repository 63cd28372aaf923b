use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use colseek_cli::render::{json_line, rows_table};
use colseek_core::{ChunkedScanner, Record, ScanConfig, format_row};

use crate::cli::{DumpArgs, FormatArgs, SearchArgs};

/// Matching rows plus the configuration needed to print them back out.
pub struct SearchReport {
    pub matches: Vec<Record>,
    pub config: ScanConfig,
}

pub fn run_search(args: &SearchArgs) -> Result<SearchReport> {
    let scanner = ChunkedScanner::new(&args.file, scan_config(&args.format)?);
    let column = args.column;
    let key = args.key.as_str();
    debug!(column, key, chunk_size = args.chunk_size, "starting column search");
    let start = Instant::now();
    let matches = if args.all || args.max_rows.is_some() {
        scanner
            .search_all(args.chunk_size, args.header, args.max_rows, |chunk| {
                chunk
                    .iter()
                    .filter(|row| row.get(column) == Some(key))
                    .cloned()
                    .collect()
            })
            .with_context(|| format!("scan {}", scanner.path().display()))?
    } else {
        scanner
            .search_first(args.chunk_size, args.header, |chunk| {
                chunk
                    .iter()
                    .find(|row| row.get(column) == Some(key))
                    .cloned()
            })
            .with_context(|| format!("scan {}", scanner.path().display()))?
            .into_iter()
            .collect()
    };
    info!(
        file = %scanner.path().display(),
        column,
        matches = matches.len(),
        duration_ms = start.elapsed().as_millis(),
        "search complete"
    );
    let config = scanner.config().clone();
    Ok(SearchReport { matches, config })
}

/// Prints the matches, or "not found" when there are none.
pub fn print_matches(report: &SearchReport, args: &SearchArgs) -> Result<()> {
    if report.matches.is_empty() {
        println!("not found");
        return Ok(());
    }
    for record in &report.matches {
        if args.json {
            println!("{}", json_line(record)?);
        } else {
            println!("{}", format_row(record, &report.config));
        }
    }
    Ok(())
}

pub fn run_dump(args: &DumpArgs) -> Result<()> {
    let config = scan_config(&args.format)?;
    let scanner = ChunkedScanner::new(&args.file, config);
    let start = Instant::now();
    let mut rows = scanner
        .read_all(args.header)
        .with_context(|| format!("read {}", scanner.path().display()))?;
    let total = rows.len();
    if let Some(limit) = args.limit {
        rows.records.truncate(limit);
    }
    info!(
        file = %scanner.path().display(),
        rows = total,
        duration_ms = start.elapsed().as_millis(),
        "dump complete"
    );
    let table = rows_table(rows.header.as_ref(), &rows.records);
    println!("{table}");
    if rows.len() < total {
        println!("({} of {total} rows)", rows.len());
    }
    Ok(())
}

fn scan_config(args: &FormatArgs) -> Result<ScanConfig> {
    let mut config = ScanConfig::default()
        .with_separator(flag_byte(args.separator, "separator")?)
        .with_quote(flag_byte(args.quote, "quote")?)
        .with_terminator(args.terminator.clone());
    config = if args.no_escape {
        config.with_escape(None)
    } else {
        config.with_escape(Some(flag_byte(args.escape, "escape")?))
    };
    if let Some(length) = args.max_line_length {
        config = config.with_max_line_length(length);
    }
    Ok(config)
}

fn flag_byte(value: char, flag: &str) -> Result<u8> {
    if !value.is_ascii() {
        return Err(anyhow!("--{flag} must be a single ASCII character"));
    }
    Ok(value as u8)
}
