//! Active-name list parsing.
//!
//! Operators hand us loosely formatted CSV files: comma, semicolon, tab or
//! pipe delimited, with or without a header row, sometimes just one name per
//! line. The reader sniffs the delimiter from the first line and folds every
//! name to lowercase for membership testing.

use std::collections::HashSet;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Candidate delimiters, checked against the first line in priority order.
const DELIMITERS: [char; 4] = [',', ';', '\t', '|'];

/// First-field values that mark a header row (case-insensitive).
const HEADER_FIELDS: [&str; 4] = ["name", "names", "profile", "person"];

#[derive(Error, Debug)]
pub enum NamelistError {
    #[error("cannot read name list '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Read a name-list file into a case-insensitive membership set.
///
/// A missing or unreadable file is an error; an empty set is a valid result
/// the caller must treat as "nothing to do".
pub fn read_active_names(path: &Path) -> Result<HashSet<String>, NamelistError> {
    let text = std::fs::read_to_string(path).map_err(|source| NamelistError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_active_names(&text))
}

/// Parse name-list text: sniff the delimiter, skip a header row, collect the
/// first field of every non-empty row, trimmed and lowercased.
pub fn parse_active_names(text: &str) -> HashSet<String> {
    let delimiter = text
        .lines()
        .next()
        .and_then(|line| DELIMITERS.iter().copied().find(|d| line.contains(*d)));

    match delimiter {
        Some(d) => parse_delimited(text, d),
        None => parse_plain_lines(text),
    }
}

fn parse_delimited(text: &str, delimiter: char) -> HashSet<String> {
    let mut names = HashSet::new();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    for (index, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(row = index, error = %e, "skipping malformed name list row");
                continue;
            }
        };
        let field = row.get(0).unwrap_or("").trim();
        if index == 0 && is_header_field(field) {
            continue;
        }
        if !field.is_empty() {
            names.insert(field.to_lowercase());
        }
    }
    names
}

fn parse_plain_lines(text: &str) -> HashSet<String> {
    let mut names = HashSet::new();
    for (index, line) in text.lines().enumerate() {
        let name = line.trim();
        if index == 0 && is_header_field(name) {
            continue;
        }
        if !name.is_empty() {
            names.insert(name.to_lowercase());
        }
    }
    names
}

fn is_header_field(field: &str) -> bool {
    HEADER_FIELDS.contains(&field.to_lowercase().as_str())
}
