//! Quote-aware splitting of a CSV header line.
//!
//! Either quote character toggles a single "inside quotes" state, so a comma
//! between quotes stays part of the column name. There is no escaping and no
//! nesting: `'` and `"` are interchangeable toggles and are never copied into
//! the column name.

use std::fmt;
use std::io::BufRead;

use serde::Serialize;

use crate::error::{MapError, Result};

/// Byte-order mark some spreadsheet exports put in front of the header line.
const UTF8_BOM: char = '\u{feff}';

/// A raw column name as it appears in the header line, quotes removed and
/// surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Header(String);

impl Header {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Header {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

struct Scan {
    headers: Vec<Header>,
    /// Byte offset of a quote that was opened and never closed.
    open_quote: Option<usize>,
}

fn scan(line: &str) -> Scan {
    let mut headers = Vec::new();
    let mut current = String::new();
    let mut open_quote: Option<usize> = None;
    for (offset, ch) in line.char_indices() {
        match ch {
            '"' | '\'' => {
                open_quote = match open_quote {
                    Some(_) => None,
                    None => Some(offset),
                };
            }
            ',' if open_quote.is_none() => {
                headers.push(Header::new(current.trim()));
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    headers.push(Header::new(current.trim()));
    Scan {
        headers,
        open_quote,
    }
}

/// Splits a header line into column names without any validation.
///
/// Always yields at least one header: the text after the last separator is
/// pushed even when it is empty.
pub fn split_headers(line: &str) -> Vec<Header> {
    scan(line).headers
}

/// Splits a header line into column names, rejecting blank input and input
/// that ends inside a quoted section.
///
/// # Errors
///
/// Returns [`MapError::EmptyInput`] or [`MapError::UnbalancedQuotes`].
pub fn parse_headers(line: &str) -> Result<Vec<Header>> {
    if line.trim().is_empty() {
        return Err(MapError::EmptyInput);
    }
    let Scan {
        headers,
        open_quote,
    } = scan(line);
    if let Some(position) = open_quote {
        return Err(MapError::UnbalancedQuotes { position });
    }
    Ok(headers)
}

/// Reads the first line of a CSV export, dropping the line terminator and a
/// leading byte-order mark.
///
/// # Errors
///
/// Returns [`MapError::Io`] when reading fails and [`MapError::EmptyInput`]
/// when the reader is exhausted before any line.
pub fn read_header_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(MapError::EmptyInput);
    }
    let line = line.trim_end_matches(['\r', '\n']);
    Ok(line.strip_prefix(UTF8_BOM).unwrap_or(line).to_string())
}
