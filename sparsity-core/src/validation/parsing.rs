//! Parsing utilities for Matrix Market lines
//!
//! Pure parsing functions over single lines of text, with no I/O
//! dependencies.

use crate::format::MtxLayout;
use crate::{Result, SparsityError};

/// Dimensions declared by a Matrix Market size line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLine {
    pub rows: usize,
    pub cols: usize,
    /// Number of stored entries; only coordinate files declare it
    pub entries: Option<usize>,
}

/// Whether a line carries no data (blank or `%` comment)
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with(crate::format::constants::COMMENT_MARKER)
}

/// Parse the size line that follows the banner and comments
///
/// Coordinate files declare `rows cols entries`, array files `rows cols`.
pub fn parse_size_line(line: &str, layout: MtxLayout) -> Result<SizeLine> {
    let mut tokens = line.split_ascii_whitespace();

    let rows = parse_count(tokens.next())?;
    let cols = parse_count(tokens.next())?;
    let entries = match layout {
        MtxLayout::Coordinate => Some(parse_count(tokens.next())?),
        MtxLayout::Array => None,
    };

    if tokens.next().is_some() {
        return Err(SparsityError::InvalidSizeLine);
    }

    Ok(SizeLine {
        rows,
        cols,
        entries,
    })
}

/// Parse a 1-based Matrix Market index into a zero-based one
///
/// Returns `None` for `0`, which is never a valid Matrix Market index.
pub fn parse_one_based(token: &str) -> Option<usize> {
    token.parse::<usize>().ok()?.checked_sub(1)
}

fn parse_count(token: Option<&str>) -> Result<usize> {
    token
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or(SparsityError::InvalidSizeLine)
}
