//! Plain-text marker file format.
//!
//! ```text
//! <count>
//! <x1>
//! <y1>
//! ...
//! ```
//!
//! One decimal integer per line. Parsing is all-or-nothing: a bad or missing
//! line rejects the whole file.

use crate::coord::ProjectedCoord;
use std::fmt::Write as _;
use thiserror::Error;

/// Errors produced while decoding a marker file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Marker file is empty")]
    MissingCount,
    #[error("Line {line}: invalid marker count {value:?}")]
    BadCount { line: usize, value: String },
    #[error("Marker file truncated: expected {expected} lines, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("Line {line}: invalid coordinate {value:?}")]
    BadInteger { line: usize, value: String },
}

/// Serialize positions in iteration order.
pub fn encode<I>(positions: I) -> String
where
    I: IntoIterator<Item = ProjectedCoord>,
    I::IntoIter: ExactSizeIterator,
{
    let positions = positions.into_iter();
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", positions.len());
    for p in positions {
        let _ = writeln!(out, "{}", p.x);
        let _ = writeln!(out, "{}", p.y);
    }
    out
}

/// Parse a marker file. Lines after the last coordinate pair are ignored.
pub fn decode(text: &str) -> Result<Vec<ProjectedCoord>, CodecError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (line, raw) = lines.next().ok_or(CodecError::MissingCount)?;
    let count: usize = raw.parse().map_err(|_| CodecError::BadCount {
        line,
        value: raw.to_string(),
    })?;

    let expected = 1 + count.saturating_mul(2);
    let mut next_int = |found: &mut usize| -> Result<i32, CodecError> {
        let (line, raw) = lines.next().ok_or(CodecError::Truncated {
            expected,
            found: *found,
        })?;
        *found += 1;
        raw.parse().map_err(|_| CodecError::BadInteger {
            line,
            value: raw.to_string(),
        })
    };

    // Don't trust the header for the allocation size.
    let mut positions = Vec::with_capacity(count.min(1024));
    let mut found = 1;
    for _ in 0..count {
        let x = next_int(&mut found)?;
        let y = next_int(&mut found)?;
        positions.push(ProjectedCoord::new(x, y));
    }
    Ok(positions)
}
