//! Numeric scanning of SVG path data
//!
//! Drawing commands are never interpreted. A `d` attribute is treated as a
//! flat stream of decimal numbers which are then paired into coordinates.

use crate::types::Coordinate;

/// How numbers are pulled out of a path's `d` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Every signed decimal number, paired sequentially
    #[default]
    Numbers,
    /// Only unsigned `x,y` pairs joined by a comma
    CommaPairs,
}

impl ScanMode {
    /// Scan path data into coordinate pairs using this mode
    pub fn coordinates(self, d: &str) -> Vec<Coordinate> {
        match self {
            ScanMode::Numbers => pair_numbers(&scan_numbers(d)),
            ScanMode::CommaPairs => scan_comma_pairs(d),
        }
    }
}

/// Returns the end of an unsigned number (`digits[.digits]`) starting at `start`
fn unsigned_number_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == start {
        return None;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }

    Some(i)
}

/// Parse a matched token. A digit run too large for `f64` saturates to
/// `±f64::MAX`: the token keeps its slot so later pairs stay aligned, and
/// the value stays representable as JSON.
fn parse_token(token: &str) -> Option<f64> {
    let n = token.parse::<f64>().ok()?;
    if n.is_infinite() {
        Some(f64::MAX.copysign(n))
    } else {
        Some(n)
    }
}

/// Scan all signed decimal numbers from path data, left to right
///
/// A token is an optional `-`, one or more digits, then an optional `.` with
/// any number of digits. Command letters, commas, whitespace and everything
/// else act as separators. Exponents are not recognised, so `1e5` yields
/// `1` and `5`.
pub fn scan_numbers(d: &str) -> Vec<f64> {
    let bytes = d.as_bytes();
    let mut numbers = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let digits_start = if bytes[i] == b'-' { i + 1 } else { i };

        match unsigned_number_end(bytes, digits_start) {
            Some(end) => {
                // Token bounds are always ASCII, so slicing is on char boundaries
                if let Some(n) = parse_token(&d[i..end]) {
                    numbers.push(n);
                }
                i = end;
            }
            None => i += 1,
        }
    }

    numbers
}

/// Group numbers into `[x, y]` pairs, dropping a trailing odd number
pub fn pair_numbers(numbers: &[f64]) -> Vec<Coordinate> {
    numbers
        .chunks_exact(2)
        .map(|pair| [pair[0], pair[1]])
        .collect()
}

/// Scan explicit `x,y` pairs from path data
///
/// Both halves are unsigned decimals and must be joined by a single comma
/// with no whitespace. Numbers not written as such a pair are ignored.
pub fn scan_comma_pairs(d: &str) -> Vec<Coordinate> {
    let bytes = d.as_bytes();
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let matched = unsigned_number_end(bytes, i).and_then(|x_end| {
            if bytes.get(x_end) != Some(&b',') {
                return None;
            }
            let y_end = unsigned_number_end(bytes, x_end + 1)?;
            let x = parse_token(&d[i..x_end])?;
            let y = parse_token(&d[x_end + 1..y_end])?;
            Some(([x, y], y_end))
        });

        match matched {
            Some((pair, end)) => {
                pairs.push(pair);
                i = end;
            }
            // Retry from the next byte: "1.2.3,4" still yields [2.3, 4]
            None => i += 1,
        }
    }

    pairs
}
