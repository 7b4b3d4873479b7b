//! Column slicing for `cut`

use crate::RangeError;

/// A 1-based inclusive slice; `end == None` runs to the end of the line
///
/// Only [`parse_ranges`] builds these, so `start >= 1` and `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: usize,
    end: Option<usize>,
}

impl Range {
    pub(crate) fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Zero-based half-open bounds clamped to `len`, or `None` when the
    /// range starts past the end
    fn bounds(&self, len: usize) -> Option<(usize, usize)> {
        if self.start > len {
            return None;
        }
        let start = self.start.saturating_sub(1);
        let end = self.end.map_or(len, |end| end.min(len)).max(start);
        Some((start, end))
    }
}

/// Parse a list like `1,3-5,7-` or `-4`
pub fn parse_ranges(list: &str) -> Result<Vec<Range>, RangeError> {
    if list.trim().is_empty() {
        return Err(RangeError::Empty);
    }

    list.split(',').map(parse_range).collect()
}

fn parse_range(piece: &str) -> Result<Range, RangeError> {
    let malformed = || RangeError::Malformed(piece.to_string());
    let number = |s: &str| s.parse::<usize>().map_err(|_| malformed());

    let range = match piece.split_once('-') {
        None => {
            let n = number(piece)?;
            Range::new(n, Some(n))
        }
        Some(("", "")) => return Err(malformed()),
        Some(("", end)) => Range::new(1, Some(number(end)?)),
        Some((start, "")) => Range::new(number(start)?, None),
        Some((start, end)) => Range::new(number(start)?, Some(number(end)?)),
    };

    if range.start == 0 || range.end == Some(0) {
        return Err(RangeError::Zero(piece.to_string()));
    }
    if matches!(range.end, Some(end) if end < range.start) {
        return Err(RangeError::Decreasing(piece.to_string()));
    }
    Ok(range)
}

/// Concatenate the character slices of `line` described by `ranges`, in
/// range order
pub fn cut_chars(line: &str, ranges: &[Range]) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::new();
    for range in ranges {
        if let Some((start, end)) = range.bounds(chars.len()) {
            out.extend(&chars[start..end]);
        }
    }
    out
}

/// Byte-mode counterpart of [`cut_chars`]
pub fn cut_bytes(line: &[u8], ranges: &[Range]) -> Vec<u8> {
    let mut out = Vec::new();
    for range in ranges {
        if let Some((start, end)) = range.bounds(line.len()) {
            out.extend_from_slice(&line[start..end]);
        }
    }
    out
}
