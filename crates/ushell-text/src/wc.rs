//! Counting for `wc`

use std::ops::{Add, AddAssign};

use crate::lines::is_space_byte;

/// Line, word and byte counts of one input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub lines: usize,
    pub words: usize,
    pub bytes: usize,
}

impl Counts {
    /// Count raw bytes. Lines are `\n` terminators; words are maximal runs of
    /// non-whitespace bytes.
    pub fn of(bytes: &[u8]) -> Self {
        let lines = bytes.iter().filter(|b| **b == b'\n').count();
        let words = bytes
            .split(|b| is_space_byte(*b))
            .filter(|word| !word.is_empty())
            .count();
        Self {
            lines,
            words,
            bytes: bytes.len(),
        }
    }
}

impl Add for Counts {
    type Output = Counts;

    fn add(self, other: Counts) -> Counts {
        Counts {
            lines: self.lines + other.lines,
            words: self.words + other.words,
            bytes: self.bytes + other.bytes,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Counts) {
        *self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_basic() {
        let counts = Counts::of(b"hello world\nfoo\n");
        assert_eq!(
            counts,
            Counts {
                lines: 2,
                words: 3,
                bytes: 16
            }
        );
    }

    #[test]
    fn test_unterminated_last_line_is_not_counted() {
        assert_eq!(Counts::of(b"a\nb").lines, 1);
        assert_eq!(Counts::of(b"").lines, 0);
    }

    #[test]
    fn test_words_across_mixed_whitespace() {
        assert_eq!(Counts::of(b"  a\t\tb \r\n c  ").words, 3);
        assert_eq!(Counts::of(b" \n\t ").words, 0);
    }

    #[test]
    fn test_bytes_are_raw() {
        assert_eq!(Counts::of("é".as_bytes()).bytes, 2);
        assert_eq!(Counts::of(b"\xff\xfe").words, 1);
    }

    #[test]
    fn test_add_assign_accumulates() {
        let mut total = Counts::default();
        for part in [Counts::of(b"a b\n"), Counts::of(b"c\nd\n"), Counts::of(b"")] {
            total += part;
        }
        assert_eq!(total.lines, 3);
        assert_eq!(total.words, 4);
        assert_eq!(total.bytes, 8);
    }
}
