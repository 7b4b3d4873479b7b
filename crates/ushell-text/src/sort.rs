//! Line ordering for `sort`

use std::cmp::Ordering;

/// Modifiers for [`sort_lines`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Compare leading digit runs by integer value (`-n`)
    pub numeric: bool,
    /// Compare lowercased text (`-f`); has no effect together with `numeric`
    pub fold_case: bool,
    /// Reverse the result after sorting (`-r`)
    pub reverse: bool,
}

/// Stable sort of `lines` under `options`
pub fn sort_lines<S: AsRef<str>>(lines: &mut [S], options: &SortOptions) {
    lines.sort_by(|a, b| compare(a.as_ref(), b.as_ref(), options));
    if options.reverse {
        lines.reverse();
    }
}

/// Total order used by [`sort_lines`], before reversal
pub fn compare(a: &str, b: &str, options: &SortOptions) -> Ordering {
    if options.numeric {
        return compare_numeric(a, b);
    }
    if options.fold_case {
        return a.to_lowercase().cmp(&b.to_lowercase());
    }
    a.cmp(b)
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    let (a_digits, a_rest) = split_leading_digits(a);
    let (b_digits, b_rest) = split_leading_digits(b);

    match (a_digits.is_empty(), b_digits.is_empty()) {
        (true, true) => a.cmp(b),
        // the numeric side sorts after the non-numeric one
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => {
            compare_digit_runs(a_digits, b_digits).then_with(|| a_rest.cmp(b_rest))
        }
    }
}

fn split_leading_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Compare two non-empty ASCII digit runs by value, without overflow
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(lines: &[&str], options: SortOptions) -> Vec<String> {
        let mut lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        sort_lines(&mut lines, &options);
        lines
    }

    #[test]
    fn test_plain_sort() {
        let result = sorted(&["b", "B", "a", "10", "9"], SortOptions::default());
        assert_eq!(result, vec!["10", "9", "B", "a", "b"]);
    }

    #[test]
    fn test_numeric_sort() {
        let numeric = SortOptions {
            numeric: true,
            ..Default::default()
        };
        assert_eq!(sorted(&["10 b", "5 c", "1 a"], numeric), vec!["1 a", "5 c", "10 b"]);
    }

    #[test]
    fn test_numeric_after_non_numeric() {
        let numeric = SortOptions {
            numeric: true,
            ..Default::default()
        };
        assert_eq!(sorted(&["2", "b", "1x", "a"], numeric), vec!["a", "b", "1x", "2"]);
    }

    #[test]
    fn test_numeric_ties_use_remainder() {
        let numeric = SortOptions {
            numeric: true,
            ..Default::default()
        };
        assert_eq!(sorted(&["007b", "7a", "7"], numeric), vec!["7", "7a", "007b"]);
    }

    #[test]
    fn test_numeric_long_runs_do_not_overflow() {
        let numeric = SortOptions {
            numeric: true,
            ..Default::default()
        };
        let big = "123456789012345678901234567890";
        assert_eq!(sorted(&[big, "99"], numeric), vec!["99", big]);
    }

    #[test]
    fn test_fold_case() {
        let fold = SortOptions {
            fold_case: true,
            ..Default::default()
        };
        assert_eq!(sorted(&["b", "A", "a", "B"], fold), vec!["A", "a", "b", "B"]);
    }

    #[test]
    fn test_fold_case_ignored_in_numeric_mode() {
        let both = SortOptions {
            numeric: true,
            fold_case: true,
            ..Default::default()
        };
        assert_eq!(sorted(&["a", "B"], both), vec!["B", "a"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let input = ["x", "10", "Y", "2 z", "2 a", "", "b"];
        for numeric in [false, true] {
            for fold_case in [false, true] {
                let options = SortOptions {
                    numeric,
                    fold_case,
                    reverse: false,
                };
                let once = sorted(&input, options);
                let refs: Vec<&str> = once.iter().map(String::as_str).collect();
                assert_eq!(sorted(&refs, options), once);
            }
        }
    }

    #[test]
    fn test_reverse_equals_reversed_sort() {
        let input = ["x", "10", "Y", "2 z", "2 a", "b"];
        for numeric in [false, true] {
            let forward = SortOptions {
                numeric,
                ..Default::default()
            };
            let backward = SortOptions {
                reverse: true,
                ..forward
            };
            let mut expected = sorted(&input, forward);
            expected.reverse();
            assert_eq!(sorted(&input, backward), expected);
        }
    }
}
