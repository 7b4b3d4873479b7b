//! String and collection helpers
//!
//! Lines are newline-terminated: a trailing `\n` ends the last line instead of
//! starting an empty one, so `"a\nb\n"` and `"a\nb"` both hold two lines.

/// Split text into lines without their terminators
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_terminator('\n').collect()
}

/// Byte-level counterpart of [`split_lines`], for input that may not be UTF-8
pub fn split_byte_lines(bytes: &[u8]) -> Vec<&[u8]> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|b| *b == b'\n').collect()
}

/// Join lines back into text, terminating every line with `\n`
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Whitespace as understood by `wc`: space, tab, newline, CR, VT, FF
pub fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
