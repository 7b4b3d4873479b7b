//! Wildcard expansion of arguments
//!
//! Only the last path segment may hold a wildcard: `*.txt` and `docs/*.md`
//! expand, `*/notes.txt` does not. Hidden entries match only patterns that
//! start with a dot.

use log::debug;

use super::quote::Word;
use crate::shell::env::Environment;

/// Whether an argument asks for expansion
pub fn has_wildcard(arg: &str) -> bool {
    arg.contains('*')
}

/// Expand `pattern` against the directory it names, alphabetically
///
/// Returns an empty list when nothing matches or the directory cannot be
/// read; the caller decides what that means.
pub fn expand(pattern: &str, env: &Environment) -> Vec<String> {
    let (prefix, file_pattern) = match pattern.rfind('/') {
        Some(idx) => pattern.split_at(idx + 1),
        None => ("", pattern),
    };
    if has_wildcard(prefix) {
        return Vec::new();
    }

    let dir = env.resolve(if prefix.is_empty() { "." } else { prefix });
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };

    let include_hidden = file_pattern.starts_with('.');
    let file_pattern = escape_metachars(file_pattern);
    let mut matches: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| include_hidden || !name.starts_with('.'))
        .filter(|name| glob_match::glob_match(&file_pattern, name))
        .map(|name| format!("{}{}", prefix, name))
        .collect();
    matches.sort();

    debug!("glob {} matched {} entries", pattern, matches.len());
    matches
}

/// Quote everything the matcher treats as special except `*`
fn escape_metachars(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if matches!(c, '?' | '[' | ']' | '{' | '}' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Expand every unquoted wildcard word; a pattern without matches is kept
/// literally
pub fn expand_words(words: Vec<Word>, env: &Environment) -> Vec<String> {
    let mut args = Vec::with_capacity(words.len());
    for word in words {
        if word.quoted || !has_wildcard(&word.text) {
            args.push(word.text);
            continue;
        }
        let matches = expand(&word.text, env);
        if matches.is_empty() {
            args.push(word.text);
        } else {
            args.extend(matches);
        }
    }
    args
}
