//! Quote-aware tokenizing of a single pipeline stage
//!
//! Handles quoted strings, backslash escapes and redirection operators.
//! Quoting suppresses both glob expansion and redirection, so every word
//! remembers whether any part of it was quoted.

use crate::error::{Result, ShellError};

/// A plain argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub quoted: bool,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: false,
        }
    }

    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectOp {
    /// `<`
    Input,
    /// `>`
    Output,
    /// `>>`
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(Word),
    Redirect(RedirectOp),
}

/// Split a stage into words and redirection operators
///
/// Supports:
/// - Double quotes: "hello world" (`\"` and `\\` are escapes inside)
/// - Single quotes: 'hello world' (everything literal)
/// - Backslash escapes outside quotes
/// - `<`, `>` and `>>`, with or without surrounding spaces
///
/// # Examples
/// ```
/// use ushell::parser::quote::{tokenize, Token, Word};
/// let tokens = tokenize("echo \"hello world\"").unwrap();
/// assert_eq!(tokens[1], Token::Word(Word::quoted("hello world")));
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = input.chars().peekable();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    while let Some(c) = chars.next() {
        if in_single_quote {
            match c {
                '\'' => in_single_quote = false,
                _ => current.push(c),
            }
        } else if in_double_quote {
            match c {
                '"' => in_double_quote = false,
                '\\' if matches!(chars.peek(), Some('"') | Some('\\')) => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                }
                _ => current.push(c),
            }
        } else {
            match c {
                '\'' => {
                    in_single_quote = true;
                    quoted = true;
                }
                '"' => {
                    in_double_quote = true;
                    quoted = true;
                }
                '\\' => {
                    // A trailing backslash stays literal
                    current.push(chars.next().unwrap_or('\\'));
                    quoted = true;
                }
                '<' => {
                    flush_word(&mut tokens, &mut current, &mut quoted);
                    tokens.push(Token::Redirect(RedirectOp::Input));
                }
                '>' => {
                    flush_word(&mut tokens, &mut current, &mut quoted);
                    if chars.peek() == Some(&'>') {
                        chars.next();
                        tokens.push(Token::Redirect(RedirectOp::Append));
                    } else {
                        tokens.push(Token::Redirect(RedirectOp::Output));
                    }
                }
                c if c.is_whitespace() => flush_word(&mut tokens, &mut current, &mut quoted),
                _ => current.push(c),
            }
        }
    }

    if in_single_quote || in_double_quote {
        return Err(ShellError::Syntax("unterminated quote".to_string()));
    }
    flush_word(&mut tokens, &mut current, &mut quoted);

    Ok(tokens)
}

fn flush_word(tokens: &mut Vec<Token>, current: &mut String, quoted: &mut bool) {
    if !current.is_empty() || *quoted {
        tokens.push(Token::Word(Word {
            text: std::mem::take(current),
            quoted: *quoted,
        }));
    }
    *quoted = false;
}
