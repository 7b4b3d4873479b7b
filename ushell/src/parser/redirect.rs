//! I/O redirection
//!
//! Pulls `<`, `>` and `>>` out of a tokenized stage and opens the files they
//! name. The last redirection of each direction wins; an earlier file is
//! closed as soon as a later one replaces it.

use log::debug;
use std::fs::File;

use super::glob;
use super::quote::{RedirectOp, Token, Word};
use crate::cmd::io;
use crate::error::{ErrorKind, Result, ShellError};
use crate::shell::env::Environment;

/// A stage with its redirections resolved
#[derive(Debug, Default)]
pub struct IoRedirection {
    /// Remaining words, operators and their targets removed
    pub args: Vec<Word>,
    /// Replacement for the caller's stdin, if any
    pub input: Option<File>,
    /// Replacement for the caller's stdout, if any
    pub output: Option<File>,
}

impl IoRedirection {
    /// Scan `tokens` left to right, opening every redirection target
    pub fn extract(tokens: Vec<Token>, env: &Environment) -> Result<Self> {
        let mut redirection = IoRedirection::default();
        let mut tokens = tokens.into_iter();

        while let Some(token) = tokens.next() {
            let op = match token {
                Token::Word(word) => {
                    redirection.args.push(word);
                    continue;
                }
                Token::Redirect(op) => op,
            };

            let target = match tokens.next() {
                Some(Token::Word(word)) => resolve_target(word, env)?,
                _ => {
                    return Err(ShellError::Syntax(
                        "invalid redirection syntax".to_string(),
                    ))
                }
            };
            debug!("redirect {:?} -> {}", op, target);

            match op {
                RedirectOp::Input => redirection.input = Some(open_input(&target, env)?),
                RedirectOp::Output => redirection.output = Some(open_output(&target, env, false)?),
                RedirectOp::Append => redirection.output = Some(open_output(&target, env, true)?),
            }
        }

        Ok(redirection)
    }
}

fn resolve_target(word: Word, env: &Environment) -> Result<String> {
    if word.quoted || !glob::has_wildcard(&word.text) {
        return Ok(word.text);
    }

    let mut matches = glob::expand(&word.text, env);
    match matches.len() {
        0 => Ok(word.text),
        1 => Ok(matches.remove(0)),
        _ => Err(ShellError::Redirect(ErrorKind::Usage(format!(
            "{}: ambiguous redirect",
            word.text
        )))),
    }
}

fn open_input(target: &str, env: &Environment) -> Result<File> {
    let path = env.resolve(target);
    if path.is_dir() {
        return Err(ShellError::Redirect(ErrorKind::IsDirectory(target.to_string())));
    }
    File::open(&path).map_err(|e| ShellError::Redirect(ErrorKind::from_io(target, e)))
}

fn open_output(target: &str, env: &Environment, append: bool) -> Result<File> {
    io::open_output(target, env, append).map_err(ShellError::Redirect)
}
