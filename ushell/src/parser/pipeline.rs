//! Sequence and pipeline splitting
//!
//! Splits a command line on `;` into sequences and each sequence on `|` into
//! stages, respecting quotes and backslash escapes. The stages keep their
//! quoting; [`super::quote::tokenize`] handles it later.

use crate::error::{Result, ShellError};

/// One `;`-separated command: the stages of its pipeline, in order
pub type Pipeline = Vec<String>;

/// Parse a command line into pipelines
pub fn parse_command_line(input: &str) -> Result<Vec<Pipeline>> {
    let mut pipelines = Vec::new();
    let mut stages = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' if !in_single_quote => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '\'' if !in_double_quote => {
                in_single_quote = !in_single_quote;
                current.push(c);
            }
            '"' if !in_single_quote => {
                in_double_quote = !in_double_quote;
                current.push(c);
            }
            '|' if !in_single_quote && !in_double_quote => {
                stages.push(std::mem::take(&mut current));
            }
            ';' if !in_single_quote && !in_double_quote => {
                stages.push(std::mem::take(&mut current));
                finish_pipeline(&mut pipelines, std::mem::take(&mut stages))?;
            }
            _ => current.push(c),
        }
    }

    if in_single_quote || in_double_quote {
        return Err(ShellError::Syntax("unterminated quote".to_string()));
    }

    stages.push(current);
    finish_pipeline(&mut pipelines, stages)?;

    Ok(pipelines)
}

fn finish_pipeline(pipelines: &mut Vec<Pipeline>, stages: Vec<String>) -> Result<()> {
    let stages: Pipeline = stages.into_iter().map(|s| s.trim().to_string()).collect();

    // empty command between separators, e.g. a trailing `;`
    if stages.len() == 1 && stages[0].is_empty() {
        return Ok(());
    }
    if stages.iter().any(String::is_empty) {
        return Err(ShellError::Syntax("empty command in pipeline".to_string()));
    }

    pipelines.push(stages);
    Ok(())
}
