use crate::cmd::args::parse_flags;
use crate::cmd::io::{inputs_or_stdin, read_input_string, STDIN_OPERAND};
use crate::cmd::{Application, Flow};
use crate::error::{ErrorKind, ForApp, Result, ShellError};
use crate::shell::env::Environment;
use log::debug;
use regex::Regex;
use std::io::{Read, Write};
use ushell_text::split_lines;

const NAME: &str = "grep";

/// Name printed for stdin when output lines are prefixed
const STDIN_LABEL: &str = "(standard input)";

pub struct GrepApplication;

impl Application for GrepApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "grep [-i] [-c] [-H] PATTERN [FILE]..."
    }

    fn run(
        &self,
        args: &[String],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "icH").for_app(NAME)?;
        let ignore_case = parsed.has_flag('i');
        let with_names = parsed.has_flag('H');
        let count_only = parsed.has_flag('c');

        let mut operands = parsed.operands.into_iter();
        let pattern = operands
            .next()
            .ok_or_else(|| ShellError::app(NAME, ErrorKind::MissingPattern))?;
        let regex = compile(&pattern, ignore_case)?;

        let inputs = inputs_or_stdin(operands.collect());
        let prefix_names = with_names || inputs.len() > 1;

        for operand in &inputs {
            let content = match read_input_string(operand, stdin, env) {
                Ok(content) => content,
                Err(kind) => {
                    writeln!(stdout, "{}: {}", NAME, kind).for_app(NAME)?;
                    continue;
                }
            };

            let label = if operand == STDIN_OPERAND {
                STDIN_LABEL
            } else {
                operand.as_str()
            };
            let matches: Vec<&str> = split_lines(&content)
                .into_iter()
                .filter(|line| regex.is_match(line))
                .collect();
            debug!("grep: {} matching lines in {}", matches.len(), label);

            if count_only {
                write_prefixed(stdout, prefix_names, label, &matches.len().to_string())?;
                continue;
            }
            for line in matches {
                write_prefixed(stdout, prefix_names, label, line)?;
            }
        }

        Ok(Flow::Continue)
    }
}

/// Build the matcher before any input is read, so a bad pattern fails alone
fn compile(pattern: &str, ignore_case: bool) -> Result<Regex> {
    if pattern.is_empty() {
        return Err(ShellError::app(NAME, ErrorKind::EmptyPattern));
    }
    let source = if ignore_case {
        format!("(?i){}", pattern)
    } else {
        pattern.to_string()
    };
    Regex::new(&source).for_app(NAME)
}

fn write_prefixed(out: &mut dyn Write, prefix: bool, label: &str, text: &str) -> Result<()> {
    if prefix {
        writeln!(out, "{}:{}", label, text).for_app(NAME)
    } else {
        writeln!(out, "{}", text).for_app(NAME)
    }
}
