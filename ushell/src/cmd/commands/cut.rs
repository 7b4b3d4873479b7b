use crate::cmd::args::parse_flags;
use crate::cmd::io::{inputs_or_stdin, read_input};
use crate::cmd::{Application, Flow};
use crate::error::{ErrorKind, ForApp, Result, ShellError};
use crate::shell::env::Environment;
use std::io::{Read, Write};
use ushell_text::{cut_bytes, cut_chars, parse_ranges, split_byte_lines, Range};

const NAME: &str = "cut";

/// Unit a range list counts in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Chars,
    Bytes,
}

pub struct CutApplication;

impl Application for CutApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "cut -c LIST | -b LIST [FILE]..."
    }

    fn run(
        &self,
        args: &[String],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "cb").for_app(NAME)?;
        let unit = match (parsed.has_flag('c'), parsed.has_flag('b')) {
            (true, false) => Unit::Chars,
            (false, true) => Unit::Bytes,
            (true, true) => return Err(usage("only one type of list may be specified")),
            (false, false) => {
                return Err(usage("you must specify a list of bytes or characters"))
            }
        };

        let mut operands = parsed.operands.into_iter();
        let list = operands
            .next()
            .ok_or_else(|| ShellError::app(NAME, ErrorKind::InsufficientArguments))?;
        let ranges = parse_ranges(&list).for_app(NAME)?;

        for operand in inputs_or_stdin(operands.collect()) {
            match read_input(&operand, stdin, env) {
                Ok(content) => cut_content(&content, &ranges, unit, stdout).for_app(NAME)?,
                Err(kind) => writeln!(stdout, "{}: {}", NAME, kind).for_app(NAME)?,
            }
        }

        Ok(Flow::Continue)
    }
}

fn usage(message: &str) -> ShellError {
    ShellError::app(NAME, ErrorKind::Usage(message.to_string()))
}

fn cut_content(
    content: &[u8],
    ranges: &[Range],
    unit: Unit,
    stdout: &mut dyn Write,
) -> std::io::Result<()> {
    for line in split_byte_lines(content) {
        match unit {
            Unit::Bytes => stdout.write_all(&cut_bytes(line, ranges))?,
            Unit::Chars => {
                let line = String::from_utf8_lossy(line);
                stdout.write_all(cut_chars(&line, ranges).as_bytes())?
            }
        }
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
