use crate::cmd::args::parse_flags;
use crate::cmd::io::{open_output, read_input_string, write_lines, STDIN_OPERAND};
use crate::cmd::{Application, Flow};
use crate::error::{ErrorKind, ForApp, Result, ShellError};
use crate::shell::env::Environment;
use std::io::{Read, Write};
use ushell_text::{split_lines, uniq_lines, UniqMode};

const NAME: &str = "uniq";

pub struct UniqApplication;

impl Application for UniqApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "uniq [-c] [-d] [-D] [INPUT [OUTPUT]]"
    }

    fn run(
        &self,
        args: &[String],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "cdD").for_app(NAME)?;
        let count = parsed.has_flag('c');
        let mode = if parsed.has_flag('D') {
            UniqMode::DuplicatesAll
        } else if parsed.has_flag('d') {
            UniqMode::DuplicatesOnce
        } else {
            UniqMode::All
        };
        if count && mode == UniqMode::DuplicatesAll {
            let message = "printing all duplicated lines and repeat counts is meaningless";
            return Err(ShellError::app(NAME, ErrorKind::Usage(message.to_string())));
        }

        let (input, output) = match parsed.operands.as_slice() {
            [] => (STDIN_OPERAND, None),
            [input] => (input.as_str(), None),
            [input, output] => (input.as_str(), Some(output.as_str())),
            _ => return Err(ShellError::app(NAME, ErrorKind::TooManyArguments)),
        };

        let content = read_input_string(input, stdin, env).for_app(NAME)?;
        let lines = uniq_lines(&split_lines(&content), mode, count);

        match output {
            Some(path) => {
                let mut file = open_output(path, env, false).for_app(NAME)?;
                write_lines(&mut file, &lines).for_app(NAME)?;
            }
            None => write_lines(stdout, &lines).for_app(NAME)?,
        }
        Ok(Flow::Continue)
    }
}
