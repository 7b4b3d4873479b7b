use crate::cmd::args::parse_flags;
use crate::cmd::io::{inputs_or_stdin, read_input};
use crate::cmd::{Application, Flow};
use crate::error::{ForApp, Result};
use crate::shell::env::Environment;
use log::warn;
use std::io::{Read, Write};
use ushell_text::split_byte_lines;

const NAME: &str = "cat";

pub struct CatApplication;

impl Application for CatApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "cat [-n] [FILE]..."
    }

    fn run(
        &self,
        args: &[String],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "n").for_app(NAME)?;
        let number = parsed.has_flag('n');
        let mut line_no = 0usize;

        for operand in inputs_or_stdin(parsed.operands) {
            let content = match read_input(&operand, stdin, env) {
                Ok(content) => content,
                Err(kind) => {
                    warn!("cat: skipping {}: {}", operand, kind);
                    writeln!(stdout, "{}: {}", NAME, kind).for_app(NAME)?;
                    continue;
                }
            };

            if !number {
                stdout.write_all(&content).for_app(NAME)?;
                continue;
            }
            for line in split_byte_lines(&content) {
                line_no += 1;
                write!(stdout, "{} ", line_no).for_app(NAME)?;
                stdout.write_all(line).for_app(NAME)?;
                stdout.write_all(b"\n").for_app(NAME)?;
            }
        }

        Ok(Flow::Continue)
    }
}
