use crate::cmd::args::parse_flags;
use crate::cmd::io::{inputs_or_stdin, read_input_string, write_lines};
use crate::cmd::{Application, Flow};
use crate::error::{ForApp, Result};
use crate::shell::env::Environment;
use std::io::{Read, Write};
use ushell_text::{merge_parallel, merge_serial, split_lines};

const NAME: &str = "paste";

pub struct PasteApplication;

impl Application for PasteApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "paste [-s] [FILE]..."
    }

    fn run(
        &self,
        args: &[String],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "s").for_app(NAME)?;
        let serial = parsed.has_flag('s');

        // every source is read up front; an unreadable one aborts the merge
        let mut contents = Vec::new();
        for operand in inputs_or_stdin(parsed.operands) {
            contents.push(read_input_string(&operand, stdin, env).for_app(NAME)?);
        }
        let sources: Vec<Vec<&str>> = contents.iter().map(|c| split_lines(c)).collect();

        let rows = if serial {
            merge_serial(&sources)
        } else {
            merge_parallel(&sources)
        };
        write_lines(stdout, &rows).for_app(NAME)?;
        Ok(Flow::Continue)
    }
}
