use crate::cmd::args::parse_flags;
use crate::cmd::io::{open_output, read_stdin};
use crate::cmd::{Application, Flow};
use crate::error::{ErrorKind, ForApp, Result};
use crate::shell::env::Environment;
use log::warn;
use std::io::{Read, Write};

const NAME: &str = "tee";

pub struct TeeApplication;

impl Application for TeeApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "tee [-a] [FILE]..."
    }

    fn run(
        &self,
        args: &[String],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "a").for_app(NAME)?;
        let append = parsed.has_flag('a');
        let content = read_stdin(stdin).for_app(NAME)?;

        stdout.write_all(&content).for_app(NAME)?;

        let mut failures = Vec::new();
        for operand in &parsed.operands {
            let written = open_output(operand, env, append).and_then(|mut file| {
                file.write_all(&content)
                    .map_err(|e| ErrorKind::from_io(operand.as_str(), e))
            });
            if let Err(kind) = written {
                warn!("tee: {}", kind);
                failures.push(kind);
            }
        }
        for kind in failures {
            writeln!(stdout, "{}: {}", NAME, kind).for_app(NAME)?;
        }

        Ok(Flow::Continue)
    }
}
