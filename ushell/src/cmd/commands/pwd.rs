use crate::cmd::args::parse_flags;
use crate::cmd::{Application, Flow};
use crate::error::{ErrorKind, ForApp, Result, ShellError};
use crate::shell::env::Environment;
use std::io::{Read, Write};

const NAME: &str = "pwd";

pub struct PwdApplication;

impl Application for PwdApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn run(
        &self,
        args: &[String],
        _stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "").for_app(NAME)?;
        if !parsed.operands.is_empty() {
            return Err(ShellError::app(NAME, ErrorKind::TooManyArguments));
        }

        writeln!(stdout, "{}", env.current_dir().display()).for_app(NAME)?;
        Ok(Flow::Continue)
    }
}
