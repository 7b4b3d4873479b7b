use crate::cmd::{Application, Flow};
use crate::error::{ForApp, Result};
use crate::shell::env::Environment;
use std::io::{Read, Write};

const NAME: &str = "echo";

pub struct EchoApplication;

impl Application for EchoApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "echo [ARG]..."
    }

    fn run(
        &self,
        args: &[String],
        _stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Flow> {
        writeln!(stdout, "{}", args.join(" ")).for_app(NAME)?;
        Ok(Flow::Continue)
    }
}
