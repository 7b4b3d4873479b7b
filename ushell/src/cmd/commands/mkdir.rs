use crate::cmd::args::parse_flags;
use crate::cmd::{Application, Flow};
use crate::error::{ErrorKind, ForApp, Result, ShellError};
use crate::shell::env::Environment;
use log::debug;
use std::fs;
use std::io::{Read, Write};

const NAME: &str = "mkdir";

pub struct MkdirApplication;

impl Application for MkdirApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "mkdir [-p] DIR..."
    }

    fn run(
        &self,
        args: &[String],
        _stdin: &mut dyn Read,
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "p").for_app(NAME)?;
        if parsed.operands.is_empty() {
            return Err(ShellError::app(NAME, ErrorKind::InsufficientArguments));
        }
        let parents = parsed.has_flag('p');

        let mut errors = Vec::new();
        for operand in &parsed.operands {
            let path = env.resolve(operand);
            let result = if parents {
                fs::create_dir_all(&path)
            } else {
                fs::create_dir(&path)
            };
            match result {
                Ok(()) => debug!("mkdir {}", path.display()),
                Err(err) => errors.push(ErrorKind::from_io(operand.as_str(), err)),
            }
        }

        ShellError::batch(NAME, errors)?;
        Ok(Flow::Continue)
    }
}
