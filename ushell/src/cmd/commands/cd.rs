use crate::cmd::args::parse_flags;
use crate::cmd::{Application, Flow};
use crate::error::{ErrorKind, ForApp, Result, ShellError};
use crate::shell::env::Environment;
use log::debug;
use std::io::{Read, Write};
use std::path::PathBuf;

const NAME: &str = "cd";

pub struct CdApplication;

impl Application for CdApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "cd [DIR | -]"
    }

    fn run(
        &self,
        args: &[String],
        _stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "").for_app(NAME)?;
        if parsed.operands.len() > 1 {
            return Err(ShellError::app(NAME, ErrorKind::TooManyArguments));
        }

        let operand = parsed.operands.first().map(String::as_str);
        let back = operand == Some("-");
        let (target, shown) = match operand {
            None => (home_dir()?, "~".to_string()),
            Some("-") => {
                let previous = env
                    .previous_dir()
                    .ok_or_else(|| usage("OLDPWD not set"))?
                    .to_path_buf();
                let shown = previous.display().to_string();
                (previous, shown)
            }
            Some(path) => (expand_home(path, env)?, path.to_string()),
        };

        let canonical = target
            .canonicalize()
            .map_err(|e| ShellError::app(NAME, ErrorKind::from_io(shown.clone(), e)))?;
        if !canonical.is_dir() {
            return Err(ShellError::app(NAME, ErrorKind::NotDirectory(shown)));
        }

        debug!("cd {}", canonical.display());
        env.set_current_dir(canonical);
        // `cd -` names where it went, once it got there
        if back {
            writeln!(stdout, "{}", shown).for_app(NAME)?;
        }
        Ok(Flow::Continue)
    }
}

fn usage(message: &str) -> ShellError {
    ShellError::app(NAME, ErrorKind::Usage(message.to_string()))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| usage("HOME not set"))
}

/// Resolve `path`, expanding a leading `~` to the home directory
fn expand_home(path: &str, env: &Environment) -> Result<PathBuf> {
    if path == "~" {
        return home_dir();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }
    Ok(env.resolve(path))
}
