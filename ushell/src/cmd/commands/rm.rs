use crate::cmd::args::parse_flags;
use crate::cmd::{Application, Flow};
use crate::error::{ErrorKind, ForApp, Result, ShellError};
use crate::shell::env::Environment;
use log::debug;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

const NAME: &str = "rm";

pub struct RmApplication;

impl Application for RmApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "rm [-r] [-d] PATH..."
    }

    fn run(
        &self,
        args: &[String],
        _stdin: &mut dyn Read,
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "rd").for_app(NAME)?;
        if parsed.operands.is_empty() {
            return Err(ShellError::app(NAME, ErrorKind::InsufficientArguments));
        }
        let mode = if parsed.has_flag('r') {
            Mode::Recursive
        } else if parsed.has_flag('d') {
            Mode::EmptyDirs
        } else {
            Mode::FilesOnly
        };

        let errors: Vec<ErrorKind> = parsed
            .operands
            .iter()
            .filter_map(|operand| remove(operand, &env.resolve(operand), mode).err())
            .collect();

        ShellError::batch(NAME, errors)?;
        Ok(Flow::Continue)
    }
}

/// What kinds of directory `rm` may remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    FilesOnly,
    EmptyDirs,
    Recursive,
}

fn remove(operand: &str, path: &Path, mode: Mode) -> std::result::Result<(), ErrorKind> {
    if is_dot_entry(operand) {
        return Err(ErrorKind::Usage(format!(
            "\"{}\": refusing to remove '.' or '..'",
            operand
        )));
    }

    let metadata = fs::symlink_metadata(path).map_err(|e| ErrorKind::from_io(operand, e))?;
    let result = if !metadata.is_dir() {
        fs::remove_file(path)
    } else {
        match mode {
            Mode::FilesOnly => return Err(refuse_directory(operand, path)),
            Mode::EmptyDirs => fs::remove_dir(path),
            Mode::Recursive => fs::remove_dir_all(path),
        }
    };

    debug!("rm {} ({:?})", path.display(), mode);
    result.map_err(|e| match e.kind() {
        io::ErrorKind::DirectoryNotEmpty => ErrorKind::NotEmpty(operand.to_string()),
        _ => ErrorKind::from_io(operand, e),
    })
}

/// Error for a directory given without `-d` or `-r`, naming what blocks it
fn refuse_directory(operand: &str, path: &Path) -> ErrorKind {
    match fs::read_dir(path) {
        Ok(mut entries) => {
            if entries.next().is_some() {
                ErrorKind::NotEmpty(operand.to_string())
            } else {
                ErrorKind::IsDirectory(operand.to_string())
            }
        }
        Err(e) => ErrorKind::from_io(operand, e),
    }
}

/// `.` or `..` as the last segment, e.g. `dir/..`
fn is_dot_entry(operand: &str) -> bool {
    let last = operand.trim_end_matches('/').rsplit('/').next();
    matches!(last, Some(".") | Some(".."))
}
