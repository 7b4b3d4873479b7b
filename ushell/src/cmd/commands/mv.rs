//! `mv`: rename one path, or move several into a directory
//!
//! With `-n` an existing destination is left untouched and the source stays
//! where it is. Missing sources are collected and reported once every other
//! source has been moved.

use crate::cmd::args::parse_flags;
use crate::cmd::{Application, Flow};
use crate::error::{ErrorKind, ForApp, Result, ShellError};
use crate::shell::env::Environment;
use log::debug;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

const NAME: &str = "mv";

pub struct MvApplication;

impl Application for MvApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "mv [-n] SRC DEST | mv [-n] SRC... DIR"
    }

    fn run(
        &self,
        args: &[String],
        _stdin: &mut dyn Read,
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "n").for_app(NAME)?;
        let no_clobber = parsed.has_flag('n');
        let Some((dest, sources)) = parsed.operands.split_last() else {
            return Err(ShellError::app(NAME, ErrorKind::InsufficientArguments));
        };
        if sources.is_empty() {
            return Err(ShellError::app(NAME, ErrorKind::InsufficientArguments));
        }

        let dest_path = env.resolve(dest);
        let into_dir = dest_path.is_dir();
        if sources.len() > 1 && !into_dir {
            return Err(ShellError::app(NAME, ErrorKind::NotDirectory(dest.clone())));
        }

        let mut errors = Vec::new();
        for source in sources {
            let source_path = env.resolve(source);
            if fs::symlink_metadata(&source_path).is_err() {
                errors.push(ErrorKind::NotFound(source.clone()));
                continue;
            }

            let target = if into_dir {
                match source_path.file_name() {
                    Some(name) => dest_path.join(name),
                    None => {
                        errors.push(ErrorKind::Usage(format!("{}: cannot move", source)));
                        continue;
                    }
                }
            } else {
                dest_path.clone()
            };

            if let Err(kind) = move_path(&source_path, &target, source, no_clobber) {
                errors.push(kind);
            }
        }

        ShellError::batch(NAME, errors)?;
        Ok(Flow::Continue)
    }
}

fn move_path(source: &Path, target: &Path, shown: &str, no_clobber: bool) -> std::result::Result<(), ErrorKind> {
    if no_clobber && target.exists() {
        debug!("mv: keeping existing {}", target.display());
        return Ok(());
    }
    if target.is_dir() && !source.is_dir() {
        return Err(ErrorKind::IsDirectory(target.display().to_string()));
    }
    debug!("mv {} -> {}", source.display(), target.display());
    fs::rename(source, target).map_err(|e| ErrorKind::from_io(shown, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::testing::Fixture;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mv_rename() {
        let mut fx = Fixture::new();
        fx.write("a.txt", "content");
        fx.run(&MvApplication, &["a.txt", "b.txt"], "").unwrap();
        assert!(!fx.exists("a.txt"));
        assert_eq!(fx.read("b.txt"), "content");
    }

    #[test]
    fn test_mv_overwrites_by_default() {
        let mut fx = Fixture::new();
        fx.write("a.txt", "new");
        fx.write("b.txt", "old");
        fx.run(&MvApplication, &["a.txt", "b.txt"], "").unwrap();
        assert_eq!(fx.read("b.txt"), "new");
    }

    #[test]
    fn test_mv_no_clobber_keeps_destination() {
        let mut fx = Fixture::new();
        fx.write("a.txt", "new");
        fx.write("b.txt", "old");
        fx.run(&MvApplication, &["-n", "a.txt", "b.txt"], "").unwrap();
        assert_eq!(fx.read("a.txt"), "new");
        assert_eq!(fx.read("b.txt"), "old");
    }

    #[test]
    fn test_mv_into_directory() {
        let mut fx = Fixture::new();
        fx.write("a.txt", "a");
        fx.write("b.txt", "b");
        fx.mkdir("dir");
        fx.run(&MvApplication, &["a.txt", "b.txt", "dir"], "").unwrap();
        assert_eq!(fx.read("dir/a.txt"), "a");
        assert_eq!(fx.read("dir/b.txt"), "b");
        assert!(!fx.exists("a.txt"));
    }

    #[test]
    fn test_mv_several_sources_need_directory() {
        let mut fx = Fixture::new();
        fx.write("a.txt", "a");
        fx.write("b.txt", "b");
        let err = fx.run(&MvApplication, &["a.txt", "b.txt", "c.txt"], "").unwrap_err();
        assert_eq!(err.to_string(), "mv: c.txt: Not a directory");
        assert!(fx.exists("a.txt"));
    }

    #[test]
    fn test_mv_missing_sources_are_collected() {
        let mut fx = Fixture::new();
        fx.write("a.txt", "a");
        fx.mkdir("dir");
        let err = fx.run(&MvApplication, &["x", "a.txt", "y", "dir"], "").unwrap_err();
        assert_eq!(
            err.to_string(),
            "mv: x: No such file or directory\nmv: y: No such file or directory"
        );
        assert!(fx.exists("dir/a.txt"));
    }

    #[test]
    fn test_mv_needs_two_operands() {
        let mut fx = Fixture::new();
        let err = fx.run(&MvApplication, &["a.txt"], "").unwrap_err();
        assert_eq!(err.to_string(), "mv: insufficient arguments");
    }
}
