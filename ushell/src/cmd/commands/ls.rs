//! `ls`: one name per line, hidden entries skipped
//!
//! Several operands or `-R` put every directory under a `<path>:` header,
//! with a blank line between blocks. Recursion is depth-first, each
//! subdirectory listed after its parent's block.

use crate::cmd::args::parse_flags;
use crate::cmd::{Application, Flow};
use crate::error::{ErrorKind, ForApp, Result};
use crate::shell::env::Environment;
use log::{debug, warn};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

const NAME: &str = "ls";

pub struct LsApplication;

impl Application for LsApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "ls [-R] [-X] [PATH]..."
    }

    fn run(
        &self,
        args: &[String],
        _stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "RX").for_app(NAME)?;
        let recursive = parsed.has_flag('R');
        let by_extension = parsed.has_flag('X');
        let operands = if parsed.operands.is_empty() {
            vec![".".to_string()]
        } else {
            parsed.operands
        };

        let mut listing = Listing {
            out: stdout,
            recursive,
            by_extension,
            headers: recursive || operands.len() > 1,
            printed: false,
        };

        for operand in &operands {
            let path = env.resolve(operand);
            if !path.exists() {
                listing.error(ErrorKind::NotFound(operand.clone())).for_app(NAME)?;
            } else if path.is_dir() {
                listing.directory(operand, &path).for_app(NAME)?;
            } else {
                writeln!(listing.out, "{}", operand).for_app(NAME)?;
                listing.printed = true;
            }
        }

        Ok(Flow::Continue)
    }
}

/// A visible directory entry
struct Entry {
    name: String,
    is_dir: bool,
}

struct Listing<'a> {
    out: &'a mut dyn Write,
    recursive: bool,
    by_extension: bool,
    headers: bool,
    printed: bool,
}

impl Listing<'_> {
    fn error(&mut self, kind: ErrorKind) -> io::Result<()> {
        warn!("ls: {}", kind);
        writeln!(self.out, "{}: {}", NAME, kind)?;
        self.printed = true;
        Ok(())
    }

    fn directory(&mut self, shown: &str, path: &Path) -> io::Result<()> {
        let entries = match self.entries(path) {
            Ok(entries) => entries,
            Err(err) => return self.error(ErrorKind::from_io(shown, err)),
        };
        debug!("ls: {} has {} visible entries", path.display(), entries.len());

        if self.printed {
            writeln!(self.out)?;
        }
        if self.headers {
            writeln!(self.out, "{}:", shown)?;
        }
        for entry in &entries {
            writeln!(self.out, "{}", entry.name)?;
        }
        self.printed = true;

        if self.recursive {
            for entry in entries.iter().filter(|e| e.is_dir) {
                let child = join_shown(shown, &entry.name);
                self.directory(&child, &path.join(&entry.name))?;
            }
        }
        Ok(())
    }

    fn entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let is_dir = entry.file_type()?.is_dir();
            entries.push(Entry { name, is_dir });
        }

        if self.by_extension {
            entries.sort_by(|a, b| {
                (extension(&a.name), &a.name).cmp(&(extension(&b.name), &b.name))
            });
        } else {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(entries)
    }
}

/// Text after the last dot; `None` sorts extensionless names first
fn extension(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(&name[idx + 1..]),
        _ => None,
    }
}

fn join_shown(parent: &str, name: &str) -> String {
    if parent.ends_with('/') {
        format!("{}{}", parent, name)
    } else {
        format!("{}/{}", parent, name)
    }
}
