//! Application execution module
//!
//! Defines the [`Application`] interface every built-in implements, plus the
//! argument parsing and stream helpers they share.

use std::io::{Read, Write};

use crate::error::Result;
use crate::shell::env::Environment;

pub mod args;
pub mod commands;
pub mod io;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use registry::ApplicationRegistry;

/// What the shell should do after an application returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Stop the enclosing shell loop
    Exit,
}

/// A built-in command
pub trait Application {
    /// Name the command is invoked by
    fn name(&self) -> &'static str;

    /// One-line synopsis, shown by `help`
    fn usage(&self) -> &'static str;

    /// Run with `args` (the command name excluded), reading `stdin` and
    /// writing `stdout`. Relative paths resolve against `env`.
    fn run(
        &self,
        args: &[String],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow>;
}
