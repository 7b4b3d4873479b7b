//! ushell - a small Unix-like shell
//!
//! This library provides the built-in applications, the command-line parser
//! with glob expansion and I/O redirection, and the shell driver behind the
//! `ushell` REPL.

pub mod cmd;
pub mod error;
pub mod logging;
pub mod parser;
pub mod repl;
pub mod shell;

pub use cmd::{Application, ApplicationRegistry, Flow};
pub use error::{ErrorKind, ShellError};
pub use repl::Repl;
pub use shell::env::Environment;
pub use shell::Shell;
