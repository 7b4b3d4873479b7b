//! Error types for ushell
//!
//! Every application reports failures as a [`ShellError`] carrying its own
//! name, so the rendered message always reads `<app>: <message>`. The
//! category of the failure lives in [`ErrorKind`], which the applications
//! also use on their own when a per-item failure is printed inline instead of
//! aborting the command.

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Alias for results of shell and application operations
pub type Result<T> = std::result::Result<T, ShellError>;

/// What went wrong, independent of which application hit it
#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("illegal option -- {0}")]
    IllegalOption(char),

    #[error("insufficient arguments")]
    InsufficientArguments,

    #[error("too many arguments")]
    TooManyArguments,

    #[error("{0}: No such file or directory")]
    NotFound(String),

    #[error("{0}: Is a directory")]
    IsDirectory(String),

    #[error("{0}: Not a directory")]
    NotDirectory(String),

    #[error("{0}: Permission denied")]
    PermissionDenied(String),

    #[error("{0}: Directory not empty")]
    NotEmpty(String),

    #[error("{0}: File exists")]
    AlreadyExists(String),

    #[error(transparent)]
    InvalidRange(#[from] ushell_text::RangeError),

    #[error("no regular expression supplied")]
    MissingPattern,

    #[error("empty pattern")]
    EmptyPattern,

    #[error("invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Flag combinations or operands that make no sense together
    #[error("{0}")]
    Usage(String),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Failure on one of the standard streams
    #[error(transparent)]
    Stream(#[from] io::Error),
}

impl ErrorKind {
    /// Map an I/O failure on `path` onto the matching category
    pub fn from_io(path: impl Into<String>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound(path),
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied(path),
            io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists(path),
            _ => ErrorKind::Io { path, source: err },
        }
    }
}

/// Top-level error returned by applications and the shell driver
#[derive(Error, Diagnostic, Debug)]
pub enum ShellError {
    /// A single failure of one application
    #[error("{app}: {kind}")]
    #[diagnostic(code(ushell::app))]
    App { app: &'static str, kind: ErrorKind },

    /// Per-item failures collected over a whole batch (mv, rm, mkdir)
    #[error("{}", render_batch(.app, .errors))]
    #[diagnostic(code(ushell::batch))]
    Batch {
        app: &'static str,
        errors: Vec<ErrorKind>,
    },

    #[error("shell: {0}")]
    #[diagnostic(
        code(ushell::syntax),
        help("check quoting, pipes and redirection operators")
    )]
    Syntax(String),

    #[error("shell: {0}: command not found")]
    #[diagnostic(code(ushell::unknown_command), help("type `help` to list the built-in applications"))]
    UnknownCommand(String),

    #[error("shell: {0}")]
    #[diagnostic(code(ushell::redirect))]
    Redirect(ErrorKind),
}

impl ShellError {
    pub fn app(app: &'static str, kind: ErrorKind) -> Self {
        ShellError::App { app, kind }
    }

    /// `Ok` when nothing failed, otherwise every collected error at once
    pub fn batch(app: &'static str, errors: Vec<ErrorKind>) -> Result<()> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ShellError::Batch { app, errors })
        }
    }
}

fn render_batch(app: &str, errors: &[ErrorKind]) -> String {
    errors
        .iter()
        .map(|kind| format!("{}: {}", app, kind))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Attach an application name to a lower-level failure, in the spirit of
/// `miette::IntoDiagnostic`
pub trait ForApp<T> {
    fn for_app(self, app: &'static str) -> Result<T>;
}

impl<T, E: Into<ErrorKind>> ForApp<T> for std::result::Result<T, E> {
    fn for_app(self, app: &'static str) -> Result<T> {
        self.map_err(|e| ShellError::app(app, e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_is_prefixed() {
        let err = ShellError::app("cat", ErrorKind::NotFound("a.txt".into()));
        assert_eq!(err.to_string(), "cat: a.txt: No such file or directory");
    }

    #[test]
    fn test_illegal_option_message() {
        let err = ShellError::app("sort", ErrorKind::IllegalOption('z'));
        assert_eq!(err.to_string(), "sort: illegal option -- z");
    }

    #[test]
    fn test_batch_renders_every_item() {
        let err = ShellError::batch(
            "rm",
            vec![
                ErrorKind::NotFound("a".into()),
                ErrorKind::IsDirectory("b".into()),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "rm: a: No such file or directory\nrm: b: Is a directory"
        );
    }

    #[test]
    fn test_empty_batch_is_ok() {
        assert!(ShellError::batch("mv", Vec::new()).is_ok());
    }

    #[test]
    fn test_from_io_maps_kinds() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        assert!(matches!(ErrorKind::from_io("x", err), ErrorKind::NotFound(p) if p == "x"));

        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(ErrorKind::from_io("x", err), ErrorKind::PermissionDenied(_)));

        let err = io::Error::new(io::ErrorKind::Other, "boom");
        assert_eq!(ErrorKind::from_io("x", err).to_string(), "x: boom");
    }

    #[test]
    fn test_for_app_wraps_io() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let err = result.for_app("tee").unwrap_err();
        assert_eq!(err.to_string(), "tee: pipe closed");
    }
}
