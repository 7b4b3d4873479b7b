//! Per-session working directory
//!
//! The shell never calls `std::env::set_current_dir`; applications resolve
//! relative paths against the [`Environment`] they are handed instead.

use std::path::{Path, PathBuf};

/// Session state shared by every application invocation
#[derive(Debug, Clone)]
pub struct Environment {
    current_dir: PathBuf,
    previous_dir: Option<PathBuf>,
}

impl Environment {
    /// Start a session in `dir`, which should be absolute
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: dir.into(),
            previous_dir: None,
        }
    }

    /// Start a session in the process working directory
    pub fn from_process() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/")))
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn previous_dir(&self) -> Option<&Path> {
        self.previous_dir.as_deref()
    }

    /// Switch to `dir`; the caller has already checked that it is an existing
    /// directory
    pub fn set_current_dir(&mut self, dir: PathBuf) {
        let previous = std::mem::replace(&mut self.current_dir, dir);
        self.previous_dir = Some(previous);
    }

    /// Resolve `path` against the current directory
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::from_process()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative() {
        let env = Environment::new("/test");
        assert_eq!(env.resolve("subdir"), Path::new("/test/subdir"));
    }

    #[test]
    fn test_resolve_absolute() {
        let env = Environment::new("/test");
        assert_eq!(env.resolve("/absolute/path"), Path::new("/absolute/path"));
    }

    #[test]
    fn test_set_current_dir_tracks_previous() {
        let mut env = Environment::new("/a");
        assert!(env.previous_dir().is_none());

        env.set_current_dir(PathBuf::from("/b"));
        assert_eq!(env.current_dir(), Path::new("/b"));
        assert_eq!(env.previous_dir(), Some(Path::new("/a")));
    }

    #[test]
    fn test_from_process_is_absolute() {
        assert!(Environment::from_process().current_dir().is_absolute());
    }
}
