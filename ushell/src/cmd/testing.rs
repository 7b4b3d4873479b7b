//! Fixtures for application tests

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::cmd::{Application, Flow};
use crate::error::Result;
use crate::shell::env::Environment;

/// A scratch directory with a session rooted in it
pub(crate) struct Fixture {
    _dir: TempDir,
    root: PathBuf,
    pub env: Environment,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        Self {
            _dir: dir,
            env: Environment::new(root.clone()),
            root,
        }
    }

    /// Directory the session started in
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn write(&self, name: &str, contents: &str) {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    pub fn mkdir(&self, name: &str) {
        fs::create_dir_all(self.path(name)).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Run `application` and return its stdout
    pub fn run(&mut self, application: &dyn Application, args: &[&str], stdin: &str) -> Result<String> {
        self.run_flow(application, args, stdin).map(|(_, out)| out)
    }

    pub fn run_flow(
        &mut self,
        application: &dyn Application,
        args: &[&str],
        stdin: &str,
    ) -> Result<(Flow, String)> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut stdin = Cursor::new(stdin.as_bytes().to_vec());
        let mut stdout = Vec::new();
        let flow = application.run(&args, &mut stdin, &mut stdout, &mut self.env)?;
        Ok((flow, String::from_utf8_lossy(&stdout).into_owned()))
    }
}
