//! The command-line driver
//!
//! A [`Shell`] owns the session [`Environment`] and the application registry.
//! It runs one line at a time: `;` sequences in order, the stages of each `|`
//! pipeline one after another with every stage's output buffered as the next
//! stage's input.

use log::{debug, warn};
use std::io::{Cursor, Read, Write};

use crate::cmd::{ApplicationRegistry, Flow};
use crate::error::{ForApp, Result, ShellError};
use crate::parser::{glob, parse_command_line, tokenize, IoRedirection};

pub mod env;

use env::Environment;

/// Name of the shell-level command listing the applications
const HELP: &str = "help";

/// Shell state and context
pub struct Shell {
    env: Environment,
    registry: ApplicationRegistry,
}

impl Shell {
    /// Create a shell in the process working directory with every built-in
    pub fn new() -> Self {
        Self::with_env(Environment::from_process())
    }

    pub fn with_env(env: Environment) -> Self {
        Self {
            env,
            registry: ApplicationRegistry::with_builtins(),
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn registry(&self) -> &ApplicationRegistry {
        &self.registry
    }

    /// Run a command line
    ///
    /// A line that does not parse is returned as an error and nothing runs.
    /// A failing command has its error written to `stderr` and the rest of the
    /// sequence still runs. Stops early with [`Flow::Exit`] once `exit` runs.
    pub fn execute(
        &mut self,
        line: &str,
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Flow> {
        let pipelines = parse_command_line(line)?;

        for stages in &pipelines {
            match self.run_pipeline(stages, stdin, stdout) {
                Ok(Flow::Exit) => return Ok(Flow::Exit),
                Ok(Flow::Continue) => {}
                Err(err) => {
                    warn!("command failed: {}", err);
                    // a closed stderr leaves nowhere to report to
                    let _ = writeln!(stderr, "{}", err);
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn run_pipeline(
        &mut self,
        stages: &[String],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
    ) -> Result<Flow> {
        let mut piped: Option<Vec<u8>> = None;

        for (i, stage) in stages.iter().enumerate() {
            let last = i + 1 == stages.len();
            let mut buffer = Vec::new();
            let flow = {
                let out: &mut dyn Write = if last { &mut *stdout } else { &mut buffer };
                match piped.take() {
                    Some(bytes) => self.run_stage(stage, &mut Cursor::new(bytes), out)?,
                    None => self.run_stage(stage, &mut *stdin, out)?,
                }
            };
            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
            piped = Some(buffer);
        }

        Ok(Flow::Continue)
    }

    fn run_stage(
        &mut self,
        stage: &str,
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
    ) -> Result<Flow> {
        let tokens = tokenize(stage)?;
        let IoRedirection {
            args,
            mut input,
            mut output,
        } = IoRedirection::extract(tokens, &self.env)?;

        let mut args = glob::expand_words(args, &self.env).into_iter();
        let Some(name) = args.next() else {
            return Err(ShellError::Syntax("missing command".to_string()));
        };
        let args: Vec<String> = args.collect();

        let stdin: &mut dyn Read = match input.as_mut() {
            Some(file) => file,
            None => stdin,
        };
        let stdout: &mut dyn Write = match output.as_mut() {
            Some(file) => file,
            None => stdout,
        };

        if name == HELP {
            return self.help(stdout);
        }

        let application = self
            .registry
            .get(&name)
            .ok_or_else(|| ShellError::UnknownCommand(name.clone()))?;
        debug!("run {} {:?}", name, args);
        application.run(&args, stdin, stdout, &mut self.env)
    }

    fn help(&self, stdout: &mut dyn Write) -> Result<Flow> {
        writeln!(stdout, "{}", self.registry.usages().join("\n")).for_app(HELP)?;
        Ok(Flow::Continue)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    struct Session {
        _dir: tempfile::TempDir,
        shell: Shell,
    }

    impl Session {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let root = dir.path().canonicalize().unwrap();
            Self {
                _dir: dir,
                shell: Shell::with_env(Environment::new(root)),
            }
        }

        /// Run `line`, returning (flow, stdout, stderr)
        fn run(&mut self, line: &str) -> (Flow, String, String) {
            let mut stdin = Cursor::new(Vec::new());
            let mut stdout = Vec::new();
            let mut stderr = Vec::new();
            let flow = self
                .shell
                .execute(line, &mut stdin, &mut stdout, &mut stderr)
                .unwrap();
            (
                flow,
                String::from_utf8(stdout).unwrap(),
                String::from_utf8(stderr).unwrap(),
            )
        }

        fn out(&mut self, line: &str) -> String {
            let (_, out, err) = self.run(line);
            assert_eq!(err, "");
            out
        }
    }

    #[test]
    fn test_single_command() {
        let mut session = Session::new();
        assert_eq!(session.out("echo hello world"), "hello world\n");
    }

    #[test]
    fn test_pipeline_passes_output_along() {
        let mut session = Session::new();
        assert_eq!(session.out("echo b a c | cut -c 1 | wc -l"), "      1\n");
    }

    #[test]
    fn test_sequence_keeps_going_after_failure() {
        let mut session = Session::new();
        let (flow, out, err) = session.run("cat missing.txt; echo after; nosuch");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "cat: missing.txt: No such file or directory\nafter\n");
        assert_eq!(err, "shell: nosuch: command not found\n");
    }

    #[test]
    fn test_exit_stops_the_line() {
        let mut session = Session::new();
        let (flow, out, _) = session.run("echo before; exit; echo after");
        assert_eq!(flow, Flow::Exit);
        assert_eq!(out, "before\n");
    }

    #[test]
    fn test_redirection_and_cd() {
        let mut session = Session::new();
        session.out("mkdir sub; cd sub; echo inside > note.txt");
        let root = session.shell.env().previous_dir().unwrap().to_path_buf();
        assert_eq!(fs::read_to_string(root.join("sub/note.txt")).unwrap(), "inside\n");
        assert_eq!(session.out("cat < note.txt"), "inside\n");
    }

    #[test]
    fn test_parse_error_runs_nothing() {
        let mut session = Session::new();
        let mut stdout = Vec::new();
        let result = session.shell.execute(
            "echo hi; echo 'open",
            &mut Cursor::new(Vec::new()),
            &mut stdout,
            &mut Vec::new(),
        );
        assert!(matches!(result, Err(ShellError::Syntax(_))));
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_redirection_only_is_an_error() {
        let mut session = Session::new();
        let (_, _, err) = session.run("> out.txt");
        assert_eq!(err, "shell: missing command\n");
    }

    #[test]
    fn test_help_lists_applications() {
        let mut session = Session::new();
        let out = session.out("help");
        assert!(out.lines().any(|line| line.starts_with("cat ")));
        assert_eq!(out.lines().count(), session.shell.registry().names().len());
    }
}
