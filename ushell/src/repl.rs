use log::debug;
use miette::Result;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::PathBuf;

use crate::cmd::Flow;
use crate::shell::Shell;

/// Entries kept in the history file
const HISTORY_CAPACITY: usize = 1000;

/// Read-Eval-Print Loop for ushell
pub struct Repl {
    shell: Shell,
    line_editor: Reedline,
}

impl Repl {
    /// Create a REPL around `shell`, recording history in `history_path`
    /// when one is given
    pub fn new(shell: Shell, history_path: Option<PathBuf>) -> Result<Self> {
        let mut line_editor = Reedline::create();
        if let Some(path) = history_path {
            debug!("history file {}", path.display());
            let history = Box::new(
                FileBackedHistory::with_file(HISTORY_CAPACITY, path)
                    .map_err(|e| miette::miette!("Failed to create history: {}", e))?,
            );
            line_editor = line_editor.with_history(history);
        }

        Ok(Self { shell, line_editor })
    }

    /// Default history location, `~/.ushell-history`
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ushell-history"))
    }

    /// Run the REPL loop until `exit` or Ctrl+D
    pub fn run(&mut self) -> Result<()> {
        loop {
            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(self.shell.env().current_dir().display().to_string()),
                DefaultPromptSegment::Empty,
            );

            match self.line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let flow = self.shell.execute(
                        line,
                        &mut io::stdin().lock(),
                        &mut io::stdout().lock(),
                        &mut io::stderr().lock(),
                    );
                    match flow {
                        Ok(Flow::Exit) => break,
                        Ok(Flow::Continue) => {}
                        Err(e) => eprintln!("{}", e),
                    }
                }
                Ok(Signal::CtrlD) => {
                    println!();
                    break;
                }
                Ok(Signal::CtrlC) => continue,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    continue;
                }
            }
        }

        Ok(())
    }
}
