//! `wc`: line, word and byte counts
//!
//! Each selected count is right-aligned in a 7-wide field followed by a
//! space, in the fixed order lines, words, bytes. Unreadable inputs print an
//! error line in place of their row and are left out of the total.

use crate::cmd::args::parse_flags;
use crate::cmd::io::{inputs_or_stdin, read_input};
use crate::cmd::{Application, Flow};
use crate::error::{ForApp, Result};
use crate::shell::env::Environment;
use std::io::{Read, Write};
use ushell_text::Counts;

const NAME: &str = "wc";

/// Which columns to print
#[derive(Debug, Clone, Copy)]
struct Columns {
    lines: bool,
    words: bool,
    bytes: bool,
}

impl Columns {
    fn render(&self, counts: &Counts, label: &str) -> String {
        let mut row = String::new();
        for (selected, n) in [
            (self.lines, counts.lines),
            (self.words, counts.words),
            (self.bytes, counts.bytes),
        ] {
            if selected {
                row.push_str(&format!("{:>7} ", n));
            }
        }
        row.push_str(label);
        row.trim_end().to_string()
    }
}

pub struct WcApplication;

impl Application for WcApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "wc [-c] [-l] [-w] [FILE]..."
    }

    fn run(
        &self,
        args: &[String],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "clw").for_app(NAME)?;
        let any = parsed.has_flag('c') || parsed.has_flag('l') || parsed.has_flag('w');
        let columns = Columns {
            lines: !any || parsed.has_flag('l'),
            words: !any || parsed.has_flag('w'),
            bytes: !any || parsed.has_flag('c'),
        };

        let explicit = !parsed.operands.is_empty();
        let inputs = inputs_or_stdin(parsed.operands);
        let mut total = Counts::default();

        for operand in &inputs {
            match read_input(operand, stdin, env) {
                Ok(content) => {
                    let counts = Counts::of(&content);
                    total += counts;
                    // bare stdin gets no label
                    let label = if explicit { operand.as_str() } else { "" };
                    writeln!(stdout, "{}", columns.render(&counts, label)).for_app(NAME)?;
                }
                Err(kind) => writeln!(stdout, "{}: {}", NAME, kind).for_app(NAME)?,
            }
        }

        if inputs.len() > 1 {
            writeln!(stdout, "{}", columns.render(&total, "total")).for_app(NAME)?;
        }
        Ok(Flow::Continue)
    }
}
