//! Flag parsing shared by every application
//!
//! Applications accept single-letter flags only, combinable as in `-cd` and
//! allowed anywhere among the operands. `--` ends flag parsing and a lone `-`
//! is an operand naming stdin.

use std::collections::HashSet;

use crate::error::ErrorKind;

/// Parsed arguments ready for command consumption
#[derive(Debug, Clone, Default)]
pub struct ParsedArgs {
    flags: HashSet<char>,
    /// Non-flag arguments in their original order
    pub operands: Vec<String>,
}

impl ParsedArgs {
    /// Check if a flag is set
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }
}

/// Split `args` into the flags listed in `allowed` and operands
pub fn parse_flags(args: &[String], allowed: &str) -> Result<ParsedArgs, ErrorKind> {
    let mut parsed = ParsedArgs::default();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        if arg == "--" {
            parsed.operands.extend(args.cloned());
            break;
        }

        match arg.strip_prefix('-') {
            Some(letters) if !letters.is_empty() => {
                for flag in letters.chars() {
                    if !allowed.contains(flag) {
                        return Err(ErrorKind::IllegalOption(flag));
                    }
                    parsed.flags.insert(flag);
                }
            }
            _ => parsed.operands.push(arg.clone()),
        }
    }

    Ok(parsed)
}
