use crate::cmd::args::parse_flags;
use crate::cmd::io::{inputs_or_stdin, read_input_string, write_lines};
use crate::cmd::{Application, Flow};
use crate::error::{ForApp, Result};
use crate::shell::env::Environment;
use std::io::{Read, Write};
use ushell_text::{sort_lines, split_lines, SortOptions};

const NAME: &str = "sort";

pub struct SortApplication;

impl Application for SortApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "sort [-n] [-r] [-f] [FILE]..."
    }

    fn run(
        &self,
        args: &[String],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let parsed = parse_flags(args, "nrf").for_app(NAME)?;
        let options = SortOptions {
            numeric: parsed.has_flag('n'),
            fold_case: parsed.has_flag('f'),
            reverse: parsed.has_flag('r'),
        };

        let mut contents = Vec::new();
        for operand in inputs_or_stdin(parsed.operands) {
            contents.push(read_input_string(&operand, stdin, env).for_app(NAME)?);
        }
        let mut lines: Vec<&str> = contents.iter().flat_map(|c| split_lines(c)).collect();

        sort_lines(&mut lines, &options);
        write_lines(stdout, &lines).for_app(NAME)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::testing::Fixture;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sort_lexicographic() {
        let mut fx = Fixture::new();
        let out = fx.run(&SortApplication, &[], "pear\napple\nBanana\n").unwrap();
        assert_eq!(out, "Banana\napple\npear\n");
    }

    #[test]
    fn test_sort_numeric() {
        let mut fx = Fixture::new();
        let out = fx.run(&SortApplication, &["-n"], "10\n9\n100\nabc\n").unwrap();
        assert_eq!(out, "abc\n9\n10\n100\n");
    }

    #[test]
    fn test_sort_reverse() {
        let mut fx = Fixture::new();
        let out = fx.run(&SortApplication, &["-nr"], "1\n3\n2\n").unwrap();
        assert_eq!(out, "3\n2\n1\n");
    }

    #[test]
    fn test_sort_fold_case() {
        let mut fx = Fixture::new();
        let out = fx.run(&SortApplication, &["-f"], "b\nA\nC\n").unwrap();
        assert_eq!(out, "A\nb\nC\n");
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut fx = Fixture::new();
        let once = fx.run(&SortApplication, &[], "c\na\nb\na\n").unwrap();
        let twice = fx.run(&SortApplication, &[], &once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_merges_inputs() {
        let mut fx = Fixture::new();
        fx.write("a.txt", "b\nd\n");
        let out = fx.run(&SortApplication, &["a.txt", "-"], "c\na\n").unwrap();
        assert_eq!(out, "a\nb\nc\nd\n");
    }

    #[test]
    fn test_sort_missing_file() {
        let mut fx = Fixture::new();
        let err = fx.run(&SortApplication, &["nope"], "").unwrap_err();
        assert_eq!(err.to_string(), "sort: nope: No such file or directory");
    }
}
