//! Stream and file helpers shared by the applications

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};

use crate::error::ErrorKind;
use crate::shell::env::Environment;
use ushell_text::join_lines;

/// Operand naming stdin
pub const STDIN_OPERAND: &str = "-";

/// Operands to read, defaulting to stdin when none were given
pub fn inputs_or_stdin(operands: Vec<String>) -> Vec<String> {
    if operands.is_empty() {
        vec![STDIN_OPERAND.to_string()]
    } else {
        operands
    }
}

/// Read all of stdin
pub fn read_stdin(stdin: &mut dyn Read) -> Result<Vec<u8>, ErrorKind> {
    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Read the whole input named by `operand`: stdin for `-`, otherwise a file
/// relative to the current directory
pub fn read_input(
    operand: &str,
    stdin: &mut dyn Read,
    env: &Environment,
) -> Result<Vec<u8>, ErrorKind> {
    if operand == STDIN_OPERAND {
        return read_stdin(stdin);
    }

    let path = env.resolve(operand);
    if path.is_dir() {
        return Err(ErrorKind::IsDirectory(operand.to_string()));
    }
    fs::read(&path).map_err(|e| ErrorKind::from_io(operand, e))
}

/// [`read_input`] decoded as text, with invalid UTF-8 replaced
pub fn read_input_string(
    operand: &str,
    stdin: &mut dyn Read,
    env: &Environment,
) -> Result<String, ErrorKind> {
    let bytes = read_input(operand, stdin, env)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Open `operand` for writing, truncating unless `append` is set
pub fn open_output(operand: &str, env: &Environment, append: bool) -> Result<File, ErrorKind> {
    let path = env.resolve(operand);
    if path.is_dir() {
        return Err(ErrorKind::IsDirectory(operand.to_string()));
    }
    OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(&path)
        .map_err(|e| ErrorKind::from_io(operand, e))
}

/// Write every line followed by `\n`
pub fn write_lines<S: AsRef<str>>(out: &mut dyn Write, lines: &[S]) -> std::io::Result<()> {
    out.write_all(join_lines(lines).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_input_from_stdin() {
        let env = Environment::new("/");
        let mut stdin = Cursor::new("piped");
        assert_eq!(read_input("-", &mut stdin, &env).unwrap(), b"piped");
    }

    #[test]
    fn test_read_input_errors() {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::new(dir.path());
        let mut stdin = Cursor::new("");

        let err = read_input("missing.txt", &mut stdin, &env).unwrap_err();
        assert_eq!(err.to_string(), "missing.txt: No such file or directory");

        let err = read_input(".", &mut stdin, &env).unwrap_err();
        assert_eq!(err.to_string(), ".: Is a directory");
    }

    #[test]
    fn test_open_output_append_and_truncate() {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::new(dir.path());

        open_output("f.txt", &env, false).unwrap().write_all(b"one\n").unwrap();
        open_output("f.txt", &env, true).unwrap().write_all(b"two\n").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("f.txt")).unwrap(), "one\ntwo\n");

        open_output("f.txt", &env, false).unwrap().write_all(b"three\n").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("f.txt")).unwrap(), "three\n");
    }

    #[test]
    fn test_write_lines() {
        let mut out = Vec::new();
        write_lines(&mut out, &["a", "b"]).unwrap();
        assert_eq!(out, b"a\nb\n");
    }

    #[test]
    fn test_inputs_default_to_stdin() {
        assert_eq!(inputs_or_stdin(Vec::new()), vec!["-"]);
        assert_eq!(inputs_or_stdin(vec!["a".into()]), vec!["a"]);
    }
}
