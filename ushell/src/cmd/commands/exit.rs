use crate::cmd::{Application, Flow};
use crate::error::Result;
use crate::shell::env::Environment;
use std::io::{Read, Write};

pub struct ExitApplication;

impl Application for ExitApplication {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn usage(&self) -> &'static str {
        "exit"
    }

    /// Asks the enclosing shell loop to stop; the process itself keeps running
    fn run(
        &self,
        _args: &[String],
        _stdin: &mut dyn Read,
        _stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Flow> {
        Ok(Flow::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::testing::Fixture;

    #[test]
    fn test_exit_signals_termination() {
        let mut fx = Fixture::new();
        let (flow, out) = fx.run_flow(&ExitApplication, &[], "").unwrap();
        assert_eq!(flow, Flow::Exit);
        assert!(out.is_empty());
    }
}
