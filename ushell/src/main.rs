use clap::Parser;
use log::LevelFilter;
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use std::path::PathBuf;

use ushell::logging::init_logger;
use ushell::{Repl, Shell};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Run one command line and exit
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    command: Option<String>,

    /// Log filter: off, error, warn, info, debug or trace
    #[arg(long, env = "USHELL_LOG", default_value = "warn")]
    log_level: LevelFilter,

    /// History file for the interactive prompt
    #[arg(long, env = "USHELL_HISTORY")]
    history: Option<PathBuf>,

    /// Do not record history
    #[arg(long)]
    no_history: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().terminal_links(true).build())
    }))
    .ok();

    let mut shell = Shell::new();

    if let Some(line) = cli.command {
        shell.execute(
            &line,
            &mut io::stdin().lock(),
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )?;
        io::stdout().flush().into_diagnostic()?;
        return Ok(());
    }

    let history = if cli.no_history {
        None
    } else {
        cli.history.or_else(Repl::default_history_path)
    };

    println!("ushell v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' or press Ctrl+D to exit");
    println!();

    let mut repl = Repl::new(shell, history)?;
    repl.run()
}
