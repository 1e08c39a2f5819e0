//! Privilege check CLI - Report whether this process may trust its environment

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use console::style;
use std::error::Error;
use std::io::{self, Write};

/// Run one invocation, returning the exit status.
///
/// With `--quiet` nothing reaches `out`; only the status is reported.
fn run(cli: Cli, out: &mut dyn Write) -> Result<i32, Box<dyn Error>> {
    let mut sink = io::sink();
    let out: &mut dyn Write = if cli.quiet { &mut sink } else { out };

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check if cli.quiet => return Ok(commands::quiet_status()),
        Commands::Check => commands::check(out, cli.json)?,
        Commands::Strategies => commands::list_strategies(out, cli.json)?,
        Commands::Getenv { name } => commands::getenv(out, &name, cli.json)?,
    }
    Ok(0)
}

fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    logging::init_logger(cli.verbose, quiet);

    let stdout = io::stdout();
    let code = match run(cli, &mut stdout.lock()) {
        Ok(code) => code,
        Err(e) => {
            if !quiet {
                eprintln!("{} {}", style("error:").red().bold(), e);
            }
            1
        }
    };
    std::process::exit(code);
}
