use console::style;
use env_logger::{Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;

/// Initialize logger; `RUST_LOG` overrides the flag-derived level unless
/// `quiet` is set
pub fn init_logger(verbose: bool, quiet: bool) {
    builder(verbose, quiet, Env::default()).init();
}

fn builder(verbose: bool, quiet: bool, env: Env) -> Builder {
    let mut builder = Builder::new();

    if quiet {
        builder.filter_level(LevelFilter::Off);
    } else {
        builder
            .filter_level(if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            })
            .parse_env(env);
    }

    builder.format(|buf, record| {
        let tag = match record.level() {
            Level::Error => format!("{}", style("ERROR").red().bold()),
            Level::Warn => format!("{}", style("WARN ").yellow().bold()),
            Level::Info => format!("{}", style("INFO ").green()),
            Level::Debug => format!("{}", style("DEBUG").cyan()),
            Level::Trace => format!("{}", style("TRACE").dim()),
        };
        writeln!(buf, "{} {}", tag, record.args())
    });
    builder
}
