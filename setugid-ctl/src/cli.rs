use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "setugid-ctl")]
#[command(version, about = "Report whether this process may trust its environment", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Human-readable report (default)
    setugid-ctl
    setugid-ctl check --verbose

    # Machine-readable report
    setugid-ctl --json

    # Exit status only: 0 trusted, 1 elevated
    setugid-ctl --quiet && echo trusted

    # Print a variable only when the environment is trusted
    setugid-ctl getenv OPENSSL_CONF

    # List the detection strategies
    setugid-ctl strategies
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print nothing; the exit status reports the outcome
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report the privilege decision and the inputs behind it
    Check,
    /// List the detection strategies and mark the one compiled in
    Strategies,
    /// Print an environment variable if the environment is trusted
    Getenv {
        /// Variable name
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_getenv() {
        let cli = Cli::try_parse_from(["setugid-ctl", "getenv", "HOME"]).unwrap();
        match cli.command {
            Some(Commands::Getenv { name }) => assert_eq!(name, "HOME"),
            _ => panic!("expected getenv"),
        }
    }

    #[test]
    fn quiet_conflicts_with_json() {
        assert!(Cli::try_parse_from(["setugid-ctl", "--quiet", "--json"]).is_err());
    }

    #[test]
    fn output_flags_reach_every_subcommand() {
        for sub in [&["strategies"][..], &["getenv", "HOME"][..], &["check"][..]] {
            let mut args = vec!["setugid-ctl"];
            args.extend_from_slice(sub);
            args.push("--quiet");
            let cli = Cli::try_parse_from(args.clone()).unwrap();
            assert!(cli.quiet, "{:?}", args);

            args.pop();
            args.push("--json");
            let cli = Cli::try_parse_from(args.clone()).unwrap();
            assert!(cli.json, "{:?}", args);
        }
    }

    #[test]
    fn quiet_conflicts_with_json_after_subcommand() {
        assert!(Cli::try_parse_from(["setugid-ctl", "strategies", "-q", "--json"]).is_err());
    }

    #[test]
    fn no_arguments_means_check() {
        let cli = Cli::try_parse_from(["setugid-ctl"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }
}
