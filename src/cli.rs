//! Argument handling shared by the `yahtzee` and `benchmark` binaries

use crate::rng::clock_seed;
use crate::yahtzee::{ReshufflePolicy, YahtzeeConfig, DEFAULT_MIN_RUN_THRESHOLD};
use clap::builder::TypedValueParser;
use clap::error::ErrorKind;
use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;

/// Exit status for bad arguments
pub const USAGE_EXIT_CODE: i32 = 1;

/// Knobs for the Yahtzee sorter
#[derive(Args, Debug, Clone)]
pub struct YahtzeeArgs {
    /// Seed for input generation and reshuffles (default: wall clock)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Runs shorter than this trigger a reshuffle
    #[arg(long, default_value_t = DEFAULT_MIN_RUN_THRESHOLD, value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    pub threshold: usize,

    /// When to reshuffle the remainder between passes
    #[arg(long, value_enum, default_value_t = ReshufflePolicy::Threshold)]
    pub policy: ReshufflePolicy,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl YahtzeeArgs {
    pub fn config(&self) -> YahtzeeConfig {
        YahtzeeConfig {
            min_run_threshold: self.threshold,
            policy: self.policy,
        }
    }

    /// The explicit `--seed`, or one taken from the clock now
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

/// Parse the command line, printing usage to stderr and exiting with
/// [`USAGE_EXIT_CODE`] on any argument error.
///
/// `--help` and `--version` still exit 0.
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(err) => match exit_code(err.kind()) {
            0 => err.exit(),
            code => {
                let _ = err.print();
                std::process::exit(code);
            }
        },
    }
}

/// Exit status for a failed parse: 0 for help and version output,
/// [`USAGE_EXIT_CODE`] for everything else.
pub fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => USAGE_EXIT_CODE,
    }
}

/// Install a stderr `fmt` subscriber.
///
/// Without `-v` the filter comes from `RUST_LOG`, falling back to `warn`.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        size: usize,
        #[command(flatten)]
        yahtzee: YahtzeeArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["yahtzee", "100"]).unwrap();
        assert_eq!(cli.size, 100);
        assert_eq!(cli.yahtzee.config(), YahtzeeConfig::default());
        assert_eq!(cli.yahtzee.verbose, 0);
        assert!(cli.yahtzee.seed.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = TestCli::try_parse_from([
            "yahtzee", "8", "--seed", "42", "--threshold", "6", "--policy", "always", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.yahtzee.seed(), 42);
        assert_eq!(cli.yahtzee.config().min_run_threshold, 6);
        assert_eq!(cli.yahtzee.config().policy, ReshufflePolicy::Always);
        assert_eq!(cli.yahtzee.verbose, 2);
    }

    #[test]
    fn test_rejects_bad_usage() {
        // Missing size
        assert!(TestCli::try_parse_from(["yahtzee"]).is_err());
        // Extra positional
        assert!(TestCli::try_parse_from(["yahtzee", "1", "2"]).is_err());
        // Non-numeric and negative sizes
        assert!(TestCli::try_parse_from(["yahtzee", "ten"]).is_err());
        assert!(TestCli::try_parse_from(["yahtzee", "-3"]).is_err());
        // Zero threshold
        assert!(TestCli::try_parse_from(["yahtzee", "5", "--threshold", "0"]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(ErrorKind::DisplayHelp), 0);
        assert_eq!(exit_code(ErrorKind::DisplayVersion), 0);
        assert_eq!(exit_code(ErrorKind::MissingRequiredArgument), USAGE_EXIT_CODE);
        assert_eq!(exit_code(ErrorKind::ValueValidation), USAGE_EXIT_CODE);
        assert_eq!(exit_code(ErrorKind::UnknownArgument), USAGE_EXIT_CODE);
    }

    #[test]
    fn test_parse_errors_map_to_usage_code() {
        let missing = TestCli::try_parse_from(["yahtzee"]).unwrap_err();
        assert_eq!(exit_code(missing.kind()), USAGE_EXIT_CODE);

        let bad_size = TestCli::try_parse_from(["yahtzee", "ten"]).unwrap_err();
        assert_eq!(exit_code(bad_size.kind()), USAGE_EXIT_CODE);

        let help = TestCli::try_parse_from(["yahtzee", "--help"]).unwrap_err();
        assert_eq!(exit_code(help.kind()), 0);
    }
}
