//! Race Yahtzee sort against quicksort, mergesort and bubble sort
//!
//! Prints elapsed seconds for yahtzee, mergesort, bubble and quicksort,
//! comma separated. `--sweep` prints one `size,...` row per size instead.

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use yahtzee_sort::bench::{compare, sweep_sizes, Comparison};
use yahtzee_sort::cli::{init_tracing, parse_args, YahtzeeArgs};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "benchmark", version, about = "Time Yahtzee sort against classic sorts")]
struct Cli {
    /// Number of elements to generate and sort
    #[arg(required_unless_present = "sweep", conflicts_with = "sweep")]
    size: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Time every size from --from to --to in --step increments
    #[arg(long)]
    sweep: bool,

    #[arg(long, default_value_t = 100, requires = "sweep", conflicts_with = "size")]
    from: usize,

    #[arg(long, default_value_t = 10_000, requires = "sweep", conflicts_with = "size")]
    to: usize,

    #[arg(long, default_value_t = 100, requires = "sweep", conflicts_with = "size", value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    step: usize,

    #[command(flatten)]
    yahtzee: YahtzeeArgs,
}

fn emit(comparison: &Comparison, format: Format, with_size: bool) -> serde_json::Result<()> {
    match format {
        Format::Csv if with_size => println!("{},{}", comparison.size, comparison.csv_row()),
        Format::Csv => println!("{}", comparison.csv_row()),
        Format::Json => println!("{}", serde_json::to_string(comparison)?),
    }
    Ok(())
}

fn run(cli: &Cli) -> serde_json::Result<bool> {
    let seed = cli.yahtzee.seed();
    let config = cli.yahtzee.config();
    let mut all_correct = true;

    if cli.sweep {
        if matches!(cli.format, Format::Csv) {
            println!("size,yahtzee,mergesort,bubble,quicksort");
        }
        for size in sweep_sizes(cli.from, cli.to, cli.step) {
            let comparison = compare(size, seed, config);
            all_correct &= comparison.correctness;
            emit(&comparison, cli.format, true)?;
        }
    } else if let Some(size) = cli.size {
        let comparison = compare(size, seed, config);
        all_correct &= comparison.correctness;
        emit(&comparison, cli.format, false)?;
    }

    Ok(all_correct)
}

fn main() {
    let cli: Cli = parse_args();
    init_tracing(cli.yahtzee.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("ERROR: a sorter produced unsorted output");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("ERROR: failed to write results: {}", err);
            std::process::exit(1);
        }
    }
}
