//! Generate a random array, Yahtzee-sort it and show every pass
//!
//! Rows are tab separated: the original array, one `pass start size
//! remaining reshuffled` row per extracted run, then the sorted array.

use clap::Parser;
use tracing::info;
use yahtzee_sort::cli::{init_tracing, parse_args, YahtzeeArgs};
use yahtzee_sort::rng::{random_sequence, RandomSource};
use yahtzee_sort::yahtzee::yahtzee_sort_traced;

#[derive(Parser, Debug)]
#[command(name = "yahtzee", version, about = "Sort a random array by keeping the best roll")]
struct Cli {
    /// Number of elements to generate and sort
    size: usize,

    /// Only print the per-pass rows
    #[arg(short, long)]
    quiet: bool,

    #[command(flatten)]
    yahtzee: YahtzeeArgs,
}

fn print_row(values: &[i32]) {
    let row: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("{}", row.join("\t"));
}

fn main() {
    let cli: Cli = parse_args();
    init_tracing(cli.yahtzee.verbose);

    let seed = cli.yahtzee.seed();
    let config = cli.yahtzee.config();
    info!(seed, size = cli.size, ?config, "starting");

    let mut rng = RandomSource::seed_from_u64(seed);
    let original = random_sequence(cli.size, &mut rng);

    if !cli.quiet {
        println!("original array:");
        print_row(&original);
    }

    let outcome = match yahtzee_sort_traced(original, &config, &mut rng) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
    };

    println!("pass\tstart\tsize\tremaining\treshuffled");
    for (i, pass) in outcome.passes.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            i + 1,
            pass.run.start,
            pass.run.len,
            pass.remainder_len,
            if pass.reshuffled { "yes" } else { "no" }
        );
    }

    if !cli.quiet {
        println!("sorted array:");
        print_row(&outcome.sorted);
    }
}
