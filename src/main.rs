//! Word Pattern Finder - CLI
//!
//! Finds dictionary words by pinned letters, required letters and excluded letters.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use wordslot::{
    commands::{
        FindConfig, dictionary_stats, generate_queries, run_benchmark, run_find, run_interactive,
    },
    dictionary::{Dictionary, loader::DEFAULT_WORDLIST, loader::load_from_file},
    logging::init_logging,
    output::{print_benchmark_result, print_find_result, print_stats},
};

#[derive(Parser)]
#[command(
    name = "wordslot",
    about = "Find words by pinned letters, required letters and excluded letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited word list
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORDSLOT_WORDLIST",
        default_value = DEFAULT_WORDLIST
    )]
    wordlist: PathBuf,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for patterns in a loop (default)
    Interactive,

    /// Search once and print the matching words
    Find {
        /// Pattern with _ . ? or * for unknown letters, e.g. cr__e
        pattern: String,

        /// Letters that must appear somewhere in the word
        #[arg(short, long, default_value = "")]
        require: String,

        /// Letters that must not appear in the word
        #[arg(short = 'x', long, default_value = "")]
        exclude: String,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print only the number of matches
        #[arg(short, long)]
        count: bool,

        /// Words per output line
        #[arg(long, default_value = "1")]
        columns: usize,

        /// Match letters exactly as typed instead of lowercasing them
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Show word list statistics
    Stats,

    /// Time random queries run in parallel over the word list
    Benchmark {
        /// Number of random queries
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for query generation
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let dictionary = load_from_file(path).context("cannot start without a word list")?;
    info!(words = dictionary.len(), "dictionary ready");
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Fail before serving anything if the word list is missing
    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive(&dictionary).context("interactive session failed"),
        Commands::Find {
            pattern,
            require,
            exclude,
            limit,
            count,
            columns,
            case_sensitive,
        } => {
            let config = FindConfig {
                pattern,
                require,
                exclude,
                limit,
                lowercase: !case_sensitive,
            };
            run_find_command(&config, &dictionary, columns, count)
        }
        Commands::Stats => {
            print_stats(&dictionary_stats(&dictionary));
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&dictionary, count, seed);
            Ok(())
        }
    }
}

fn run_find_command(
    config: &FindConfig,
    dictionary: &Dictionary,
    columns: usize,
    count_only: bool,
) -> Result<()> {
    let result = run_find(config, dictionary)
        .with_context(|| format!("invalid pattern {:?}", config.pattern))?;
    print_find_result(&result, columns, count_only);
    Ok(())
}

fn run_benchmark_command(dictionary: &Dictionary, count: usize, seed: u64) {
    println!("Running {count} random queries over {} words...", dictionary.len());

    let queries = generate_queries(dictionary, count, seed);
    let result = run_benchmark(dictionary, &queries, true);
    print_benchmark_result(&result);
}
