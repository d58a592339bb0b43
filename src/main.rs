//! Scrambled - CLI
//!
//! Word-construction puzzle with TUI and line-mode play, plus puzzle
//! generation tools.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use scrambled::{
    commands::{generate_puzzle, run_bench, run_simple},
    output::{print_bench_result, print_puzzle},
    puzzle::PuzzleConfig,
    wordlists::WordSources,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scrambled",
    about = "Spell dictionary words until every letter in the pool is used",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: built-in list)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Common-word file used to build puzzles (default: built-in list)
    #[arg(long, global = true)]
    common: Option<PathBuf>,

    /// Fewest solution words per puzzle
    #[arg(long, global = true)]
    min_words: Option<usize>,

    /// Most solution words per puzzle
    #[arg(long, global = true)]
    max_words: Option<usize>,

    /// Fewest letters in the pool
    #[arg(long, global = true)]
    min_letters: Option<usize>,

    /// Most letters in the pool
    #[arg(long, global = true)]
    max_letters: Option<usize>,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type words line by line)
    Simple,

    /// Print one generated puzzle
    Generate {
        /// Also print the solution words
        #[arg(short, long)]
        reveal: bool,
    },

    /// Generate many puzzles and report statistics
    Bench {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

impl Cli {
    fn puzzle_config(&self) -> PuzzleConfig {
        let defaults = PuzzleConfig::default();
        PuzzleConfig {
            min_words: self.min_words.unwrap_or(defaults.min_words),
            max_words: self.max_words.unwrap_or(defaults.max_words),
            min_letters: self.min_letters.unwrap_or(defaults.min_letters),
            max_letters: self.max_letters.unwrap_or(defaults.max_letters),
            ..defaults
        }
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = cli.puzzle_config();
    config.validate()?;

    // Word sources must be loaded before any session exists
    let sources = WordSources::load(
        cli.dictionary.as_deref(),
        cli.common.as_deref(),
        &config.word_lengths(),
    )?;

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&sources, config, cli.rng()),
        Commands::Simple => run_simple(&sources, config, cli.rng()),
        Commands::Generate { reveal } => {
            let result = generate_puzzle(&sources, &config, &mut cli.rng())?;
            print_puzzle(&result, *reveal);
            Ok(())
        }
        Commands::Bench { count } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("Generating {count} puzzles (seed {seed})...");
            let result = run_bench(sources.common().words(), &config, *count, seed, true)?;
            print_bench_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(sources: &WordSources, config: PuzzleConfig, rng: StdRng) -> Result<()> {
    use scrambled::interactive::{App, run_tui};

    let app = App::new(sources, config, rng)?;
    run_tui(app)
}
