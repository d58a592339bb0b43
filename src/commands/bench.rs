//! Bench command
//!
//! Generates many puzzles in parallel and summarises how hard the generator
//! had to work for them.

use crate::core::Word;
use crate::puzzle::{GenerateError, Generator, Puzzle, PuzzleConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from a bench run
#[derive(Debug)]
pub struct BenchResult {
    pub total: usize,
    pub succeeded: usize,
    pub failures: usize,
    pub mean_words: f64,
    pub mean_letters: f64,
    pub mean_generations: f64,
    pub max_generations: usize,
    /// Solution word count -> number of puzzles
    pub word_distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` puzzles, puzzle `i` using a `StdRng` seeded with `seed + i`
///
/// Results depend only on `seed`, not on thread scheduling.
///
/// # Errors
///
/// Returns `GenerateError` if the configuration is invalid or there are no
/// candidate words. Individual exhausted attempts are counted as failures.
pub fn run_bench(
    candidates: &[Word],
    config: &PuzzleConfig,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> Result<BenchResult, GenerateError> {
    let generator = Generator::new(candidates, config.clone())?;

    let pb = if show_progress {
        progress_bar(count)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<Option<Puzzle>> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let outcome = match generator.generate(&mut rng) {
                Ok(puzzle) => Some(puzzle),
                Err(e) => {
                    log::warn!("bench puzzle {i} failed: {e}");
                    None
                }
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("done");
    let duration = start.elapsed();

    let puzzles: Vec<&Puzzle> = outcomes.iter().flatten().collect();
    let succeeded = puzzles.len();

    let mut word_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for puzzle in &puzzles {
        *word_distribution
            .entry(puzzle.solution_words().len())
            .or_insert(0) += 1;
    }

    let mean = |f: fn(&Puzzle) -> usize| -> f64 {
        if succeeded == 0 {
            0.0
        } else {
            puzzles.iter().map(|p| f(p)).sum::<usize>() as f64 / succeeded as f64
        }
    };

    Ok(BenchResult {
        total: count,
        succeeded,
        failures: count - succeeded,
        mean_words: mean(|p| p.solution_words().len()),
        mean_letters: mean(Puzzle::letter_count),
        mean_generations: mean(Puzzle::generations),
        max_generations: puzzles.iter().map(|p| p.generations()).max().unwrap_or(0),
        word_distribution,
        duration,
        puzzles_per_second: if duration.as_secs_f64() > 0.0 {
            count as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    })
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb.set_message("generating");
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordSources;

    fn candidates() -> Vec<Word> {
        WordSources::embedded(&(3..=8))
            .unwrap()
            .common()
            .words()
            .to_vec()
    }

    #[test]
    fn bench_runs() {
        let words = candidates();
        let config = PuzzleConfig::default();
        let result = run_bench(&words, &config, 20, 42, false).unwrap();

        assert_eq!(result.total, 20);
        assert_eq!(result.succeeded + result.failures, 20);
        assert!(result.succeeded > 0);
        assert!(result.mean_words >= config.min_words as f64);
        assert!(result.mean_words <= config.max_words as f64);
        assert!(result.mean_letters >= config.min_letters as f64);
        assert!(result.mean_letters <= config.max_letters as f64);
        assert!(result.mean_generations >= 1.0);
    }

    #[test]
    fn bench_distribution_sums_correctly() {
        let words = candidates();
        let result = run_bench(&words, &PuzzleConfig::default(), 16, 7, false).unwrap();

        let sum: usize = result.word_distribution.values().sum();
        assert_eq!(sum, result.succeeded);
    }

    #[test]
    fn bench_is_deterministic() {
        let words = candidates();
        let config = PuzzleConfig::default();
        let a = run_bench(&words, &config, 10, 3, false).unwrap();
        let b = run_bench(&words, &config, 10, 3, false).unwrap();

        assert_eq!(a.word_distribution, b.word_distribution);
        assert!((a.mean_letters - b.mean_letters).abs() < f64::EPSILON);
    }

    #[test]
    fn bench_zero_count() {
        let words = candidates();
        let result = run_bench(&words, &PuzzleConfig::default(), 0, 1, false).unwrap();

        assert_eq!(result.total, 0);
        assert_eq!(result.succeeded, 0);
        assert!(result.mean_words.abs() < f64::EPSILON);
    }

    #[test]
    fn bench_rejects_invalid_config() {
        let words = candidates();
        let config = PuzzleConfig {
            min_words: 0,
            ..PuzzleConfig::default()
        };
        assert!(run_bench(&words, &config, 5, 1, false).is_err());
    }
}
