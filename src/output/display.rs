//! Display functions for sessions and command results

use super::formatters::{create_progress_bar, letter_tiles, word_list};
use crate::commands::{BenchResult, GenerateResult};
use crate::game::{Notice, NoticeKind, Phase, Presenter, Snapshot};
use colored::Colorize;

/// Presenter that prints to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn render(&mut self, snapshot: &Snapshot) {
        print_snapshot(snapshot);
    }

    fn notify(&mut self, notice: &Notice) {
        print_notice(notice);
    }
}

/// Print a boxed title banner
pub fn print_banner(title: &str) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print a notice, coloured by kind
pub fn print_notice(notice: &Notice) {
    let text = notice.to_string();
    match notice.kind() {
        NoticeKind::Info => println!("ℹ️  {}", text.bright_white()),
        NoticeKind::Success => println!("✅ {}", text.green().bold()),
        NoticeKind::Error => println!("❌ {}", text.red()),
    }

    if let Notice::Completed { solution, .. } = notice {
        println!(
            "   Our solution: {}",
            solution.join(", ").bright_yellow().bold()
        );
    }
}

/// Print the current game state
pub fn print_snapshot(snapshot: &Snapshot) {
    let used = snapshot.total - snapshot.remaining;
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Letters:  {}",
        letter_tiles(&snapshot.letters).bright_yellow().bold()
    );
    println!(
        "Progress: [{}] {used}/{} letters used",
        create_progress_bar(used as f64, snapshot.total as f64, 20).green(),
        snapshot.total
    );
    println!(
        "Words:    {} ({})",
        word_list(&snapshot.used_words),
        snapshot.used_words.len()
    );
    if snapshot.phase == Phase::Typing {
        println!("Typing:   {}", snapshot.pending.bright_white());
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print a generated puzzle
pub fn print_puzzle(result: &GenerateResult, reveal: bool) {
    let puzzle = &result.puzzle;

    print_banner("PUZZLE");
    println!(
        "🔤 Letters ({}): {}",
        puzzle.letter_count(),
        letter_tiles(puzzle.display_order()).bright_yellow().bold()
    );
    println!(
        "   Solvable in {} words | found after {} attempt(s) in {:.2}ms",
        puzzle.solution_words().len(),
        puzzle.generations(),
        result.duration.as_secs_f64() * 1000.0
    );

    if reveal {
        println!("\n📖 {}", "Solution:".bright_cyan().bold());
        for word in puzzle.solution_words() {
            println!("   • {}", word.text().bright_white());
        }
    }
    println!();
}

/// Print the result of a bench run
pub fn print_bench_result(result: &BenchResult) {
    print_banner("BENCH RESULTS");

    println!("📊 {}", "Generation:".bright_cyan().bold());
    println!("   Puzzles requested: {}", result.total);
    println!(
        "   Succeeded:         {}",
        result.succeeded.to_string().green()
    );
    println!(
        "   Failed:            {}",
        if result.failures == 0 {
            result.failures.to_string().green()
        } else {
            result.failures.to_string().red()
        }
    );
    println!(
        "   Mean words:        {}",
        format!("{:.2}", result.mean_words).bright_yellow().bold()
    );
    println!("   Mean letters:      {:.2}", result.mean_letters);
    println!("   Mean attempts:     {:.2}", result.mean_generations);
    println!(
        "   Worst attempts:    {}",
        result.max_generations.to_string().yellow()
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:    {:.1}", result.puzzles_per_second);

    if result.succeeded == 0 {
        return;
    }

    println!("\n📈 {}", "Words per puzzle:".bright_cyan().bold());
    let mut counts: Vec<_> = result.word_distribution.iter().collect();
    counts.sort_unstable();
    for (&words, &count) in counts {
        let pct = (count as f64 / result.succeeded as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {words}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
