//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is submitted as a word.

use crate::game::{LedgerError, Session, SessionError};
use crate::output::{ConsolePresenter, print_banner, print_snapshot};
use crate::puzzle::PuzzleConfig;
use crate::wordlists::WordSources;
use anyhow::Result;
use colored::Colorize;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Delete(String),
    New,
    Letters,
    Help,
    Quit,
    Nothing,
}

/// Parse a line of input
#[must_use]
pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return if line.is_empty() {
            Command::Nothing
        } else {
            Command::Submit(line.to_string())
        };
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("del" | "delete" | "d"), Some(word)) => Command::Delete(word.to_string()),
        (Some("new" | "n"), _) => Command::New,
        (Some("letters" | "l"), _) => Command::Letters,
        (Some("quit" | "q" | "exit"), _) => Command::Quit,
        _ => Command::Help,
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure, if no puzzle can be generated, or if the
/// letter ledger reports an accounting violation.
pub fn run_simple(sources: &WordSources, config: PuzzleConfig, rng: StdRng) -> Result<()> {
    print_banner("Scrambled - Simple Mode");
    print_help();

    let mut session = Session::new(sources, config, rng, ConsolePresenter)?;

    loop {
        let Some(line) = get_user_input("Word")? else {
            break;
        };

        let result = match parse_line(&line) {
            Command::Nothing => continue,
            Command::Quit => break,
            Command::Help => {
                print_help();
                continue;
            }
            Command::Letters => {
                print_snapshot(&session.snapshot());
                continue;
            }
            Command::New => session.reset(),
            Command::Delete(word) => session.delete(&word).map(drop),
            Command::Submit(word) => session.submit_word(&word).map(drop),
        };

        recover(result)?;
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Keep playing through errors the player can act on
fn recover(result: Result<(), SessionError>) -> Result<()> {
    match result {
        Ok(()) | Err(SessionError::Ledger(LedgerError::NotFound(_))) => Ok(()),
        Err(SessionError::Completed) => {
            println!(
                "{}",
                "Puzzle complete! Type :new for another one.".bright_yellow()
            );
            Ok(())
        }
        Err(SessionError::Generate(e)) => {
            println!("{} {e}", "❌".red());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_help() {
    println!("Type a word and press Enter to use its letters.");
    println!("Commands: :del WORD  :new  :letters  :help  :quit\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
