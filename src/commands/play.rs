//! Interactive CLI mode
//!
//! Each round prints the recommendation, then reads the feedback the puzzle
//! gave for it.

use crate::core::{Pattern, WORD_LEN, Word};
use crate::error::InputError;
use crate::output::{print_history, print_outcome, print_recommendation, print_status};
use crate::solver::{ProgressObserver, Session};
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Quit,
    NewGame,
    /// Feedback for `guess`, which defaults to the recommended word
    Feedback { guess: Word, pattern: Pattern },
}

/// Interpret a line typed at the feedback prompt
///
/// Accepted forms:
/// - `quit` / `q` / `exit`, `new` / `n`
/// - `win` as shorthand for all-correct feedback on the recommended word
/// - a feedback string such as `CPAAP`, `C P A A P` or `GY-G-`
/// - `<word> <feedback>` when a different word was actually played
///
/// # Errors
/// Returns the `InputError` of the offending word or feedback.
pub fn parse_play_command(line: &str, recommended: Word) -> Result<PlayCommand, InputError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(PlayCommand::Quit),
        "new" | "n" => return Ok(PlayCommand::NewGame),
        "win" | "solved" => {
            return Ok(PlayCommand::Feedback {
                guess: recommended,
                pattern: Pattern::PERFECT,
            });
        }
        _ => {}
    }

    // "C P A A P" splits too, but its first token is a single symbol
    if let Some((word, feedback)) = line.split_once(char::is_whitespace) {
        if word.chars().count() == WORD_LEN {
            return Ok(PlayCommand::Feedback {
                guess: Word::new(word)?,
                pattern: Pattern::parse(feedback)?,
            });
        }
    }

    Ok(PlayCommand::Feedback {
        guess: recommended,
        pattern: Pattern::parse(line)?,
    })
}

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails or the session cannot produce a
/// recommendation.
pub fn run_play(session: &mut Session, top: usize, progress: &dyn ProgressObserver) -> Result<()> {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "WORDLE ADVISOR".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!("After each guess, enter the feedback the puzzle showed:");
    println!("  C/G/🟩 correct, P/Y/🟨 present, A/-/⬜ absent (e.g. CPAAP)");
    println!("  '<word> <feedback>' if you played a different word, 'win' if solved");
    println!("Commands: 'new' to start over, 'quit' to exit");

    loop {
        if session.phase().is_terminal() {
            print_outcome(session);
            match prompt("Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    session.reset();
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => break,
            }
        }

        println!(
            "\n{}",
            format!(" ROUND {} ", session.round() + 1)
                .on_blue()
                .white()
                .bold()
        );
        print_status(session, top.max(3));

        let recommendation = session.recommend(progress)?;
        print_recommendation(recommendation, top);
        let recommended = recommendation
            .best()
            .map(|score| score.word)
            .ok_or_else(|| anyhow!("no guess available"))?;

        loop {
            let Some(line) = prompt("Feedback")? else {
                println!("\n👋 Thanks for playing!");
                return Ok(());
            };

            match parse_play_command(&line, recommended) {
                Ok(PlayCommand::Quit) => {
                    println!("\n👋 Thanks for playing!");
                    return Ok(());
                }
                Ok(PlayCommand::NewGame) => {
                    session.reset();
                    println!("\n🔄 New game started!");
                    break;
                }
                Ok(PlayCommand::Feedback { guess, pattern }) => {
                    session.apply_feedback(guess, pattern)?;
                    if pattern.is_perfect() {
                        println!("\n🎉 Solved with {}!", guess.to_uppercase().green().bold());
                        print_history(session);
                        session.reset();
                        if !continue_after_win()? {
                            return Ok(());
                        }
                    }
                    break;
                }
                Err(err) => println!("{} {err}", "Invalid input:".red()),
            }
        }
    }

    println!("\n👋 Thanks for playing!");
    Ok(())
}

fn continue_after_win() -> Result<bool> {
    Ok(prompt("Play again? (yes/no)")?
        .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y")))
}

/// Read one trimmed line; `None` at end of input
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
