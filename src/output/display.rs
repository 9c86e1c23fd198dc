//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar, history_lines, word_list};
use crate::commands::{AnalysisResult, SolveResult};
use crate::solver::{Phase, Recommendation, Session};
use colored::Colorize;

/// Pool size and, when small enough, the remaining words
pub fn print_status(session: &Session, show_words_up_to: usize) {
    let pool = session.pool();
    let mut status = format!("Possible words: {:4}", pool.len());
    if !pool.is_empty() && pool.len() <= show_words_up_to {
        status.push_str(&format!(" ({})", word_list(pool)));
    }
    println!("\n{}", status.bright_white());
}

/// Print the head of a recommendation and up to `top` alternatives
pub fn print_recommendation(recommendation: &Recommendation, top: usize) {
    let Some(best) = recommendation.best() else {
        println!("{}", "No guess available.".red());
        return;
    };

    let label = if recommendation.forced_opening {
        "Opening guess:"
    } else {
        "Next guess:"
    };
    println!(
        "\n📊 {} {}",
        label.bright_cyan().bold(),
        best.word.to_uppercase().bright_yellow().bold()
    );
    println!(
        "   Entropy:   [{}] {}",
        entropy_bar(best.entropy, recommendation.pool_size, 30).green(),
        format!("{:.3} bits", best.entropy).bright_yellow()
    );

    let alternatives: Vec<_> = recommendation.ranking.iter().skip(1).take(top).collect();
    if !alternatives.is_empty() {
        println!("   Alternatives:");
        for score in alternatives {
            let marker = if score.in_pool { "•" } else { " " };
            println!(
                "     {marker} {}  {:.3} bits",
                score.word.to_uppercase(),
                score.entropy
            );
        }
    }
}

/// Print the outcome once a session reaches a terminal phase
pub fn print_outcome(session: &Session) {
    match session.phase() {
        Phase::Solved => {
            if let Some(answer) = session.solution() {
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!(
                    "  🎉 {} {}",
                    "THE WORD IS".bright_green().bold(),
                    answer.to_uppercase().bright_yellow().bold()
                );
                println!("{}", "═".repeat(60).bright_cyan());
            }
            print_history(session);
        }
        Phase::Exhausted => {
            println!(
                "\n{}",
                "❌ No remaining candidates, check your feedback entries."
                    .red()
                    .bold()
            );
            print_history(session);
        }
        _ => {}
    }
}

/// Print every guess played so far with its feedback
pub fn print_history(session: &Session) {
    if session.history().is_empty() {
        return;
    }
    println!("\n  Guess history:");
    for line in history_lines(session.history()) {
        println!("    {line}");
    }
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved after {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.metrics.entropy.exp2()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates",
        result.metrics.max_partition
    );
    if let Some(rank) = result.rank {
        println!("   Rank:        #{rank} of {} guesses", result.total_guesses);
    }
    if result.possible_answer {
        println!("   {}", "Could be the answer.".green());
    }
}
