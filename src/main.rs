//! Wordle Advisor - CLI
//!
//! Interactive and one-shot entropy recommendations over user-supplied word lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use wordle_advisor::{
    commands::{SolveConfig, analyze_word, parse_observation, run_play, run_rank, solve_word},
    core::Word,
    output::{
        ScanProgress, print_analysis_result, print_outcome, print_recommendation,
        print_solve_result, print_status,
    },
    solver::{DEFAULT_TIE_TOLERANCE, Session, SolverConfig},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Entropy-ranked guess recommendations for Wordle-style puzzles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list: one 5-letter word per line
    #[arg(short, long, global = true, default_value = "answers.txt")]
    answers: PathBuf,

    /// Allowed-guess list (defaults to the answer list)
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Fixed first guess, skips the opening scan
    #[arg(short, long, global = true)]
    opening: Option<String>,

    /// Only scan the first N allowed guesses
    #[arg(
        long,
        global = true,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    scan_limit: Option<usize>,

    /// Entropies closer than this (in bits) rank as ties
    #[arg(long, global = true, default_value_t = DEFAULT_TIE_TOLERANCE)]
    tie_tolerance: f64,

    /// Number of alternatives to display
    #[arg(short, long, global = true, default_value = "5")]
    top: usize,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): recommend, read feedback, repeat
    Play,

    /// Rank guesses after replaying known observations
    Rank {
        /// Observation as GUESS=FEEDBACK, e.g. crane=AACAC (repeatable)
        #[arg(long = "after", value_name = "GUESS=FEEDBACK")]
        after: Vec<String>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy per turn
        #[arg(long)]
        detail: bool,
    },

    /// Analyze the entropy of a specific word against the full answer list
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut session = build_session(&cli)?;
    let progress = ScanProgress::new();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&mut session, cli.top, &progress),
        Commands::Rank { after } => {
            let observations = after
                .iter()
                .map(|text| {
                    parse_observation(text).with_context(|| format!("invalid --after '{text}'"))
                })
                .collect::<Result<Vec<_>>>()?;

            match run_rank(&mut session, &observations, &progress)? {
                Some(recommendation) => {
                    print_status(&session, cli.top);
                    print_recommendation(&recommendation, cli.top);
                }
                None => print_outcome(&session),
            }
            Ok(())
        }
        Commands::Solve { word, detail } => {
            let result = solve_word(&SolveConfig::new(word), &mut session, &progress)?;
            print_solve_result(&result, detail);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(
                &word,
                session.allowed(),
                session.answers(),
                session.config().tie_tolerance,
                &progress,
            )?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

/// Warn by default; each -v raises the level, `RUST_LOG` still wins
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Load the word lists and apply the solver flags
fn build_session(cli: &Cli) -> Result<Session> {
    let answers = load_words(&cli.answers)?;
    let allowed = match &cli.guesses {
        Some(path) => load_words(path)?,
        None => answers.clone(),
    };

    println!("Loaded {} answer words", answers.len());
    println!("Loaded {} allowed guesses", allowed.len());

    let mut config = SolverConfig::default().with_tie_tolerance(cli.tie_tolerance);
    if let Some(text) = &cli.opening {
        let word = Word::new(text).with_context(|| format!("invalid opening guess '{text}'"))?;
        config = config.with_opening_guess(word);
    }
    if let Some(limit) = cli.scan_limit {
        config = config.with_scan_limit(limit);
    }

    Session::new(answers, allowed, config).context("cannot start a solving session")
}

fn load_words(path: &Path) -> Result<Vec<Word>> {
    load_from_file(path).with_context(|| format!("failed to load '{}'", path.display()))
}
