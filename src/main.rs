//! Wordle Genius - CLI
//!
//! Simulates single, multi-board and quantum Wordle games played by bots and
//! reports win rates and turns to win.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_genius::{
    commands::{SolveConfig, Variant, parse_secrets, run_simulation, solve_word},
    output::{print_simulation_result, print_solve_result},
    simulation::{BotConfig, MultiBotConfig, SimulationConfig, default_multi_turns},
    solver::Pick,
    wordlists::WordCorpus,
};

#[derive(Parser)]
#[command(
    name = "wordle_genius",
    about = "Wordle simulator: bots for single, multi-board and quantum games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Answer-eligible word list, one word per line (default: embedded sample)
    #[arg(short = 'a', long, global = true, requires = "guesses")]
    answers: Option<PathBuf>,

    /// Guess-only word list, one word per line
    #[arg(short = 'g', long, global = true, requires = "answers")]
    guesses: Option<PathBuf>,

    /// Log more: -v info, -vv debug, -vvv trace (RUST_LOG takes precedence)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

/// Options shared by every simulation subcommand
#[derive(Args)]
struct RunArgs {
    /// Number of games to play
    #[arg(short = 'n', long, default_value = "100")]
    games: usize,

    /// Base seed for reproducible runs (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fixed secrets, comma separated; overrides the game count
    #[arg(long, value_delimiter = ',')]
    secrets: Vec<String>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate single-board games
    Simulate {
        /// Bot: simple, middle, frequency, hard
        #[arg(short, long, default_value = "middle")]
        bot: String,

        /// Metric watched by the hard bot: green, yellow, aggregate, pool
        #[arg(short, long)]
        metric: Option<String>,

        /// Threshold at which the hard bot stops exploring
        #[arg(short, long)]
        threshold: Option<usize>,

        /// Turn budget per game
        #[arg(long, default_value = "6")]
        max_turns: usize,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Simulate multi-board games
    Multi {
        /// Scheduler: naive, greedy
        #[arg(long, default_value = "naive")]
        scheduler: String,

        /// Boards per game
        #[arg(short, long, default_value = "4")]
        boards: usize,

        /// Shared turn budget (default: max(6, boards * 2.5))
        #[arg(long)]
        max_turns: Option<usize>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Simulate quantum (two-secret) games
    Quantum {
        /// Turn budget per game
        #[arg(long, default_value = "10")]
        max_turns: usize,

        /// Pick the best-covered candidate instead of a random one
        #[arg(short, long)]
        frequency: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Play one game against a specific word and show the trace
    Solve {
        /// The target word to solve
        word: String,

        /// Bot: simple, middle, frequency, hard
        #[arg(short, long, default_value = "frequency")]
        bot: String,

        #[arg(short, long)]
        metric: Option<String>,

        #[arg(short, long)]
        threshold: Option<usize>,

        #[arg(long, default_value = "6")]
        max_turns: usize,

        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Show candidate counts for each guess
        #[arg(short, long)]
        details: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Word lists from `--answers`/`--guesses`, or the embedded sample
fn load_corpus(answers: Option<&Path>, guesses: Option<&Path>) -> Result<WordCorpus> {
    match (answers, guesses) {
        (Some(answers), Some(guesses)) => WordCorpus::from_files(answers, guesses)
            .with_context(|| {
                format!(
                    "failed to load word lists {} and {}",
                    answers.display(),
                    guesses.display()
                )
            }),
        _ => Ok(WordCorpus::sample()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let corpus = load_corpus(cli.answers.as_deref(), cli.guesses.as_deref())?;

    match cli.command {
        Commands::Simulate {
            bot,
            metric,
            threshold,
            max_turns,
            run,
        } => {
            let bot = BotConfig::from_name(&bot, metric.as_deref(), threshold)?;
            run_simulate_command(&corpus, Variant::Single(bot), 1, max_turns, &run)
        }
        Commands::Multi {
            scheduler,
            boards,
            max_turns,
            run,
        } => {
            let scheduler = MultiBotConfig::from_name(&scheduler)?;
            let max_turns = max_turns.unwrap_or_else(|| default_multi_turns(boards));
            run_simulate_command(&corpus, Variant::Multi(scheduler), boards, max_turns, &run)
        }
        Commands::Quantum {
            max_turns,
            frequency,
            run,
        } => {
            let pick = if frequency { Pick::Frequency } else { Pick::Random };
            run_simulate_command(&corpus, Variant::Quantum(pick), 1, max_turns, &run)
        }
        Commands::Solve {
            word,
            bot,
            metric,
            threshold,
            max_turns,
            seed,
            details,
        } => {
            let bot = BotConfig::from_name(&bot, metric.as_deref(), threshold)?;
            let mut config = SolveConfig::new(word, bot);
            config.max_guesses = max_turns;
            config.seed = seed;
            let result = solve_word(config, &corpus)?;
            print_solve_result(&result, details);
            Ok(())
        }
    }
}

fn run_simulate_command(
    corpus: &WordCorpus,
    variant: Variant,
    boards: usize,
    max_turns: usize,
    run: &RunArgs,
) -> Result<()> {
    let config = SimulationConfig {
        games: run.games,
        max_turns,
        boards,
        seed: run.seed,
    };
    let secrets = parse_secrets(&run.secrets).context("invalid secret word")?;
    let secrets = (!secrets.is_empty()).then_some(secrets.as_slice());

    println!("Running the {variant} against {} words...", corpus.len());
    let result = run_simulation(corpus, config, variant, secrets, !run.no_progress)?;
    print_simulation_result(&result);
    Ok(())
}
