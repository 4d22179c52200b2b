//! Wordle - CLI
//!
//! Play Wordle in the terminal, replay scripted games, or check single guesses.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use tracing::Level;
use wordle_rules::{
    commands::{check_guess, replay_game, run_play},
    game::{Game, GameConfig},
    output::{print_check_result, print_replay_result},
    wordlists::{Dictionary, SecretChoice},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle in the terminal: guess the five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed
    #[arg(short, long, global = true, default_value_t = wordle_rules::game::DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Wordlist: 'all' (default, embedded dictionary) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for a reproducible secret word
    #[arg(long, global = true, conflicts_with = "secret")]
    seed: Option<u64>,

    /// Use this secret word (must be in the word list)
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play,

    /// Replay a list of guesses against a new game
    Replay {
        /// Guesses to submit, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Evaluate a single guess against a given secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },
}

/// Install the stderr log subscriber
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Load the dictionary based on the -w, --seed and --secret flags
fn load_dictionary(
    wordlist: &str,
    seed: Option<u64>,
    secret: Option<String>,
) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "all" => Dictionary::embedded()?,
        path => Dictionary::from_file(path)?,
    };

    let choice = match (secret, seed) {
        (Some(word), _) => SecretChoice::Fixed(word),
        (None, Some(seed)) => SecretChoice::Seeded(seed),
        (None, None) => SecretChoice::Random,
    };

    Ok(dictionary.with_secret_choice(choice)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist, cli.seed, cli.secret)?;
            run_play_command(&dictionary, cli.max_guesses)
        }
        Commands::Replay { guesses } => {
            let dictionary = load_dictionary(&cli.wordlist, cli.seed, cli.secret)?;
            run_replay_command(&dictionary, cli.max_guesses, &guesses)
        }
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
    }
}

fn run_play_command(dictionary: &Dictionary, max_guesses: usize) -> Result<()> {
    let mut game = Game::with_max_guesses(dictionary, max_guesses)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    run_play(&mut game, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_replay_command(
    dictionary: &Dictionary,
    max_guesses: usize,
    guesses: &[String],
) -> Result<()> {
    let result = replay_game(dictionary, GameConfig::new(max_guesses), guesses)
        .context("failed to start game")?;

    print_replay_result(&result);
    Ok(())
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let guess = check_guess(secret, guess)?;
    print_check_result(&guess);
    Ok(())
}
