//! Wordle Game - CLI
//!
//! Play in the TUI (default) or line-by-line, check a single guess, or
//! convert a raw word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wordle_game::{
    commands::{check_guess, convert_wordlist, print_check_result, run_simple},
    config::GameConfig,
    game::Dictionary,
    logging::{LogConfig, init_logging},
    wordlists::{embedded_dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word list file (.json array or one word per line); default: embedded
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Attempts per round
    #[arg(short = 'n', long, global = true)]
    attempts: Option<usize>,

    /// Word inserted by the opener shortcut
    #[arg(long, global = true)]
    opener: Option<String>,

    /// Delay before a finished round restarts, in milliseconds
    #[arg(long, global = true)]
    reset_delay_ms: Option<u64>,

    /// Seed for reproducible target words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Evaluate one guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Convert a raw newline-delimited word list into the JSON format
    Wordlist {
        /// Raw word list, one word per line
        input: PathBuf,

        /// Output JSON file
        output: PathBuf,
    },
}

impl Cli {
    /// Config file settings with command-line overrides applied
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(attempts) = self.attempts {
            config.attempt_limit = attempts;
        }
        if let Some(opener) = &self.opener {
            config.opener.clone_from(opener);
        }
        if let Some(delay) = self.reset_delay_ms {
            config.reset_delay_ms = delay;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.wordlist.is_some() {
            config.wordlist.clone_from(&self.wordlist);
        }

        config.validate()?;
        Ok(config)
    }
}

fn load_dictionary(config: &GameConfig) -> Result<Dictionary> {
    match &config.wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("loading word list {}", path.display())),
        None => embedded_dictionary().context("loading embedded word list"),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_file(cli.log_file.clone())
        .silent(matches!(command, Commands::Play));
    init_logging(&log_config)?;

    match command {
        Commands::Play => run_play_command(&cli.game_config()?),
        Commands::Simple => {
            let config = cli.game_config()?;
            let dictionary = load_dictionary(&config)?;
            run_simple(&dictionary, &config)
        }
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Wordlist { input, output } => {
            let count = convert_wordlist(&input, &output)?;
            println!("Wrote {count} words to {}", output.display());
            Ok(())
        }
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let dictionary = load_dictionary(config)?;
    info!(words = dictionary.len(), "starting TUI");

    let app = App::new(&dictionary, config)?;
    run_tui(app)
}
