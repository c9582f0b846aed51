//! Simple interactive CLI mode
//!
//! Text-based game without the TUI. Each line is either a guess, which is
//! typed into the round letter by letter and submitted, or a command.

use crate::config::GameConfig;
use crate::error::{GameError, TransitionError};
use crate::game::{Dictionary, InputController, KeyInput, KeyOutcome, Round};
use crate::output::{print_attempt, print_board, print_keyboard, print_round_end};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::thread;

/// What the caller should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Continue,
    /// The round just ended; restart after the configured delay
    RoundOver,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// opener in `config` is invalid.
pub fn run_simple(dictionary: &Dictionary, config: &GameConfig) -> anyhow::Result<()> {
    let controller = InputController::new(config.opener_word()?);
    let mut round = Round::new(dictionary, config.attempt_limit, config.rng());

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the five-letter word in {} tries.",
        config.attempt_limit
    );
    println!("Type a word and press Enter to submit it.");
    println!(
        "Commands: 'random' fill a random word, 'opener' fill {}, \
         '' (empty line) submit the filled word, 'new' new round, 'quit' exit\n",
        controller.opener()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", format!("[{}]", round.state().current_input()).cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match handle_line(&controller, &mut round, &line) {
            LineAction::Continue => {}
            LineAction::RoundOver => {
                thread::sleep(config.reset_delay());
                round.start_new_round();
                println!("\n🔄 New round started!\n");
            }
            LineAction::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Apply one input line to the round and print the result
pub fn handle_line(controller: &InputController, round: &mut Round<'_>, line: &str) -> LineAction {
    let line = line.trim();

    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return LineAction::Quit,
        "new" | "n" => {
            round.start_new_round();
            println!("\n🔄 New round started!\n");
            return LineAction::Continue;
        }
        "random" | "r" => {
            report(controller.handle(round, KeyInput::RandomWord));
            println!("Filled: {}", round.state().current_input().bright_yellow());
            return LineAction::Continue;
        }
        "opener" | "o" => {
            report(controller.handle(round, KeyInput::Opener));
            println!("Filled: {}", round.state().current_input().bright_yellow());
            return LineAction::Continue;
        }
        _ => {}
    }

    if !line.is_empty() {
        // Retype the line over whatever was filled in before
        while !round.state().current_input().is_empty() {
            controller.handle(round, KeyInput::Delete);
        }
        for ch in line.chars() {
            if let KeyOutcome::Rejected(err) = controller.handle(round, KeyInput::Letter(ch)) {
                report(KeyOutcome::Rejected(err));
                return LineAction::Continue;
            }
        }
    }

    match controller.handle(round, KeyInput::Submit) {
        KeyOutcome::Submitted(submission) => {
            print_attempt(&submission.attempt);
            if let Some(end) = submission.end {
                print_board(round.state());
                print_round_end(&end, round.state());
                return LineAction::RoundOver;
            }
            print_keyboard(round.state());
            println!(
                "{} attempts left\n",
                round.state().remaining_attempts().to_string().bright_cyan()
            );
            LineAction::Continue
        }
        outcome => {
            report(outcome);
            LineAction::Continue
        }
    }
}

fn report(outcome: KeyOutcome) {
    if let KeyOutcome::Rejected(err) = outcome {
        let text = match err {
            GameError::InvalidTransition(TransitionError::InputFull) => {
                "Word must be exactly 5 letters!".to_string()
            }
            other => other.to_string(),
        };
        println!("❌ {}", text.red());
    }
}
