//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{
    Dictionary, InputController, KeyInput, KeyOutcome, ResetTimer, Round, RoundOutcome,
};
use crate::error::{GameError, TransitionError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long the event loop blocks when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a> {
    pub round: Round<'a>,
    pub controller: InputController,
    pub reset_timer: ResetTimer,
    pub reset_delay: Duration,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// What a terminal key event asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Key(KeyInput),
    NewRound,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Map a crossterm key event onto a game action
///
/// Letters type, Backspace deletes, Enter submits; Ctrl+R fills a random
/// word, Ctrl+O the opener, Ctrl+N starts a new round, Esc or Ctrl+C quits.
#[must_use]
pub fn map_key(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('r') if ctrl => Action::Key(KeyInput::RandomWord),
        KeyCode::Char('o') if ctrl => Action::Key(KeyInput::Opener),
        KeyCode::Char('n') if ctrl => Action::NewRound,
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) if !ctrl => Action::Key(KeyInput::Letter(c)),
        KeyCode::Backspace => Action::Key(KeyInput::Delete),
        KeyCode::Enter => Action::Key(KeyInput::Submit),
        _ => Action::Key(KeyInput::Other),
    }
}

impl<'a> App<'a> {
    /// # Errors
    ///
    /// Returns an error if the configured opener is not a valid word.
    pub fn new(dictionary: &'a Dictionary, config: &GameConfig) -> Result<Self> {
        let controller = InputController::new(config.opener_word()?);
        let round = Round::new(dictionary, config.attempt_limit, config.rng());

        Ok(Self {
            round,
            controller,
            reset_timer: ResetTimer::new(),
            reset_delay: config.reset_delay(),
            messages: vec![Message {
                text: format!(
                    "Guess the word in {} tries. Ctrl+R random, Ctrl+O {}.",
                    config.attempt_limit,
                    controller.opener()
                ),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        })
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NewRound => self.new_round(),
            Action::Key(key) => self.handle_key(key),
        }
    }

    pub fn handle_key(&mut self, key: KeyInput) {
        match self.controller.handle(&mut self.round, key) {
            KeyOutcome::Edited | KeyOutcome::Ignored => {}
            KeyOutcome::Submitted(submission) => {
                if let Some(end) = submission.end {
                    let style = if end.outcome == RoundOutcome::Won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(&end.message(), style);
                    self.reset_timer.schedule(&self.round, self.reset_delay);
                }
            }
            KeyOutcome::Rejected(err) => self.report(&err),
        }
    }

    /// Start a new round now, dropping any scheduled reset
    pub fn new_round(&mut self) {
        self.reset_timer.cancel();
        self.round.start_new_round();
        self.messages.clear();
        self.add_message("New round started!", MessageStyle::Info);
    }

    /// Fire the scheduled reset if it is due
    pub fn tick(&mut self, now: Instant) {
        if self.reset_timer.tick(&mut self.round, now) {
            self.messages.clear();
            self.add_message("New round started!", MessageStyle::Info);
        }
    }

    /// How long to wait for input before calling [`App::tick`] again
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.reset_timer
            .poll_timeout(now)
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL))
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn report(&mut self, err: &GameError) {
        match err {
            GameError::InvalidSubmission { word } => {
                self.add_message(&format!("'{word}' is not in the word list"), MessageStyle::Error);
            }
            GameError::InvalidTransition(TransitionError::Incomplete(_)) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            // Typing past the end, deleting nothing and keys after the
            // round ended are silently ignored
            other => debug!(%other, "key ignored"),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_action(map_key(key));
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn dictionary() -> Dictionary {
        Dictionary::from_candidates(["crane", "slate", "irate"]).unwrap()
    }

    fn app(dict: &Dictionary) -> App<'_> {
        let config = GameConfig {
            seed: Some(1),
            reset_delay_ms: 0,
            ..GameConfig::default()
        };
        let mut app = App::new(dict, &config).unwrap();
        app.round.start_round_with(Word::new("crane").unwrap());
        app
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Action {
        map_key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn key_mapping() {
        assert_eq!(
            press(KeyCode::Char('a'), KeyModifiers::NONE),
            Action::Key(KeyInput::Letter('a'))
        );
        assert_eq!(
            press(KeyCode::Char('r'), KeyModifiers::CONTROL),
            Action::Key(KeyInput::RandomWord)
        );
        assert_eq!(
            press(KeyCode::Char('o'), KeyModifiers::CONTROL),
            Action::Key(KeyInput::Opener)
        );
        assert_eq!(press(KeyCode::Char('n'), KeyModifiers::CONTROL), Action::NewRound);
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), Action::Quit);
        assert_eq!(
            press(KeyCode::Backspace, KeyModifiers::NONE),
            Action::Key(KeyInput::Delete)
        );
        assert_eq!(
            press(KeyCode::F(1), KeyModifiers::NONE),
            Action::Key(KeyInput::Other)
        );
    }

    #[test]
    fn win_schedules_reset_and_tick_restarts() {
        let dict = dictionary();
        let mut app = app(&dict);

        app.handle_action(Action::Key(KeyInput::Opener));
        app.handle_action(Action::Key(KeyInput::Submit));
        assert_eq!(app.round.outcome(), RoundOutcome::Won);
        assert!(app.reset_timer.is_pending());
        assert_eq!(app.messages.last().unwrap().text, "You win.");

        app.tick(Instant::now() + Duration::from_millis(1));
        assert_eq!(app.round.outcome(), RoundOutcome::InProgress);
        assert!(!app.reset_timer.is_pending());
    }

    #[test]
    fn manual_new_round_cancels_reset() {
        let dict = dictionary();
        let mut app = app(&dict);

        app.handle_action(Action::Key(KeyInput::Opener));
        app.handle_action(Action::Key(KeyInput::Submit));
        app.handle_action(Action::NewRound);
        assert!(!app.reset_timer.is_pending());
        let round_id = app.round.round_id();

        app.tick(Instant::now() + Duration::from_secs(5));
        assert_eq!(app.round.round_id(), round_id);
    }

    #[test]
    fn unknown_word_reports_error() {
        let dict = dictionary();
        let mut app = app(&dict);

        for c in "zzzzz".chars() {
            app.handle_action(Action::Key(KeyInput::Letter(c)));
        }
        app.handle_action(Action::Key(KeyInput::Submit));

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(app.round.state().attempts().is_empty());
        assert_eq!(app.round.state().current_input(), "ZZZZZ");
    }
}
