//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{Challenge, GuessError, GuessOutcome, Outcome, RoundResult, WordBank};
use crate::output::formatters::share_text;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub challenge: Challenge<'a, StdRng>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letters go to the current round
    Guessing,
    /// Round won; waiting for Enter to move on
    RoundWon,
    /// Challenge finished; waiting for 'n' or 'q'
    ChallengeOver,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub challenges_played: usize,
    pub full_clears: usize,
    pub best_score: u32,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank, config: &'a GameConfig, rng: StdRng) -> Self {
        let challenge = Challenge::start(bank, config, rng);
        let mut app = Self {
            challenge,
            input_mode: InputMode::Guessing,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Guess the blockchain term one letter at a time.",
            MessageStyle::Info,
        );
        app.add_message("Press TAB to reveal the hint (forfeits the bonus).", MessageStyle::Info);
        app
    }

    /// Dispatch a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::ChallengeOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_challenge(),
                _ => {}
            },
            InputMode::RoundWon => {
                if key.code == KeyCode::Enter {
                    self.next_round();
                }
            }
            InputMode::Guessing => match key.code {
                KeyCode::Tab => self.reveal_hint(),
                KeyCode::Char(c) => self.guess(c),
                _ => {}
            },
        }
    }

    pub fn guess(&mut self, letter: char) {
        match self.challenge.guess_char(letter) {
            Ok(GuessOutcome::Correct) => {
                self.add_message(
                    &format!("'{}' is in the word!", letter.to_ascii_uppercase()),
                    MessageStyle::Success,
                );
            }
            Ok(GuessOutcome::Incorrect { lives_remaining }) => {
                self.add_message(
                    &format!(
                        "No '{}'. {lives_remaining} lives left.",
                        letter.to_ascii_uppercase()
                    ),
                    MessageStyle::Error,
                );
            }
            Ok(GuessOutcome::Finished(result)) => self.finish_round(result),
            Err(GuessError::RoundOver) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_round(&mut self, result: RoundResult) {
        let word = self.challenge.round().word().to_uppercase();
        match result {
            RoundResult::Won { score } => {
                self.add_message(
                    &format!("🎉 {word}! +{score} points"),
                    MessageStyle::Success,
                );
            }
            RoundResult::Lost => {
                self.add_message(
                    &format!("💀 Out of lives. The word was {word}."),
                    MessageStyle::Error,
                );
            }
        }

        if let Some(summary) = self.challenge.summary() {
            self.stats.challenges_played += 1;
            if summary.outcome == Outcome::AllRoundsWon {
                self.stats.full_clears += 1;
            }
            self.stats.best_score = self.stats.best_score.max(summary.total_score);

            self.input_mode = InputMode::ChallengeOver;
            self.add_message(&share_text(&summary), MessageStyle::Info);
            self.add_message("Press 'n' for a new challenge or 'q' to quit.", MessageStyle::Info);
        } else {
            self.input_mode = InputMode::RoundWon;
            self.add_message("Press Enter for the next round.", MessageStyle::Info);
        }
    }

    pub fn reveal_hint(&mut self) {
        if self.challenge.round().hint_revealed() {
            self.add_message("Hint already revealed.", MessageStyle::Info);
        } else if let Some(hint) = self.challenge.reveal_hint() {
            let text = format!("💡 {hint}");
            self.add_message(&text, MessageStyle::Info);
        }
    }

    pub fn next_round(&mut self) {
        match self.challenge.advance() {
            Ok(round) => {
                let difficulty = round.difficulty();
                let number = self.challenge.state().round_index() + 1;
                self.input_mode = InputMode::Guessing;
                self.add_message(
                    &format!("Round {number}: {difficulty} word"),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_challenge(&mut self) {
        self.challenge.restart();
        self.input_mode = InputMode::Guessing;
        self.messages.clear();
        self.add_message("New challenge started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
