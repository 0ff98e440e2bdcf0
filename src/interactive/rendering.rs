//! TUI rendering with ratatui
//!
//! Gallows, masked word and challenge progress panels.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Difficulty;
use crate::output::formatters::{gallows, lives_bar, outcome_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(4), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⛓ ONCHAIN HANGMAN - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn tier_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.challenge.round();
    let state = app.challenge.state();
    let max = round.rules().max_incorrect;

    let mut lines: Vec<Line> = gallows(round.incorrect(), max)
        .lines()
        .map(|row| Line::from(row.to_string()))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        round.masked().to_uppercase(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Lives: "),
        Span::styled(
            lives_bar(round.lives_remaining(), max),
            Style::default().fg(Color::Red),
        ),
    ]));

    let hint_line = if round.hint_revealed() {
        Line::from(vec![
            Span::raw("Hint:  "),
            Span::styled(round.hint().to_string(), Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(Span::styled(
            format!(
                "{}x bonus active - TAB reveals the hint",
                round.rules().no_hint_multiplier
            ),
            Style::default().fg(Color::DarkGray),
        ))
    };
    lines.push(hint_line);

    let title = format!(
        " Round {}/{} - {} ",
        state.round_index() + 1,
        state.rounds(),
        round.difficulty()
    );

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(tier_color(round.difficulty()))),
        );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Challenge progress
            Constraint::Length(5), // Score
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let state = app.challenge.state();
    let cleared = state.rounds_cleared();
    let rounds = state.rounds().max(1);
    let percent = (cleared * 100 / rounds).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Challenge ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{cleared}/{} rounds cleared", state.rounds()));

    f.render_widget(gauge, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let state = app.challenge.state();
    let mut lines = vec![Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            state.total_score().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(summary) = app.challenge.summary() {
        lines.push(Line::from(Span::styled(
            outcome_label(summary.outcome),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let wrong = app.challenge.round().wrong_letters();
    if !wrong.is_empty() {
        let misses: String = wrong.iter().map(|c| c.to_ascii_uppercase()).collect();
        lines.push(Line::from(vec![
            Span::raw("Misses: "),
            Span::styled(misses, Style::default().fg(Color::Red)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let round = app.challenge.round();
    let word = round.word();

    let keys: Vec<Span> = ('a'..='z')
        .map(|ch| {
            let style = if !round.guessed().contains(&ch) {
                Style::default().fg(Color::White)
            } else if word.contains(ch) {
                Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
            } else {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            };
            Span::styled(format!("{} ", ch.to_ascii_uppercase()), style)
        })
        .collect();

    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Type a letter to guess ", Color::Yellow),
        InputMode::RoundWon => (" 🎉 Round cleared! Press Enter for the next round ", Color::Green),
        InputMode::ChallengeOver => (" Press 'n' for a new challenge or 'q' to quit ", Color::Magenta),
    };

    let keyboard = Paragraph::new(Line::from(keys))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Played: {} | Clears: {}",
        app.stats.challenges_played, app.stats.full_clears
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let best_text = format!("Best: {}", app.stats.best_score);
    f.render_widget(
        Paragraph::new(best_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | TAB: Hint | a-z: Guess",
        InputMode::RoundWon => "Esc: Quit | Enter: Next Round",
        InputMode::ChallengeOver => "q: Quit | n: New Challenge",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
