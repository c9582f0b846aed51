//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and message panel.

use super::app::{App, MessageStyle};
use crate::core::LetterClassification;
use crate::game::{BoardView, Cell, KeyStyle, RowKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Keyboard rows; multi-letter entries are the special keys
const KEYBOARD: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "Random"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L", "⌫"],
    &["Z", "X", "C", "V", "B", "N", "M", "Opener", "Enter"],
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board + messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn class_style(class: Option<LetterClassification>) -> Style {
    let style = Style::new().add_modifier(Modifier::BOLD);
    match class {
        Some(LetterClassification::Correct) => style.fg(Color::Black).bg(Color::Green),
        Some(LetterClassification::Present) => style.fg(Color::Black).bg(Color::Yellow),
        Some(LetterClassification::NotFound) => style.fg(Color::White).bg(Color::DarkGray),
        None => style,
    }
}

fn cell_span(cell: Cell, kind: RowKind) -> Span<'static> {
    let letter = cell.letter.unwrap_or(if kind == RowKind::Active { '_' } else { '·' });
    Span::styled(format!(" {letter} "), class_style(cell.class))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = BoardView::from_state(app.round.state());

    let lines: Vec<Line> = board
        .rows
        .iter()
        .flat_map(|row| {
            let mut spans = Vec::with_capacity(row.cells.len() * 2);
            for cell in row.cells {
                spans.push(cell_span(cell, row.kind));
                spans.push(Span::raw(" "));
            }
            let marker = if row.kind == RowKind::Active { "▶ " } else { "  " };
            spans.insert(0, Span::styled(marker, Style::default().fg(Color::Cyan)));
            [Line::from(spans), Line::from("")]
        })
        .collect();

    let attempts = app.round.state().attempts().len();
    let title = format!(" Attempt {}/{} ", attempts, app.round.state().attempt_limit());

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn key_style(style: KeyStyle) -> Style {
    match style {
        KeyStyle::Unstyled => Style::new(),
        KeyStyle::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        KeyStyle::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        KeyStyle::NotFound => Style::new().fg(Color::DarkGray),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.round.state().hints();

    let lines: Vec<Line> = KEYBOARD
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&label| {
                    let style = match label.chars().next() {
                        Some(letter) if label.len() == 1 => key_style(hints.key_style(letter)),
                        _ => Style::default().fg(Color::Cyan),
                    };
                    [Span::styled(format!(" {label} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.reset_timer.is_pending() {
        "Next round starting... | Ctrl+N: New round now | Esc: Quit"
    } else {
        "Enter: Submit | ⌫: Delete | Ctrl+R: Random | Ctrl+O: Opener | Ctrl+N: New | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
