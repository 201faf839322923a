//! TUI rendering with ratatui
//!
//! Board, countdown, keyboard and round summary for the game screen.

use super::app::{App, MessageStyle};
use crate::config::WORD_LENGTH;
use crate::core::{KeyboardStatus, Verdict};
use crate::game::{GuessRecord, Round};
use crate::output::{format_clock, share_text};
use crate::scores::{KeyValueStore, Outcome, ScoreRecord};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app.session.round(), main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app.session.round().keyboard(), chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("LEX∞INFINITE")
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

fn verdict_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn guess_line(record: &GuessRecord) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (letter, &verdict) in record
        .word()
        .display()
        .chars()
        .zip(record.feedback().verdicts())
    {
        spans.push(Span::styled(format!(" {letter} "), verdict_style(Some(verdict))));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn input_line(input: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    let mut letters = input.chars();
    for _ in 0..WORD_LENGTH {
        let cell = letters.next().map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
        spans.push(Span::styled(
            cell,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn empty_line() -> Line<'static> {
    Line::styled(
        " ·  ".repeat(WORD_LENGTH),
        Style::default().fg(Color::DarkGray),
    )
}

fn render_board(f: &mut Frame, round: &Round, area: Rect) {
    let max_guesses = round.config().max_guesses;
    let mut lines = Vec::with_capacity(max_guesses * 2);

    for row in 0..max_guesses {
        let line = match round.history().get(row) {
            Some(record) => guess_line(record),
            None if row == round.history().len() && !round.phase().is_terminal() => {
                input_line(round.input())
            }
            None => empty_line(),
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Guess {}/{} ",
                round.history().len(),
                max_guesses
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Countdown
            Constraint::Min(5),    // Messages or round summary
        ])
        .split(area);

    render_clock(f, app.session.round(), chunks[0]);

    match &app.last_record {
        Some(record) => render_round_over(f, app.session.round(), record, chunks[1]),
        None => render_messages(f, app, chunks[1]),
    }
}

fn render_clock(f: &mut Frame, round: &Round, area: Rect) {
    let remaining = round.time_remaining();
    let total = round.config().round_seconds.max(1);
    let percent = u16::try_from(u64::from(remaining) * 100 / u64::from(total)).unwrap_or(100);

    let color = match remaining {
        0..=10 => Color::Red,
        11..=60 => Color::Yellow,
        _ => Color::Cyan,
    };
    let title = if round.timer_generation().is_some() {
        " ⏱ Time Left "
    } else {
        " ⏱ Starts on first guess "
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent.min(100))
        .label(format_clock(remaining));

    f.render_widget(gauge, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_round_over(f: &mut Frame, round: &Round, record: &ScoreRecord, area: Rect) {
    let (title, color) = match record.outcome() {
        Outcome::Won => (" 🎉 SOLVED! 🎉 ", Color::Green),
        Outcome::Lost => (" Game Over ", Color::Red),
        Outcome::TimedOut => (" ⌛ Time's Up ", Color::Yellow),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                record.word().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(share_text(round).lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press 'n' for a new game, 'c' to clear stats or 'q' to quit",
        Style::default().fg(Color::DarkGray),
    ));

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(panel, area);
}

/// Keyboard rows as styled spans, each key colored by its best-known status
fn keyboard_lines(status: &KeyboardStatus) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|key| {
                    [
                        Span::styled(format!(" {key} "), verdict_style(status.get(key))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, status: &KeyboardStatus, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let summary = app.session.scores().summary();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        summary.played,
        summary.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let streak_text = format!(
        "Streak: {} (best {})",
        summary.current_streak, summary.best_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let help_text = if app.phase().is_terminal() {
        "n: New Game | c: Clear Stats | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
