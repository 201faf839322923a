//! TUI application state and logic

use crate::config::TICK_INTERVAL;
use crate::game::{Effect, EventQueue, GameEvent, GuessError, Phase, Session, Ticker};
use crate::scores::{KeyValueStore, Outcome, ScoreRecord};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input when no tick is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Keep only this many messages
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: KeyValueStore> {
    pub session: Session<S>,
    pub messages: Vec<Message>,
    pub last_record: Option<ScoreRecord>,
    pub should_quit: bool,
    queue: EventQueue,
    ticker: Ticker,
    warned_detached: bool,
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
    Warning,
    Error,
}

impl<S: KeyValueStore> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            last_record: None,
            should_quit: false,
            queue: EventQueue::new(),
            ticker: Ticker::new(TICK_INTERVAL),
            warned_detached: false,
        };
        app.add_message("Welcome to LEX∞INFINITE!", MessageStyle::Info);
        app.add_message(
            "Type a word and press Enter. The clock starts with your first guess.",
            MessageStyle::Info,
        );
        app
    }

    /// Translate a key press into game events, queued behind any ticks already due
    pub fn handle_key(&mut self, key: KeyEvent, now: Duration) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        self.queue_due_ticks(now);

        let phase = self.session.round().phase();
        if phase.is_terminal() {
            match key.code {
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.queue.push(GameEvent::Reset),
                KeyCode::Char('c' | 'C') => self.clear_history(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => self.queue.push(GameEvent::Key(c)),
            KeyCode::Backspace => self.queue.push(GameEvent::Backspace),
            KeyCode::Enter => self.queue.push(GameEvent::Submit),
            _ => {}
        }
    }

    /// Queue due ticks and apply everything pending
    pub fn update(&mut self, now: Duration) {
        self.queue_due_ticks(now);
        let effects = self.queue.dispatch(&mut self.session);
        for effect in effects {
            self.apply(effect);
        }
        self.ticker.sync(self.session.round().timer_generation(), now);
    }

    /// How long the event loop may block before the next tick is due
    #[must_use]
    pub fn next_wait(&self, now: Duration) -> Duration {
        self.ticker
            .until_due(now)
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL))
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

    /// Wipe the stored score history
    pub fn clear_history(&mut self) {
        let removed = self.session.scores().len();
        match self.session.clear_scores() {
            Ok(()) => {
                self.add_message(&format!("Cleared {removed} stored rounds"), MessageStyle::Info);
            }
            Err(e) => {
                log::warn!("{e}");
                self.add_message(&format!("Could not clear scores: {e}"), MessageStyle::Error);
            }
        }
    }

    fn queue_due_ticks(&mut self, now: Duration) {
        self.ticker.sync(self.session.round().timer_generation(), now);
        while let Some(generation) = self.ticker.poll(now) {
            self.queue.push(GameEvent::Tick { generation });
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Rejected(GuessError::InvalidWord(word)) => {
                self.add_message(&format!("Not in word list: {word}"), MessageStyle::Error);
            }
            Effect::Rejected(GuessError::Incomplete(_)) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Effect::Clock(60) => self.add_message("One minute left!", MessageStyle::Warning),
            Effect::Clock(10) => self.add_message("10 seconds!", MessageStyle::Warning),
            Effect::Finished(record) => self.finished(record),
            Effect::NewRound => {
                self.messages.clear();
                self.last_record = None;
                self.add_message(
                    "New round! The clock starts with your first guess.",
                    MessageStyle::Info,
                );
            }
            _ => {}
        }
    }

    fn finished(&mut self, record: ScoreRecord) {
        match record.outcome() {
            Outcome::Won => {
                let celebration = match record.guess_count() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                self.add_message(
                    &format!("Game over! The word was {}", record.word()),
                    MessageStyle::Error,
                );
            }
            Outcome::TimedOut => {
                self.add_message(
                    &format!("⌛ Time's up! The word was {}", record.word()),
                    MessageStyle::Warning,
                );
            }
        }

        if self.session.scores().is_detached() && !self.warned_detached {
            self.warned_detached = true;
            self.add_message(
                "Scores could not be saved; keeping them for this session only",
                MessageStyle::Warning,
            );
        }
        self.add_message(
            "Press 'n' for a new game, 'c' to clear stats or 'q' to quit.",
            MessageStyle::Info,
        );
        self.last_record = Some(record);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.round().phase()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI failed: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    let origin = Instant::now();

    loop {
        app.update(origin.elapsed());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if app.should_quit {
            break;
        }

        if event::poll(app.next_wait(origin.elapsed()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, origin.elapsed());
        }
    }

    Ok(())
}
