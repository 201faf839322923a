//! Simple line-mode game
//!
//! Text-based play without the TUI. A reader thread forwards stdin lines and the
//! main loop interleaves them with countdown ticks, so every mutation still goes
//! through one ordered event queue.

use crate::config::{TICK_INTERVAL, WORD_LENGTH};
use crate::game::{Effect, EventQueue, GameEvent, GuessError, Session, Ticker};
use crate::output::{
    format_clock, print_board, print_history, print_round_over, print_summary, share_text,
};
use crate::scores::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::iter;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Idle wait when no tick is scheduled
const IDLE_WAIT: Duration = Duration::from_secs(3600);

/// Countdown values announced in line mode
const CLOCK_WARNINGS: [u32; 4] = [120, 60, 30, 10];

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Guess(String),
    NewGame,
    Stats,
    Share,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" => Self::NewGame,
            ":s" | ":stats" => Self::Stats,
            ":share" => Self::Share,
            ":h" | ":help" | "?" => Self::Help,
            _ => Self::Guess(line.trim().to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run_simple<S: KeyValueStore>(session: &mut Session<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 LEX∞INFINITE - Line Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();
    print_board(session.round());

    let lines = spawn_stdin_reader();
    let origin = Instant::now();
    let mut ticker = Ticker::new(TICK_INTERVAL);
    let mut queue = EventQueue::new();

    prompt()?;
    loop {
        ticker.sync(session.round().timer_generation(), origin.elapsed());
        let wait = ticker.until_due(origin.elapsed()).unwrap_or(IDLE_WAIT);

        let received = lines.recv_timeout(wait);
        queue_due_ticks(&mut ticker, origin.elapsed(), &mut queue);

        let command = match received {
            Ok(line) => Some(Command::parse(&line)),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        };

        let needs_prompt = command.is_some();
        match command {
            Some(Command::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(Command::Guess(word)) => {
                match guess_events(&word, session.round().input().len()) {
                    Ok(events) => queue.extend(events),
                    Err(e) => print_rejection(&e),
                }
            }
            Some(Command::NewGame) => queue.push(GameEvent::Reset),
            Some(Command::Stats) => {
                print_history(session.scores().all());
                print_summary(&session.scores().summary());
            }
            Some(Command::Share) => {
                if session.round().phase().is_terminal() {
                    println!("\n{}\n", share_text(session.round()));
                } else {
                    println!("Finish the round first!");
                }
            }
            Some(Command::Help) => print_help(),
            None => {}
        }

        let effects = queue.dispatch(session);
        report(session, &effects, needs_prompt);
        if needs_prompt || effects.iter().any(|e| matches!(e, Effect::Finished(_))) {
            prompt()?;
        }
    }
}

/// Events for one typed guess: clear `pending` letters, type the word, submit
///
/// A line that is not exactly one word long is refused before any key reaches
/// the round.
fn guess_events(line: &str, pending: usize) -> Result<Vec<GameEvent>, GuessError> {
    let letters = line.chars().filter(|c| !c.is_whitespace()).count();
    if letters != WORD_LENGTH {
        return Err(GuessError::Incomplete(letters));
    }
    Ok(iter::repeat_n(GameEvent::Backspace, pending)
        .chain(GameEvent::from_line(line))
        .collect())
}

fn print_rejection(error: &GuessError) {
    match error {
        GuessError::InvalidWord(word) => {
            println!("{}", format!("❌ Not in word list: {word}").red());
        }
        GuessError::Incomplete(len) => {
            println!("{}", format!("❌ Need {WORD_LENGTH} letters, got {len}").red());
        }
        GuessError::RoundOver => {}
    }
}

fn queue_due_ticks(ticker: &mut Ticker, now: Duration, queue: &mut EventQueue) {
    while let Some(generation) = ticker.poll(now) {
        queue.push(GameEvent::Tick { generation });
    }
}

fn report<S: KeyValueStore>(session: &Session<S>, effects: &[Effect], after_input: bool) {
    let mut board_dirty = false;

    for effect in effects {
        match effect {
            Effect::Rejected(error) => print_rejection(error),
            Effect::Scored | Effect::NewRound => board_dirty = true,
            Effect::Finished(record) => {
                print_round_over(session.round(), record);
                println!("\n{}\n", share_text(session.round()));
                println!("Type :new to play again or :quit to exit.");
                board_dirty = false;
            }
            Effect::Clock(left) if CLOCK_WARNINGS.contains(left) => {
                println!("\n{}", format!("⏱  {} remaining", format_clock(*left)).yellow());
            }
            _ => {}
        }
    }

    if board_dirty && after_input {
        print_board(session.round());
    }
}

fn print_help() {
    println!("Guess the hidden word. The clock starts after your first guess.");
    println!("  🟩 right letter, right spot   🟨 right letter, wrong spot   ⬛ not in word\n");
    println!("Commands: ':new' new game, ':stats' history, ':share' share text, ':quit' exit\n");
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// Forward stdin lines until EOF; the channel disconnects when input ends
fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
