// src/commands.rs

use crate::error::{EmotilogError, Result};
use crate::models::EmotionEntry;
use crate::store::EmotionLog;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// The six emotion buttons of the reference layout, used when the user
/// supplies no labels of their own.
pub const DEFAULT_LABELS: [&str; 6] = [
    "😊 Happy",
    "😢 Sad",
    "🙏 Grateful",
    "😠 Angry",
    "🎉 Excited",
    "😴 Tired",
];

/// One parsed line of session input.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Tap(usize),
    Custom(String),
    List,
    Summary,
    Count,
    Date(String),
    Clear,
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

fn parse_action(line: &str) -> Action {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Action::Nothing;
    }
    if let Ok(n) = trimmed.parse::<usize>() {
        return Action::Tap(n);
    }

    let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (trimmed, ""),
    };
    match cmd {
        // `log` with no argument records an empty label, which is valid.
        "log" | "l" => Action::Custom(rest.to_string()),
        "list" | "ls" => Action::List,
        "summary" | "s" => Action::Summary,
        "count" => Action::Count,
        "date" | "d" => Action::Date(rest.to_string()),
        "clear" => Action::Clear,
        "help" | "h" | "?" => Action::Help,
        "quit" | "q" | "exit" => Action::Quit,
        _ => Action::Unknown(trimmed.to_string()),
    }
}

/// Runs the interactive session: one store, owned here for the whole process
/// lifetime, mutated only from this loop.
pub fn run_session(labels: &[String]) -> Result<()> {
    let mut store = EmotionLog::new();
    print_menu(labels);

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_action(&line) {
            Action::Tap(n) => {
                if n >= 1 && n <= labels.len() {
                    tap(&mut store, &labels[n - 1]);
                } else {
                    eprintln!("No such button: {} (1-{})", n, labels.len());
                }
            }
            Action::Custom(label) => tap(&mut store, &label),
            Action::List => print_entries(&store.entries(), "No logs yet."),
            Action::Summary => print_summary(&store),
            Action::Count => println!("Total Logs: {}", store.count()),
            Action::Date(key) => {
                if let Err(e) = print_entries_on(&store, &key) {
                    eprintln!("{}", e);
                }
            }
            Action::Clear => {
                store.clear();
                debug!("log cleared");
                println!("✓ All logs cleared.");
            }
            Action::Help => print_menu(labels),
            Action::Quit => return Ok(()),
            Action::Nothing => {}
            Action::Unknown(input) => {
                eprintln!("Unknown command: {} (type 'help' for the menu)", input);
            }
        }
        prompt()?;
    }
    Ok(())
}

fn tap(store: &mut EmotionLog, label: &str) {
    store.append(label);
    debug!(label, total = store.count(), "emotion logged");
    println!("✓ {} logged!", label);
}

fn print_menu(labels: &[String]) {
    println!("How are you feeling?");
    for (i, label) in labels.iter().enumerate() {
        println!("  {}  {}", i + 1, label);
    }
    println!();
    println!("Commands:");
    println!("  1-{}              log that emotion", labels.len());
    println!("  log <label>      log a custom label");
    println!("  list             show all entries, newest first");
    println!("  summary          ranked frequency summary");
    println!("  count            total number of entries");
    println!("  date <MMM dd, yyyy>  entries for one day, e.g. 'date Jan 15, 2025'");
    println!("  clear            delete all entries");
    println!("  help, quit");
}

fn print_entries(entries: &[EmotionEntry], empty_message: &str) {
    if entries.is_empty() {
        println!("{}", empty_message);
        return;
    }
    for entry in entries {
        println!("{}  {}", entry.formatted_timestamp(), entry.label());
    }
}

fn print_summary(store: &EmotionLog) {
    let summary = store.summary();
    if summary.is_empty() {
        // An empty summary means nothing has been logged, not an error.
        println!("No logs yet. Start logging your emotions!");
    } else {
        print!("{}", summary);
    }
}

fn print_entries_on(store: &EmotionLog, date_key: &str) -> Result<()> {
    validate_date_key(date_key)?;
    let entries = store.entries_on(date_key);
    print_entries(&entries, &format!("No entries on {}.", date_key));
    Ok(())
}

fn validate_date_key(date_key: &str) -> Result<()> {
    NaiveDate::parse_from_str(date_key, "%b %d, %Y").map_err(|_| {
        EmotilogError::InvalidInput(format!(
            "Invalid date: '{}'. Use the 'MMM dd, yyyy' format, e.g. 'Jan 15, 2025'.",
            date_key
        ))
    })?;
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
