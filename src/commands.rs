use anyhow::{Context, Result};
use log::{debug, error, warn};
use std::io::BufRead;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::panel::Panel;

pub const HELP: &str = "Commands: t(oggle) | r(efresh) | s(tatus) | h(elp) | q(uit)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Refresh,
    Status,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_lowercase();
        let command = match word.as_str() {
            "" => return None,
            "t" | "toggle" => Command::Toggle,
            "r" | "refresh" => Command::Refresh,
            "s" | "status" => Command::Status,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.trim().to_string()),
        };
        Some(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEnd {
    Quit,
    Closed,
}

/// Read standard input on a dedicated thread so a pending read never holds
/// up runtime shutdown.
pub fn spawn_stdin_reader() -> Result<mpsc::UnboundedReceiver<String>> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Error reading standard input: {}", e);
                        break;
                    }
                }
            }
            debug!("stdin reader finished");
        })
        .context("Failed to spawn stdin reader")?;

    Ok(rx)
}

/// Dispatch commands until `quit` or the end of input.
///
/// Each toggle runs as its own task, so a second toggle issued while the
/// first is still in flight overlaps with it.
pub async fn read_commands(panel: Arc<Panel>, mut input: mpsc::UnboundedReceiver<String>) -> InputEnd {
    while let Some(line) = input.recv().await {
        match Command::parse(&line) {
            None => {}
            Some(Command::Toggle) => {
                let panel = panel.clone();
                tokio::spawn(async move { panel.toggle().await });
            }
            Some(Command::Refresh) => panel.refresh().await,
            Some(Command::Status) => panel.show().await,
            Some(Command::Help) => println!("{}", HELP),
            Some(Command::Quit) => return InputEnd::Quit,
            Some(Command::Unknown(command)) => {
                warn!("Unknown command: {}", command);
                println!("{}", HELP);
            }
        }
    }
    InputEnd::Closed
}
