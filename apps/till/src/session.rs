//! # Register Session
//!
//! Drives one [`Register`] from a stream of command lines.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Loop                                     │
//! │                                                                         │
//! │  read_line ──► Command::parse_line ──► execute ──► console line(s)     │
//! │      ▲               │                    │                             │
//! │      │               └── error ───────────┴──► "error: <message>"      │
//! │      │                                          (session continues)     │
//! │      └──────────────────────────────────────────────────────────────   │
//! │                                                                         │
//! │  EOF or `quit` ends the loop. I/O failures end it with an error.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use till_core::{Register, RegisterSummary};
use tracing::{debug, warn};

use crate::command::{Command, HELP_LINES};
use crate::config::SessionConfig;
use crate::console::ConsoleSink;
use crate::error::{AppError, AppResult};

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines that parsed into a command.
    pub commands: usize,
    /// Lines that were reported as `error: ...`.
    pub errors: usize,
}

/// A register plus the console it reports to.
#[derive(Debug)]
pub struct Session<W: Write> {
    register: Register,
    console: ConsoleSink<W>,
    prompt: bool,
}

impl<W: Write> Session<W> {
    /// Opens a session with a fresh register.
    pub fn new(config: &SessionConfig, console: ConsoleSink<W>) -> Self {
        Session {
            register: Register::new(config.discount),
            console,
            prompt: config.prompt,
        }
    }

    pub fn register(&self) -> &Register {
        &self.register
    }

    pub fn into_console(self) -> ConsoleSink<W> {
        self.console
    }

    /// Reads and executes commands until EOF or `quit`.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> AppResult<SessionStats> {
        let mut stats = SessionStats::default();
        let mut line = String::new();

        loop {
            if self.prompt {
                self.console.prompt("> ")?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            let command = match Command::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    self.report(&err, &mut stats)?;
                    continue;
                }
            };

            stats.commands += 1;
            match self.execute(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => self.report(&err, &mut stats)?,
            }
        }

        Ok(stats)
    }

    /// Executes a single command against the register.
    pub fn execute(&mut self, command: Command) -> AppResult<Flow> {
        match command {
            Command::Add {
                title,
                price,
                quantity,
            } => {
                self.register.add_item(&title, price, quantity)?;
                self.console
                    .line(&format!("Added {} x {}", quantity, title))?;
            }
            Command::Discount => {
                self.register.apply_discount(&mut self.console);
            }
            Command::Void => {
                let message = match self.register.void_last_transaction() {
                    Some(title) => format!("Voided {}", title),
                    None => "Nothing to void".to_string(),
                };
                self.console.line(&message)?;
            }
            Command::Total => {
                let message = format!("Total: {}", self.register.total());
                self.console.line(&message)?;
            }
            Command::Items => {
                let message = if self.register.is_empty() {
                    "(no items)".to_string()
                } else {
                    self.register.items().join(", ")
                };
                self.console.line(&message)?;
            }
            Command::Summary => {
                let json = serde_json::to_string(&RegisterSummary::from(&self.register))?;
                self.console.line(&json)?;
            }
            Command::Help => {
                for help in HELP_LINES {
                    self.console.line(help)?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &AppError, stats: &mut SessionStats) -> AppResult<()> {
        warn!(code = ?err.code, "{}", err.message);
        stats.errors += 1;
        self.console.line(&format!("error: {}", err))?;
        Ok(())
    }
}
