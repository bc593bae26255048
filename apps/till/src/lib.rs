//! # Till Session Library
//!
//! Runs a register session over stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! till_app/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── SessionConfig from TILL_* variables
//! ├── command.rs      ◄─── Line → Command parsing
//! ├── session.rs      ◄─── Command loop over one Register
//! ├── console.rs      ◄─── Line writer + NoticeSink for stdout
//! └── error.rs        ◄─── AppError for the session
//! ```
//!
//! ## Output Streams
//! stdout carries only the session transcript (notices, totals, errors).
//! All tracing output goes to stderr.

pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use command::Command;
pub use config::SessionConfig;
pub use console::ConsoleSink;
pub use error::{AppError, AppResult, ErrorCode};
pub use session::{Flow, Session, SessionStats};

/// Runs a session on the process stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr)
/// 2. Load `SessionConfig` from the environment
/// 3. Open a register with the configured discount
/// 4. Process commands until EOF or `quit`
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = SessionConfig::from_env()?;
    info!(
        discount = config.discount.percentage(),
        "Opening register session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&config, ConsoleSink::new(stdout.lock()));
    let stats = session.run(stdin.lock())?;

    info!(
        commands = stats.commands,
        errors = stats.errors,
        total = session.register().total().dollars(),
        "Register session closed"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every register mutation
/// - `RUST_LOG=till_core=trace` - Core crate only
/// - Default: warnings, plus session open/close
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,till_app=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
