//! # Till Entry Point
//!
//! ```bash
//! printf 'add macbook air 1000\ndiscount\n' | TILL_DISCOUNT_PERCENT=20 till
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match till_app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("till: {}", err);
            ExitCode::FAILURE
        }
    }
}
