//! # Session Commands
//!
//! One command per input line.
//!
//! ## Grammar
//! ```text
//! add <title...> <price> [quantity]   ring up an item
//! discount                            apply the register discount
//! void                                void the most recent unit
//! total                               show the running total
//! items                               list purchased titles
//! summary                             register summary as JSON
//! help                                list commands
//! quit | exit                         end the session
//! ```
//!
//! Keywords are case-insensitive. Blank lines and `#` comments are skipped.
//!
//! ## Parsing `add`
//! Titles may contain spaces, so the numbers are read from the right:
//! ```text
//! add Ritz Crackers 5.0          → title "Ritz Crackers", price 5.0, qty 1
//! add Peanut Butter Cups 2.50 2  → title "Peanut Butter Cups", price 2.5, qty 2
//! add eggs $0.98                 → a leading `$` on the price is allowed
//! ```

use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Help text, one entry per line.
pub const HELP_LINES: &[&str] = &[
    "add <title> <price> [quantity]  ring up an item",
    "discount                        apply the register discount",
    "void                            void the most recent unit",
    "total                           show the running total",
    "items                           list purchased titles",
    "summary                         register summary as JSON",
    "help                            show this list",
    "quit                            end the session",
];

/// A parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        title: String,
        price: f64,
        quantity: i64,
    },
    Discount,
    Void,
    Total,
    Items,
    Summary,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. `Ok(None)` for blank lines and comments.
    pub fn parse_line(line: &str) -> AppResult<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let keyword = words
            .next()
            .ok_or_else(|| AppError::invalid_argument("empty command"))?;
        let args: Vec<&str> = words.collect();

        let command = match keyword.to_ascii_lowercase().as_str() {
            "add" => return parse_add(&args),
            "discount" => Command::Discount,
            "void" => Command::Void,
            "total" => Command::Total,
            "items" => Command::Items,
            "summary" => Command::Summary,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(AppError::unknown_command(keyword)),
        };

        if !args.is_empty() {
            return Err(AppError::invalid_argument(format!(
                "'{}' takes no arguments",
                keyword
            )));
        }
        Ok(command)
    }
}

fn parse_add(args: &[&str]) -> AppResult<Command> {
    if args.len() < 2 {
        return Err(AppError::invalid_argument(
            "usage: add <title> <price> [quantity]",
        ));
    }

    let last = args[args.len() - 1];
    let before_last = args[args.len() - 2];

    // `title price qty` needs at least one title word before the numbers
    if args.len() >= 3 {
        if let (Ok(quantity), Some(price)) = (last.parse::<i64>(), parse_price(before_last)) {
            return Ok(Command::Add {
                title: args[..args.len() - 2].join(" "),
                price,
                quantity,
            });
        }
    }

    let price = parse_price(last).ok_or_else(|| {
        AppError::invalid_argument(format!("price must be a number, got '{}'", last))
    })?;
    Ok(Command::Add {
        title: args[..args.len() - 1].join(" "),
        price,
        quantity: 1,
    })
}

fn parse_price(token: &str) -> Option<f64> {
    token.strip_prefix('$').unwrap_or(token).parse().ok()
}
