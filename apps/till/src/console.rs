//! # Console Output
//!
//! Line-oriented writer for the session transcript. Also the production
//! [`NoticeSink`]: register notices go through here to stdout.

use std::io::{self, Write};

use till_core::NoticeSink;
use tracing::warn;

/// Writes whole lines, flushing after each one.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        ConsoleSink { writer }
    }

    /// Writes `message` followed by a single `\n`.
    pub fn line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()
    }

    /// Writes `prompt` with no newline.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Notices cannot fail from the register's point of view; a broken
/// console is logged instead.
impl<W: Write> NoticeSink for ConsoleSink<W> {
    fn notice(&mut self, message: &str) {
        if let Err(err) = self.line(message) {
            warn!(%err, message, "Failed to write notice");
        }
    }
}
