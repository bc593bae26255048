//! # Notices
//!
//! Human-readable status lines emitted by register operations.
//!
//! The core never writes to stdout itself. Callers hand in a sink:
//! the session binary passes a console writer, tests pass a `Vec<String>`.

/// Receives one status line per call, without a trailing newline.
pub trait NoticeSink {
    fn notice(&mut self, message: &str);
}

/// Captures notices in order.
impl NoticeSink for Vec<String> {
    fn notice(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<S: NoticeSink + ?Sized> NoticeSink for &mut S {
    fn notice(&mut self, message: &str) {
        (**self).notice(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_twice(sink: &mut impl NoticeSink) {
        sink.notice("first");
        sink.notice("second");
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut captured: Vec<String> = Vec::new();
        emit_twice(&mut captured);
        assert_eq!(captured, vec!["first", "second"]);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut captured: Vec<String> = Vec::new();
        {
            let mut borrowed = &mut captured;
            emit_twice(&mut borrowed);
        }
        assert_eq!(captured.len(), 2);
    }
}
