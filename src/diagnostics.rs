//! Diagnostic reporting for mesh construction.
//!
//! The pipeline reports progress notes and anomalies through an injected
//! sink instead of a process-wide logger, so library callers decide where
//! (and whether) messages go. The default sink discards everything.

/// Receiver for diagnostic messages emitted during mesh construction.
pub trait DiagnosticSink {
    /// Informational progress note.
    fn info(&self, message: &str);

    /// Something looks wrong but a typed error will carry the details.
    fn warn(&self, message: &str);
}

/// Sink that discards all messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentDiagnostics;

impl DiagnosticSink for SilentDiagnostics {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

/// Sink that prints to the console: info to stdout, warnings to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDiagnostics;

impl DiagnosticSink for ConsoleDiagnostics {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("warning: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Sink that records messages, for asserting on diagnostics in tests.
    #[derive(Default)]
    pub struct RecordingDiagnostics {
        pub messages: RefCell<Vec<(&'static str, String)>>,
    }

    impl DiagnosticSink for RecordingDiagnostics {
        fn info(&self, message: &str) {
            self.messages.borrow_mut().push(("info", message.to_string()));
        }

        fn warn(&self, message: &str) {
            self.messages.borrow_mut().push(("warn", message.to_string()));
        }
    }

    #[test]
    fn test_recording_sink() {
        let sink = RecordingDiagnostics::default();
        sink.info("hello");
        sink.warn("uh oh");
        let messages = sink.messages.borrow();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], ("info", "hello".to_string()));
        assert_eq!(messages[1].0, "warn");
    }

    #[test]
    fn test_silent_sink_is_usable_as_dyn() {
        let sink: &dyn DiagnosticSink = &SilentDiagnostics;
        sink.info("dropped");
        sink.warn("dropped");
    }
}
