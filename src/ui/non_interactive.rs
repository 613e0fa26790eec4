//! Non-interactive UI for CI/headless environments.
//!
//! Same report, no styling. Everything still goes to stdout: in a log-based
//! environment the report lines must stay in order, and splitting
//! severities across streams would interleave them.

use super::{Output, OutputMode, StatusKind, UserInterface};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    out: Output,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Output::new(mode),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.out.mode()
    }

    fn message(&mut self, msg: &str) {
        self.out.println(msg);
    }

    fn detail(&mut self, msg: &str) {
        self.out.detail(msg);
    }

    fn success(&mut self, msg: &str) {
        self.out.println(&StatusKind::Success.line(msg));
    }

    fn warning(&mut self, msg: &str) {
        self.out.println(&StatusKind::Warning.line(msg));
    }

    fn error(&mut self, msg: &str) {
        println!("{}", StatusKind::Failed.line(msg));
    }

    fn show_header(&mut self, title: &str) {
        let rule = "=".repeat(super::theme::HEADER_WIDTH);
        self.out.println(&rule);
        self.out.println(title);
        self.out.println(&rule);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
