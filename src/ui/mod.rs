//! Terminal output, theming, and UI abstraction.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for capturing output in tests
//!
//! Unlike a setup runner, a diagnostic report is the product of this tool,
//! so warnings and failure lines print to stdout alongside everything else;
//! the exit code is the machine-readable verdict.

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::{Output, OutputMode};
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DoctorTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain report line.
    fn message(&mut self, msg: &str);

    /// Display an indented per-item report line (hidden in quiet mode).
    fn detail(&mut self, msg: &str);

    /// Display a success statement (icon added by the implementation).
    fn success(&mut self, msg: &str);

    /// Display a warning statement.
    fn warning(&mut self, msg: &str);

    /// Display an error statement.
    fn error(&mut self, msg: &str);

    /// Show a section banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Create the appropriate UI for the execution context.
pub fn create_ui(is_interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if is_interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
