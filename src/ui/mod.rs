//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing documents to stdout and status to stderr
//! - [`MockUI`] capturing everything for tests
//!
//! # Example
//!
//! ```
//! use subflow::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.emit("class: Workflow\n");
//! ui.success("Extracted 2 steps");
//!
//! assert_eq!(ui.emitted(), ["class: Workflow\n"]);
//! assert!(ui.successes().contains(&"Extracted 2 steps".to_string()));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, SubflowTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Set the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Write command output (a document, a listing) regardless of mode.
    fn emit(&mut self, text: &str);

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a detail line, shown only in verbose mode.
    fn detail(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
