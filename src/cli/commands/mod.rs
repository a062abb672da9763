//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations with the loaded settings.

pub mod completions;
pub mod dispatcher;
pub mod extract;
pub mod targets;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
