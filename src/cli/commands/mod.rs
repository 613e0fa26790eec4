//! Command implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod packages;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use packages::PackagesCommand;
