//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which builds the
//! example registry once and lends it to the command that needs it.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod show;

pub use dispatcher::{load_registry, Command, CommandDispatcher, CommandResult};
