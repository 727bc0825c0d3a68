//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::error::Result;
use crate::registry::ExampleRegistry;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    data_dir: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a dispatcher reading examples from `data_dir`, or the
    /// built-in set when `None`.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self { data_dir }
    }

    /// Build the registry for this process.
    pub fn load_registry(&self) -> Result<ExampleRegistry> {
        load_registry(self.data_dir.as_deref())
    }

    /// Dispatch and execute a command.
    ///
    /// The registry is built once here and lent to the command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                let registry = self.load_registry()?;
                super::list::ListCommand::new(&registry, args.clone()).execute(ui)
            }
            Some(Commands::Show(args)) => {
                let registry = self.load_registry()?;
                super::show::ShowCommand::new(&registry, args.clone()).execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.data_dir.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let registry = self.load_registry()?;
                super::list::ListCommand::new(&registry, ListArgs::default()).execute(ui)
            }
        }
    }
}

/// Build a registry from `data_dir`, or the built-in set when `None`.
pub fn load_registry(data_dir: Option<&Path>) -> Result<ExampleRegistry> {
    match data_dir {
        Some(dir) => {
            tracing::debug!("Using data set at {}", dir.display());
            ExampleRegistry::from_dir(dir)
        }
        None => ExampleRegistry::builtin(),
    }
}
