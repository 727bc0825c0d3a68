//! Show command implementation.
//!
//! The `grid-gallery show` command prints one example, selected by index
//! or by name.

use serde::Serialize;

use crate::cli::args::ShowArgs;
use crate::error::{GalleryError, Result};
use crate::registry::{ExampleEntry, ExampleRegistry, Selection};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
struct ShowItem<'a> {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(flatten)]
    entry: &'a ExampleEntry,
}

/// The show command implementation.
pub struct ShowCommand<'a> {
    registry: &'a ExampleRegistry,
    args: ShowArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(registry: &'a ExampleRegistry, args: ShowArgs) -> Self {
        Self { registry, args }
    }

    /// The parsed selection.
    pub fn selection(&self) -> Selection {
        let Ok(selection) = self.args.selection.parse::<Selection>();
        selection
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let selection = self.selection();
        tracing::debug!("Resolving selection {}", selection);

        let index = match self.registry.resolve(&selection) {
            Ok(index) => index,
            Err(GalleryError::NotFound { name }) => {
                ui.error(&format!("Unknown example: {}", name));
                ui.hint(&format!(
                    "Available examples: {}",
                    self.registry.names().join(", ")
                ));
                return Ok(CommandResult::failure(1));
            }
            Err(e @ GalleryError::IndexOutOfRange { .. }) => {
                ui.error(&e.to_string());
                if !self.registry.is_empty() {
                    ui.hint(&format!(
                        "Valid indices are 0 to {}",
                        self.registry.count() - 1
                    ));
                }
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let entry = self.registry.entry_at(index)?;

        if self.args.raw {
            ui.output(&entry.source);
            return Ok(CommandResult::success());
        }

        if self.args.json {
            let item = ShowItem {
                index,
                language: entry.language(),
                entry,
            };
            ui.output(&serde_json::to_string_pretty(&item)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!(
            "{} ({} of {})",
            entry.name,
            index + 1,
            self.registry.count()
        ));
        if let Some(ref desc) = entry.description {
            ui.message(desc);
        }
        ui.message(&format!("File: {}", entry.file));
        ui.message("");
        ui.output(&entry.source);

        Ok(CommandResult::success())
    }
}
