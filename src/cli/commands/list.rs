//! List command implementation.
//!
//! The `grid-gallery list` command lists the registered examples in
//! registration order.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::registry::ExampleRegistry;
use crate::ui::theme::GalleryTheme;
use crate::ui::{should_use_colors, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// One row of `list --json`.
#[derive(Debug, Serialize)]
struct ListItem<'a> {
    index: usize,
    name: &'a str,
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    lines: usize,
}

/// The list command implementation.
pub struct ListCommand<'a> {
    registry: &'a ExampleRegistry,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(registry: &'a ExampleRegistry, args: ListArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let items: Vec<ListItem<'_>> = self
                .registry
                .entries()
                .iter()
                .enumerate()
                .map(|(index, entry)| ListItem {
                    index,
                    name: &entry.name,
                    file: &entry.file,
                    language: entry.language(),
                    description: entry.description.as_deref(),
                    lines: entry.line_count(),
                })
                .collect();
            ui.output(&serde_json::to_string_pretty(&items)?);
            return Ok(CommandResult::success());
        }

        // Bare names keep quiet output scriptable
        if ui.output_mode() == OutputMode::Quiet {
            for (name, _) in self.registry.all() {
                ui.output(name);
            }
            return Ok(CommandResult::success());
        }

        if self.registry.is_empty() {
            ui.warning(&format!("No examples registered ({})", self.registry.origin()));
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            GalleryTheme::new()
        } else {
            GalleryTheme::plain()
        };

        ui.show_header(&format!(
            "{} examples ({})",
            self.registry.count(),
            self.registry.origin()
        ));

        for (index, entry) in self.registry.entries().iter().enumerate() {
            ui.message(&theme.format_example(index, &entry.name, entry.language()));
            if let Some(ref desc) = entry.description {
                ui.message(&format!("      {}", theme.dim.apply_to(desc)));
            }
        }

        ui.hint("Run 'grid-gallery show <INDEX|NAME>' to view a source");

        Ok(CommandResult::success())
    }
}
