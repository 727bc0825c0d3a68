//! Check command implementation.
//!
//! The `grid-gallery check` command builds the registry from the chosen
//! data set and reports whether it is usable. Exit code 2 means the data
//! set itself is broken.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{load_registry, Command, CommandResult};

#[derive(Debug, Serialize)]
struct CheckReport {
    valid: bool,
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// The check command implementation.
pub struct CheckCommand {
    data_dir: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(data_dir: Option<PathBuf>, args: CheckArgs) -> Self {
        Self { data_dir, args }
    }

    fn source_label(&self) -> String {
        match &self.data_dir {
            Some(dir) => dir.display().to_string(),
            None => "built-in".to_string(),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = match load_registry(self.data_dir.as_deref()) {
            Ok(registry) => CheckReport {
                valid: true,
                source: registry.origin().to_string(),
                count: Some(registry.count()),
                error: None,
            },
            Err(e) if e.is_data_set_error() => CheckReport {
                valid: false,
                source: self.source_label(),
                count: None,
                error: Some(e.to_string()),
            },
            Err(e) => return Err(e),
        };

        if self.args.json {
            ui.output(&serde_json::to_string_pretty(&report)?);
        } else if let Some(ref error) = report.error {
            ui.error(error);
        } else {
            ui.success(&format!(
                "{} examples OK ({})",
                report.count.unwrap_or_default(),
                report.source
            ));
        }

        if report.valid {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MANIFEST_FILE;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_data_set_is_valid() {
        let mut ui = MockUI::new();
        let result = CheckCommand::new(None, CheckArgs::default())
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
        assert!(ui.has_success("5 examples OK (built-in)"));
    }

    #[test]
    fn duplicate_names_exit_with_two() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(MANIFEST_FILE),
            "examples:\n  - name: Twin\n    file: a.svelte\n  - name: Twin\n    file: b.svelte\n",
        )
        .unwrap();
        fs::write(temp.path().join("a.svelte"), "a").unwrap();
        fs::write(temp.path().join("b.svelte"), "b").unwrap();

        let mut ui = MockUI::new();
        let result = CheckCommand::new(Some(temp.path().to_path_buf()), CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("duplicate example name 'Twin'"));
    }

    #[test]
    fn missing_manifest_reported_as_json() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let result = CheckCommand::new(Some(temp.path().to_path_buf()), CheckArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        let value: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(value["valid"], false);
        assert!(value["error"]
            .as_str()
            .unwrap()
            .contains("Manifest not found"));
    }

    #[test]
    fn unreadable_source_is_reported_as_invalid() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(MANIFEST_FILE),
            "examples:\n  - name: Gone\n    file: gone.svelte\n",
        )
        .unwrap();

        let mut ui = MockUI::new();
        let result = CheckCommand::new(Some(temp.path().to_path_buf()), CheckArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        let value: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(value["valid"], false);
        assert!(value["error"].as_str().unwrap().contains("gone.svelte"));
    }
}
