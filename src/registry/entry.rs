//! A single registered example.

use serde::Serialize;
use std::path::Path;

/// One gallery example: a stable name paired with its source template.
///
/// The source is opaque text. It is stored and returned exactly as
/// registered; nothing in this crate parses or validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleEntry {
    /// Unique identifier, used as display label and lookup key.
    pub name: String,

    /// File the source was registered from (e.g. `ColorfulGrid.svelte`).
    pub file: String,

    /// One-line human description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Verbatim template text.
    pub source: String,
}

impl ExampleEntry {
    /// Create an entry from a name and its source.
    ///
    /// The file name is derived from the example name with no extension.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            file: name.clone(),
            name,
            description: None,
            source: source.into(),
        }
    }

    /// Set the file the source came from.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Template language, taken from the file extension (`svelte`, `tsx`, ...).
    pub fn language(&self) -> Option<&str> {
        Path::new(&self.file).extension().and_then(|e| e.to_str())
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }
}
