//! Data set manifest definitions.
//!
//! The manifest (`registry.yml`) fixes the registration order of the
//! examples and maps each name to the file holding its source.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

use crate::error::{GalleryError, Result};
use crate::registry::entry::ExampleEntry;

/// File name of the manifest inside a data set directory.
pub const MANIFEST_FILE: &str = "registry.yml";

/// Newest manifest version this crate understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Manifest describing a data set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryManifest {
    /// Manifest version.
    #[serde(default = "default_manifest_version")]
    pub version: u32,

    /// Examples in registration order.
    #[serde(default)]
    pub examples: Vec<ManifestEntry>,
}

fn default_manifest_version() -> u32 {
    1
}

/// One example as listed in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Example identifier.
    pub name: String,

    /// Source file, relative to the manifest.
    pub file: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

impl GalleryManifest {
    /// Parse a manifest. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let manifest: Self =
            serde_yaml::from_str(content).map_err(|e| GalleryError::ManifestParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if manifest.version > SUPPORTED_VERSION {
            return Err(GalleryError::ManifestParseError {
                path: path.to_path_buf(),
                message: format!(
                    "unsupported manifest version {} (newest supported is {})",
                    manifest.version, SUPPORTED_VERSION
                ),
            });
        }

        Ok(manifest)
    }

    /// Example names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.examples.iter().map(|e| e.name.as_str()).collect()
    }

    /// Read every listed source through `read` and build the entries.
    ///
    /// `read` receives the checked relative file path. Entries come back in
    /// manifest order.
    pub fn into_entries<F>(self, mut read: F) -> Result<Vec<ExampleEntry>>
    where
        F: FnMut(&Path) -> Result<String>,
    {
        let mut entries = Vec::with_capacity(self.examples.len());
        for item in self.examples {
            let relative = checked_relative_path(&item.name, &item.file)?;
            let source = read(relative)?;
            let file_name = relative
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(item.file.as_str())
                .to_string();

            let mut entry = ExampleEntry::new(item.name, source).with_file(file_name);
            entry.description = item.description;
            entries.push(entry);
        }
        Ok(entries)
    }
}

/// Source files must stay inside the data set directory.
fn checked_relative_path<'a>(name: &str, file: &'a str) -> Result<&'a Path> {
    let path = Path::new(file);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if file.is_empty() || escapes {
        return Err(GalleryError::invariant(format!(
            "example '{}' points outside the data set: '{}'",
            name, file
        )));
    }
    Ok(path)
}
