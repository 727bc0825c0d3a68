//! Loading an alternate data set from a directory on disk.
//!
//! The directory uses the same layout as the built-in `templates/`:
//! a `registry.yml` manifest plus the source files it lists.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};
use crate::registry::entry::ExampleEntry;
use crate::registry::manifest::{GalleryManifest, MANIFEST_FILE};

/// Loader for a data set directory.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    /// Create a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the manifest.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Read and parse the manifest.
    pub fn load_manifest(&self) -> Result<GalleryManifest> {
        let path = self.manifest_path();
        if !path.is_file() {
            return Err(GalleryError::ManifestNotFound { path });
        }

        let content = fs::read_to_string(&path)?;
        GalleryManifest::parse(&content, &path)
    }

    /// Load all examples in manifest order.
    pub fn load_entries(&self) -> Result<Vec<ExampleEntry>> {
        let manifest = self.load_manifest()?;
        tracing::debug!(
            "Loading {} examples from {}",
            manifest.examples.len(),
            self.root.display()
        );

        manifest.into_entries(|relative| {
            let path = self.root.join(relative);
            fs::read_to_string(&path).map_err(|e| {
                GalleryError::invariant(format!(
                    "cannot read example source {}: {}",
                    path.display(),
                    e
                ))
            })
        })
    }
}
