//! Built-in examples embedded at compile time.

use crate::error::{GalleryError, Result};
use crate::registry::entry::ExampleEntry;
use crate::registry::manifest::{GalleryManifest, MANIFEST_FILE};
use include_dir::{include_dir, Dir};
use std::path::Path;

/// Embedded data set directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Load the built-in manifest.
pub fn load_manifest() -> Result<GalleryManifest> {
    let manifest_file =
        TEMPLATES_DIR
            .get_file(MANIFEST_FILE)
            .ok_or_else(|| GalleryError::ManifestNotFound {
                path: Path::new("templates").join(MANIFEST_FILE),
            })?;

    let content = manifest_file
        .contents_utf8()
        .ok_or_else(|| GalleryError::ManifestParseError {
            path: Path::new("templates").join(MANIFEST_FILE),
            message: "Invalid UTF-8".to_string(),
        })?;

    GalleryManifest::parse(content, &Path::new("templates").join(MANIFEST_FILE))
}

/// Load all built-in examples in registration order.
pub fn load_entries() -> Result<Vec<ExampleEntry>> {
    let entries = load_manifest()?.into_entries(read_embedded)?;
    tracing::debug!("Loaded {} built-in examples", entries.len());
    Ok(entries)
}

fn read_embedded(relative: &Path) -> Result<String> {
    let file = TEMPLATES_DIR.get_file(relative).ok_or_else(|| {
        GalleryError::invariant(format!(
            "built-in source file missing: templates/{}",
            relative.display()
        ))
    })?;

    file.contents_utf8().map(str::to_string).ok_or_else(|| {
        GalleryError::invariant(format!(
            "built-in source file is not valid UTF-8: templates/{}",
            relative.display()
        ))
    })
}
