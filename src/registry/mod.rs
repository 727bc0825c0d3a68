//! Example registry for the grid gallery.
//!
//! This module pairs example names with their source templates:
//! - Built-in examples (embedded in binary)
//! - Alternate data sets loaded from a directory (`registry.yml` + sources)
//!
//! A registry is constructed once, validated once, and then only read.
//! Names and sources are kept in one sequence of [`ExampleEntry`] records,
//! so positional lookups always return a matching pair.
//!
//! # Example
//!
//! ```
//! use grid_gallery::registry::ExampleRegistry;
//!
//! let registry = ExampleRegistry::builtin().unwrap();
//!
//! assert_eq!(registry.count(), 5);
//! assert_eq!(registry.name_at(2).unwrap(), "EmojiFun");
//! assert_eq!(registry.index_of_name("ColorfulGrid").unwrap(), 3);
//!
//! for (name, source) in registry.all() {
//!     println!("{}: {} bytes", name, source.len());
//! }
//! ```

pub mod builtin;
pub mod entry;
pub mod local;
pub mod manifest;
pub mod selection;
pub mod source;
pub mod store;

// Re-exports
pub use entry::ExampleEntry;
pub use local::DirectoryLoader;
pub use manifest::{GalleryManifest, ManifestEntry, MANIFEST_FILE};
pub use selection::Selection;
pub use source::DataSource;
pub use store::{ExampleRegistry, Pairs};
