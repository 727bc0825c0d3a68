//! grid-gallery - Registry of ThiingsGrid usage examples.
//!
//! The registry pairs each example's stable name with its source template,
//! in a fixed order, so a documentation gallery can list the examples,
//! link to them by name, and preview their sources.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Example registry and data set loading
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use grid_gallery::registry::{ExampleRegistry, Selection};
//!
//! let registry = ExampleRegistry::builtin().unwrap();
//!
//! // A name persisted in a URL resolves back to the same example
//! let index = registry.resolve(&"EmojiFun".parse::<Selection>().unwrap()).unwrap();
//! assert_eq!(registry.name_at(index).unwrap(), "EmojiFun");
//! assert!(registry.source_at(index).unwrap().contains("<ThiingsGrid"));
//! ```

pub mod cli;
pub mod error;
pub mod registry;
pub mod ui;

pub use error::{GalleryError, Result};
pub use registry::{ExampleEntry, ExampleRegistry};
