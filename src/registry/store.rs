//! The example registry.
//!
//! [`ExampleRegistry`] holds the examples as a single sequence of
//! [`ExampleEntry`] records, so a name and its source can never drift
//! apart. It is built once, validated once, and read-only afterwards.

use std::collections::HashMap;
use std::iter::FusedIterator;
use std::path::Path;

use crate::error::{GalleryError, Result};
use crate::registry::builtin;
use crate::registry::entry::ExampleEntry;
use crate::registry::local::DirectoryLoader;
use crate::registry::selection::Selection;
use crate::registry::source::DataSource;

/// Immutable, index-aligned store of gallery examples.
#[derive(Debug, Clone)]
pub struct ExampleRegistry {
    entries: Vec<ExampleEntry>,
    by_name: HashMap<String, usize>,
    origin: DataSource,
}

impl ExampleRegistry {
    /// Build a registry from entries in registration order.
    ///
    /// Fails with `ConfigurationInvariantViolation` if a name is empty,
    /// contains whitespace, is purely numeric, or is registered twice.
    pub fn from_entries(entries: Vec<ExampleEntry>, origin: DataSource) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            validate_name(&entry.name, index)?;
            if let Some(previous) = by_name.insert(entry.name.clone(), index) {
                return Err(GalleryError::invariant(format!(
                    "duplicate example name '{}' at positions {} and {}",
                    entry.name, previous, index
                )));
            }
        }

        tracing::debug!("Example registry ready: {} examples ({})", entries.len(), origin);

        Ok(Self {
            entries,
            by_name,
            origin,
        })
    }

    /// Build a registry from two parallel lists.
    ///
    /// Position `i` of `names` pairs with position `i` of `sources`; the
    /// lists must have the same length.
    pub fn from_parallel<N, S>(names: Vec<N>, sources: Vec<S>) -> Result<Self>
    where
        N: Into<String>,
        S: Into<String>,
    {
        if names.len() != sources.len() {
            return Err(GalleryError::invariant(format!(
                "{} example names but {} sources",
                names.len(),
                sources.len()
            )));
        }

        let entries = names
            .into_iter()
            .zip(sources)
            .map(|(name, source)| ExampleEntry::new(name, source))
            .collect();

        Self::from_entries(entries, DataSource::Inline)
    }

    /// Build the registry from the data set compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_entries(builtin::load_entries()?, DataSource::Builtin)
    }

    /// Build the registry from a data set directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let entries = DirectoryLoader::new(dir).load_entries()?;
        Self::from_entries(
            entries,
            DataSource::Directory {
                path: dir.to_path_buf(),
            },
        )
    }

    /// Number of registered examples.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no examples.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifier at `index`.
    pub fn name_at(&self, index: usize) -> Result<&str> {
        self.entry_at(index).map(|e| e.name.as_str())
    }

    /// Source text at `index`, verbatim.
    pub fn source_at(&self, index: usize) -> Result<&str> {
        self.entry_at(index).map(|e| e.source.as_str())
    }

    /// Full entry at `index`.
    pub fn entry_at(&self, index: usize) -> Result<&ExampleEntry> {
        self.entries
            .get(index)
            .ok_or_else(|| GalleryError::index_out_of_range(index, self.entries.len()))
    }

    /// Position of the example registered as `name`.
    pub fn index_of_name(&self, name: &str) -> Result<usize> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GalleryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Entry registered as `name`.
    pub fn get(&self, name: &str) -> Result<&ExampleEntry> {
        let index = self.index_of_name(name)?;
        self.entry_at(index)
    }

    /// Resolve a UI selection to a position.
    pub fn resolve(&self, selection: &Selection) -> Result<usize> {
        match selection {
            Selection::Name(name) => self.index_of_name(name),
            Selection::Index(index) => usize::try_from(*index)
                .ok()
                .filter(|i| *i < self.entries.len())
                .ok_or(GalleryError::IndexOutOfRange {
                    index: *index,
                    count: self.entries.len(),
                }),
        }
    }

    /// `(name, source)` pairs in registration order.
    ///
    /// Each call starts a fresh pass; the iterator can also be cloned.
    pub fn all(&self) -> Pairs<'_> {
        Pairs {
            inner: self.entries.iter(),
        }
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[ExampleEntry] {
        &self.entries
    }

    /// Identifiers in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Where the examples were loaded from.
    pub fn origin(&self) -> &DataSource {
        &self.origin
    }
}

impl<'a> IntoIterator for &'a ExampleRegistry {
    type Item = (&'a str, &'a str);
    type IntoIter = Pairs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}

/// Iterator over `(name, source)` pairs, see [`ExampleRegistry::all`].
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    inner: std::slice::Iter<'a, ExampleEntry>,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|e| (e.name.as_str(), e.source.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Pairs<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|e| (e.name.as_str(), e.source.as_str()))
    }
}

impl ExactSizeIterator for Pairs<'_> {}

impl FusedIterator for Pairs<'_> {}

fn validate_name(name: &str, index: usize) -> Result<()> {
    if name.is_empty() {
        return Err(GalleryError::invariant(format!(
            "example at position {} has an empty name",
            index
        )));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(GalleryError::invariant(format!(
            "example name '{}' contains whitespace",
            name
        )));
    }
    // Numeric names would be read back as indices.
    if name.parse::<i64>().is_ok() {
        return Err(GalleryError::invariant(format!(
            "example name '{}' is numeric",
            name
        )));
    }
    Ok(())
}
