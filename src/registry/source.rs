//! Origin of a loaded data set.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Where a registry's examples were loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DataSource {
    /// Examples embedded in the binary.
    Builtin,
    /// Examples read from a data directory on disk.
    Directory {
        /// Directory holding `registry.yml`.
        path: PathBuf,
    },
    /// Examples handed to the registry directly by the caller.
    Inline,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in"),
            Self::Directory { path } => write!(f, "{}", path.display()),
            Self::Inline => write!(f, "inline"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_builtin() {
        assert_eq!(DataSource::Builtin.to_string(), "built-in");
    }

    #[test]
    fn display_directory_shows_path() {
        let source = DataSource::Directory {
            path: PathBuf::from("/srv/gallery"),
        };
        assert_eq!(source.to_string(), "/srv/gallery");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(DataSource::Builtin).unwrap();
        assert_eq!(json["type"], "builtin");
    }
}
