//! Selection signals coming from the gallery UI.
//!
//! A viewer picks an example either by position or by name. Names are
//! never purely numeric (the registry rejects those), so any string that
//! parses as an integer is an index.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An index or a name identifying one example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Position in registration order. Signed so that negative input
    /// reaches the registry and is reported as out of range.
    Index(i64),
    /// Example identifier.
    Name(String),
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<i64>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Name(trimmed.to_string()),
        })
    }
}

impl From<&str> for Selection {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{}", index),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}
