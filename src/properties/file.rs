//! `key=value` security property files.
//!
//! The format is small: one property per line, `#` or `!` at
//! the start of a line begins a comment, blank lines are skipped, and
//! whitespace around the key and the value is trimmed. When a key appears
//! more than once the last occurrence wins.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use super::MemoryStore;

/// Failure to read or parse a security property file.
#[derive(Debug)]
pub enum PropertiesError {
    /// The file could not be read.
    Io(io::Error),
    /// A non-comment line had no `=` separator.
    Malformed {
        /// 1-based line number of the offending line.
        line: usize,
    },
}

impl fmt::Display for PropertiesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read property file: {}", err),
            Self::Malformed { line } => {
                write!(f, "property file line {} has no `=` separator", line)
            }
        }
    }
}

impl std::error::Error for PropertiesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for PropertiesError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Parses property `contents`, returning the entries in file order.
///
/// Duplicates are returned as-is; collecting into a [`MemoryStore`] (or any
/// map) gives the last occurrence precedence.
pub fn parse_properties(contents: &str) -> Result<Vec<(String, String)>, PropertiesError> {
    let mut entries = Vec::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        // Only the first `=` separates; values are free to contain more.
        match line.split_once('=') {
            Some((key, value)) => entries.push((key.trim().to_owned(), value.trim().to_owned())),
            None => return Err(PropertiesError::Malformed { line: idx + 1 }),
        }
    }

    Ok(entries)
}

/// Loads security properties from the file at `path`.
pub fn load_properties(path: impl AsRef<Path>) -> Result<MemoryStore, PropertiesError> {
    let path = path.as_ref();
    let store: MemoryStore = parse_properties(&fs::read_to_string(path)?)?
        .into_iter()
        .collect();
    log::debug!(
        "loaded {} security properties from {}",
        store.len(),
        path.display()
    );
    Ok(store)
}
