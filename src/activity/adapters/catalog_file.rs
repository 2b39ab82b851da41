//! Loads activity definitions from a JSON catalog file.
//!
//! The file holds an array of objects:
//!
//! ```json
//! [
//!   {
//!     "name": "Chess Club",
//!     "description": "Learn strategies and compete in chess tournaments",
//!     "schedule": "Fridays, 3:30 PM - 5:00 PM",
//!     "max_participants": 12,
//!     "participants": ["michael@mergington.edu"]
//!   }
//! ]
//! ```
//!
//! `participants` may be omitted for an empty roster.

use crate::activity::domain::{
    ActivityDefinition, ActivityDomainError, ActivityName, Capacity, ParticipantEmail,
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::Deserialize;
use thiserror::Error;

/// Errors returned while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The path does not name a file.
    #[error("catalog path has no file name: {0}")]
    NotAFile(Utf8PathBuf),

    /// The file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid catalog document.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry failed domain validation.
    #[error("invalid catalog entry: {0}")]
    Invalid(#[from] ActivityDomainError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogEntry {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

impl TryFrom<CatalogEntry> for ActivityDefinition {
    type Error = ActivityDomainError;

    fn try_from(entry: CatalogEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            name: ActivityName::new(entry.name)?,
            description: entry.description,
            schedule: entry.schedule,
            capacity: Capacity::new(entry.max_participants)?,
            participants: entry
                .participants
                .into_iter()
                .map(ParticipantEmail::new)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Parses activity definitions from a JSON catalog document.
///
/// # Errors
///
/// Returns [`CatalogLoadError::Parse`] for malformed JSON or
/// [`CatalogLoadError::Invalid`] when an entry fails validation.
pub fn parse_catalog(json: &str) -> Result<Vec<ActivityDefinition>, CatalogLoadError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    Ok(entries
        .into_iter()
        .map(ActivityDefinition::try_from)
        .collect::<Result<_, _>>()?)
}

/// Reads and parses the catalog file at `path`.
///
/// # Errors
///
/// Returns [`CatalogLoadError`] when the file cannot be opened, read, or
/// parsed.
pub fn load_catalog(path: &Utf8Path) -> Result<Vec<ActivityDefinition>, CatalogLoadError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CatalogLoadError::NotAFile(path.to_owned()))?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };

    let read_error = |source: std::io::Error| CatalogLoadError::Read {
        path: path.to_owned(),
        source,
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(file_name).map_err(read_error)?;
    parse_catalog(&contents)
}
