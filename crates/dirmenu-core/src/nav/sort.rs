//! Sort methods for directory entries.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::fs::entry::Entry;

/// Which way to step through [`SortMethod::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The named comparators a menu can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMethod {
    /// Lexicographic by base name.
    #[default]
    Name,
    /// Directories first, then files by the text after their first `.`.
    Extension,
    /// Largest first.
    Size,
    /// Most recently accessed first.
    TimeAccessed,
    /// Most recently modified first.
    TimeModified,
    /// Most recent status change first.
    TimeChanged,
}

impl SortMethod {
    /// Declaration order used for cycling.
    pub const ALL: [SortMethod; 6] = [
        SortMethod::Name,
        SortMethod::Extension,
        SortMethod::Size,
        SortMethod::TimeAccessed,
        SortMethod::TimeModified,
        SortMethod::TimeChanged,
    ];

    /// Identifier used in configuration files.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Extension => "extension",
            Self::Size => "size",
            Self::TimeAccessed => "time-accessed",
            Self::TimeModified => "time-modified",
            Self::TimeChanged => "time-changed",
        }
    }

    /// The method adjacent to `self` in [`SortMethod::ALL`], wrapping at both ends.
    pub fn next(self, direction: Direction) -> Self {
        let len = Self::ALL.len();
        let pos = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        let next = match direction {
            Direction::Forward => (pos + 1) % len,
            Direction::Backward => (pos + len - 1) % len,
        };
        Self::ALL[next]
    }

    /// Compares two entries under this method. Ties are broken by name so
    /// the result is always deterministic.
    pub fn compare(self, a: &Entry, b: &Entry) -> Ordering {
        let primary = match self {
            Self::Name => Ordering::Equal,
            Self::Extension => b
                .is_dir()
                .cmp(&a.is_dir())
                .then_with(|| match (a.is_dir(), b.is_dir()) {
                    (false, false) => a.extension().cmp(b.extension()),
                    _ => Ordering::Equal,
                }),
            Self::Size => b.size().cmp(&a.size()),
            Self::TimeAccessed => b.accessed().cmp(&a.accessed()),
            Self::TimeModified => b.modified().cmp(&a.modified()),
            Self::TimeChanged => b.status_changed().cmp(&a.status_changed()),
        };
        primary.then_with(|| a.name().cmp(b.name()))
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "Name",
            Self::Extension => "Extension",
            Self::Size => "Size",
            Self::TimeAccessed => "Access time",
            Self::TimeModified => "Modification time",
            Self::TimeChanged => "Change time",
        };
        f.write_str(label)
    }
}

impl FromStr for SortMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| CoreError::InvalidConfiguration(format!("unknown sort method: {s}")))
    }
}

/// Returns a **new** `Vec` with `entries` ordered by `method`.
pub fn sort_entries(entries: &[Entry], method: SortMethod) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| method.compare(a, b));
    sorted
}
