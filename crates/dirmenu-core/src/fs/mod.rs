//! File system abstractions for dirmenu.
//!
//! [`entry::Entry`] is the snapshot of one listed object and
//! [`lister::list_directory`] produces them, applying the permanent and
//! caller-supplied exclusion rules.

pub mod entry;
pub mod lister;

pub use entry::{Entry, EntryKind, Timestamp};
pub use lister::{list_directory, ListingRules};
