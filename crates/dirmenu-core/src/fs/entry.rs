//! Directory entry representation.

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use unicode_normalization::UnicodeNormalization;

/// What an entry looked like when it was listed.
///
/// Symlinks are always reported as [`EntryKind::Symlink`], whatever they
/// point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

/// A point in time with whole seconds and a sub-second part.
///
/// Ordering compares seconds first, then nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    secs: i64,
    nanos: u32,
}

impl Timestamp {
    pub fn new(secs: i64, nanos: u32) -> Self {
        Self { secs, nanos }
    }

    pub fn secs(&self) -> i64 {
        self.secs
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(d) => Self::new(d.as_secs() as i64, d.subsec_nanos()),
            Err(e) => {
                // Before the epoch: borrow one second so nanos stays positive.
                let d = e.duration();
                if d.subsec_nanos() == 0 {
                    Self::new(-(d.as_secs() as i64), 0)
                } else {
                    Self::new(-(d.as_secs() as i64) - 1, 1_000_000_000 - d.subsec_nanos())
                }
            }
        }
    }
}

/// A single filesystem object visible in a menu.
///
/// `Entry` is an immutable snapshot taken at listing time. Directory sizes
/// are reported as `0`. Size and timestamps of a symlink describe its
/// target, or the link itself when the target is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
    resolves_to_dir: bool,
    size: u64,
    accessed: Timestamp,
    modified: Timestamp,
    status_changed: Timestamp,
}

impl Entry {
    /// Builds an entry from the link-level metadata (`symlink_metadata`) and
    /// the metadata used for size and times.
    pub fn new(path: PathBuf, link_meta: &Metadata, target_meta: &Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let kind = if link_meta.file_type().is_symlink() {
            EntryKind::Symlink
        } else if link_meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        Self {
            path,
            name,
            kind,
            resolves_to_dir: target_meta.is_dir(),
            size: if target_meta.is_dir() { 0 } else { target_meta.len() },
            accessed: target_meta
                .accessed()
                .map(Timestamp::from_system_time)
                .unwrap_or_default(),
            modified: target_meta
                .modified()
                .map(Timestamp::from_system_time)
                .unwrap_or_default(),
            status_changed: status_changed(target_meta),
        }
    }

    /// Full path of this entry inside the listed directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name, NFC-normalised.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` for directories and for symlinks pointing at one.
    pub fn is_dir(&self) -> bool {
        self.resolves_to_dir
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    /// Size in bytes. Always `0` for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn accessed(&self) -> Timestamp {
        self.accessed
    }

    pub fn modified(&self) -> Timestamp {
        self.modified
    }

    pub fn status_changed(&self) -> Timestamp {
        self.status_changed
    }

    /// Everything after the first `.` of the name, or `""`.
    pub fn extension(&self) -> &str {
        self.name.split_once('.').map(|(_, ext)| ext).unwrap_or("")
    }
}

#[cfg(unix)]
fn status_changed(meta: &Metadata) -> Timestamp {
    use std::os::unix::fs::MetadataExt;
    Timestamp::new(meta.ctime(), meta.ctime_nsec().clamp(0, 999_999_999) as u32)
}

#[cfg(not(unix))]
fn status_changed(meta: &Metadata) -> Timestamp {
    meta.created()
        .or_else(|_| meta.modified())
        .map(Timestamp::from_system_time)
        .unwrap_or_default()
}
