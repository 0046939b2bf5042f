//! Directory listing with exclusion rules.

use std::path::Path;

use regex::Regex;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;

/// Exclusion rules applied while listing.
///
/// Dot-prefixed and `~`-suffixed names are always dropped. `exclude`
/// additionally drops matching names; `filter` keeps only matching names.
#[derive(Debug, Clone, Default)]
pub struct ListingRules {
    pub exclude: Option<Regex>,
    pub filter: Option<Regex>,
}

impl ListingRules {
    /// Returns `true` if an entry called `name` should appear in a menu.
    pub fn accepts(&self, name: &str) -> bool {
        if name.starts_with('.') || name.ends_with('~') {
            return false;
        }
        if self.exclude.as_ref().is_some_and(|re| re.is_match(name)) {
            return false;
        }
        self.filter.as_ref().map_or(true, |re| re.is_match(name))
    }
}

/// Reads the immediate contents of `dir`, keeping only what `rules` accepts.
///
/// The returned entries are **unsorted**. Entries whose metadata cannot be
/// read are skipped.
///
/// # Errors
///
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::ListingFailed`]: the directory is missing or could not be
///   read (including one removed after the session started).
pub fn list_directory(dir: &Path, rules: &ListingRules) -> CoreResult<Vec<Entry>> {
    let meta = std::fs::metadata(dir).map_err(|e| CoreError::ListingFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;
    if !meta.is_dir() {
        return Err(CoreError::NotADirectory(dir.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(dir).map_err(|e| CoreError::ListingFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| CoreError::ListingFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let file_name = dir_entry.file_name();
        if !rules.accepts(&file_name.to_string_lossy()) {
            continue;
        }

        let path = dir_entry.path();
        let link_meta = match std::fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!("skipping {}: {e}", path.display());
                continue;
            }
        };
        // Dangling links fall back to their own metadata.
        let target_meta = if link_meta.file_type().is_symlink() {
            std::fs::metadata(&path).unwrap_or_else(|_| link_meta.clone())
        } else {
            link_meta.clone()
        };
        entries.push(Entry::new(path, &link_meta, &target_meta));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(entries: &[Entry]) -> Vec<String> {
        let mut names: Vec<String> = entries.iter().map(|e| e.name().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn drops_hidden_and_backup_names() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.txt", ".hidden", "notes.md~", "b~c", "~lead"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();

        let entries = list_directory(tmp.path(), &ListingRules::default()).unwrap();

        assert_eq!(names(&entries), vec!["a.txt", "b~c", "src", "~lead"]);
    }

    #[test]
    fn every_visible_entry_appears_once() {
        let tmp = TempDir::new().unwrap();
        for i in 0..25 {
            fs::write(tmp.path().join(format!("file{i:02}")), "").unwrap();
        }

        let entries = list_directory(tmp.path(), &ListingRules::default()).unwrap();
        let mut listed = names(&entries);
        listed.dedup();

        assert_eq!(listed.len(), 25);
    }

    #[test]
    fn exclude_pattern_drops_matches() {
        let tmp = TempDir::new().unwrap();
        for name in ["main.rs", "main.o", "lib.o"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        let rules = ListingRules {
            exclude: Some(Regex::new(r"\.o$").unwrap()),
            filter: None,
        };

        let entries = list_directory(tmp.path(), &rules).unwrap();

        assert_eq!(names(&entries), vec!["main.rs"]);
    }

    #[test]
    fn filter_keeps_only_matches() {
        let tmp = TempDir::new().unwrap();
        for name in ["alpha", "beta", "alphabet", ".alpha"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        let rules = ListingRules {
            exclude: None,
            filter: Some(Regex::new("^alpha").unwrap()),
        };

        let entries = list_directory(tmp.path(), &rules).unwrap();

        assert_eq!(names(&entries), vec!["alpha", "alphabet"]);
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let err = list_directory(&file, &ListingRules::default()).unwrap_err();
        assert!(matches!(err, CoreError::NotADirectory(_)));
    }

    #[test]
    fn missing_path_fails_listing() {
        let tmp = TempDir::new().unwrap();
        let err = list_directory(&tmp.path().join("gone"), &ListingRules::default()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ListingFailed { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn removed_directory_fails_listing() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        list_directory(&sub, &ListingRules::default()).unwrap();

        fs::remove_dir(&sub).unwrap();
        let err = list_directory(&sub, &ListingRules::default()).unwrap_err();

        assert!(matches!(err, CoreError::ListingFailed { .. }));
        assert!(err.to_string().starts_with("failed to list"));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_fails_listing() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("inside"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }
        let result = list_directory(&locked, &ListingRules::default());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CoreError::ListingFailed { ref source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied
        ));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_listed() {
        let tmp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(tmp.path().join("nowhere"), tmp.path().join("broken")).unwrap();

        let entries = list_directory(tmp.path(), &ListingRules::default()).unwrap();

        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_symlink());
        assert!(!entries[0].is_dir());
    }
}
