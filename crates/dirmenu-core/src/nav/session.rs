//! Navigation session state and the request that starts one.

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::CoreResult;
use crate::event::AfterSelect;
use crate::fs::entry::Entry;
use crate::fs::lister::ListingRules;
use crate::nav::sort::SortMethod;
use crate::opener::open_path;

/// Action applied to a chosen file or directory.
pub type PathAction = Box<dyn FnMut(&Path) -> CoreResult<()>>;

/// Maps an entry to the text shown in the menu.
pub type LabelMapper = Box<dyn Fn(&Entry) -> String>;

/// Label used when the caller does not supply a mapper: the name, with `/`
/// appended for directories and `@` for symlinks to anything else.
pub fn default_label(entry: &Entry) -> String {
    if entry.is_dir() {
        format!("{}/", entry.name())
    } else if entry.is_symlink() {
        format!("{}@", entry.name())
    } else {
        entry.name().to_string()
    }
}

/// Everything a caller supplies to begin browsing.
///
/// Built with [`BrowseRequest::new`] and the `with_*` methods; anything not
/// set falls back to opening the item with the system default application.
pub struct BrowseRequest {
    pub(crate) start_dir: PathBuf,
    pub(crate) file_action: PathAction,
    pub(crate) dir_action: PathAction,
    pub(crate) label_mapper: LabelMapper,
    pub(crate) exclude: Option<String>,
    pub(crate) after_select: AfterSelect,
}

impl BrowseRequest {
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            file_action: Box::new(open_path),
            dir_action: Box::new(open_path),
            label_mapper: Box::new(default_label),
            exclude: None,
            after_select: AfterSelect::default(),
        }
    }

    #[must_use]
    pub fn with_file_action(self, action: impl FnMut(&Path) -> CoreResult<()> + 'static) -> Self {
        Self {
            file_action: Box::new(action),
            ..self
        }
    }

    #[must_use]
    pub fn with_dir_action(self, action: impl FnMut(&Path) -> CoreResult<()> + 'static) -> Self {
        Self {
            dir_action: Box::new(action),
            ..self
        }
    }

    #[must_use]
    pub fn with_label_mapper(self, mapper: impl Fn(&Entry) -> String + 'static) -> Self {
        Self {
            label_mapper: Box::new(mapper),
            ..self
        }
    }

    /// Regex of base names to hide, on top of dot-files and backups.
    #[must_use]
    pub fn with_exclude(self, pattern: impl Into<String>) -> Self {
        Self {
            exclude: Some(pattern.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_after_select(self, after_select: AfterSelect) -> Self {
        Self {
            after_select,
            ..self
        }
    }
}

impl fmt::Debug for BrowseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowseRequest")
            .field("start_dir", &self.start_dir)
            .field("exclude", &self.exclude)
            .field("after_select", &self.after_select)
            .finish_non_exhaustive()
    }
}

/// The mutable state of one navigation.
///
/// A single session lives from the first menu until the user quits;
/// descending swaps `current_dir` instead of starting a new session.
#[derive(Debug, Clone)]
pub struct NavigationSession {
    pub(crate) root: PathBuf,
    pub(crate) current_dir: PathBuf,
    pub(crate) sort_method: SortMethod,
    pub(crate) reversed: bool,
    pub(crate) exclude: Option<Regex>,
    pub(crate) filter: Option<Regex>,
    pub(crate) highlight: Option<String>,
    pub(crate) column_major: bool,
    pub(crate) after_select: AfterSelect,
}

impl NavigationSession {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn sort_method(&self) -> SortMethod {
        self.sort_method
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// The active filter pattern, if any.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_ref().map(Regex::as_str)
    }

    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    pub fn column_major(&self) -> bool {
        self.column_major
    }

    pub fn after_select(&self) -> AfterSelect {
        self.after_select
    }

    pub(crate) fn listing_rules(&self) -> ListingRules {
        ListingRules {
            exclude: self.exclude.clone(),
            filter: self.filter.clone(),
        }
    }
}
