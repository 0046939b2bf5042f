//! Keyed entries and their split into bounded pages.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;
use crate::nav::keys::{assign_keys, ReservedKeys};

/// An entry bound to an activation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedEntry {
    entry: Entry,
    key: String,
    label: String,
    highlight: Option<Vec<usize>>,
}

impl KeyedEntry {
    pub fn new(entry: Entry, key: String, label: String) -> Self {
        Self {
            entry,
            key,
            label,
            highlight: None,
        }
    }

    /// Returns a copy marked as matching the highlight query at `indices`
    /// (char positions within the label).
    #[must_use]
    pub fn with_highlight(self, indices: Vec<usize>) -> Self {
        Self {
            highlight: Some(indices),
            ..self
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Matched label positions, or `None` when the entry is not highlighted.
    pub fn highlight(&self) -> Option<&[usize]> {
        self.highlight.as_deref()
    }
}

/// One bounded screenful of keyed entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: usize,
    title: String,
    items: Vec<KeyedEntry>,
}

impl Page {
    /// 1-based position of this page in its listing.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[KeyedEntry] {
        &self.items
    }

    pub fn item_for_key(&self, key: &str) -> Option<&KeyedEntry> {
        self.items.iter().find(|item| item.key() == key)
    }
}

/// Title for page `index` of `total` pages of `dir`.
///
/// A directory that fits on one page is titled with its path alone; when
/// there are several pages every title carries ` (<index>)`.
pub fn page_title(dir: &Path, index: usize, total: usize) -> String {
    if total > 1 {
        format!("{} ({index})", dir.display())
    } else {
        dir.display().to_string()
    }
}

/// Splits `items` into pages of at most `max_per_page`, in arrival order.
///
/// An empty listing still produces one (empty) page so there is always
/// something to show.
///
/// # Errors
///
/// [`CoreError::InvalidConfiguration`] if `max_per_page` is zero.
pub fn paginate(items: Vec<KeyedEntry>, max_per_page: usize, dir: &Path) -> CoreResult<Vec<Page>> {
    if max_per_page == 0 {
        return Err(CoreError::InvalidConfiguration(
            "max items per page must be positive".to_string(),
        ));
    }

    let total = items.len().div_ceil(max_per_page).max(1);
    let mut pages = Vec::with_capacity(total);
    let mut rest = items.into_iter();
    for index in 1..=total {
        let chunk: Vec<KeyedEntry> = rest.by_ref().take(max_per_page).collect();
        pages.push(Page {
            index,
            title: page_title(dir, index, total),
            items: chunk,
        });
    }
    Ok(pages)
}

/// Assigns keys chunk by chunk, so keys are unique within every page that
/// [`paginate`] will later cut with the same `max_per_page`.
pub fn assign_page_keys(
    entries: Vec<(Entry, String)>,
    max_per_page: usize,
    reserved: &ReservedKeys,
) -> CoreResult<Vec<KeyedEntry>> {
    if max_per_page == 0 {
        return Err(CoreError::InvalidConfiguration(
            "max items per page must be positive".to_string(),
        ));
    }

    let mut keyed = Vec::with_capacity(entries.len());
    let mut rest = entries.into_iter().peekable();
    while rest.peek().is_some() {
        let chunk: Vec<(Entry, String)> = rest.by_ref().take(max_per_page).collect();
        let labels: Vec<&str> = chunk.iter().map(|(_, label)| label.as_str()).collect();
        let keys = assign_keys(&labels, reserved)?;
        keyed.extend(
            chunk
                .into_iter()
                .zip(keys)
                .map(|((entry, label), key)| KeyedEntry::new(entry, key, label)),
        );
    }
    Ok(keyed)
}
