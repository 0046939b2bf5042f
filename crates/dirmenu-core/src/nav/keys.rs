//! Activation key assignment.
//!
//! Every label gets a short key. A label's own characters are preferred
//! (first character first), then a fixed fallback pool is scanned. Keys in
//! [`ReservedKeys`] are never handed out.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};

/// Fallback order once a label's own characters are used up.
const FALLBACK_POOL: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
);

/// Number of distinct single-character keys that can ever be assigned.
pub const KEY_POOL_SIZE: usize = FALLBACK_POOL.len();

/// The two keys set aside for "go to parent" and "reveal current directory".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedKeys {
    pub back_to_parent: String,
    pub current_directory: String,
}

impl ReservedKeys {
    pub fn contains(&self, key: &str) -> bool {
        self.back_to_parent == key || self.current_directory == key
    }

    /// How many pool keys these reservations take away.
    pub fn pool_cost(&self) -> usize {
        [&self.back_to_parent, &self.current_directory]
            .into_iter()
            .filter(|k| is_pool_key(k))
            .count()
    }
}

impl Default for ReservedKeys {
    fn default() -> Self {
        Self {
            back_to_parent: "^".to_string(),
            current_directory: ".".to_string(),
        }
    }
}

fn is_pool_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_graphic())
}

/// Assigns one key per label, returned in the same order as `labels`.
///
/// # Errors
///
/// [`CoreError::KeySpaceExhausted`] if some label finds no free key.
pub fn assign_keys<S: AsRef<str>>(labels: &[S], reserved: &ReservedKeys) -> CoreResult<Vec<String>> {
    let mut used: HashSet<char> = HashSet::new();
    let mut keys = Vec::with_capacity(labels.len());

    for label in labels {
        let label = label.as_ref();
        let key = label
            .chars()
            .filter(char::is_ascii_graphic)
            .chain(FALLBACK_POOL.chars())
            .find(|c| !used.contains(c) && !reserved.contains(c.encode_utf8(&mut [0; 4])))
            .ok_or_else(|| CoreError::KeySpaceExhausted {
                label: label.to_string(),
            })?;
        used.insert(key);
        keys.push(key.to_string());
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(labels: &[&str]) -> Vec<String> {
        assign_keys(labels, &ReservedKeys::default()).unwrap()
    }

    #[test]
    fn first_character_is_preferred() {
        assert_eq!(assign(&["alpha", "beta", "Gamma"]), vec!["a", "b", "G"]);
    }

    #[test]
    fn collisions_scan_later_characters() {
        assert_eq!(assign(&["apple", "apricot", "avocado"]), vec!["a", "p", "v"]);
    }

    #[test]
    fn case_is_significant() {
        assert_eq!(assign(&["readme", "README"]), vec!["r", "R"]);
    }

    #[test]
    fn exhausted_label_falls_back_to_pool() {
        assert_eq!(assign(&["aa", "a", "a"]), vec!["a", "0", "1"]);
    }

    #[test]
    fn reserved_keys_are_skipped() {
        let keys = assign(&[".profile", "^caret"]);
        assert_eq!(keys, vec!["p", "c"]);
    }

    #[test]
    fn keys_are_unique_and_never_reserved() {
        let labels: Vec<String> = (0..80).map(|i| format!("file{i}")).collect();
        let reserved = ReservedKeys::default();

        let keys = assign_keys(&labels, &reserved).unwrap();

        assert_eq!(keys.len(), labels.len());
        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
        assert!(keys.iter().all(|k| !reserved.contains(k)));
    }

    #[test]
    fn whitespace_and_non_ascii_are_not_keys() {
        assert_eq!(assign(&[" éa"]), vec!["a"]);
    }

    #[test]
    fn running_out_of_keys_is_an_error() {
        let reserved = ReservedKeys::default();
        let labels: Vec<String> = (0..=KEY_POOL_SIZE - reserved.pool_cost())
            .map(|i| format!("x{i}"))
            .collect();

        let err = assign_keys(&labels, &reserved).unwrap_err();
        assert!(matches!(err, CoreError::KeySpaceExhausted { .. }));
    }

    #[test]
    fn empty_input_gives_no_keys() {
        let labels: [&str; 0] = [];
        assert!(assign_keys(&labels, &ReservedKeys::default()).unwrap().is_empty());
    }
}
