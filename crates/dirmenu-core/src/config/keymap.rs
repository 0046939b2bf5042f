//! Key bindings for side commands.
//!
//! Side-command keys are named multi-character tokens such as `"C-s"`.
//! Single characters are left to menu entries and the two reserved keys.
//!
//! Config files use string command identifiers (e.g. `"sort_next"`); these
//! are resolved to [`SideCommand`] via [`SideCommandRegistry::find_by_id`].

use std::collections::{BTreeMap, HashMap};

use crate::action::{SideCommand, SideCommandRegistry};
use crate::error::{CoreError, CoreResult};
use crate::nav::keys::ReservedKeys;

/// One key-to-command binding, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideBinding {
    pub key: String,
    pub command: SideCommand,
    pub description: &'static str,
}

/// Complete set of side-command bindings.
#[derive(Debug, Clone)]
pub struct SideKeymap {
    bindings: HashMap<String, SideCommand>,
}

impl Default for SideKeymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Pages
        bindings.insert("C-n".to_string(), SideCommand::NextPage);
        bindings.insert("C-p".to_string(), SideCommand::PrevPage);

        // Ordering
        bindings.insert("C-s".to_string(), SideCommand::SortNext);
        bindings.insert("C-b".to_string(), SideCommand::SortPrev);
        bindings.insert("C-r".to_string(), SideCommand::ReverseOrder);

        // Refinement
        bindings.insert("C-x".to_string(), SideCommand::ClearFilter);
        bindings.insert("C-u".to_string(), SideCommand::ClearHighlight);

        // Display and behaviour
        bindings.insert("C-t".to_string(), SideCommand::ToggleLayout);
        bindings.insert("C-k".to_string(), SideCommand::TogglePersistence);
        bindings.insert("C-g".to_string(), SideCommand::Refresh);

        Self { bindings }
    }
}

impl SideKeymap {
    /// Default bindings with `overrides` (key → command id) applied on top.
    ///
    /// A command named by any override loses its default key; every override
    /// key is bound, so one command may answer to several keys. An override
    /// on a default key replaces that binding.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidConfiguration`] for an unknown command id.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> CoreResult<Self> {
        let registry = SideCommandRegistry::new();
        let resolved = overrides
            .iter()
            .map(|(key, id)| {
                registry
                    .find_by_id(id)
                    .map(|command| (key.clone(), command))
                    .ok_or_else(|| {
                        CoreError::InvalidConfiguration(format!("unknown side command: {id}"))
                    })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let mut keymap = Self::default();
        keymap
            .bindings
            .retain(|_, bound| resolved.iter().all(|(_, command)| *command != *bound));
        keymap.bindings.extend(resolved);
        Ok(keymap)
    }

    /// Checks that no binding can shadow an entry key or a reserved key.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidConfiguration`] naming the offending key.
    pub fn validate(&self, reserved: &ReservedKeys) -> CoreResult<()> {
        for key in self.bindings.keys() {
            if key.chars().count() < 2 {
                return Err(CoreError::InvalidConfiguration(format!(
                    "side command key {key:?} must be a named key such as \"C-s\""
                )));
            }
            if reserved.contains(key) {
                return Err(CoreError::InvalidConfiguration(format!(
                    "side command key {key:?} is already reserved"
                )));
            }
        }
        Ok(())
    }

    /// Returns the command mapped to `key`, or `None` if unbound.
    pub fn command_for_key(&self, key: &str) -> Option<SideCommand> {
        self.bindings.get(key).copied()
    }

    /// All bindings with descriptions, sorted by key for stable display.
    pub fn bindings(&self) -> Vec<SideBinding> {
        let registry = SideCommandRegistry::new();
        let mut out: Vec<SideBinding> = self
            .bindings
            .iter()
            .map(|(key, command)| SideBinding {
                key: key.clone(),
                command: *command,
                description: registry
                    .descriptor_for(*command)
                    .map(|d| d.description)
                    .unwrap_or(""),
            })
            .collect();
        out.sort_by(|a, b| a.key.cmp(&b.key));
        out
    }
}
