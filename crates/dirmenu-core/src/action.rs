//! Side commands the renderer can dispatch back into the navigator.
//!
//! Every side command takes no argument. [`SideCommandRegistry`] provides
//! the metadata (id, name, description) used for key configuration and
//! help display.

/// A zero-argument command bound to a named key next to the menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideCommand {
    NextPage,
    PrevPage,
    SortNext,
    SortPrev,
    ReverseOrder,
    ClearFilter,
    ClearHighlight,
    ToggleLayout,
    TogglePersistence,
    Refresh,
}

/// Metadata for a single side command.
#[derive(Debug, Clone)]
pub struct SideCommandDescriptor {
    pub command: SideCommand,
    /// Snake-case identifier used in config files (e.g. `"sort_next"`).
    pub id: &'static str,
    /// Human-readable name (e.g. `"Next Sort Method"`).
    pub name: &'static str,
    pub description: &'static str,
}

/// Registry of every side command.
#[derive(Debug, Clone)]
pub struct SideCommandRegistry {
    descriptors: Vec<SideCommandDescriptor>,
}

impl SideCommandRegistry {
    /// Builds the registry containing every known side command.
    pub fn new() -> Self {
        let descriptors = vec![
            SideCommandDescriptor {
                command: SideCommand::NextPage,
                id: "next_page",
                name: "Next Page",
                description: "Show the next page, wrapping to the first",
            },
            SideCommandDescriptor {
                command: SideCommand::PrevPage,
                id: "prev_page",
                name: "Previous Page",
                description: "Show the previous page, wrapping to the last",
            },
            SideCommandDescriptor {
                command: SideCommand::SortNext,
                id: "sort_next",
                name: "Next Sort Method",
                description: "Sort by the next method",
            },
            SideCommandDescriptor {
                command: SideCommand::SortPrev,
                id: "sort_prev",
                name: "Previous Sort Method",
                description: "Sort by the previous method",
            },
            SideCommandDescriptor {
                command: SideCommand::ReverseOrder,
                id: "reverse_order",
                name: "Reverse Order",
                description: "Reverse the current sort order",
            },
            SideCommandDescriptor {
                command: SideCommand::ClearFilter,
                id: "clear_filter",
                name: "Clear Filter",
                description: "Show all entries again",
            },
            SideCommandDescriptor {
                command: SideCommand::ClearHighlight,
                id: "clear_highlight",
                name: "Clear Highlight",
                description: "Remove entry highlighting",
            },
            SideCommandDescriptor {
                command: SideCommand::ToggleLayout,
                id: "toggle_layout",
                name: "Toggle Layout",
                description: "Switch between row-major and column-major display",
            },
            SideCommandDescriptor {
                command: SideCommand::TogglePersistence,
                id: "toggle_persistence",
                name: "Toggle Persistence",
                description: "Keep the menu open after a file is chosen, or not",
            },
            SideCommandDescriptor {
                command: SideCommand::Refresh,
                id: "refresh",
                name: "Refresh",
                description: "Re-read the current directory",
            },
        ];
        Self { descriptors }
    }

    /// Returns all descriptors.
    pub fn all(&self) -> &[SideCommandDescriptor] {
        &self.descriptors
    }

    /// Finds a command by its string id (for config parsing).
    pub fn find_by_id(&self, id: &str) -> Option<SideCommand> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.command)
    }

    /// Returns the descriptor for a given command.
    pub fn descriptor_for(&self, command: SideCommand) -> Option<&SideCommandDescriptor> {
        self.descriptors.iter().find(|d| d.command == command)
    }
}

impl Default for SideCommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_describes_every_command() {
        let registry = SideCommandRegistry::new();
        let commands: HashSet<SideCommand> = registry.all().iter().map(|d| d.command).collect();
        assert_eq!(commands.len(), 10);
        assert_eq!(registry.all().len(), 10);
    }

    #[test]
    fn ids_are_unique() {
        let registry = SideCommandRegistry::new();
        let ids: HashSet<&str> = registry.all().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), registry.all().len());
    }

    #[test]
    fn find_by_id_returns_correct_command() {
        let registry = SideCommandRegistry::new();
        assert_eq!(registry.find_by_id("sort_next"), Some(SideCommand::SortNext));
        assert_eq!(
            registry.find_by_id("toggle_persistence"),
            Some(SideCommand::TogglePersistence)
        );
        assert_eq!(registry.find_by_id("nonexistent"), None);
    }

    #[test]
    fn descriptor_for_returns_metadata() {
        let registry = SideCommandRegistry::new();
        let desc = registry.descriptor_for(SideCommand::ReverseOrder).unwrap();
        assert_eq!(desc.id, "reverse_order");
        assert_eq!(desc.name, "Reverse Order");
    }
}
