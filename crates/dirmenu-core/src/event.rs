//! Commands and outcomes exchanged between the renderer and the navigator.
//!
//! The renderer translates user input into [`Command`]s; the navigator
//! processes each one completely and answers with an [`Outcome`].

use std::path::PathBuf;

use crate::nav::sort::Direction;

/// A request from the renderer.
///
/// Commands flow **renderer → navigator**. The navigator never creates
/// commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate whatever is bound to this key on the current page.
    Select(String),
    /// Move to the parent directory, unless already at the root.
    Ascend,
    /// Run the directory action on the current directory.
    RevealCurrent,
    NextPage,
    PrevPage,
    /// Switch to the adjacent sort method.
    CycleSort(Direction),
    /// Reverse the current order.
    ReverseOrder,
    /// Keep only names matching this regex; `None` clears the filter.
    SetFilter(Option<String>),
    /// Mark entries that fuzzy-match this query; `None` clears it.
    SetHighlight(Option<String>),
    /// Flip between row-major and column-major display.
    ToggleLayout,
    /// Flip whether choosing a file ends the session.
    TogglePersistence,
    /// Re-read the current directory.
    Refresh,
    Quit,
    /// Quit, but ask the renderer to leave the display in place.
    QuitKeepWindow,
}

/// What the navigator wants the renderer to do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep showing the menu.
    Continue,
    /// Close the menu.
    Quit,
    /// Close the session but keep the display surface open.
    QuitKeepWindow,
}

impl Outcome {
    /// `true` if the renderer should keep showing a menu.
    pub fn keeps_menu(self) -> bool {
        self == Outcome::Continue
    }
}

/// What a selected entry refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

/// Whether choosing a file (or revealing a directory) ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AfterSelect {
    #[default]
    Quit,
    Stay,
}

impl AfterSelect {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Quit => Self::Stay,
            Self::Stay => Self::Quit,
        }
    }
}
