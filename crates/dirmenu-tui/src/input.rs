use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dirmenu_core::config::keymap::SideKeymap;
use dirmenu_core::event::Command;

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core command directly.
    Command(Command),
    /// Resolve a key token through the navigator (entry, reserved or side key).
    Key(String),
    /// Enter a new AppMode.
    EnterMode(AppMode),
    /// Append a character to the prompt being typed.
    PromptChar(char),
    /// Remove the last character from the prompt.
    PromptBackspace,
    /// Apply the prompt text.
    PromptConfirm,
    /// Leave the prompt without applying it.
    PromptCancel,
    /// Close the help overlay.
    CloseHelp,
    /// No action.
    None,
}

/// Converts a key event into the token the core keymaps use.
///
/// Plain printable characters map to themselves (`"a"`, `"^"`), control
/// chords map to `"C-<char>"`. Anything else has no token.
pub fn key_token(key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(format!("C-{}", c.to_ascii_lowercase()))
        }
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

/// Processes a key event for the current mode.
///
/// In normal mode a chord bound in `side_keys` goes to the navigator even
/// when the TUI has its own use for it.
pub fn handle_key(key: KeyEvent, mode: &AppMode, side_keys: &SideKeymap) -> InputAction {
    match mode {
        AppMode::Normal => handle_normal(key, side_keys),
        AppMode::Filter(_) | AppMode::Highlight(_) => handle_prompt(key),
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => InputAction::CloseHelp,
            _ => InputAction::None,
        },
    }
}

fn handle_normal(key: KeyEvent, side_keys: &SideKeymap) -> InputAction {
    if let Some(token) = key_token(key) {
        if side_keys.command_for_key(&token).is_some() {
            return InputAction::Key(token);
        }
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => InputAction::Command(Command::Quit),
        KeyCode::Char('c') if ctrl => InputAction::Command(Command::Quit),
        KeyCode::Char('q') if ctrl => InputAction::Command(Command::QuitKeepWindow),
        KeyCode::Char('f') if ctrl => InputAction::EnterMode(AppMode::Filter(String::new())),
        KeyCode::Char('l') if ctrl => InputAction::EnterMode(AppMode::Highlight(String::new())),
        KeyCode::F(1) => InputAction::EnterMode(AppMode::Help),
        KeyCode::Right | KeyCode::PageDown => InputAction::Command(Command::NextPage),
        KeyCode::Left | KeyCode::PageUp => InputAction::Command(Command::PrevPage),
        KeyCode::Backspace => InputAction::Command(Command::Ascend),
        _ => key_token(key).map_or(InputAction::None, InputAction::Key),
    }
}

fn handle_prompt(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::PromptCancel,
        KeyCode::Enter => InputAction::PromptConfirm,
        KeyCode::Backspace => InputAction::PromptBackspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::PromptChar(c)
        }
        _ => InputAction::None,
    }
}
