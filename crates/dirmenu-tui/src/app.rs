use dirmenu_core::event::{Command, Outcome};
use dirmenu_core::nav::controller::Navigator;

use crate::input::InputAction;

/// Application mode: determines how input is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Typing a filter regex; the string is the text so far.
    Filter(String),
    /// Typing a highlight query; the string is the text so far.
    Highlight(String),
    Help,
}

/// Top-level TUI state wrapping one [`Navigator`].
pub struct App {
    navigator: Navigator,
    mode: AppMode,
    outcome: Option<Outcome>,
    status_message: Option<String>,
}

impl App {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            mode: AppMode::Normal,
            outcome: None,
            status_message: None,
        }
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn should_quit(&self) -> bool {
        self.outcome.is_some()
    }

    /// How the session ended, once it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The TUI's own message, falling back to the navigator's notice.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message
            .as_deref()
            .or_else(|| self.navigator.notice())
    }

    /// Applies one input action.
    pub fn apply(&mut self, action: InputAction) {
        self.status_message = None;
        match action {
            InputAction::Command(command) => self.run(command),
            InputAction::Key(token) => match self.navigator.handle_key(&token) {
                Some(outcome) => self.finish(outcome),
                None => self.status_message = Some(format!("no binding for {token}")),
            },
            InputAction::EnterMode(mode) => self.mode = self.prefilled(mode),
            InputAction::PromptChar(c) => {
                if let AppMode::Filter(text) | AppMode::Highlight(text) = &mut self.mode {
                    text.push(c);
                }
            }
            InputAction::PromptBackspace => {
                if let AppMode::Filter(text) | AppMode::Highlight(text) = &mut self.mode {
                    text.pop();
                }
            }
            InputAction::PromptConfirm => {
                let mode = std::mem::replace(&mut self.mode, AppMode::Normal);
                match mode {
                    AppMode::Filter(text) => self.run(Command::SetFilter(non_empty(text))),
                    AppMode::Highlight(text) => self.run(Command::SetHighlight(non_empty(text))),
                    AppMode::Normal | AppMode::Help => {}
                }
            }
            InputAction::PromptCancel | InputAction::CloseHelp => self.mode = AppMode::Normal,
            InputAction::None => {}
        }
    }

    fn run(&mut self, command: Command) {
        let outcome = self.navigator.handle(command);
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: Outcome) {
        if !outcome.keeps_menu() {
            tracing::debug!("session ended: {outcome:?}");
            self.outcome = Some(outcome);
        }
    }

    /// Opens prompts with the currently active text so it can be edited.
    fn prefilled(&self, mode: AppMode) -> AppMode {
        let session = self.navigator.session();
        match mode {
            AppMode::Filter(text) if text.is_empty() => {
                AppMode::Filter(session.filter().unwrap_or_default().to_string())
            }
            AppMode::Highlight(text) if text.is_empty() => {
                AppMode::Highlight(session.highlight().unwrap_or_default().to_string())
            }
            other => other,
        }
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
