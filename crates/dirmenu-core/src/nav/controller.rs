//! The navigator: turns commands into rebuilt page sets.
//!
//! Every rebuild runs the whole pipeline (list, sort, key, paginate) for the
//! candidate state and only commits when it succeeds, so a failed rebuild
//! leaves the previous pages and directory untouched.

use std::path::Path;

use crate::action::SideCommand;
use crate::config::keymap::{SideBinding, SideKeymap};
use crate::config::settings::Config;
use crate::error::{CoreError, CoreResult};
use crate::event::{AfterSelect, Command, Outcome, Target};
use crate::fs::lister::list_directory;
use crate::nav::boundary::{is_navigable, resolve};
use crate::nav::filter::{compile_pattern, highlight_entries};
use crate::nav::keys::ReservedKeys;
use crate::nav::page::{assign_page_keys, paginate, Page};
use crate::nav::session::{BrowseRequest, LabelMapper, NavigationSession, PathAction};
use crate::nav::sort::{sort_entries, Direction};

/// Where the navigator is in its render/command cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Rebuilding pages for the renderer.
    Listing,
    /// Pages are ready; waiting for the next command.
    AwaitingInput,
    /// The user quit; further commands are ignored.
    Closed,
}

/// Drives one navigation session.
pub struct Navigator {
    session: NavigationSession,
    max_items_per_page: usize,
    reserved: ReservedKeys,
    side_keys: SideKeymap,
    file_action: PathAction,
    dir_action: PathAction,
    label_mapper: LabelMapper,
    pages: Vec<Page>,
    page_pos: usize,
    state: NavState,
    notice: Option<String>,
}

impl Navigator {
    /// Validates `config` and opens the first menu at the request's start
    /// directory.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidConfiguration`] for a bad config.
    /// - [`CoreError::IllegalDirectory`] if the start lies outside the root.
    /// - [`CoreError::NotADirectory`] / [`CoreError::NotFound`] for a bad start.
    /// - [`CoreError::InvalidPattern`] for a bad exclusion pattern.
    /// - Any error from building the first page set.
    pub fn start(config: &Config, request: BrowseRequest) -> CoreResult<Self> {
        config.validate()?;
        let root = resolve(&config.root_dir()?);
        let start = resolve(&request.start_dir);

        if !is_navigable(&start, &root) {
            return Err(CoreError::IllegalDirectory { path: start, root });
        }
        if !start.exists() {
            return Err(CoreError::NotFound(start));
        }
        if !start.is_dir() {
            return Err(CoreError::NotADirectory(start));
        }

        let session = NavigationSession {
            root,
            current_dir: start,
            sort_method: config.navigation.default_sort,
            reversed: false,
            exclude: compile_pattern(request.exclude.as_deref())?,
            filter: None,
            highlight: None,
            column_major: config.navigation.column_major,
            after_select: request.after_select,
        };

        let mut navigator = Self {
            session,
            max_items_per_page: config.navigation.max_items_per_page,
            reserved: config.reserved_keys(),
            side_keys: config.side_keymap()?,
            file_action: request.file_action,
            dir_action: request.dir_action,
            label_mapper: request.label_mapper,
            pages: Vec::new(),
            page_pos: 0,
            state: NavState::Listing,
            notice: None,
        };
        navigator.pages = navigator.build_pages(&navigator.session)?;
        navigator.state = NavState::AwaitingInput;
        tracing::debug!(
            "session started at {} (root {})",
            navigator.session.current_dir.display(),
            navigator.session.root.display()
        );
        Ok(navigator)
    }

    /// Processes one command to completion.
    pub fn handle(&mut self, command: Command) -> Outcome {
        if self.state == NavState::Closed {
            return Outcome::Quit;
        }
        self.state = NavState::Listing;

        let outcome = match command {
            Command::Select(key) => self.select(&key),
            Command::Ascend => {
                self.ascend();
                Outcome::Continue
            }
            Command::RevealCurrent => {
                let dir = self.session.current_dir.clone();
                self.run_action(Target::Directory(dir))
            }
            Command::NextPage => {
                self.page_pos = (self.page_pos + 1) % self.pages.len().max(1);
                Outcome::Continue
            }
            Command::PrevPage => {
                let len = self.pages.len().max(1);
                self.page_pos = (self.page_pos + len - 1) % len;
                Outcome::Continue
            }
            Command::CycleSort(direction) => {
                let mut candidate = self.session.clone();
                candidate.sort_method = candidate.sort_method.next(direction);
                self.commit(candidate, None);
                Outcome::Continue
            }
            Command::ReverseOrder => {
                let mut candidate = self.session.clone();
                candidate.reversed = !candidate.reversed;
                self.commit(candidate, None);
                Outcome::Continue
            }
            Command::SetFilter(pattern) => {
                match compile_pattern(pattern.as_deref()) {
                    Ok(filter) => {
                        let mut candidate = self.session.clone();
                        candidate.filter = filter;
                        self.commit(candidate, None);
                    }
                    Err(e) => self.report(e),
                }
                Outcome::Continue
            }
            Command::SetHighlight(query) => {
                let mut candidate = self.session.clone();
                candidate.highlight = query.filter(|q| !q.is_empty());
                let keep = self.page_pos;
                if self.commit(candidate, None) {
                    self.page_pos = keep.min(self.pages.len() - 1);
                }
                Outcome::Continue
            }
            Command::ToggleLayout => {
                self.session.column_major = !self.session.column_major;
                Outcome::Continue
            }
            Command::TogglePersistence => {
                self.session.after_select = self.session.after_select.toggled();
                Outcome::Continue
            }
            Command::Refresh => {
                let keep = self.page_pos;
                if self.commit(self.session.clone(), None) {
                    self.page_pos = keep.min(self.pages.len() - 1);
                }
                Outcome::Continue
            }
            Command::Quit => Outcome::Quit,
            Command::QuitKeepWindow => Outcome::QuitKeepWindow,
        };

        self.state = if outcome.keeps_menu() {
            NavState::AwaitingInput
        } else {
            NavState::Closed
        };
        outcome
    }

    /// Resolves a key token against the current page, the reserved keys and
    /// the side-command table. Returns `None` if nothing is bound to it.
    pub fn handle_key(&mut self, key: &str) -> Option<Outcome> {
        if self.reserved.contains(key) || self.current_page().item_for_key(key).is_some() {
            return Some(self.handle(Command::Select(key.to_string())));
        }
        let side = self.side_keys.command_for_key(key)?;
        Some(self.handle(side_command(side)))
    }

    /// Runs a side command; the result says whether to keep showing a menu.
    pub fn dispatch(&mut self, command: SideCommand) -> bool {
        self.handle(side_command(command)).keeps_menu()
    }

    /// Makes the 1-based page `index` active. Returns `false` if out of range.
    pub fn set_page_index(&mut self, index: usize) -> bool {
        if index == 0 || index > self.pages.len() {
            return false;
        }
        self.page_pos = index - 1;
        true
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn titles(&self) -> Vec<&str> {
        self.pages.iter().map(Page::title).collect()
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.page_pos]
    }

    /// 1-based index of the active page.
    pub fn page_index(&self) -> usize {
        self.page_pos + 1
    }

    pub fn session(&self) -> &NavigationSession {
        &self.session
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn reserved_keys(&self) -> &ReservedKeys {
        &self.reserved
    }

    /// Side-command bindings the renderer should route back through
    /// [`Navigator::dispatch`].
    pub fn side_bindings(&self) -> Vec<SideBinding> {
        self.side_keys.bindings()
    }

    /// The side-command table, for renderers that need to know which
    /// chords the navigator will answer.
    pub fn side_keymap(&self) -> &SideKeymap {
        &self.side_keys
    }

    /// Message about the last failed command, cleared by the next success.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn select(&mut self, key: &str) -> Outcome {
        if key == self.reserved.back_to_parent {
            self.ascend();
            return Outcome::Continue;
        }
        if key == self.reserved.current_directory {
            let dir = self.session.current_dir.clone();
            return self.run_action(Target::Directory(dir));
        }

        let target = match self.current_page().item_for_key(key) {
            Some(item) if item.entry().is_dir() => Target::Directory(item.entry().path().to_path_buf()),
            Some(item) => Target::File(item.entry().path().to_path_buf()),
            None => {
                self.notice = Some(format!("nothing bound to {key:?}"));
                return Outcome::Continue;
            }
        };

        match target {
            Target::Directory(dir) => {
                self.enter(&dir, None);
                Outcome::Continue
            }
            file => self.run_action(file),
        }
    }

    fn ascend(&mut self) {
        let current = self.session.current_dir.clone();
        let Some(parent) = current.parent() else {
            return;
        };
        if !is_navigable(parent, &self.session.root) {
            tracing::debug!("ascend refused at {}", current.display());
            return;
        }
        self.enter(parent, Some(&current));
    }

    /// Moves to `dir` if it is inside the root. `focus` selects the page
    /// holding that path after the move.
    fn enter(&mut self, dir: &Path, focus: Option<&Path>) {
        if !is_navigable(dir, &self.session.root) {
            self.report(CoreError::IllegalDirectory {
                path: dir.to_path_buf(),
                root: self.session.root.clone(),
            });
            return;
        }
        let mut candidate = self.session.clone();
        candidate.current_dir = resolve(dir);
        if self.commit(candidate, focus) {
            tracing::debug!("entered {}", self.session.current_dir.display());
        }
    }

    fn run_action(&mut self, target: Target) -> Outcome {
        let result = match &target {
            Target::File(path) => (self.file_action)(path),
            Target::Directory(path) => (self.dir_action)(path),
        };
        match result {
            Ok(()) => {
                self.notice = None;
                match self.session.after_select {
                    AfterSelect::Quit => Outcome::Quit,
                    AfterSelect::Stay => Outcome::Continue,
                }
            }
            Err(e) => {
                self.report(e);
                Outcome::Continue
            }
        }
    }

    /// Builds pages for `candidate` and adopts both on success.
    fn commit(&mut self, candidate: NavigationSession, focus: Option<&Path>) -> bool {
        match self.build_pages(&candidate) {
            Ok(pages) => {
                self.page_pos = focus
                    .and_then(|path| {
                        pages.iter().position(|page| {
                            page.items().iter().any(|item| item.entry().path() == path)
                        })
                    })
                    .unwrap_or(0);
                self.pages = pages;
                self.session = candidate;
                self.notice = None;
                true
            }
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    fn build_pages(&self, session: &NavigationSession) -> CoreResult<Vec<Page>> {
        let entries = list_directory(&session.current_dir, &session.listing_rules())?;
        let mut sorted = sort_entries(&entries, session.sort_method);
        if session.reversed {
            sorted.reverse();
        }

        let labelled = sorted
            .into_iter()
            .map(|entry| {
                let label = (self.label_mapper)(&entry);
                (entry, label)
            })
            .collect();
        let mut keyed = assign_page_keys(labelled, self.max_items_per_page, &self.reserved)?;
        if let Some(query) = &session.highlight {
            keyed = highlight_entries(keyed, query);
        }
        paginate(keyed, self.max_items_per_page, &session.current_dir)
    }

    fn report(&mut self, error: CoreError) {
        tracing::warn!("{error}");
        self.notice = Some(error.to_string());
    }
}

fn side_command(command: SideCommand) -> Command {
    match command {
        SideCommand::NextPage => Command::NextPage,
        SideCommand::PrevPage => Command::PrevPage,
        SideCommand::SortNext => Command::CycleSort(Direction::Forward),
        SideCommand::SortPrev => Command::CycleSort(Direction::Backward),
        SideCommand::ReverseOrder => Command::ReverseOrder,
        SideCommand::ClearFilter => Command::SetFilter(None),
        SideCommand::ClearHighlight => Command::SetHighlight(None),
        SideCommand::ToggleLayout => Command::ToggleLayout,
        SideCommand::TogglePersistence => Command::TogglePersistence,
        SideCommand::Refresh => Command::Refresh,
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("session", &self.session)
            .field("pages", &self.pages.len())
            .field("page_index", &self.page_index())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
