//! dirmenu core library: UI-agnostic keyed directory menus.
//!
//! `dirmenu-core` lists a directory, sorts it, gives every entry a
//! single-character key and splits the result into pages. A renderer (the
//! `dirmenu-tui` crate, or anything else) shows the pages and feeds the
//! user's choices back as [`Command`]s.
//!
//! # Modules
//!
//! - [`fs`]: Directory listing and the [`Entry`] metadata snapshot.
//! - [`nav`]: Sorting, key assignment, pagination, the root boundary and the [`Navigator`].
//! - [`config`]: TOML settings and side-command key bindings.
//! - [`action`]: Side commands the renderer can trigger by key.
//! - [`event`]: Command and outcome types for renderer ↔ core communication.
//! - [`opener`]: Default file and directory actions.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;
pub mod opener;

pub use action::{SideCommand, SideCommandDescriptor, SideCommandRegistry};
pub use config::keymap::{SideBinding, SideKeymap};
pub use config::settings::Config;
pub use error::{CoreError, CoreResult};
pub use event::{AfterSelect, Command, Outcome, Target};
pub use fs::{list_directory, Entry, EntryKind, ListingRules, Timestamp};
pub use nav::controller::{NavState, Navigator};
pub use nav::keys::{assign_keys, ReservedKeys, KEY_POOL_SIZE};
pub use nav::page::{paginate, KeyedEntry, Page};
pub use nav::session::{default_label, BrowseRequest, NavigationSession};
pub use nav::sort::{sort_entries, Direction, SortMethod};
