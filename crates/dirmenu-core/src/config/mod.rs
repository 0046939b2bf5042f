//! Configuration management for dirmenu.
//!
//! Navigation settings ([`settings::Config`]) and side-command bindings
//! ([`keymap::SideKeymap`]) are stored as TOML and validated at startup.

pub mod keymap;
pub mod settings;
