//! Application configuration loaded from a TOML file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::keymap::SideKeymap;
use crate::error::{CoreError, CoreResult};
use crate::nav::keys::{ReservedKeys, KEY_POOL_SIZE};
use crate::nav::sort::SortMethod;

/// Top-level configuration.
///
/// All fields have defaults so dirmenu works without a config file.
/// Call [`Config::load`] to read from a TOML path and [`Config::validate`]
/// before starting a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Conventional location: `<config dir>/dirmenu/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dirmenu").join("config.toml"))
    }

    /// Checks page size and key settings before any session begins.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidConfiguration`] describing the first problem found.
    pub fn validate(&self) -> CoreResult<()> {
        let reserved = self.reserved_keys();
        for key in [&reserved.back_to_parent, &reserved.current_directory] {
            if key.is_empty() {
                return Err(CoreError::InvalidConfiguration(
                    "reserved keys must not be empty".to_string(),
                ));
            }
            let mut chars = key.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if c.is_alphanumeric() {
                    return Err(CoreError::InvalidConfiguration(format!(
                        "reserved key {key:?} would collide with entry keys"
                    )));
                }
            }
        }
        if reserved.back_to_parent == reserved.current_directory {
            return Err(CoreError::InvalidConfiguration(format!(
                "back-to-parent and current-directory keys are both {:?}",
                reserved.back_to_parent
            )));
        }

        let max = self.navigation.max_items_per_page;
        if max == 0 {
            return Err(CoreError::InvalidConfiguration(
                "max_items_per_page must be positive".to_string(),
            ));
        }
        let capacity = KEY_POOL_SIZE - reserved.pool_cost();
        if max > capacity {
            return Err(CoreError::InvalidConfiguration(format!(
                "max_items_per_page {max} exceeds the {capacity} available keys"
            )));
        }

        self.side_keymap()?.validate(&reserved)
    }

    /// The configured root with `~` expanded.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidConfiguration`] if `~` is used but no home
    /// directory is known.
    pub fn root_dir(&self) -> CoreResult<PathBuf> {
        let root = self.navigation.root.as_str();
        let rest = match root.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => return Ok(PathBuf::from(root)),
        };
        let home = dirs::home_dir().ok_or_else(|| {
            CoreError::InvalidConfiguration("root uses ~ but no home directory is set".to_string())
        })?;
        Ok(home.join(rest.trim_start_matches('/')))
    }

    pub fn reserved_keys(&self) -> ReservedKeys {
        ReservedKeys {
            back_to_parent: self.keys.back_to_parent.clone(),
            current_directory: self.keys.current_directory.clone(),
        }
    }

    /// Side-command bindings: defaults plus `[keys.side]` overrides.
    pub fn side_keymap(&self) -> CoreResult<SideKeymap> {
        SideKeymap::with_overrides(&self.keys.side)
    }
}

/// Where and how menus are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_max_items_per_page")]
    pub max_items_per_page: usize,
    #[serde(default)]
    pub default_sort: SortMethod,
    #[serde(default)]
    pub column_major: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            max_items_per_page: default_max_items_per_page(),
            default_sort: SortMethod::default(),
            column_major: false,
        }
    }
}

/// Reserved keys and side-command overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysConfig {
    #[serde(default = "default_back_to_parent")]
    pub back_to_parent: String,
    #[serde(default = "default_current_directory")]
    pub current_directory: String,
    /// Key → side command id.
    #[serde(default)]
    pub side: BTreeMap<String, String>,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            back_to_parent: default_back_to_parent(),
            current_directory: default_current_directory(),
            side: BTreeMap::new(),
        }
    }
}

fn default_root() -> String {
    "~".to_string()
}

fn default_max_items_per_page() -> usize {
    40
}

fn default_back_to_parent() -> String {
    ReservedKeys::default().back_to_parent
}

fn default_current_directory() -> String {
    ReservedKeys::default().current_directory
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_navigation() {
        let config = Config::default();

        assert_eq!(config.navigation.root, "~");
        assert_eq!(config.navigation.max_items_per_page, 40);
        assert_eq!(config.navigation.default_sort, SortMethod::Name);
        assert!(!config.navigation.column_major);
    }

    #[test]
    fn default_config_keys() {
        let config = Config::default();

        assert_eq!(config.keys.back_to_parent, "^");
        assert_eq!(config.keys.current_directory, ".");
        assert!(config.keys.side.is_empty());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[navigation]
root = "/srv/media"
max_items_per_page = 20
default_sort = "time-modified"
column_major = true

[keys]
back_to_parent = "<"
current_directory = ">"

[keys.side]
"M-s" = "sort_next"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.navigation.root, "/srv/media");
        assert_eq!(config.navigation.max_items_per_page, 20);
        assert_eq!(config.navigation.default_sort, SortMethod::TimeModified);
        assert!(config.navigation.column_major);
        assert_eq!(config.keys.back_to_parent, "<");
        assert_eq!(config.keys.current_directory, ">");
        assert_eq!(config.keys.side.get("M-s").map(String::as_str), Some("sort_next"));
        assert!(config.validate().is_ok());
        assert_eq!(config.root_dir().unwrap(), PathBuf::from("/srv/media"));
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[navigation]\nmax_items_per_page = 12\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.navigation.max_items_per_page, 12);
        assert_eq!(config.navigation.root, "~");
        assert_eq!(config.keys.back_to_parent, "^");
    }

    #[test]
    fn load_unknown_sort_method_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[navigation]\ndefault_sort = \"colour\"\n").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "this is not valid [[[toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let mut config = Config::default();
        config.navigation.max_items_per_page = 0;
        assert!(matches!(
            config.validate().unwrap_err(),
            CoreError::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn page_size_beyond_key_pool_is_invalid() {
        let mut config = Config::default();
        config.navigation.max_items_per_page = KEY_POOL_SIZE - 2;
        assert!(config.validate().is_ok());

        config.navigation.max_items_per_page = KEY_POOL_SIZE - 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn identical_reserved_keys_are_invalid() {
        let mut config = Config::default();
        config.keys.current_directory = "^".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn alphanumeric_reserved_key_is_invalid() {
        let mut config = Config::default();
        config.keys.back_to_parent = "u".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_reserved_key_is_invalid() {
        let mut config = Config::default();
        config.keys.current_directory = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn side_override_colliding_with_reserved_key_is_invalid() {
        let mut config = Config::default();
        config.keys.back_to_parent = "C-up".to_string();
        config
            .keys
            .side
            .insert("C-up".to_string(), "refresh".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn tilde_root_expands_to_home() {
        let config = Config::default();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.root_dir().unwrap(), home);
        }

        let mut nested = Config::default();
        nested.navigation.root = "~/projects".to_string();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(nested.root_dir().unwrap(), home.join("projects"));
        }
    }

    #[test]
    fn tilde_inside_name_is_literal() {
        let mut config = Config::default();
        config.navigation.root = "~other".to_string();
        assert_eq!(config.root_dir().unwrap(), PathBuf::from("~other"));
    }
}
