//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Calendar layout (first day of the week, inline item cap, start view)
//! - Notification queue capacity and removal delay
//! - Highlight duration for selected events
//!
//! Configuration is stored at `<data dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::highlight::DEFAULT_CLEAR_AFTER_MS;
use crate::notify::{DEFAULT_LIMIT, DEFAULT_REMOVE_DELAY_MS};
use crate::ordering::{ViewMode, WeekStart};

/// Calendar presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub week_start: WeekStart,
    /// Items listed inside a week/month cell before "+k more".
    #[serde(default = "default_inline_items")]
    pub inline_items: usize,
    #[serde(default)]
    pub default_view: ViewMode,
}

/// Notification queue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_remove_delay_ms")]
    pub remove_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_clear_after_ms")]
    pub clear_after_ms: u64,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

fn default_inline_items() -> usize {
    3
}
fn default_limit() -> usize {
    DEFAULT_LIMIT
}
fn default_remove_delay_ms() -> u64 {
    DEFAULT_REMOVE_DELAY_MS
}
fn default_clear_after_ms() -> u64 {
    DEFAULT_CLEAR_AFTER_MS
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            inline_items: default_inline_items(),
            default_view: ViewMode::default(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            remove_delay_ms: DEFAULT_REMOVE_DELAY_MS,
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            clear_after_ms: DEFAULT_CLEAR_AFTER_MS,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if part.is_empty() {
                return Err(unknown());
            }
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let new_value = match obj.get(part).ok_or_else(unknown)? {
                serde_json::Value::Bool(_) => value
                    .parse::<bool>()
                    .map(serde_json::Value::Bool)
                    .map_err(|e| invalid(e.to_string()))?,
                serde_json::Value::Number(_) => value
                    .parse::<u64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as a number")))?,
                serde_json::Value::Object(_) => return Err(unknown()),
                _ => serde_json::Value::String(value.to_lowercase()),
            };
            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// `<data dir>/config.toml`.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the data directory, writing the defaults when no file
    /// exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match Self::get_json_value_by_path(&json, key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. The value is checked against
    /// the field's type; the configuration is left untouched on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Every leaf key with its current value, sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        if let Ok(json) = serde_json::to_value(self) {
            collect_leaves(&json, String::new(), &mut entries);
        }
        entries
    }
}

fn collect_leaves(value: &serde_json::Value, prefix: String, out: &mut Vec<(String, String)>) {
    match value {
        serde_json::Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                collect_leaves(child, key, out);
            }
        }
        serde_json::Value::String(s) => out.push((prefix, s.clone())),
        other => out.push((prefix, other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.calendar.week_start, WeekStart::Sunday);
        assert_eq!(parsed.notifications.limit, 1);
        assert_eq!(parsed.notifications.remove_delay_ms, 1_000_000);
        assert_eq!(parsed.highlight.clear_after_ms, 2000);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[calendar]\nweek_start = \"monday\"\n").unwrap();
        assert_eq!(parsed.calendar.week_start, WeekStart::Monday);
        assert_eq!(parsed.calendar.inline_items, 3);
        assert_eq!(parsed.calendar.default_view, ViewMode::Week);
        assert_eq!(parsed.notifications, NotificationsConfig::default());
    }

    #[test]
    fn get_supports_nested_paths() {
        let cfg = Config::default();
        assert_eq!(cfg.get("calendar.week_start"), Some("sunday".to_string()));
        assert_eq!(cfg.get("notifications.limit"), Some("1".to_string()));
        assert_eq!(cfg.get("calendar"), None);
        assert_eq!(cfg.get("calendar.missing"), None);
        assert_eq!(cfg.get(""), None);
    }

    #[test]
    fn set_updates_typed_values() {
        let mut cfg = Config::default();
        cfg.set("calendar.week_start", "Monday").unwrap();
        cfg.set("calendar.inline_items", "5").unwrap();
        cfg.set("calendar.default_view", "month").unwrap();
        cfg.set("highlight.clear_after_ms", "500").unwrap();

        assert_eq!(cfg.calendar.week_start, WeekStart::Monday);
        assert_eq!(cfg.calendar.inline_items, 5);
        assert_eq!(cfg.calendar.default_view, ViewMode::Month);
        assert_eq!(cfg.highlight.clear_after_ms, 500);
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_values() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("calendar.nope", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("calendar", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("notifications.limit", "many"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("calendar.week_start", "someday"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_writes_defaults_when_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let mut changed = cfg;
        changed.set("calendar.week_start", "monday").unwrap();
        changed.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), changed);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[calendar\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }

    #[test]
    fn entries_list_every_leaf() {
        let entries = Config::default().entries();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"calendar.week_start"));
        assert!(keys.contains(&"notifications.remove_delay_ms"));
        assert!(keys.contains(&"highlight.clear_after_ms"));
        assert_eq!(entries.len(), 6);
    }
}
