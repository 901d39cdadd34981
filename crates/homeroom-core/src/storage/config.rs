//! TOML-based application configuration.
//!
//! Stores the tunables the engines expose:
//! - Insight limits and pacing thresholds
//! - Reminder urgency thresholds
//! - Default sort mode and default reminder lead for new assignments
//!
//! Configuration is stored at `~/.config/homeroom/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::assignment::DEFAULT_REMINDER_LEAD_HOURS;
use crate::error::ConfigError;
use crate::insight::InsightConfig;
use crate::planner::SortMode;
use crate::reminder::ReminderThresholds;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/homeroom/config.toml`. The
/// engine config types double as the TOML sections so defaults live in
/// one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ordering applied to the assignment list view.
    #[serde(default)]
    pub default_sort_mode: SortMode,
    /// Reminder lead applied to newly created assignments.
    #[serde(default = "default_reminder_lead")]
    pub default_reminder_lead_hours: u32,
    #[serde(default)]
    pub insights: InsightConfig,
    #[serde(default)]
    pub reminders: ReminderThresholds,
}

fn default_reminder_lead() -> u32 {
    DEFAULT_REMINDER_LEAD_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort_mode: SortMode::default(),
            default_reminder_lead_hours: default_reminder_lead(),
            insights: InsightConfig::default(),
            reminders: ReminderThresholds::default(),
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
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| ConfigError::InvalidValue {
                                    key: key.to_string(),
                                    message: format!("cannot parse '{value}' as number"),
                                })?
                        } else {
                            return Err(ConfigError::InvalidValue {
                                key: key.to_string(),
                                message: format!("cannot parse '{value}' as number"),
                            });
                        }
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// into the key's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.insights.next_action_limit, 4);
        assert_eq!(parsed.reminders.very_soon_hours, 6.0);
        assert_eq!(parsed.default_sort_mode, SortMode::DueDate);
        assert_eq!(parsed.default_reminder_lead_hours, 24);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.insights.fallback_estimated_hours, 1.0);
        assert_eq!(parsed.insights.pacing.heavy_day_hours, 4.0);
        assert_eq!(parsed.insights.pacing.packed_week_hours, 12.0);
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [insights]
            next_action_limit = 6
            "#,
        )
        .unwrap();
        assert_eq!(parsed.insights.next_action_limit, 6);
        assert_eq!(parsed.insights.fallback_estimated_hours, 1.0);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("insights.next_action_limit").as_deref(), Some("4"));
        assert_eq!(cfg.get("reminders.very_soon_hours").as_deref(), Some("6.0"));
        assert_eq!(cfg.get("default_sort_mode").as_deref(), Some("dueDate"));
        assert!(cfg.get("insights.missing_key").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "insights.pacing.heavy_day_hours", "5.5")
            .unwrap();
        let parsed: Config = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.insights.pacing.heavy_day_hours, 5.5);
    }

    #[test]
    fn set_json_value_by_path_updates_sort_mode_string() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "default_sort_mode", "course").unwrap();
        let parsed: Config = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.default_sort_mode, SortMode::Course);
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "insights.nonexistent", "1");
        assert!(matches!(result, Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn set_json_value_by_path_rejects_bad_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result =
            Config::set_json_value_by_path(&mut json, "insights.next_action_limit", "many");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
