use std::fs;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::db::connection;
use crate::error::PlannerError;
use crate::store::views::WeekStart;

/// Workspace settings, stored as `.weekplan/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub week_start: WeekStart,
    /// Minutes for `task add` without `--duration`.
    pub default_duration: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Monday,
            default_duration: 30,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 2] = ["week_start", "default_duration"];

    /// Missing or unreadable config means defaults.
    pub fn load() -> Self {
        let Ok(path) = connection::config_path() else {
            return Self::default();
        };
        let Ok(content) = fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::parse(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Self::default()
        })
    }

    pub fn parse(content: &str) -> Result<Self, PlannerError> {
        serde_json::from_str(content).map_err(|e| PlannerError::config(e.to_string()))
    }

    pub fn save(&self) -> Result<(), PlannerError> {
        let path = connection::config_path()?;
        let body = serde_json::to_string_pretty(self).map_err(|e| PlannerError::config(e.to_string()))?;
        fs::write(&path, body).map_err(|e| PlannerError::config(e.to_string()))
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PlannerError> {
        match key {
            "week_start" => {
                self.week_start = WeekStart::from_str(value).ok_or_else(|| {
                    PlannerError::config(format!("week_start must be monday or sunday, got '{value}'"))
                })?;
            }
            "default_duration" => {
                self.default_duration = value
                    .parse::<u32>()
                    .ok()
                    .filter(|d| *d > 0)
                    .ok_or_else(|| {
                        PlannerError::config(format!(
                            "default_duration must be a positive number of minutes, got '{value}'"
                        ))
                    })?;
            }
            _ => {
                return Err(PlannerError::config(format!(
                    "Unknown config key '{key}'. Known keys: {}",
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let c = Config::parse(r#"{"week_start":"sunday"}"#).unwrap();
        assert_eq!(c.week_start, WeekStart::Sunday);
        assert_eq!(c.default_duration, 30);
    }

    #[test]
    fn test_set_validates() {
        let mut c = Config::default();
        c.set("default_duration", "45").unwrap();
        assert_eq!(c.default_duration, 45);
        assert!(c.set("default_duration", "0").is_err());
        assert!(c.set("week_start", "friday").is_err());
        let err = c.set("theme", "dark").unwrap_err();
        assert_eq!(err.code.as_str(), "CONFIG_ERROR");
    }
}
