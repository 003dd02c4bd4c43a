//! Environment-driven settings.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file by the binary before [`Settings::from_env`] is called.

use std::io::IsTerminal;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "logs/grade_calculator.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the rolling JSON log file (`LOG_FILE_PATH`).
    pub log_file_path: PathBuf,
    /// Whether letter grades are colored in the interactive display.
    /// Disabled when stdout is not a terminal or `NO_COLOR` is set to a
    /// non-empty value.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE),
            color: true,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    /// Builds settings from an arbitrary key lookup and whether stdout is a
    /// terminal.
    pub fn from_lookup<F>(lookup: F, stdout_is_terminal: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_file_path = lookup("LOG_FILE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file_path);

        let color = stdout_is_terminal && lookup("NO_COLOR").is_none_or(|v| v.is_empty());

        Self {
            log_file_path,
            color,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[]), true);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_log_file_path_override() {
        let settings = Settings::from_lookup(lookup_from(&[("LOG_FILE_PATH", "/tmp/g.log")]), true);
        assert_eq!(settings.log_file_path, PathBuf::from("/tmp/g.log"));
    }

    #[test]
    fn test_no_color() {
        assert!(!Settings::from_lookup(lookup_from(&[("NO_COLOR", "1")]), true).color);
        assert!(Settings::from_lookup(lookup_from(&[("NO_COLOR", "")]), true).color);
        assert!(!Settings::default().with_color(false).color);
    }

    #[test]
    fn test_color_off_when_stdout_is_not_a_terminal() {
        let settings = Settings::from_lookup(lookup_from(&[]), false);
        assert!(!settings.color);
        assert_eq!(settings.log_file_path, PathBuf::from(DEFAULT_LOG_FILE));
    }
}
