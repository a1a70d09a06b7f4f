use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_CONSOLE_TICK_MS, DEFAULT_TUI_TICK_MS, MIN_TICK_INTERVAL_MS};
use crate::error::ConfigError;

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// User-tunable timing for both front ends.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tui_tick_ms: u64,
    pub console_tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tui_tick_ms: DEFAULT_TUI_TICK_MS,
            console_tick_ms: DEFAULT_CONSOLE_TICK_MS,
        }
    }
}

impl Settings {
    /// Rejects tick intervals below [`MIN_TICK_INTERVAL_MS`].
    pub fn validate(self) -> Result<Self, ConfigError> {
        for got_ms in [self.tui_tick_ms, self.console_tick_ms] {
            if got_ms < MIN_TICK_INTERVAL_MS {
                return Err(ConfigError::TickTooShort {
                    got_ms,
                    min_ms: MIN_TICK_INTERVAL_MS,
                });
            }
        }

        Ok(self)
    }

    #[must_use]
    pub fn tui_tick(self) -> Duration {
        Duration::from_millis(self.tui_tick_ms)
    }

    #[must_use]
    pub fn console_tick(self) -> Duration {
        Duration::from_millis(self.console_tick_ms)
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads and validates settings from `path`.
///
/// A missing file yields the defaults. A file that exists but cannot be read,
/// parsed, or validated is an error.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::ReadSettings {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str::<Settings>(&raw)
        .map_err(|source| ConfigError::ParseSettings {
            path: path.to_path_buf(),
            source,
        })?
        .validate()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_settings, Settings};
    use crate::config::{DEFAULT_CONSOLE_TICK_MS, DEFAULT_TUI_TICK_MS};
    use crate::error::ConfigError;

    #[test]
    fn missing_settings_file_returns_defaults() {
        let path = unique_test_path("missing");

        let loaded = load_settings(&path).expect("missing file should return defaults");

        assert_eq!(loaded, Settings::default());
        assert_eq!(loaded.tui_tick_ms, DEFAULT_TUI_TICK_MS);
        assert_eq!(loaded.console_tick_ms, DEFAULT_CONSOLE_TICK_MS);
    }

    #[test]
    fn partial_settings_file_fills_in_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "tui_tick_ms": 250 }"#);

        let loaded = load_settings(&path).expect("partial file should load");

        assert_eq!(loaded.tui_tick_ms, 250);
        assert_eq!(loaded.console_tick_ms, DEFAULT_CONSOLE_TICK_MS);
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_settings_file_returns_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(matches!(
            load_settings(&path),
            Err(ConfigError::ParseSettings { .. })
        ));
        cleanup_test_path(&path);
    }

    #[test]
    fn too_short_tick_is_rejected() {
        let path = unique_test_path("too-fast");
        write_test_file(&path, r#"{ "console_tick_ms": 5 }"#);

        assert!(matches!(
            load_settings(&path),
            Err(ConfigError::TickTooShort { got_ms: 5, .. })
        ));
        cleanup_test_path(&path);
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-settings-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
