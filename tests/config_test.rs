//! Integration tests for Settings config loading.
//!
//! Every test that loads settings holds `ENV_LOCK`, since some of them set
//! `EXPRWALK_*` variables for the whole process.

use std::env;
use std::fs;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use exprwalk::application::ApplicationError;
use exprwalk::config::{Settings, DEFAULT_DELAY_MS, MAX_DELAY_MS};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Sets an environment variable, restoring the previous value on drop.
struct EnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var(key).ok();
        env::set_var(key, value);
        EnvVar { key, previous }
    }
}

impl Drop for EnvVar {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}

#[test]
fn given_explicit_config_when_load_then_overrides_specified_fields_only() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exprwalk.toml");
    fs::write(&path, "delay_ms = 120\nseparator = \",\"\n").unwrap();

    let _lock = lock_env();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.delay_ms, 120);
    assert_eq!(settings.separator, ",");
    assert!(settings.color, "unspecified color keeps its default");
}

#[test]
fn given_missing_config_file_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    let _lock = lock_env();

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_config_when_load_then_error_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "delay_ms = \"soon\"").unwrap();
    let _lock = lock_env();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("broken.toml"), "got: {}", err);
}

#[test]
fn given_no_config_file_when_load_then_succeeds() {
    // A global config may exist on a developer machine, so only the outcome is checked.
    let _lock = lock_env();
    assert!(Settings::load(None).is_ok());
    assert_eq!(Settings::default().delay_ms, DEFAULT_DELAY_MS);
}

#[test]
fn given_settings_when_serialized_then_round_trips_through_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exprwalk.toml");
    let original = Settings {
        delay_ms: 5,
        color: false,
        separator: " | ".into(),
    };
    fs::write(&path, original.to_toml().unwrap()).unwrap();
    let _lock = lock_env();

    let loaded = Settings::load(Some(&path)).unwrap();

    assert_eq!(loaded, original);
}

// ============================================================
// Environment overrides
// ============================================================

#[test]
fn given_env_vars_when_load_then_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exprwalk.toml");
    fs::write(&path, "delay_ms = 120\ncolor = true\n").unwrap();
    let _lock = lock_env();
    let _delay = EnvVar::set("EXPRWALK_DELAY_MS", "42");
    let _color = EnvVar::set("EXPRWALK_COLOR", "false");

    let settings = Settings::load(Some(&path)).unwrap();

    assert_eq!(settings.delay_ms, 42);
    assert!(!settings.color);
}

#[test]
fn given_env_delay_above_cap_when_load_then_returns_config_error() {
    let _lock = lock_env();
    let _delay = EnvVar::set("EXPRWALK_DELAY_MS", &(MAX_DELAY_MS + 1).to_string());

    let result = Settings::load(None);

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_config_file_delay_above_cap_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exprwalk.toml");
    fs::write(&path, "delay_ms = 9000000000000\n").unwrap();
    let _lock = lock_env();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("at most 60000"), "got: {}", err);
}

// ============================================================
// Global config (XDG_CONFIG_HOME is honored on Linux)
// ============================================================

#[cfg(target_os = "linux")]
fn write_global_config(home: &TempDir, content: &str) {
    let dir = home.path().join("exprwalk");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("exprwalk.toml"), content).unwrap();
}

#[cfg(target_os = "linux")]
#[test]
fn given_global_config_when_load_then_explicit_file_wins() {
    let home = TempDir::new().unwrap();
    write_global_config(&home, "delay_ms = 300\nseparator = \";\"\n");
    let explicit = home.path().join("explicit.toml");
    fs::write(&explicit, "delay_ms = 50\n").unwrap();
    let _lock = lock_env();
    let _xdg = EnvVar::set("XDG_CONFIG_HOME", &home.path().to_string_lossy());

    let settings = Settings::load(Some(&explicit)).unwrap();

    assert_eq!(settings.delay_ms, 50);
    assert_eq!(settings.separator, ";");
}

#[cfg(target_os = "linux")]
#[test]
fn given_global_config_delay_above_cap_when_load_then_returns_config_error() {
    let home = TempDir::new().unwrap();
    write_global_config(&home, "delay_ms = 9000000000000\n");
    let _lock = lock_env();
    let _xdg = EnvVar::set("XDG_CONFIG_HOME", &home.path().to_string_lossy());

    let result = Settings::load(None);

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
