//! Local persistence for user settings (currently the chosen locale).
//!
//! Web builds keep a JSON blob in `localStorage`; native builds write
//! `settings.json` into the platform config directory, or into
//! `$DABANG_CONFIG_DIR` when that is set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "dabang.settings";
#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_FILE: &str = "settings.json";
#[cfg(not(target_arch = "wasm32"))]
pub(crate) const CONFIG_DIR_ENV: &str = "DABANG_CONFIG_DIR";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("settings storage is unavailable on this platform")]
    Unavailable,
    #[error("settings i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings are not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("browser storage rejected the request: {0}")]
    Browser(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Language code picked by the user (`"en"`, `"fa"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Loads persisted settings. Missing storage yields defaults.
pub fn load_settings() -> Result<Settings, StorageError> {
    match read_raw()? {
        Some(raw) => Settings::from_json(&raw),
        None => Ok(Settings::default()),
    }
}

pub fn save_settings(settings: &Settings) -> Result<(), StorageError> {
    write_raw(&settings.to_json()?)
}

/// Records `code` as the preferred locale, keeping any other settings.
pub fn remember_locale(code: &str) -> Result<(), StorageError> {
    let mut settings = load_settings().unwrap_or_default();
    settings.locale = Some(code.to_string());
    save_settings(&settings)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|err| StorageError::Browser(format!("{err:?}")))?
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn read_raw() -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(SETTINGS_KEY)
        .map_err(|err| StorageError::Browser(format!("{err:?}")))
}

#[cfg(target_arch = "wasm32")]
fn write_raw(raw: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(SETTINGS_KEY, raw)
        .map_err(|err| StorageError::Browser(format!("{err:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn settings_path() -> Result<std::path::PathBuf, StorageError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(std::path::PathBuf::from(dir).join(SETTINGS_FILE));
    }
    let dirs = directories::ProjectDirs::from("com", "Dabang", "Dabang")
        .ok_or(StorageError::Unavailable)?;
    Ok(dirs.config_dir().join(SETTINGS_FILE))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw() -> Result<Option<String>, StorageError> {
    read_file(&settings_path()?)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(raw: &str) -> Result<(), StorageError> {
    write_file(&settings_path()?, raw)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_file(path: &std::path::Path) -> Result<Option<String>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_file(path: &std::path::Path, raw: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, raw)?;
    Ok(())
}
