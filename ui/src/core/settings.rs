//! Where the experiment service lives, and how that choice is persisted.
//!
//! Resolution order on load:
//! 1. `DETREPORT_SERVER` (native builds only)
//! 2. persisted settings (`settings.json` in the platform config dir, or
//!    `localStorage` on the web)
//! 3. the platform default

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const SERVER_ENV: &str = "DETREPORT_SERVER";

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "detreport.settings";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no configuration directory available")]
    NoConfigDir,
    #[error("browser storage unavailable")]
    StorageUnavailable,
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings format: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub server_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            server_address: default_server_address(),
        }
    }
}

impl ServerSettings {
    pub fn new<S: Into<String>>(server_address: S) -> Self {
        Self {
            server_address: server_address.into().trim().to_string(),
        }
    }

    /// Resolve the active settings. Never fails; problems are logged and the
    /// default is used.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(address) = std::env::var(SERVER_ENV)
                .ok()
                .filter(|value| !value.trim().is_empty())
            {
                return Self::new(address);
            }
        }

        match read_persisted() {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(err) => {
                warn!(error = %err, "ignoring unreadable server settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        write_persisted(self)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_server_address() -> String {
    "http://localhost:8080".to_string()
}

#[cfg(target_arch = "wasm32")]
fn default_server_address() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{ServerSettings, SettingsError};

    pub(super) fn settings_path() -> Result<PathBuf, SettingsError> {
        ProjectDirs::from("ai", "determined", "detreport")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or(SettingsError::NoConfigDir)
    }

    pub(super) fn read_from(path: &Path) -> Result<Option<ServerSettings>, SettingsError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub(super) fn write_to(path: &Path, settings: &ServerSettings) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_persisted() -> Result<Option<ServerSettings>, SettingsError> {
    native::read_from(&native::settings_path()?)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_persisted(settings: &ServerSettings) -> Result<(), SettingsError> {
    native::write_to(&native::settings_path()?, settings)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, SettingsError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(SettingsError::StorageUnavailable)
}

#[cfg(target_arch = "wasm32")]
fn read_persisted() -> Result<Option<ServerSettings>, SettingsError> {
    let raw = local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|_| SettingsError::StorageUnavailable)?;
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

#[cfg(target_arch = "wasm32")]
fn write_persisted(settings: &ServerSettings) -> Result<(), SettingsError> {
    let raw = serde_json::to_string(settings)?;
    local_storage()?
        .set_item(STORAGE_KEY, &raw)
        .map_err(|_| SettingsError::StorageUnavailable)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::native::{read_from, write_to};
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = read_from(&dir.path().join("settings.json")).unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn saved_settings_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = ServerSettings::new("https://det.example.com ");

        write_to(&path, &settings).unwrap();

        let loaded = read_from(&path).unwrap().unwrap();
        assert_eq!(loaded.server_address, "https://det.example.com");
    }

    #[test]
    fn corrupt_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(read_from(&path), Err(SettingsError::Format(_))));
    }

    #[test]
    fn native_default_points_at_local_master() {
        assert_eq!(
            ServerSettings::default().server_address,
            "http://localhost:8080"
        );
    }
}
