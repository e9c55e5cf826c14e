//! Storage module - persisted user preferences
//! - Windows: uses registry
//! - macOS/Linux: uses config file (JSON)
//! - otherwise: in memory for the session only
//!
//! Reads never fail. A missing, unreadable or corrupt store reads as empty.

#[cfg(all(windows, feature = "winreg"))]
use winreg::enums::*;
#[cfg(all(windows, feature = "winreg"))]
use winreg::RegKey;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Key holding the display language ("no" or "en")
pub const LANGUAGE_KEY: &str = "language";

#[cfg(all(windows, feature = "winreg"))]
const REGISTRY_KEY: &str = r"Software\Skogesal-Portfolio";

#[cfg(feature = "dirs")]
const CONFIG_FILE_NAME: &str = "settings.json";
#[cfg(feature = "dirs")]
const APP_NAME: &str = "skogesal-portfolio";

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

// ========== Memory ==========

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========== JSON file ==========

/// All preferences in one flat JSON object
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/skogesal-portfolio/settings.json`
    #[cfg(feature = "dirs")]
    pub fn in_config_dir() -> Result<Self, StorageError> {
        dirs::config_dir()
            .map(|p| Self::new(p.join(APP_NAME).join(CONFIG_FILE_NAME)))
            .ok_or(StorageError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> serde_json::Map<String, serde_json::Value> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return serde_json::Map::new();
        };
        match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => {
                tracing::warn!(path = %self.path.display(), "ignoring unreadable preferences file");
                serde_json::Map::new()
            }
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.read_all()
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_all();
        map.insert(key.to_string(), serde_json::Value::String(value.to_string()));

        // Create config directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(&serde_json::Value::Object(map))?;
        fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

// ========== Windows registry ==========

#[cfg(all(windows, feature = "winreg"))]
#[derive(Debug, Clone, Default)]
pub struct RegistryStore;

#[cfg(all(windows, feature = "winreg"))]
impl PreferenceStore for RegistryStore {
    fn load(&self, key: &str) -> Option<String> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER).open_subkey(REGISTRY_KEY).ok()?;
        hkcu.get_value::<String, _>(key).ok()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let (reg, _) = hkcu.create_subkey(REGISTRY_KEY).map_err(StorageError::Registry)?;
        reg.set_value(key, &value).map_err(StorageError::Registry)
    }
}

/// Platform backend for the running app
#[cfg(all(windows, feature = "winreg"))]
pub fn default_store() -> Box<dyn PreferenceStore> {
    Box::new(RegistryStore)
}

/// Platform backend for the running app
#[cfg(not(all(windows, feature = "winreg")))]
pub fn default_store() -> Box<dyn PreferenceStore> {
    #[cfg(feature = "dirs")]
    {
        match JsonFileStore::in_config_dir() {
            Ok(store) => {
                tracing::debug!(path = %store.path().display(), "using preferences file");
                return Box::new(store);
            }
            Err(e) => tracing::warn!("{}; preferences will not be saved", e),
        }
    }

    Box::new(MemoryStore::new())
}
