//! Game settings and preferences
//!
//! Persisted separately from progress, under their own storage key.

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_KEY;
use crate::platform::Storage;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the optional backend, e.g. `http://localhost:8001`
    pub backend_url: Option<String>,
    /// Greet the backend on start-up (result is only logged)
    pub health_check: bool,
    /// Show key-material breadcrumbs under each stage
    pub show_hints: bool,
    /// How long toasts stay on screen
    pub toast_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: None,
            health_check: true,
            show_hints: false,
            toast_ms: 3000,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults
    pub fn load(storage: &impl Storage) -> Self {
        match storage.get_item(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, storage: &mut impl Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            match storage.set_item(SETTINGS_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Could not save settings: {}", e),
            }
        }
    }

    /// URL for the health check, if one should run
    pub fn health_url(&self) -> Option<String> {
        if !self.health_check {
            return None;
        }
        let base = self.backend_url.as_deref()?.trim().trim_end_matches('/');
        if base.is_empty() {
            return None;
        }
        Some(format!("{base}/api/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryStorage, StorageError};

    struct Unreadable;

    impl Storage for Unreadable {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_defaults_when_missing() {
        let storage = MemoryStorage::new();
        assert_eq!(Settings::load(&storage), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let mut storage = MemoryStorage::new();
        let settings = Settings {
            backend_url: Some("http://localhost:8001".to_string()),
            show_hints: true,
            ..Default::default()
        };
        settings.save(&mut storage);
        assert_eq!(Settings::load(&storage), settings);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let mut storage = MemoryStorage::new();
        storage
            .set_item(SETTINGS_KEY, r#"{"show_hints":true}"#)
            .unwrap();
        let settings = Settings::load(&storage);
        assert!(settings.show_hints);
        assert!(settings.health_check);
        assert_eq!(settings.toast_ms, 3000);
    }

    #[test]
    fn test_unreadable_storage_falls_back() {
        let mut storage = Unreadable;
        assert_eq!(Settings::load(&storage), Settings::default());
        Settings::default().save(&mut storage);
    }

    #[test]
    fn test_health_url() {
        let mut settings = Settings::default();
        assert_eq!(settings.health_url(), None);

        settings.backend_url = Some("https://ctf.example/".to_string());
        assert_eq!(settings.health_url().as_deref(), Some("https://ctf.example/api/"));

        settings.health_check = false;
        assert_eq!(settings.health_url(), None);
    }
}
