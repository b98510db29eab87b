use crate::injection::BackendKind;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Timeout applied to a backend kind with no configured value
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Fallback order: "ydotool", "wtype", "clipboard"
    pub backends: Vec<String>,

    #[serde(default = "default_timeout_ms")]
    pub ydotool_timeout_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub wtype_timeout_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub clipboard_timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backends: vec!["ydotool".to_string(), "wtype".to_string()],
            ydotool_timeout_ms: 2000,
            wtype_timeout_ms: 2000,
            clipboard_timeout_ms: 1000,
        }
    }
}

impl Config {
    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // Graceful degradation: log warning and use defaults
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Backup corrupt file for debugging
                    let backup_path = path.with_extension("json.corrupt");
                    let _ = std::fs::rename(path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Timeout for a backend kind
    pub fn timeout_for(&self, kind: BackendKind) -> Duration {
        match kind {
            BackendKind::Ydotool => Duration::from_millis(self.ydotool_timeout_ms),
            BackendKind::Wtype => Duration::from_millis(self.wtype_timeout_ms),
            BackendKind::Clipboard => Duration::from_millis(self.clipboard_timeout_ms),
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("keyrelay")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backends, vec!["ydotool", "wtype"]);
        assert_eq!(config.ydotool_timeout_ms, 2000);
        assert_eq!(config.wtype_timeout_ms, 2000);
        assert_eq!(config.clipboard_timeout_ms, 1000);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: Config = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config.backends, restored.backends);
        assert_eq!(config.ydotool_timeout_ms, restored.ydotool_timeout_ms);
    }

    #[test]
    fn test_timeout_defaults_when_unset() {
        // Older config files may omit the timeout fields entirely
        let json = r#"{"backends":["wtype"]}"#;
        let config: Config = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(
            config.timeout_for(BackendKind::Ydotool),
            DEFAULT_TIMEOUT
        );
        assert_eq!(config.timeout_for(BackendKind::Clipboard), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_timeout_for_each_kind() {
        let config = Config::default();
        assert_eq!(
            config.timeout_for(BackendKind::Ydotool),
            Duration::from_millis(2000)
        );
        assert_eq!(
            config.timeout_for(BackendKind::Wtype),
            Duration::from_millis(2000)
        );
        assert_eq!(
            config.timeout_for(BackendKind::Clipboard),
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("nope.json")).expect("load failed");
        assert_eq!(config.backends, Config::default().backends);
    }

    #[test]
    fn test_load_from_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").expect("write failed");

        let config = Config::load_from(&path).expect("load failed");
        assert_eq!(config.backends, Config::default().backends);
        // Corrupt file gets moved aside
        assert!(!path.exists());
        assert!(path.with_extension("json.corrupt").exists());
    }
}
