use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment override for the data directory, mainly for scripts and
/// throwaway setups.
pub const DATA_DIR_ENV: &str = "NGOP_DATA_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Where the store files live; unset means the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl StoreConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("ngop")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// Resolution order: environment override, configured directory,
    /// platform data dir.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        Ok(dirs::data_dir()
            .context("Cannot determine data directory")?
            .join("ngop"))
    }

    pub fn projects_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("projects.json"))
    }

    pub fn session_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("session.json"))
    }

    pub fn registry_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("registered_users.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directory_drives_the_store_paths() {
        let config = StoreConfig {
            data_dir: Some(PathBuf::from("/tmp/ngop-test")),
        };
        // The env override takes precedence, so skip the assertion when a
        // caller exported it.
        if std::env::var(DATA_DIR_ENV).is_err() {
            assert_eq!(
                config.projects_path().unwrap(),
                PathBuf::from("/tmp/ngop-test/projects.json")
            );
            assert_eq!(
                config.session_path().unwrap(),
                PathBuf::from("/tmp/ngop-test/session.json")
            );
            assert_eq!(
                config.registry_path().unwrap(),
                PathBuf::from("/tmp/ngop-test/registered_users.json")
            );
        }
    }

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert!(config.data_dir.is_none());
    }
}
