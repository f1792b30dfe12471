use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{Result, Context};
use tracing::{debug, info};

use novellint_types::Config;
use crate::error::CliError;

pub const DEFAULT_PROFILE: &str = "default";

pub struct ConfigManager {
    config_dir: PathBuf,
    default_config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_file: Option<PathBuf>) -> Result<Self> {
        let (config_dir, default_config_path) = match config_file {
            Some(path) => {
                let dir = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                (dir, path)
            }
            None => Self::default_config_paths()?,
        };

        Ok(Self {
            config_dir,
            default_config_path,
        })
    }

    fn default_config_paths() -> Result<(PathBuf, PathBuf)> {
        #[cfg(windows)]
        let base = std::env::var("APPDATA")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map(PathBuf::from)
            .context("Failed to determine user configuration directory")?;

        #[cfg(not(windows))]
        let base = std::env::var("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .context("Failed to determine home directory")?;

        let config_dir = base.join("novellint");
        let default_config = config_dir.join("config.json");
        Ok((config_dir, default_config))
    }

    /// Loads a profile. The default profile is created on first use.
    pub fn load_config(&self, profile: Option<&str>) -> Result<Config> {
        let name = profile.unwrap_or(DEFAULT_PROFILE);
        let config_path = self.get_profile_path(name);

        debug!("Loading configuration from: {}", config_path.display());

        if !config_path.exists() {
            if name != DEFAULT_PROFILE {
                return Err(CliError::profile_not_found(name).into());
            }
            let default_config = Config::default();
            self.save_config_to_path(&config_path, &default_config)?;
            info!("Created default configuration at: {}", config_path.display());
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            CliError::config(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate().map_err(CliError::from)?;

        Ok(config)
    }

    pub fn save_config(&self, profile: &str, config: &Config) -> Result<()> {
        let config_path = self.get_profile_path(profile);
        self.save_config_to_path(&config_path, config)
    }

    fn save_config_to_path(&self, path: &Path, config: &Config) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .context("Failed to create config directory")?;
            }
        }

        let json = serde_json::to_string_pretty(config)
            .context("Failed to serialize configuration")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        debug!("Configuration saved to: {}", path.display());
        Ok(())
    }

    pub fn get_profile_path(&self, profile: &str) -> PathBuf {
        if profile == DEFAULT_PROFILE {
            self.default_config_path.clone()
        } else {
            self.config_dir.join(format!("{}.json", profile))
        }
    }

    pub fn list_profiles(&self) -> Result<Vec<String>> {
        let mut profiles = Vec::new();

        if self.default_config_path.exists() {
            profiles.push(DEFAULT_PROFILE.to_string());
        }

        if !self.config_dir.exists() {
            return Ok(profiles);
        }

        let default_stem = self.default_config_path.file_stem();
        let entries = fs::read_dir(&self.config_dir)
            .context("Failed to read configuration directory")?;

        for entry in entries {
            let path = entry.context("Failed to read directory entry")?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if path.file_stem() == default_stem {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                profiles.push(stem.to_string());
            }
        }

        profiles.sort();
        profiles.dedup();
        Ok(profiles)
    }

    pub fn profile_exists(&self, profile: &str) -> bool {
        self.get_profile_path(profile).exists()
    }

    pub fn delete_profile(&self, profile: &str) -> Result<()> {
        if profile == DEFAULT_PROFILE {
            anyhow::bail!("Cannot delete default profile");
        }

        let path = self.get_profile_path(profile);
        if !path.exists() {
            return Err(CliError::profile_not_found(profile).into());
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete profile file: {}", path.display()))?;

        info!("Deleted profile: {}", profile);
        Ok(())
    }
}
