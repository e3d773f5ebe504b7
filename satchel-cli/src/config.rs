//! Global satchel configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, File};
use serde::{Deserialize, Serialize};

/// Global configuration at ~/.config/satchel/config.toml
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct SatchelConfig {
    /// Email address used when creating or answering invitations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Display name attached to the organizer property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_name: Option<String>,
}

impl SatchelConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("satchel");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: SatchelConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Save the current config to ~/.config/satchel/config.toml
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)
            .with_context(|| format!("Could not write {}", config_path.display()))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &Path) -> Result<()> {
        let contents = "\
# satchel configuration

# Email address used when creating or answering invitations:
# from = \"you@example.com\"

# Display name attached to the organizer property:
# organizer_name = \"Your Name\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write {}", path.display()))?;

        log::debug!("Created default config at {}", path.display());

        Ok(())
    }
}
