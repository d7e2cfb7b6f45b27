//! Application configuration loaded from TOML

use crate::error::ConfigError;
use crate::terminal::{Catalogue, CatalogueEntry, Profile, ProfileKind, TerminalSession};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::time::Duration;

/// Timing for the reveal and deferred terminal actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between revealed characters
    pub reveal_interval_ms: u64,
    /// Delay before `clear` empties the transcript
    pub clear_delay_ms: u64,
    /// Delay before the input receives focus after mount
    pub focus_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: 8,
            clear_delay_ms: 50,
            focus_delay_ms: 100,
        }
    }
}

impl TimingConfig {
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    pub fn clear_delay(&self) -> Duration {
        Duration::from_millis(self.clear_delay_ms)
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub profile: ProfileKind,
    pub theme: String,
    /// Overrides the profile prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Overrides the profile banner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    pub timing: TimingConfig,
    /// Replaces the built-in command table when non-empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CatalogueEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileKind::Classic,
            theme: "gruvbox_dark".to_string(),
            prompt: None,
            banner: None,
            timing: TimingConfig::default(),
            commands: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config_dir>/folioterm/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folioterm")
            .join("config.toml")
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from file, falling back to defaults when it is missing
    pub async fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_toml(&content)
    }

    /// Save configuration to file, creating parent directories
    pub async fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ConfigError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(path, content)
            .await
            .map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.reveal_interval_ms == 0 {
            return Err(ConfigError::invalid("timing.reveal_interval_ms must be positive"));
        }
        if let Some(prompt) = &self.prompt {
            if prompt.contains('\n') {
                return Err(ConfigError::invalid("prompt must be a single line"));
            }
        }
        if Theme::by_name(&self.theme).is_none() {
            return Err(ConfigError::UnknownTheme(self.theme.clone()));
        }
        self.catalogue()
            .map_err(|e| ConfigError::invalid(format!("commands: {}", e)))?;
        Ok(())
    }

    /// Built-in profile with prompt and banner overrides applied
    pub fn resolve_profile(&self) -> Profile {
        let mut profile = Profile::from_kind(self.profile);
        if let Some(prompt) = &self.prompt {
            profile.prompt = prompt.clone();
        }
        if let Some(banner) = &self.banner {
            profile.banner = banner.clone();
        }
        profile
    }

    /// Configured command table, or the profile's built-in one
    pub fn catalogue(&self) -> Result<Catalogue, crate::error::CatalogueError> {
        if self.commands.is_empty() {
            Ok(Profile::from_kind(self.profile).builtin_catalogue())
        } else {
            Catalogue::new(self.commands.clone())
        }
    }

    /// Mount a terminal session with the configured profile and command table
    pub fn mount_session(&self) -> crate::Result<TerminalSession> {
        Ok(TerminalSession::mount(self.resolve_profile(), self.catalogue()?))
    }

    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_default()
    }
}
