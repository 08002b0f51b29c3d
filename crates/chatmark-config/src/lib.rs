use chatmark_engine::{DEFAULT_ATTACHMENT_PREFIX, RenderOptions, TranscriptRenderer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderSection,
    pub transcript: TranscriptSection,
}

/// `[render]`: output switches for rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSection {
    pub open_links_in_new_tab: bool,
    pub code_language_class: bool,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            open_links_in_new_tab: true,
            code_language_class: true,
        }
    }
}

/// `[transcript]`: message routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSection {
    /// System messages starting with this prefix are attachment markers.
    pub attachment_prefix: String,
}

impl Default for TranscriptSection {
    fn default() -> Self {
        Self {
            attachment_prefix: DEFAULT_ATTACHMENT_PREFIX.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::debug!("Loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    /// Loads from `config_path`, falling back to defaults when the file is absent.
    pub fn load_or_default<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(config_path)?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            open_links_in_new_tab: self.render.open_links_in_new_tab,
            code_language_class: self.render.code_language_class,
        }
    }

    /// Builds the transcript renderer this config describes.
    pub fn transcript_renderer(&self) -> TranscriptRenderer {
        TranscriptRenderer::new(self.render_options(), &self.transcript.attachment_prefix)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chatmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}
