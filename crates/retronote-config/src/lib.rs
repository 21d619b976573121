use retronote_engine::{FormatOptions, TemplateSyntax};
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

/// Presentation flag defaults applied before per-invocation toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatDefaults {
    #[serde(default)]
    pub numbering: bool,
    #[serde(default)]
    pub strip_emoji: bool,
    #[serde(default)]
    pub guide_questions: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// H2 titles treated as protected default sections. Localized variants
    /// are listed here explicitly rather than inferred.
    #[serde(default = "default_section_titles")]
    pub default_section_titles: Vec<String>,
    /// Token accepted in a leading H1 title in place of the problem name.
    #[serde(default = "default_placeholder_token")]
    pub placeholder_token: String,
    #[serde(default)]
    pub format: FormatDefaults,
}

fn default_section_titles() -> Vec<String> {
    TemplateSyntax::default().default_section_titles
}

fn default_placeholder_token() -> String {
    TemplateSyntax::default().placeholder_token
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_section_titles: default_section_titles(),
            placeholder_token: default_placeholder_token(),
            format: FormatDefaults::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
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

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
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

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/retronote");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Parsing policy derived from this config.
    pub fn syntax(&self) -> TemplateSyntax {
        TemplateSyntax {
            default_section_titles: self.default_section_titles.clone(),
            placeholder_token: self.placeholder_token.clone(),
        }
    }

    /// Presentation defaults derived from this config.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            numbering: self.format.numbering,
            strip_emoji: self.format.strip_emoji,
            guide_questions: self.format.guide_questions,
        }
    }
}
