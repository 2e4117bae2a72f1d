use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for hush (~/.config/hush/config.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub highlight: HighlightConfig,

    #[serde(default)]
    pub hover: HoverConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Flag long opaque quoted values even under innocuous keys
    #[serde(default = "default_true")]
    pub possible_secret: bool,

    #[serde(default = "default_possible_secret_min_len")]
    pub possible_secret_min_len: usize,

    /// Extra rules, tried after the built-in ones
    #[serde(default)]
    pub custom_rules: Vec<CustomRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRule {
    pub pattern: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoverConfig {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            possible_secret: true,
            possible_secret_min_len: default_possible_secret_min_len(),
            custom_rules: Vec::new(),
        }
    }
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_possible_secret_min_len() -> usize {
    32
}

fn default_keywords() -> Vec<String> {
    vec![
        "password".to_string(),
        "api".to_string(),
        "key".to_string(),
        "secret".to_string(),
        "token".to_string(),
    ]
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "hush", "hush") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.hush/config.toml")
        }
    }
}
