//! Configuration file support for dropout-dashboard
//!
//! Presentation settings live in an optional `.dashboard.toml`. Every key has
//! a default matching the stock dashboard, so the file may be partial or absent.
//!
//! ## Configuration File Format
//!
//! ```toml
//! # .dashboard.toml
//!
//! [theme]
//! background_color = "#ffebee"
//! text_color = "#8B0000"
//!
//! [theme.chart_dimensions]
//! width = 400
//! height = 400
//!
//! [ranking]
//! # Number of features on the importance chart
//! top_k = 10
//!
//! [server]
//! port = 8501
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ranker::DEFAULT_TOP_K;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Pixel size of each chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDimensions {
    #[serde(default = "default_chart_size")]
    pub width: u32,
    #[serde(default = "default_chart_size")]
    pub height: u32,
}

fn default_chart_size() -> u32 {
    400
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self {
            width: default_chart_size(),
            height: default_chart_size(),
        }
    }
}

/// Colors and sizes handed to the rendering host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_background_color")]
    pub background_color: String,

    #[serde(default = "default_text_color")]
    pub text_color: String,

    #[serde(default)]
    pub chart_dimensions: ChartDimensions,
}

fn default_background_color() -> String {
    "#ffebee".to_string()
}

fn default_text_color() -> String {
    "#8B0000".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            text_color: default_text_color(),
            chart_dimensions: ChartDimensions::default(),
        }
    }
}

/// Ranking configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Number of features on the importance chart
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

/// Web server configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub ranking: RankingConfig,

    #[serde(default)]
    pub server: ServerSection,
}

impl DashboardConfig {
    /// Reject values the rendering host cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("theme.background_color", &self.theme.background_color),
            ("theme.text_color", &self.theme.text_color),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a hex color like #8B0000, got '{}'",
                    key, value
                )));
            }
        }

        let dims = self.theme.chart_dimensions;
        if dims.width == 0 || dims.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "chart dimensions must be non-zero, got {}x{}",
                dims.width, dims.height
            )));
        }

        if self.ranking.top_k == 0 {
            return Err(ConfigError::Invalid(
                "ranking.top_k must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// `#rgb` or `#rrggbb`
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Load configuration, starting the search at `start_path`
///
/// `start_path` may name a config file directly. Otherwise `.dashboard.toml`
/// is searched for in the given directory and its parents.
pub fn load_config(start_path: &Path) -> Result<DashboardConfig, ConfigError> {
    let config_path = if start_path.is_file() {
        Some(start_path.to_path_buf())
    } else {
        find_config_file(start_path)
    };

    let config = match config_path {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: DashboardConfig = toml::from_str(&content)?;
            tracing::debug!(path = %path.display(), "loaded dashboard config");
            config
        }
        None => DashboardConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

/// Find the config file by searching up the directory tree
fn find_config_file(start_path: &Path) -> Option<PathBuf> {
    let config_names = [".dashboard.toml", "dashboard.toml"];

    let mut current = start_path.to_path_buf();

    loop {
        for name in &config_names {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Move to parent directory
        if let Some(parent) = current.parent() {
            current = parent.to_path_buf();
        } else {
            break;
        }
    }

    None
}
