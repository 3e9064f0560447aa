use contracts::shared::ui_config::UiConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding `dataset.path`
pub const DATASET_PATH_ENV: &str = "CART_DATASET_PATH";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend, served for non-API paths
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
path = "cleaned_df.csv"

[server]
port = 3000
static_dir = "dist"

[ui]
layout = "wide"
page_title = "Shopping Cart EDA"
title = "Shopping Cart Exploratory Data Analysis"
banner_image = "https://www.thewatchtower.com/assets/images/blog_images/online-shopping-is-it-really-worth-it.jpg"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `CART_DATASET_PATH` replaces the configured dataset path when set.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;

    if let Ok(path) = std::env::var(DATASET_PATH_ENV) {
        if !path.trim().is_empty() {
            tracing::info!("Dataset path overridden by {}: {}", DATASET_PATH_ENV, path);
            config.dataset.path = path;
        }
    }

    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the dataset file path from configuration
///
/// Relative paths are tried next to the executable first, then against the
/// current directory.
pub fn get_dataset_path(config: &Config) -> PathBuf {
    let dataset_path = Path::new(&config.dataset.path);

    // If absolute path, use as is
    if dataset_path.is_absolute() {
        return dataset_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(dataset_path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(&config.dataset.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::ui_config::PageLayout;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.dataset.path, "cleaned_df.csv");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ui.layout, PageLayout::Wide);
        assert!(config.ui.banner_image.is_some());
    }

    #[test]
    fn test_optional_sections_default() {
        let config: Config = toml::from_str("[dataset]\npath = \"/data/orders.csv\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(
            get_dataset_path(&config),
            PathBuf::from("/data/orders.csv")
        );
    }

    #[test]
    fn test_narrow_layout() {
        let config: Config = toml::from_str(
            "[dataset]\npath = \"a.csv\"\n[ui]\nlayout = \"narrow\"\ntitle = \"Orders\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.layout, PageLayout::Narrow);
        assert_eq!(config.ui.title, "Orders");
        assert_eq!(config.ui.banner_image, None);
    }
}
