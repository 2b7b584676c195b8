use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/urlsheet/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlsheetConfig {
    /// Prepend a UTF-8 byte-order mark to written export files.
    pub include_bom: bool,
    /// Directory for generated export files; None = current directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for UrlsheetConfig {
    fn default() -> Self {
        Self {
            include_bom: true,
            output_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsheet")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlsheetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlsheetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlsheetConfig = toml::from_str(&data)?;
    Ok(cfg)
}
