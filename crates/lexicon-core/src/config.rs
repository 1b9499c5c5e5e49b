use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_PREFIX: &str = "lexicon";

/// Default file name of the exception store under the XDG data dir.
pub const EXCEPTIONS_FILE: &str = "exceptions.json";
/// Default file name of the URL store under the XDG data dir.
pub const URLS_FILE: &str = "urls.json";

/// Global configuration loaded from `~/.config/lexicon/config.toml`.
///
/// Store paths are optional; unset paths fall back to files under
/// `~/.local/share/lexicon/`. The stores themselves always take an explicit
/// path, so this is only consulted by front ends such as the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// JSON file backing the exception store.
    #[serde(default)]
    pub exceptions_path: Option<PathBuf>,
    /// JSON file backing the URL store.
    #[serde(default)]
    pub urls_path: Option<PathBuf>,
}

impl LexiconConfig {
    /// Configured exception store path, or the XDG data default.
    pub fn exceptions_path(&self) -> Result<PathBuf> {
        match &self.exceptions_path {
            Some(p) => Ok(p.clone()),
            None => default_data_file(EXCEPTIONS_FILE),
        }
    }

    /// Configured URL store path, or the XDG data default.
    pub fn urls_path(&self) -> Result<PathBuf> {
        match &self.urls_path {
            Some(p) => Ok(p.clone()),
            None => default_data_file(URLS_FILE),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// `~/.local/share/lexicon/<name>` (the directory is created if needed).
pub fn default_data_file(name: &str) -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    xdg_dirs
        .place_data_file(name)
        .with_context(|| format!("create data dir for {name}"))
}

/// Load configuration from the default location, creating a default file if none exists.
pub fn load_or_init() -> Result<LexiconConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, creating a default file there if none exists.
pub fn load_or_init_at(path: &Path) -> Result<LexiconConfig> {
    if !path.exists() {
        let default_cfg = LexiconConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: LexiconConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
