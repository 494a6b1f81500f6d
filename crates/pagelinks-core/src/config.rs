use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::DEFAULT_PROTOCOL_RELATIVE_SCHEME;
use crate::taxonomy::ExtraExtensions;

/// Settings loaded from `~/.config/pagelinks/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Scheme given to `//host/...` references.
    pub protocol_relative_scheme: String,
    /// Pretty-print JSON output (CLI only).
    pub pretty_json: bool,
    /// Extensions merged into the built-in taxonomy:
    /// `[extra_extensions.<category>] <subcategory> = ["ext", ...]`.
    pub extra_extensions: ExtraExtensions,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            protocol_relative_scheme: DEFAULT_PROTOCOL_RELATIVE_SCHEME.to_string(),
            pretty_json: true,
            extra_extensions: ExtraExtensions::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagelinks")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinksConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// [`load_or_init`] against an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LinksConfig> {
    if !path.exists() {
        let default_cfg = LinksConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Parse an existing config file.
pub fn load_from(path: &Path) -> Result<LinksConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LinksConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
