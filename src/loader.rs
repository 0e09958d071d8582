use crate::config::Config;
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

/// `$XDG_CONFIG_HOME/ghdiff/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ghdiff").join(CONFIG_FILE))
}

/// Load the configuration from `explicit` when given (it must exist),
/// else from the default location if present, else use defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => load_config_file(&path),
        _ => {
            tracing::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    if let Some(ref stylesheet) = config.stylesheet {
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let sheet_path = base.join(stylesheet);
        let template = std::fs::read_to_string(&sheet_path)
            .with_context(|| format!("failed to read stylesheet {}", sheet_path.display()))?;
        config.stylesheet_template = Some(template);
    }

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
