use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is not
/// given. Its absence is not an error.
pub const DEFAULT_CONFIG_PATH: &str = "jalali.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JalaliConfig {
    /// Zone for parsed and printed date-times.
    #[serde(default = "default_zone")]
    pub zone: String,

    /// Layout settings.
    #[serde(default)]
    pub format: FormatToml,
}

impl Default for JalaliConfig {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            format: FormatToml::default(),
        }
    }
}

fn default_zone() -> String {
    "Asia/Tehran".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatToml {
    #[serde(default = "default_output_layout")]
    pub output: String,
    #[serde(default = "default_input_layout")]
    pub input: String,
}

impl Default for FormatToml {
    fn default() -> Self {
        Self {
            output: default_output_layout(),
            input: default_input_layout(),
        }
    }
}

fn default_output_layout() -> String {
    jalali_time::DEFAULT_LAYOUT.to_string()
}
fn default_input_layout() -> String {
    "%Y/%m/%d %H:%M:%S".to_string()
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `jalali.toml` in the working
/// directory is used if present, and built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<JalaliConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !fallback.exists() {
                debug!("no config file, using defaults");
                return Ok(JalaliConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: JalaliConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    debug!(path = %path.display(), zone = %config.zone, "loaded config");
    Ok(config)
}
