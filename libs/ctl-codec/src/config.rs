//! Configuration loading
//!
//! Priority (highest to lowest):
//! 1. Environment variables prefixed `CTL_CODEC_` (nested keys joined by `__`)
//! 2. `ctl-codec.yaml` in the working directory
//! 3. `ctl-codec.toml` in the working directory
//! 4. Default values

use crate::error::{CodecError, Result};
use crate::logging::LogConfig;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CTL_CODEC_";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub logging: LogConfig,
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(CodecConfig::default()))
        .merge(Toml::file("ctl-codec.toml"))
        .merge(Yaml::file("ctl-codec.yaml"))
}

/// Load configuration from defaults, working-directory files and environment
pub fn load_config() -> Result<CodecConfig> {
    let config = base_figment()
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()?;
    Ok(config)
}

/// Load configuration from a specific file
pub fn load_config_from_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CodecError::config("Config file must have an extension"))?;

    let figment = match extension {
        "toml" => Figment::new().merge(Toml::file(path)),
        "yaml" | "yml" => Figment::new().merge(Yaml::file(path)),
        "json" => Figment::new().merge(Json::file(path)),
        _ => {
            return Err(CodecError::config(format!(
                "Unsupported config file format: {}",
                extension
            )))
        },
    };

    figment.extract().map_err(|e| {
        CodecError::config(format!(
            "Failed to load configuration from {}: {}",
            path.display(),
            e
        ))
    })
}
