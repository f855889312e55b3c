//! Layered configuration: optional TOML file, then `OUTLAY__*` environment
//! variables. CLI overrides are applied by the caller.
use config::{ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/outlay.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub store: Store,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log level applied to every workspace crate.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Store {
    pub base_url: String,
    pub auth: Option<String>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9000".to_string(),
            auth: None,
        }
    }
}

pub fn load(path: Option<&str>) -> Result<Settings> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    let builder = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(config::Environment::with_prefix("OUTLAY").separator("__"));
    build(builder)
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    Ok(builder.build()?.try_deserialize()?)
}
