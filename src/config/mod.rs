use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_DIR: &str = "data";
pub const DEFAULT_STORE_NAME: &str = "preferencias";

#[derive(Debug, Default, Deserialize)]
pub struct StoreConfig {
    pub dir: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
}

/// Loads `config.toml` from the working directory if it exists.
pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    load_config_from("config.toml", false)
}

/// Loads the config file at `path`, then applies `PREFS_` environment
/// overrides (`PREFS_STORE__DIR`, `PREFS_STORE__NAME`).
pub fn load_config_from(path: &str, required: bool) -> Result<AppConfig, config::ConfigError> {
    let mut config: AppConfig = Config::builder()
        .add_source(File::with_name(path).required(required))
        .add_source(
            Environment::with_prefix("PREFS")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()?;

    set_defaults(&mut config);

    Ok(config)
}

pub fn set_defaults(config: &mut AppConfig) {
    if config.store.dir.is_none() {
        config.store.dir = Some(DEFAULT_DIR.to_string());
    }
    if config.store.name.is_none() {
        config.store.name = Some(DEFAULT_STORE_NAME.to_string());
    }
}
