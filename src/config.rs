use eyre::{Result, WrapErr};
use std::fs;
use std::path::Path;
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "registrar.toml";

#[derive(Debug, Default)]
pub struct Config {
    conf: Table,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Config::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Config> {
        Ok(Config {
            conf: content.parse::<Table>()?,
        })
    }

    /// Load the given file, or the default one if it exists. A missing
    /// default file gives an empty configuration.
    pub fn load_or_default(file_name: Option<&Path>) -> Result<Config> {
        match file_name {
            Some(file_name) => Config::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Config::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }
}

/// Lookup `key` in `section`. Non-string scalars are returned in their
/// TOML representation.
pub fn get_config(config: &Config, section: &str, key: &str) -> Option<String> {
    config
        .conf
        .get(section)
        .and_then(Value::as_table)
        .and_then(|s| s.get(key))
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}
