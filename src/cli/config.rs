use crate::assembler::OutputSchema;
use crate::error::{ConvertError, Result};
use crate::ids::IdStrategy;
use crate::ConversionOptions;
use serde::{Deserialize, Serialize};
use std::fs;

/// Optional settings read from `-c/--config`; command-line flags win
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub schema: Option<String>,
    pub id_strategy: Option<String>,
    pub class_prefix: Option<String>,
    pub title: Option<String>,
    pub pretty: Option<bool>,
    pub seed: Option<u64>,
}

impl ConfigFile {
    /// Fold the configured values into `options`
    pub fn apply(&self, options: &mut ConversionOptions) -> Result<()> {
        if let Some(schema) = &self.schema {
            options.schema = OutputSchema::from_name(schema).ok_or_else(|| {
                ConvertError::invalid_format(format!("Unknown schema in config: {}", schema))
            })?;
        }
        if let Some(strategy) = &self.id_strategy {
            options.id_strategy = IdStrategy::from_name(strategy).ok_or_else(|| {
                ConvertError::invalid_format(format!("Unknown id strategy in config: {}", strategy))
            })?;
        }
        if let Some(prefix) = &self.class_prefix {
            options.class_prefix = prefix.clone();
        }
        if let Some(title) = &self.title {
            options.title = Some(title.clone());
        }
        if let Some(pretty) = self.pretty {
            options.pretty = pretty;
        }
        if let Some(seed) = self.seed {
            options.seed = Some(seed);
        }
        Ok(())
    }
}

pub fn load(config_path: &str) -> Result<ConfigFile> {
    let config_content = fs::read_to_string(config_path).map_err(|e| ConvertError::FileNotFound {
        path: format!("Config file {}: {}", config_path, e),
    })?;

    let config = if config_path.ends_with(".json") {
        serde_json::from_str(&config_content).map_err(|e| {
            ConvertError::invalid_format(format!("Invalid JSON config: {}", e))
        })?
    } else if config_path.ends_with(".toml") {
        toml::from_str(&config_content).map_err(|e| {
            ConvertError::invalid_format(format!("Invalid TOML config: {}", e))
        })?
    } else {
        return Err(ConvertError::invalid_format(
            "Config file must be .json or .toml format",
        ));
    };

    log::info!("Loaded configuration from {}", config_path);
    Ok(config)
}
