use crate::config::GeneratorConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse generator overrides from a YAML file
pub fn load_config(config_path: &Path) -> Result<GeneratorConfig> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open config file '{}'", config_path.display()))?;

    // An empty document deserializes to null, which serde_yaml rejects for structs
    let value: serde_yaml::Value = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse config file '{}'", config_path.display()))?;
    let config: GeneratorConfig = if value.is_null() {
        GeneratorConfig::default()
    } else {
        serde_yaml::from_value(value)
            .wrap_err_with(|| format!("Invalid config file '{}'", config_path.display()))?
    };

    config.validate()?;

    Ok(config)
}

/// Load the YAML overrides when a path is given, otherwise the defaults
pub fn load_or_default(config_path: Option<&Path>) -> Result<GeneratorConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => {
            info!("No configuration file given, using defaults");
            Ok(GeneratorConfig::default())
        }
    }
}
