use std::fs;
use indexmap::IndexMap;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize, Debug)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize, Debug)]
pub struct Scrape {
    pub base_url: String,
    pub station_number: u32,
    pub num_observations: Option<usize>,
}

/// Marker for fields whose single raw value expands to several output keys
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Composite {
    CloudCover,
}

/// Per-field scraping configuration.
///
/// Which keys are required depends on the extraction method; a missing
/// required key degrades that field at extraction time rather than failing
/// the configuration load.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FieldConfig {
    pub extraction_method: Option<String>,
    pub element_id: Option<String>,
    pub target_tcell: Option<bool>,
    pub column_name: Option<String>,
    pub composite: Option<Composite>,
    pub pattern: Option<String>,
    pub group_names: Option<Vec<String>>,
    pub div_selector: Option<String>,
    pub span_selector: Option<String>,
    pub param: Option<String>,
    pub threshold: Option<f64>,
    pub position_attr: Option<String>,
    pub x_attr: Option<String>,
    pub y_attr: Option<String>,
    pub time_pattern: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub general: General,
    pub scrape: Scrape,
    pub fields: IndexMap<String, FieldConfig>,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    if config.fields.is_empty() {
        return Err(ConfigError::from("no [fields] tables in configuration"))
    }

    Ok(config)
}
