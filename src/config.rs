use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::fields::FieldIdentifier;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    pub label: String,
    pub seeds: Vec<String>,
    #[serde(default)]
    pub removable_seeds: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub stories_file: String,
    /// Row cap applied to every group. Unlimited when absent.
    #[serde(default)]
    pub max_rows: Option<usize>,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
    /// Directory of the config file; relative paths resolve against it.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Config {
    pub fn stories_path(&self) -> PathBuf {
        self.base_dir.join(&self.stories_file)
    }
}

pub fn parse_config(contents: &str, file_path: &str) -> Result<Config, ConfigError> {
    let mut config = toml::from_str::<Config>(contents).map_err(|source| ConfigError::Parse {
        path: file_path.to_string(),
        source,
    })?;
    config.base_dir = Path::new(file_path)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    for group in &config.groups {
        if group.seeds.is_empty() {
            return Err(ConfigError::NoSeeds(group.label.clone()));
        }
        for seed in &group.seeds {
            FieldIdentifier::parse(seed).map_err(|source| ConfigError::BadSeed {
                label: group.label.clone(),
                source,
            })?;
        }
    }
    Ok(config)
}

pub fn load_config_from_file(file_path: &str) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
        path: file_path.to_string(),
        source,
    })?;
    let config = parse_config(&contents, file_path)?;
    if !config.stories_path().is_file() {
        return Err(ConfigError::MissingStories {
            path: file_path.to_string(),
            stories_file: config.stories_file.clone(),
        });
    }
    Ok(config)
}
