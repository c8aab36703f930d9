use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RouletteError;
use crate::rng::Generator;
use crate::roulette::Wheel;

const CONFIG_FILE: &str = "roulette_config.json";
const CONFIG_ENV: &str = "ROULETTE_CONFIG";

pub const DEFAULT_TRIALS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    pub black: usize,
    pub red: usize,
    pub green: usize,
    pub default_trials: usize,
    pub seed: Option<u64>,
    pub generators: Vec<Generator>,
}

impl Default for ConfigData {
    fn default() -> Self {
        ConfigData {
            black: 18,
            red: 18,
            green: 2,
            default_trials: DEFAULT_TRIALS,
            seed: None,
            generators: vec![Generator::Fast, Generator::Secure],
        }
    }
}

impl ConfigData {
    /// Reads `$ROULETTE_CONFIG`, or `roulette_config.json` in the working directory.
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let config = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            log::debug!("loaded configuration from {}", path.display());
            Ok(config)
        } else {
            Ok(ConfigData::default())
        }
    }

    pub fn wheel(&self) -> Result<Wheel, RouletteError> {
        Wheel::new(self.black, self.red, self.green)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = ConfigData::load_from(Path::new("does/not/exist.json")).unwrap();
        assert_eq!(config, ConfigData::default());
        assert_eq!(config.wheel().unwrap().slot_count(), 38);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = env::temp_dir().join(format!("roulette_config_{}.json", std::process::id()));
        fs::write(&path, r#"{"green": 1, "seed": 7, "generators": ["secure"]}"#).unwrap();
        let config = ConfigData::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.black, 18);
        assert_eq!(config.green, 1);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.generators, vec![Generator::Secure]);
        assert_eq!(config.default_trials, DEFAULT_TRIALS);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = env::temp_dir().join(format!("roulette_bad_{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let result = ConfigData::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_slot_config_is_rejected() {
        let config = ConfigData {
            black: 0,
            red: 0,
            green: 0,
            ..ConfigData::default()
        };
        assert!(matches!(
            config.wheel(),
            Err(RouletteError::InvalidConfiguration { .. })
        ));
    }
}
