use super::{
    breeder::BreederSettings, mutator::MutatorSettings, population::PopulationSettings,
    traits::ConfigSection,
};
use crate::error::BreederError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix of environment overrides, e.g. `ROBOBREED__BREEDER__RANDOM_SEED=7`
pub const ENV_PREFIX: &str = "ROBOBREED";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub breeder: BreederSettings,
    pub mutator: MutatorSettings,
    pub population: PopulationSettings,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), BreederError> {
        self.breeder.validate()?;
        self.mutator.validate()?;
        self.population.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Layer defaults, then the file (TOML or JSON by extension), then
    /// environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BreederError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BreederError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let layered = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = layered.try_deserialize()?;
        config.validate()?;

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BreederError> {
        let path = path.as_ref();
        let config = self.get();
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let contents = if is_json {
            serde_json::to_string_pretty(&config)?
        } else {
            toml::to_string_pretty(&config)
                .map_err(|e| BreederError::Configuration(format!("Failed to serialize: {}", e)))?
        };

        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Apply `f` and keep the result only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), BreederError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
