use super::{
    evolution::EvolutionConfig,
    hierarchical::HierarchicalConfig,
    sampling::SamplingConfig,
    traits::validate_section,
};
use crate::engines::generation::{self, DistanceMetric};
use crate::error::ReelsearchError;
use crate::types::SearchMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment overrides, e.g. `REELSEARCH__EVOLUTION__EPOCHS=50`
pub const ENV_PREFIX: &str = "REELSEARCH";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: SearchMode,
    pub seed: Option<u64>,
    pub distance_metric: DistanceMetric,
    pub sampling: SamplingConfig,
    pub evolution: EvolutionConfig,
    pub hierarchical: HierarchicalConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ReelsearchError> {
        validate_section(&self.sampling)?;
        validate_section(&self.evolution)?;
        validate_section(&self.hierarchical)?;
        Ok(())
    }

    pub fn evolution_engine_config(&self) -> generation::EvolutionConfig {
        generation::EvolutionConfig {
            population_size: self.evolution.population_size,
            epochs: self.evolution.epochs,
            mutation_rate: self.evolution.mutation_rate,
            max_selection_attempts: self.evolution.max_selection_attempts,
            report_every_epochs: self.evolution.report_every_epochs,
            metric: self.distance_metric,
            seed: self.seed,
        }
    }

    pub fn hierarchical_engine_config(&self) -> generation::HierarchicalConfig {
        generation::HierarchicalConfig {
            depth: self.hierarchical.recursion_depth,
            max_depth: self.hierarchical.max_depth,
            max_evaluations: self.hierarchical.max_evaluations,
            mutation_rate: self.hierarchical.mutation_rate,
            metric: self.distance_metric,
            seed: self.seed,
        }
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ReelsearchError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ReelsearchError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| ReelsearchError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    /// Defaults, then the optional file, then `REELSEARCH__*` environment variables.
    pub fn load_layered(&mut self, path: Option<&Path>) -> Result<(), ReelsearchError> {
        let mut builder = ::config::Config::builder()
            .add_source(::config::Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }

        let config: AppConfig = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ReelsearchError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| ReelsearchError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| ReelsearchError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Apply `f` to a copy and keep it only if it still validates
    pub fn update<F>(&mut self, f: F) -> Result<(), ReelsearchError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.clone();
        f(&mut config);
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.evolution.population_size, 137);
        assert_eq!(config.sampling.chunk_size, 3);
        assert_eq!(config.mode, SearchMode::Evolution);
    }

    #[test]
    fn test_invalid_update_is_rolled_back() {
        let mut manager = ConfigManager::new();
        let result = manager.update(|c| c.evolution.population_size = 2);

        match result {
            Err(ReelsearchError::Configuration(message)) => assert!(message.starts_with("[evolution]")),
            other => panic!("expected configuration error, got {:?}", other),
        }
        assert_eq!(manager.get().evolution.population_size, 137);
    }

    #[test]
    fn test_engine_configs_carry_shared_settings() {
        let config = AppConfig {
            seed: Some(7),
            distance_metric: DistanceMetric::Euclidean,
            ..AppConfig::default()
        };

        let evolution = config.evolution_engine_config();
        assert_eq!(evolution.seed, Some(7));
        assert_eq!(evolution.metric, DistanceMetric::Euclidean);

        let hierarchical = config.hierarchical_engine_config();
        assert_eq!(hierarchical.depth, 4);
        assert_eq!(hierarchical.seed, Some(7));
    }

    #[test]
    fn test_hierarchical_depth_over_limit() {
        let mut config = AppConfig::default();
        config.hierarchical.recursion_depth = 9;
        assert!(config.validate().is_err());
    }
}
