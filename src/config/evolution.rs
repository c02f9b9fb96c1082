use super::traits::{check_rate, ConfigSection};
use crate::error::ReelsearchError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    /// Probability for each gene to mutate
    pub mutation_rate: f64,
    /// Generations to evolve; each one is `population_size` single-child iterations
    pub epochs: usize,
    pub max_selection_attempts: usize,
    pub report_every_epochs: usize,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 137,
            mutation_rate: 0.005,
            epochs: 10_000,
            max_selection_attempts: 100_000,
            report_every_epochs: 1,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), ReelsearchError> {
        if self.population_size < 3 {
            return Err(ReelsearchError::Configuration(
                "Population size must be at least 3".to_string()
            ));
        }
        check_rate("Mutation rate", self.mutation_rate)?;
        if self.epochs == 0 {
            return Err(ReelsearchError::Configuration(
                "Epochs must be positive".to_string()
            ));
        }
        if self.max_selection_attempts == 0 || self.report_every_epochs == 0 {
            return Err(ReelsearchError::Configuration(
                "Selection attempts and report interval must be positive".to_string()
            ));
        }
        Ok(())
    }
}
