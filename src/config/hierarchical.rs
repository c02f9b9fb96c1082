use super::traits::{check_rate, ConfigSection};
use crate::error::ReelsearchError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchicalConfig {
    pub recursion_depth: usize,
    pub max_depth: usize,
    pub mutation_rate: f64,
    pub max_evaluations: usize,
}

impl Default for HierarchicalConfig {
    fn default() -> Self {
        Self {
            recursion_depth: 4,
            max_depth: 8,
            mutation_rate: 0.005,
            max_evaluations: 5_000_000,
        }
    }
}

impl ConfigSection for HierarchicalConfig {
    fn section_name() -> &'static str {
        "hierarchical"
    }

    fn validate(&self) -> Result<(), ReelsearchError> {
        if self.recursion_depth == 0 {
            return Err(ReelsearchError::Configuration(
                "Recursion depth must be at least 1".to_string()
            ));
        }
        if self.recursion_depth > self.max_depth {
            return Err(ReelsearchError::Configuration(format!(
                "Recursion depth {} exceeds max depth {}",
                self.recursion_depth, self.max_depth
            )));
        }
        check_rate("Mutation rate", self.mutation_rate)?;
        if self.max_evaluations == 0 {
            return Err(ReelsearchError::Configuration(
                "Max evaluations must be positive".to_string()
            ));
        }
        Ok(())
    }
}
