use super::traits::ConfigSection;
use crate::error::ReelsearchError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Size of the visible window of the reel
    pub chunk_size: usize,
    /// Minimum number of observations of the rarest distinct chunk
    pub histogram_threshold: usize,
    pub max_draws: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 3,
            histogram_threshold: 100,
            max_draws: 50_000_000,
        }
    }
}

impl ConfigSection for SamplingConfig {
    fn section_name() -> &'static str {
        "sampling"
    }

    fn validate(&self) -> Result<(), ReelsearchError> {
        if self.chunk_size == 0 {
            return Err(ReelsearchError::Configuration(
                "Chunk size must be positive".to_string()
            ));
        }
        if self.histogram_threshold == 0 {
            return Err(ReelsearchError::Configuration(
                "Histogram threshold must be positive".to_string()
            ));
        }
        if self.max_draws < self.histogram_threshold {
            return Err(ReelsearchError::Configuration(
                "Max draws cannot be below the histogram threshold".to_string()
            ));
        }
        Ok(())
    }
}
