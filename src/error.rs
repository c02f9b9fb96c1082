use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReelsearchError {
    #[error("Chunk list is missing on one of the compared chromosomes")]
    NullChunkList,

    #[error("Chunk size mismatch: expected {expected}, got {actual}")]
    ChunkSizeMismatch { expected: usize, actual: usize },

    #[error("Chunk list length mismatch: expected {expected}, got {actual}")]
    ChunkListLengthMismatch { expected: usize, actual: usize },

    #[error("Population is empty")]
    EmptyPopulation,

    #[error("No valid parents/victim triple found in a population of {population_size} after {attempts} attempts")]
    DegenerateSelection { population_size: usize, attempts: usize },

    #[error("Empty sequence: {0}")]
    EmptySequence(String),

    #[error("Invalid length bounds: min {min} is greater than max {max}")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("Sampling stopped after {draws} draws: least frequent chunk seen {least_frequent} times, threshold is {threshold}")]
    SamplingBudgetExhausted {
        draws: usize,
        least_frequent: usize,
        threshold: usize,
    },

    #[error("Invalid recursion depth: {0}")]
    InvalidDepth(usize),

    #[error("Budget exceeded: {0}")]
    BudgetExceeded(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ReelsearchError>;
