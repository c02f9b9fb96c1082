use crate::engines::generation::chromosome::Chromosome;
use crate::engines::sampling::LengthBounds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single symbol of a reel (a rotor position value)
pub type Gene = u32;

/// Fixed-size circular window cut from a sequence
pub type Chunk = Vec<Gene>;

/// Full reel, or a candidate reconstruction of one
pub type Sequence = Vec<Gene>;

/// Which search strategy drives a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    Evolution,
    Hierarchical,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Evolution => write!(f, "evolution"),
            SearchMode::Hierarchical => write!(f, "hierarchical"),
        }
    }
}

/// Outcome of reconstructing a single reel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub machine: usize,
    pub reel: usize,
    pub mode: SearchMode,
    pub bounds: LengthBounds,
    pub distinct_chunks: usize,
    pub evaluations: usize,
    pub original: Chromosome,
    pub best: Chromosome,
}
