use crate::error::{ReelsearchError, Result};
use crate::types::Sequence;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reels to reconstruct, grouped by machine.
///
/// JSON layout: `{"machines": [[[1, 2, 3], [4, 5, 6]], [[7, 8]]]}` holds two
/// machines, the first with two reels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelSet {
    pub machines: Vec<Vec<Sequence>>,
}

impl ReelSet {
    pub fn new(machines: Vec<Vec<Sequence>>) -> Self {
        Self { machines }
    }

    /// Single machine with a single reel
    pub fn single(reel: Sequence) -> Self {
        Self {
            machines: vec![vec![reel]],
        }
    }

    pub fn reel_count(&self) -> usize {
        self.machines.iter().map(Vec::len).sum()
    }

    /// `(machine, reel, sequence)` for every reel, machine by machine
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Sequence)> {
        self.machines.iter().enumerate().flat_map(|(machine, reels)| {
            reels
                .iter()
                .enumerate()
                .map(move |(reel, sequence)| (machine, reel, sequence))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.machines.is_empty() {
            return Err(ReelsearchError::Configuration(
                "Reel set has no machines".to_string(),
            ));
        }

        for (machine, reels) in self.machines.iter().enumerate() {
            if reels.is_empty() {
                return Err(ReelsearchError::Configuration(format!(
                    "Machine {} has no reels",
                    machine
                )));
            }
            if let Some(reel) = reels.iter().position(Vec::is_empty) {
                return Err(ReelsearchError::EmptySequence(format!(
                    "machine {} reel {}",
                    machine, reel
                )));
            }
        }
        Ok(())
    }
}

pub struct ReelSetLoader;

impl ReelSetLoader {
    /// Load a reel set from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ReelSet> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate a JSON reel set
    pub fn parse(json: &str) -> Result<ReelSet> {
        let set: ReelSet = serde_json::from_str(json)?;
        set.validate()?;

        log::info!(
            "Loaded {} reels across {} machines",
            set.reel_count(),
            set.machines.len()
        );
        Ok(set)
    }
}
