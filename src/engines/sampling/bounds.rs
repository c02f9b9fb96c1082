use crate::engines::sampling::histogram::ChunkHistogram;
use crate::error::{ReelsearchError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length range every generated candidate sequence must fall into for a run.
///
/// Estimated once from the original's chunk statistics: the shortest plausible
/// reel has to hold every distinct value, the longest is the total sampled chunk
/// length spread over the distinct chunks.
///
/// Always holds `1 <= min <= max`; deserialized values go through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLengthBounds")]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

#[derive(Deserialize)]
struct RawLengthBounds {
    min: usize,
    max: usize,
}

impl TryFrom<RawLengthBounds> for LengthBounds {
    type Error = ReelsearchError;

    fn try_from(raw: RawLengthBounds) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 || min > max {
            return Err(ReelsearchError::InvalidLengthBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn estimate(histogram: &ChunkHistogram) -> Result<Self> {
        if histogram.is_empty() {
            return Err(ReelsearchError::NullChunkList);
        }

        let total_length: usize = histogram
            .iter()
            .map(|(chunk, count)| chunk.len() * count)
            .sum();

        Self::new(
            histogram.distinct_values().len(),
            total_length / histogram.distinct(),
        )
    }

    /// Uniform length draw in `[min, max]`
    pub fn draw<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }
}
