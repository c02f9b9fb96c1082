use crate::error::{ReelsearchError, Result};
use crate::types::{Chunk, Gene};
use serde::{Deserialize, Serialize};

/// Per-chunk distance used to score candidates against the original
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Edit distance with unit cost for substitution, insertion and deletion
    #[default]
    Levenshtein,
    /// Square root of the summed squared element differences
    Euclidean,
}

impl DistanceMetric {
    pub fn between(&self, first: &[Gene], second: &[Gene]) -> f64 {
        match self {
            DistanceMetric::Levenshtein => levenshtein(first, second) as f64,
            DistanceMetric::Euclidean => euclidean(first, second),
        }
    }
}

/// Levenshtein distance between two chunks.
///
/// Classic dynamic programming over a `(first.len() + 1) x (second.len() + 1)`
/// matrix, keeping only the previous row.
pub fn levenshtein(first: &[Gene], second: &[Gene]) -> usize {
    let mut previous: Vec<usize> = (0..=second.len()).collect();
    let mut current = vec![0; second.len() + 1];

    for (i, a) in first.iter().enumerate() {
        current[0] = i + 1;
        for (j, b) in second.iter().enumerate() {
            let cost = if a == b { 0 } else { 1 };
            current[j + 1] = (previous[j] + cost)
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[second.len()]
}

/// Euclidean distance over the position-paired prefix of two chunks
pub fn euclidean(first: &[Gene], second: &[Gene]) -> f64 {
    first
        .iter()
        .zip(second)
        .map(|(&a, &b)| {
            let diff = a as f64 - b as f64;
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Arithmetic mean of the position-paired chunk distances of two chunk lists.
///
/// Both lists must be present, of equal length, and pairwise of equal chunk size.
pub fn mean_chunk_distance(
    first: &[Chunk],
    second: &[Chunk],
    metric: DistanceMetric,
) -> Result<f64> {
    if first.is_empty() || second.is_empty() {
        return Err(ReelsearchError::NullChunkList);
    }
    if first.len() != second.len() {
        return Err(ReelsearchError::ChunkListLengthMismatch {
            expected: second.len(),
            actual: first.len(),
        });
    }

    let mut total = 0.0;
    for (a, b) in first.iter().zip(second) {
        if a.len() != b.len() {
            return Err(ReelsearchError::ChunkSizeMismatch {
                expected: b.len(),
                actual: a.len(),
            });
        }
        total += metric.between(a, b);
    }

    Ok(total / first.len() as f64)
}
