use crate::engines::sampling::LengthBounds;
use crate::error::{ReelsearchError, Result};
use crate::types::{Chunk, Gene, Sequence};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::StandardNormal;
use std::cmp::Ordering;

/// Spread of the Gaussian noise around the even crossover split
const MIXING_DEVIATION: f64 = 0.2;

/// Total order over chunks of equal size: first differing element decides.
pub fn compare_chunks(first: &[Gene], second: &[Gene]) -> Result<Ordering> {
    if first.len() != second.len() {
        return Err(ReelsearchError::ChunkSizeMismatch {
            expected: first.len(),
            actual: second.len(),
        });
    }

    Ok(first
        .iter()
        .zip(second)
        .map(|(a, b)| a.cmp(b))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal))
}

/// Sort a chunk list under `compare_chunks`, rejecting mixed chunk sizes.
pub fn sort_chunks(chunks: &mut [Chunk]) -> Result<()> {
    let Some(expected) = chunks.first().map(Vec::len) else {
        return Ok(());
    };

    if let Some(chunk) = chunks.iter().find(|chunk| chunk.len() != expected) {
        return Err(ReelsearchError::ChunkSizeMismatch {
            expected,
            actual: chunk.len(),
        });
    }

    // Lexicographic order on equal-length vectors is exactly compare_chunks
    chunks.sort_unstable();
    Ok(())
}

/// Random value from the pool: a random chunk, then a random element of it
pub fn random_value<R: Rng>(pool: &[Chunk], rng: &mut R) -> Result<Gene> {
    pool.choose(rng)
        .and_then(|chunk| chunk.choose(rng))
        .copied()
        .ok_or(ReelsearchError::NullChunkList)
}

/// Random sequence with a length drawn from `bounds`, filled from the pool
pub fn random_sequence<R: Rng>(
    pool: &[Chunk],
    bounds: LengthBounds,
    rng: &mut R,
) -> Result<Sequence> {
    let length = bounds.draw(rng);
    (0..length).map(|_| random_value(pool, rng)).collect()
}

/// Gaussian-perturbed share of genes taken from the first parent.
///
/// Not clamped: values outside `[0, 1]` hand the whole child to one parent.
pub fn mixing_threshold<R: Rng>(rng: &mut R) -> f64 {
    let noise: f64 = rng.sample(StandardNormal);
    0.5 + noise * MIXING_DEVIATION
}

/// Uniform crossover of two sequences into a child of `length` genes.
///
/// Each position independently comes from `first` with probability `threshold`,
/// otherwise from `second`; parents shorter than the child are read circularly.
pub fn uniform_crossover<R: Rng>(
    first: &[Gene],
    second: &[Gene],
    length: usize,
    threshold: f64,
    rng: &mut R,
) -> Result<Sequence> {
    if first.is_empty() || second.is_empty() {
        return Err(ReelsearchError::EmptySequence(
            "crossover parents must carry a sequence".to_string(),
        ));
    }

    Ok((0..length)
        .map(|i| {
            if rng.gen::<f64>() < threshold {
                first[i % first.len()]
            } else {
                second[i % second.len()]
            }
        })
        .collect())
}

/// Mutation: each gene is replaced by a pool value with probability `rate`
pub fn mutate_genes<R: Rng>(
    genes: &mut [Gene],
    pool: &[Chunk],
    rate: f64,
    rng: &mut R,
) -> Result<()> {
    for gene in genes.iter_mut() {
        if rng.gen::<f64>() < rate {
            *gene = random_value(pool, rng)?;
        }
    }
    Ok(())
}
