use crate::engines::generation::distance::{mean_chunk_distance, DistanceMetric};
use crate::engines::generation::operators::{
    mixing_threshold, mutate_genes, random_sequence, sort_chunks, uniform_crossover,
};
use crate::engines::sampling::{random_window, LengthBounds};
use crate::error::{ReelsearchError, Result};
use crate::types::{Chunk, Gene, Sequence};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Candidate reel reconstruction.
///
/// The `sequence` carries the genetic material. The `chunks` are a sorted view
/// sampled from that sequence with the same shape as the original's chunk list,
/// so any two chromosomes of a run can be compared position by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    sequence: Sequence,
    chunks: Vec<Chunk>,
    fitness: f64,
}

impl Chromosome {
    /// Chromosome holding only a sequence; chunks and fitness are set later
    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            chunks: Vec::new(),
            fitness: 0.0,
        }
    }

    pub fn with_chunks(sequence: Sequence, chunks: Vec<Chunk>) -> Result<Self> {
        let mut chromosome = Self::new(sequence);
        chromosome.set_chunks(chunks)?;
        Ok(chromosome)
    }

    /// Random candidate shaped after `sample`.
    ///
    /// Length is drawn from `bounds`, every position is filled with a random
    /// value of the sample's chunk pool, then the chunks are resampled.
    pub fn random<R: Rng>(sample: &Chromosome, bounds: LengthBounds, rng: &mut R) -> Result<Self> {
        let mut chromosome = Self::new(random_sequence(&sample.chunks, bounds, rng)?);
        chromosome.sampling(sample, rng)?;
        Ok(chromosome)
    }

    pub fn sequence(&self) -> &[Gene] {
        &self.sequence
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn set_chunks(&mut self, mut chunks: Vec<Chunk>) -> Result<()> {
        sort_chunks(&mut chunks)?;
        self.chunks = chunks;
        Ok(())
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub fn is_sampled(&self) -> bool {
        !self.chunks.is_empty()
    }

    /// Regenerate the chunks from this chromosome's own sequence.
    ///
    /// One circular window per chunk slot of `sample`, each as long as that slot.
    pub fn sampling<R: Rng>(&mut self, sample: &Chromosome, rng: &mut R) -> Result<()> {
        if sample.chunks.is_empty() {
            return Err(ReelsearchError::NullChunkList);
        }

        let chunks = sample
            .chunks
            .iter()
            .map(|slot| random_window(&self.sequence, slot.len(), rng))
            .collect::<Result<Vec<_>>>()?;
        self.set_chunks(chunks)
    }

    /// Mean Levenshtein distance between the position-paired chunks
    pub fn distance(&self, other: &Chromosome) -> Result<f64> {
        self.distance_with(other, DistanceMetric::Levenshtein)
    }

    pub fn distance_with(&self, other: &Chromosome, metric: DistanceMetric) -> Result<f64> {
        mean_chunk_distance(&self.chunks, &other.chunks, metric)
    }

    /// Score against the original; closer candidates get a less negative fitness.
    pub fn evaluate(&mut self, original: &Chromosome, metric: DistanceMetric) -> Result<f64> {
        self.fitness = -self.distance_with(original, metric)?;
        Ok(self.fitness)
    }

    /// Replace genes with values from the sample's chunk pool, each with probability `rate`.
    ///
    /// Both the chunk view and the sequence are mutated. The chunks are resorted
    /// afterwards; only the sequence edits survive the next `sampling`.
    pub fn mutate<R: Rng>(&mut self, sample: &Chromosome, rate: f64, rng: &mut R) -> Result<()> {
        for chunk in self.chunks.iter_mut() {
            mutate_genes(chunk, &sample.chunks, rate, rng)?;
        }
        sort_chunks(&mut self.chunks)?;

        mutate_genes(&mut self.sequence, &sample.chunks, rate, rng)
    }

    /// Child of `self` (dominant parent) and `mate`, with a length drawn from `bounds`.
    ///
    /// The child has no chunks and zero fitness until it is resampled and evaluated.
    pub fn crossover<R: Rng>(
        &self,
        mate: &Chromosome,
        bounds: LengthBounds,
        rng: &mut R,
    ) -> Result<Chromosome> {
        let threshold = mixing_threshold(rng);
        let length = bounds.draw(rng);
        let sequence = uniform_crossover(&self.sequence, &mate.sequence, length, threshold, rng)?;
        Ok(Chromosome::new(sequence))
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chromosome [sequence={:?}, chunks={:?}, fitness={}]",
            self.sequence, self.chunks, self.fitness
        )
    }
}
