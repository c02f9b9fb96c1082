use crate::config::SamplingConfig;
use crate::engines::generation::chromosome::Chromosome;
use crate::engines::sampling::{random_window, ChunkHistogram, LengthBounds};
use crate::error::{ReelsearchError, Result};
use crate::types::Gene;
use log::debug;
use rand::Rng;

/// Builds the ground-truth chromosome of a reel from a frequency-weighted chunk sample.
///
/// Windows are drawn at random positions until the rarest distinct chunk has been
/// seen `histogram_threshold` times. A reel whose distinct windows can never all
/// reach the threshold would spin forever, so `max_draws` caps the loop.
pub struct ChunkSampler {
    chunk_size: usize,
    histogram_threshold: usize,
    max_draws: usize,
}

/// Ground truth for one run: the sampled original plus the statistics derived from it
#[derive(Debug, Clone)]
pub struct Original {
    chromosome: Chromosome,
    histogram: ChunkHistogram,
    bounds: LengthBounds,
}

impl ChunkSampler {
    pub fn new(chunk_size: usize, histogram_threshold: usize) -> Self {
        Self {
            chunk_size,
            histogram_threshold,
            max_draws: usize::MAX,
        }
    }

    pub fn with_max_draws(mut self, max_draws: usize) -> Self {
        self.max_draws = max_draws;
        self
    }

    pub fn from_config(config: &SamplingConfig) -> Self {
        Self::new(config.chunk_size, config.histogram_threshold).with_max_draws(config.max_draws)
    }

    /// Sample `reel` into its histogram without building the original.
    pub fn histogram<R: Rng>(&self, reel: &[Gene], rng: &mut R) -> Result<ChunkHistogram> {
        if self.chunk_size == 0 {
            return Err(ReelsearchError::Configuration(
                "Chunk size must be positive".to_string(),
            ));
        }
        if self.histogram_threshold == 0 {
            return Err(ReelsearchError::Configuration(
                "Histogram threshold must be positive".to_string(),
            ));
        }

        let mut histogram = ChunkHistogram::new();
        let mut draws = 0;
        while histogram.least_frequent() < self.histogram_threshold {
            if draws >= self.max_draws {
                return Err(ReelsearchError::SamplingBudgetExhausted {
                    draws,
                    least_frequent: histogram.least_frequent(),
                    threshold: self.histogram_threshold,
                });
            }

            histogram.record(random_window(reel, self.chunk_size, rng)?);
            draws += 1;
        }

        debug!(
            "Sampled {} distinct chunks in {} draws (reel length {})",
            histogram.distinct(),
            draws,
            reel.len()
        );
        Ok(histogram)
    }

    pub fn sample<R: Rng>(&self, reel: &[Gene], rng: &mut R) -> Result<Original> {
        let histogram = self.histogram(reel, rng)?;
        let bounds = LengthBounds::estimate(&histogram)?;
        let chromosome = Chromosome::with_chunks(reel.to_vec(), histogram.expand())?;

        Ok(Original {
            chromosome,
            histogram,
            bounds,
        })
    }
}

impl Original {
    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    pub fn histogram(&self) -> &ChunkHistogram {
        &self.histogram
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// Replace the estimated bounds, e.g. when the reel length is known up front.
    pub fn with_bounds(mut self, bounds: LengthBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn into_chromosome(self) -> Chromosome {
        self.chromosome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_reaches_threshold() {
        let mut rng = StdRng::seed_from_u64(11);
        let reel = vec![4, 0, 2, 2, 7, 1, 3];
        let original = ChunkSampler::new(3, 5).sample(&reel, &mut rng).unwrap();

        assert!(original.histogram().least_frequent() >= 5);
        assert_eq!(original.chromosome().sequence(), reel.as_slice());
        assert_eq!(
            original.chromosome().chunks().len(),
            original.histogram().total()
        );
        assert!(original.chromosome().chunks().iter().all(|c| c.len() == 3));
    }

    #[test]
    fn test_original_chunks_are_sorted() {
        let mut rng = StdRng::seed_from_u64(5);
        let original = ChunkSampler::new(2, 3)
            .sample(&[9, 1, 5, 1, 3], &mut rng)
            .unwrap();

        let chunks = original.chromosome().chunks();
        assert!(chunks.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            ChunkSampler::new(0, 3).sample(&[1, 2, 3], &mut rng),
            Err(ReelsearchError::Configuration(_))
        ));
    }

    #[test]
    fn test_draw_budget_is_enforced() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = ChunkSampler::new(2, 1000)
            .with_max_draws(10)
            .sample(&[1, 2, 3, 4], &mut rng);

        assert!(matches!(
            result,
            Err(ReelsearchError::SamplingBudgetExhausted { draws: 10, .. })
        ));
    }

    #[test]
    fn test_empty_reel_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            ChunkSampler::new(2, 2).sample(&[], &mut rng),
            Err(ReelsearchError::EmptySequence(_))
        ));
    }
}
