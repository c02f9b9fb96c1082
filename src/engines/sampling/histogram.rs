use crate::types::{Chunk, Gene};
use std::collections::{HashMap, HashSet};

/// Frequency table of the chunks observed while sampling a reel
#[derive(Debug, Clone, Default)]
pub struct ChunkHistogram {
    counts: HashMap<Chunk, usize>,
}

impl ChunkHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more observation of `chunk`, returning its updated frequency
    pub fn record(&mut self, chunk: Chunk) -> usize {
        let count = self.counts.entry(chunk).or_insert(0);
        *count += 1;
        *count
    }

    pub fn frequency(&self, chunk: &[Gene]) -> usize {
        self.counts.get(chunk).copied().unwrap_or(0)
    }

    /// Frequency of the rarest chunk seen so far, 0 when nothing was recorded
    pub fn least_frequent(&self) -> usize {
        self.counts.values().copied().min().unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct values present across every recorded chunk
    pub fn distinct_values(&self) -> HashSet<Gene> {
        self.counts.keys().flatten().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Chunk, usize)> {
        self.counts.iter().map(|(chunk, count)| (chunk, *count))
    }

    /// Materialize the chunk list: each distinct chunk repeated as often as it was seen.
    pub fn expand(&self) -> Vec<Chunk> {
        let mut keys: Vec<&Chunk> = self.counts.keys().collect();
        keys.sort();

        let mut chunks = Vec::with_capacity(self.total());
        for chunk in keys {
            for _ in 0..self.counts[chunk] {
                chunks.push(chunk.clone());
            }
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_least_frequent() {
        let mut histogram = ChunkHistogram::new();
        assert_eq!(histogram.least_frequent(), 0);

        histogram.record(vec![1, 2]);
        histogram.record(vec![1, 2]);
        histogram.record(vec![2, 3]);

        assert_eq!(histogram.frequency(&[1, 2]), 2);
        assert_eq!(histogram.frequency(&[9, 9]), 0);
        assert_eq!(histogram.least_frequent(), 1);
        assert_eq!(histogram.distinct(), 2);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn test_expand_oversamples_by_frequency() {
        let mut histogram = ChunkHistogram::new();
        for _ in 0..3 {
            histogram.record(vec![3, 1]);
        }
        histogram.record(vec![1, 2]);

        let chunks = histogram.expand();
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks.iter().filter(|c| **c == vec![3, 1]).count(), 3);
        assert_eq!(chunks.iter().filter(|c| **c == vec![1, 2]).count(), 1);
    }

    #[test]
    fn test_distinct_values() {
        let mut histogram = ChunkHistogram::new();
        histogram.record(vec![1, 2, 3]);
        histogram.record(vec![3, 4, 1]);

        let values = histogram.distinct_values();
        assert_eq!(values.len(), 4);
        assert!(values.contains(&4));
    }
}
