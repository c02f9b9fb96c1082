use crate::error::{ReelsearchError, Result};
use crate::types::{Chunk, Gene};
use rand::Rng;

/// Cut `length` values out of `sequence` starting at `start`, wrapping past the end.
pub fn circular_window(sequence: &[Gene], start: usize, length: usize) -> Result<Chunk> {
    if sequence.is_empty() {
        return Err(ReelsearchError::EmptySequence(
            "cannot cut a window from an empty sequence".to_string(),
        ));
    }

    Ok((0..length)
        .map(|offset| sequence[(start + offset) % sequence.len()])
        .collect())
}

/// Circular window at a uniformly random start position
pub fn random_window<R: Rng>(sequence: &[Gene], length: usize, rng: &mut R) -> Result<Chunk> {
    if sequence.is_empty() {
        return Err(ReelsearchError::EmptySequence(
            "cannot sample a window from an empty sequence".to_string(),
        ));
    }

    let start = rng.gen_range(0..sequence.len());
    circular_window(sequence, start, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_window_wraps_around() {
        let sequence = vec![1, 2, 3, 4];
        assert_eq!(circular_window(&sequence, 3, 3).unwrap(), vec![4, 1, 2]);
    }

    #[test]
    fn test_window_longer_than_sequence() {
        // Short reels repeat themselves
        let sequence = vec![5, 6];
        assert_eq!(circular_window(&sequence, 1, 5).unwrap(), vec![6, 5, 6, 5, 6]);
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            random_window(&[], 3, &mut rng),
            Err(ReelsearchError::EmptySequence(_))
        ));
    }

    #[test]
    fn test_random_window_is_contiguous() {
        let mut rng = StdRng::seed_from_u64(7);
        let sequence: Vec<u32> = (0..10).collect();

        for _ in 0..50 {
            let window = random_window(&sequence, 4, &mut rng).unwrap();
            assert_eq!(window.len(), 4);
            for pair in window.windows(2) {
                assert_eq!(pair[1], (pair[0] + 1) % 10);
            }
        }
    }
}
