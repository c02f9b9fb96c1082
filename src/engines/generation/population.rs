use crate::engines::generation::chromosome::Chromosome;
use crate::engines::generation::distance::DistanceMetric;
use crate::engines::sampling::Original;
use crate::error::{ReelsearchError, Result};
use rand::Rng;

/// Steady-state selection result: two parents and the slot the child may take over.
///
/// `parent1` is the dominant parent (strictly higher fitness, or the second draw on a tie).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    pub parent1: usize,
    pub parent2: usize,
    pub victim: usize,
}

/// Fixed-size collection of evaluated chromosomes
#[derive(Debug, Clone, Default)]
pub struct Population {
    members: Vec<Chromosome>,
}

impl Population {
    pub fn new(members: Vec<Chromosome>) -> Self {
        Self { members }
    }

    /// Random population seeded from the original, every member evaluated.
    pub fn random<R: Rng>(
        original: &Original,
        size: usize,
        metric: DistanceMetric,
        rng: &mut R,
    ) -> Result<Self> {
        let reference = original.chromosome();
        let members = (0..size)
            .map(|_| {
                let mut candidate = Chromosome::random(reference, original.bounds(), rng)?;
                candidate.evaluate(reference, metric)?;
                Ok(candidate)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { members })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.members.get(index)
    }

    pub fn members(&self) -> &[Chromosome] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Chromosome> {
        self.members
    }

    /// Draw two distinct parents and a distinct victim no fitter than either parent.
    ///
    /// Draws are rejected and repeated; after `max_attempts` rejections the
    /// population is reported as degenerate.
    pub fn select<R: Rng>(&self, max_attempts: usize, rng: &mut R) -> Result<Family> {
        let size = self.members.len();
        if size < 3 {
            return Err(ReelsearchError::DegenerateSelection {
                population_size: size,
                attempts: 0,
            });
        }

        for _ in 0..max_attempts {
            let first = rng.gen_range(0..size);
            let second = rng.gen_range(0..size);
            let victim = rng.gen_range(0..size);

            if first == victim || second == victim || first == second {
                continue;
            }

            let victim_fitness = self.members[victim].fitness();
            if victim_fitness > self.members[first].fitness()
                || victim_fitness > self.members[second].fitness()
            {
                continue;
            }

            let (parent1, parent2) =
                if self.members[first].fitness() > self.members[second].fitness() {
                    (first, second)
                } else {
                    (second, first)
                };

            return Ok(Family {
                parent1,
                parent2,
                victim,
            });
        }

        Err(ReelsearchError::DegenerateSelection {
            population_size: size,
            attempts: max_attempts,
        })
    }

    /// Put `child` in place of the victim if it is strictly fitter.
    pub fn replace_if_better(&mut self, victim: usize, child: Chromosome) -> bool {
        match self.members.get_mut(victim) {
            Some(slot) if child.fitness() > slot.fitness() => {
                *slot = child;
                true
            }
            _ => false,
        }
    }

    /// First member with the highest fitness
    pub fn best_found(&self) -> Result<&Chromosome> {
        let mut members = self.members.iter();
        let mut best = members.next().ok_or(ReelsearchError::EmptyPopulation)?;
        for candidate in members {
            if candidate.fitness() > best.fitness() {
                best = candidate;
            }
        }
        Ok(best)
    }

    pub fn best_fitness(&self) -> Result<f64> {
        self.best_found().map(Chromosome::fitness)
    }

    pub fn mean_fitness(&self) -> Result<f64> {
        if self.members.is_empty() {
            return Err(ReelsearchError::EmptyPopulation);
        }
        Ok(self.members.iter().map(Chromosome::fitness).sum::<f64>() / self.members.len() as f64)
    }
}
