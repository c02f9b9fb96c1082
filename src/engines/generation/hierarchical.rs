use crate::engines::generation::{
    chromosome::Chromosome, distance::DistanceMetric, population::Population,
};
use crate::engines::sampling::Original;
use crate::error::{ReelsearchError, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct HierarchicalConfig {
    pub depth: usize,
    pub max_depth: usize,
    pub max_evaluations: usize,
    pub mutation_rate: f64,
    pub metric: DistanceMetric,
    pub seed: Option<u64>,
}

/// Recursive search composing best-of-subtree solutions.
///
/// At depth `d > 1` the optimizer collects `d` solutions from depth `d - 1` and
/// breeds every ordered pair of them (self-pairs included) until a full pass no
/// longer beats the running best. Work grows combinatorially with depth, so the
/// evaluation count is capped.
pub struct HierarchicalOptimizer {
    config: HierarchicalConfig,
    rng: StdRng,
    evaluations: usize,
}

impl HierarchicalOptimizer {
    pub fn new(config: HierarchicalConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            evaluations: 0,
        }
    }

    /// Evaluations spent so far across every `solve` call
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn run(&mut self, original: &Original) -> Result<Chromosome> {
        self.solve(self.config.depth, original)
    }

    pub fn solve(&mut self, depth: usize, original: &Original) -> Result<Chromosome> {
        if depth == 0 {
            return Err(ReelsearchError::InvalidDepth(depth));
        }
        if depth > self.config.max_depth {
            return Err(ReelsearchError::BudgetExceeded(format!(
                "recursion depth {} is above the limit of {}",
                depth, self.config.max_depth
            )));
        }

        let reference = original.chromosome();
        if depth == 1 {
            let mut candidate = Chromosome::random(reference, original.bounds(), &mut self.rng)?;
            self.evaluate(&mut candidate, original)?;
            return Ok(candidate);
        }

        let local = Population::new(
            (0..depth)
                .map(|_| self.solve(depth - 1, original))
                .collect::<Result<Vec<_>>>()?,
        );
        let mut best = local.best_found()?.clone();

        let mut passes = 0;
        loop {
            let mut improved = false;
            passes += 1;

            for first in local.members() {
                for second in local.members() {
                    let mut child = first.crossover(second, original.bounds(), &mut self.rng)?;
                    child.mutate(reference, self.config.mutation_rate, &mut self.rng)?;
                    child.sampling(reference, &mut self.rng)?;
                    self.evaluate(&mut child, original)?;

                    if child.fitness() > best.fitness() {
                        best = child;
                        improved = true;
                    }
                }
            }

            if !improved {
                break;
            }
        }

        debug!(
            "Depth {} settled after {} passes: best = {:.4}, evaluations = {}",
            depth,
            passes,
            best.fitness(),
            self.evaluations
        );
        Ok(best)
    }

    fn evaluate(&mut self, candidate: &mut Chromosome, original: &Original) -> Result<f64> {
        if self.evaluations >= self.config.max_evaluations {
            return Err(ReelsearchError::BudgetExceeded(format!(
                "evaluation limit of {} reached",
                self.config.max_evaluations
            )));
        }

        self.evaluations += 1;
        candidate.evaluate(original.chromosome(), self.config.metric)
    }
}
