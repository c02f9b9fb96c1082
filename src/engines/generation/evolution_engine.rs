use crate::engines::generation::{
    chromosome::Chromosome,
    distance::DistanceMetric,
    population::{Family, Population},
};
use crate::engines::sampling::Original;
use crate::error::{ReelsearchError, Result};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct EvolutionConfig {
    pub population_size: usize,
    /// Full-population equivalents; the run performs `epochs * population_size` iterations
    pub epochs: usize,
    pub mutation_rate: f64,
    pub max_selection_attempts: usize,
    pub report_every_epochs: usize,
    pub metric: DistanceMetric,
    pub seed: Option<u64>,
}

/// Steady-state genetic algorithm: one child per iteration, replacing a weak member.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    rng: StdRng,
}

pub trait ProgressCallback: Send {
    fn on_run_start(&mut self, _population_size: usize, _iterations: usize) {}
    fn on_epoch_complete(&mut self, epoch: usize, best_fitness: f64, mean_fitness: f64, replacements: usize);
    fn on_run_complete(&mut self, _best_fitness: f64) {}

    /// Polled between iterations; returning true stops the run early
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &mut T {
    fn on_run_start(&mut self, population_size: usize, iterations: usize) {
        (**self).on_run_start(population_size, iterations);
    }

    fn on_epoch_complete(&mut self, epoch: usize, best_fitness: f64, mean_fitness: f64, replacements: usize) {
        (**self).on_epoch_complete(epoch, best_fitness, mean_fitness, replacements);
    }

    fn on_run_complete(&mut self, best_fitness: f64) {
        (**self).on_run_complete(best_fitness);
    }

    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

pub struct EvolutionOutcome {
    pub population: Population,
    pub best: Chromosome,
    pub iterations: usize,
    pub replacements: usize,
    pub evaluations: usize,
    /// Best fitness after the initial population, then after every epoch
    pub best_history: Vec<f64>,
    pub cancelled: bool,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Run the evolution process against the sampled original
    pub fn run<C: ProgressCallback>(
        &mut self,
        original: &Original,
        mut callback: C,
    ) -> Result<EvolutionOutcome> {
        let population_size = self.config.population_size;
        let iterations = self
            .config
            .epochs
            .checked_mul(population_size)
            .ok_or_else(|| {
                ReelsearchError::BudgetExceeded(format!(
                    "{} epochs of {} individuals overflow the iteration counter",
                    self.config.epochs, population_size
                ))
            })?;
        let report_every = self.config.report_every_epochs.max(1);

        let mut population = self.initialize_population(original)?;
        callback.on_run_start(population_size, iterations);

        let mut best_history = vec![population.best_fitness()?];
        let mut replacements = 0;
        let mut performed = 0;
        let mut cancelled = false;

        for iteration in 1..=iterations {
            if callback.is_cancelled() {
                warn!("Evolution cancelled after {} of {} iterations", performed, iterations);
                cancelled = true;
                break;
            }

            if self.step(&mut population, original)? {
                replacements += 1;
            }
            performed = iteration;

            if iteration % population_size == 0 {
                let epoch = iteration / population_size;
                let best_fitness = population.best_fitness()?;
                best_history.push(best_fitness);

                if epoch % report_every == 0 {
                    callback.on_epoch_complete(
                        epoch,
                        best_fitness,
                        population.mean_fitness()?,
                        replacements,
                    );
                }
            }
        }

        let best = population.best_found()?.clone();
        callback.on_run_complete(best.fitness());

        Ok(EvolutionOutcome {
            population,
            best,
            iterations: performed,
            replacements,
            evaluations: population_size + performed,
            best_history,
            cancelled,
        })
    }

    pub fn initialize_population(&mut self, original: &Original) -> Result<Population> {
        debug!(
            "Initializing population of size {} (lengths {}..={})",
            self.config.population_size,
            original.bounds().min(),
            original.bounds().max()
        );
        Population::random(
            original,
            self.config.population_size,
            self.config.metric,
            &mut self.rng,
        )
    }

    /// One select, recombine, mutate, evaluate, replace cycle.
    ///
    /// Returns whether the child took the victim's place.
    pub fn step(&mut self, population: &mut Population, original: &Original) -> Result<bool> {
        let Family {
            parent1,
            parent2,
            victim,
        } = population.select(self.config.max_selection_attempts, &mut self.rng)?;

        let child = {
            let dominant = population.get(parent1).ok_or(ReelsearchError::EmptyPopulation)?;
            let mate = population.get(parent2).ok_or(ReelsearchError::EmptyPopulation)?;
            self.breed(dominant, mate, original)?
        };

        Ok(population.replace_if_better(victim, child))
    }

    fn breed(&mut self, dominant: &Chromosome, mate: &Chromosome, original: &Original) -> Result<Chromosome> {
        let reference = original.chromosome();

        let mut child = dominant.crossover(mate, original.bounds(), &mut self.rng)?;
        child.mutate(reference, self.config.mutation_rate, &mut self.rng)?;
        child.sampling(reference, &mut self.rng)?;
        child.evaluate(reference, self.config.metric)?;

        Ok(child)
    }
}
