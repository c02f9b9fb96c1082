use rand::rngs::StdRng;
use rand::SeedableRng;
use reelsearch::engines::generation::evolution_engine::{
    EvolutionConfig, EvolutionEngine, ProgressCallback,
};
use reelsearch::engines::generation::{
    ChannelProgressCallback, Chromosome, DistanceMetric, ProgressMessage,
};
use reelsearch::engines::sampling::{ChunkSampler, LengthBounds, Original};
use std::sync::mpsc;

/// Records every reported best fitness
struct RecordingCallback {
    started: bool,
    epochs: Vec<(usize, f64)>,
    final_best: Option<f64>,
}

impl ProgressCallback for RecordingCallback {
    fn on_run_start(&mut self, _population_size: usize, _iterations: usize) {
        self.started = true;
    }

    fn on_epoch_complete(&mut self, epoch: usize, best_fitness: f64, mean_fitness: f64, _replacements: usize) {
        assert!(mean_fitness <= best_fitness + 1e-9);
        self.epochs.push((epoch, best_fitness));
    }

    fn on_run_complete(&mut self, best_fitness: f64) {
        self.final_best = Some(best_fitness);
    }
}

fn sample_original(seed: u64) -> Original {
    let mut rng = StdRng::seed_from_u64(seed);
    let reel = vec![2, 7, 1, 8, 2, 8, 1, 8, 2, 8, 4, 5];
    ChunkSampler::new(3, 3).sample(&reel, &mut rng).unwrap()
}

fn engine_config(population_size: usize, epochs: usize, seed: u64) -> EvolutionConfig {
    EvolutionConfig {
        population_size,
        epochs,
        mutation_rate: 0.005,
        max_selection_attempts: 100_000,
        report_every_epochs: 1,
        metric: DistanceMetric::Levenshtein,
        seed: Some(seed),
    }
}

#[test]
fn test_reported_best_fitness_is_monotonic() {
    let original = sample_original(1);
    let mut engine = EvolutionEngine::new(engine_config(20, 10, 2));
    let mut callback = RecordingCallback {
        started: false,
        epochs: Vec::new(),
        final_best: None,
    };

    let outcome = engine.run(&original, &mut callback).unwrap();

    assert!(callback.started);
    assert_eq!(callback.epochs.len(), 10);
    assert_eq!(callback.epochs.last().map(|(epoch, _)| *epoch), Some(10));
    for pair in callback.epochs.windows(2) {
        assert!(pair[1].1 >= pair[0].1);
    }
    assert_eq!(callback.final_best, Some(outcome.best.fitness()));
}

#[test]
fn test_final_population_keeps_chunk_shape() {
    let original = sample_original(3);
    let mut engine = EvolutionEngine::new(engine_config(15, 4, 4));

    let outcome = engine.run(&original, &mut RecordingCallback {
        started: false,
        epochs: Vec::new(),
        final_best: None,
    })
    .unwrap();

    let reference = original.chromosome().chunks();
    for member in outcome.population.members() {
        assert_eq!(member.chunks().len(), reference.len());
        for (chunk, slot) in member.chunks().iter().zip(reference) {
            assert_eq!(chunk.len(), slot.len());
        }
        assert!(original.bounds().contains(member.sequence().len()));
        assert!(member.fitness() <= 0.0);
    }
}

#[test]
fn test_fixed_length_bounds() {
    let original = sample_original(5).with_bounds(LengthBounds::new(3, 3).unwrap());
    let mut engine = EvolutionEngine::new(engine_config(10, 3, 6));

    let outcome = engine.run(&original, &mut RecordingCallback {
        started: false,
        epochs: Vec::new(),
        final_best: None,
    })
    .unwrap();

    assert!(outcome
        .population
        .members()
        .iter()
        .all(|member| member.sequence().len() == 3));
}

#[test]
fn test_exact_reel_scores_better_than_random_guess() {
    let mut rng = StdRng::seed_from_u64(12);
    let reel = vec![0, 1, 2, 3, 4, 5];
    let original = ChunkSampler::new(2, 20).sample(&reel, &mut rng).unwrap();

    let mut exact = Chromosome::new(reel.clone());
    exact.sampling(original.chromosome(), &mut rng).unwrap();
    let exact_fitness = exact
        .evaluate(original.chromosome(), DistanceMetric::Levenshtein)
        .unwrap();

    let mut constant = Chromosome::new(vec![0; 6]);
    constant.sampling(original.chromosome(), &mut rng).unwrap();
    let constant_fitness = constant
        .evaluate(original.chromosome(), DistanceMetric::Levenshtein)
        .unwrap();

    assert!(exact_fitness > constant_fitness);
}

#[test]
fn test_channel_progress_messages() {
    let original = sample_original(7);
    let (sender, receiver) = mpsc::channel();
    let mut engine = EvolutionEngine::new(engine_config(10, 2, 8));

    engine
        .run(&original, ChannelProgressCallback::new(sender))
        .unwrap();

    let messages: Vec<ProgressMessage> = receiver.try_iter().collect();
    assert!(matches!(messages.first(), Some(ProgressMessage::RunStart { population_size: 10, iterations: 20 })));
    assert!(matches!(messages.last(), Some(ProgressMessage::RunComplete { .. })));
    assert_eq!(
        messages
            .iter()
            .filter(|m| matches!(m, ProgressMessage::EpochComplete { .. }))
            .count(),
        2
    );
}
