use crate::config::AppConfig;
use crate::data::ReelSet;
use crate::engines::generation::{
    EvolutionEngine, HierarchicalOptimizer, LogProgressCallback, ProgressCallback,
};
use crate::engines::sampling::ChunkSampler;
use crate::error::Result;
use crate::types::{Gene, RunReport, SearchMode};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reconstruct a single reel with the strategy selected by `config.mode`.
pub fn reconstruct(reel: &[Gene], config: &AppConfig) -> Result<RunReport> {
    reconstruct_reel(0, 0, reel, config, LogProgressCallback::new("machine 0 reel 0"))
}

/// Reconstruct every reel of every machine, in order.
///
/// With a configured seed, reel `i` (counted across machines) is seeded with
/// `seed + i`, so each report is reproducible on its own.
pub fn reconstruct_set(set: &ReelSet, config: &AppConfig) -> Result<Vec<RunReport>> {
    set.validate()?;

    set.iter()
        .enumerate()
        .map(|(index, (machine, reel, sequence))| {
            let reel_config = AppConfig {
                seed: config.seed.map(|seed| seed.wrapping_add(index as u64)),
                ..config.clone()
            };
            let label = format!("machine {} reel {}", machine, reel);
            reconstruct_reel(machine, reel, sequence, &reel_config, LogProgressCallback::new(label))
        })
        .collect()
}

pub fn reconstruct_reel<C: ProgressCallback>(
    machine: usize,
    reel_index: usize,
    reel: &[Gene],
    config: &AppConfig,
    callback: C,
) -> Result<RunReport> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let original = ChunkSampler::from_config(&config.sampling).sample(reel, &mut rng)?;
    info!(
        "Machine {} reel {}: {} distinct chunks, candidate lengths {}..={}",
        machine,
        reel_index,
        original.histogram().distinct(),
        original.bounds().min(),
        original.bounds().max()
    );

    // The search continues the reel's random stream through a derived seed
    let search_seed = config.seed.map(|_| rng.gen::<u64>());

    let (best, evaluations) = match config.mode {
        SearchMode::Evolution => {
            let mut engine_config = config.evolution_engine_config();
            engine_config.seed = search_seed;

            let outcome = EvolutionEngine::new(engine_config).run(&original, callback)?;
            (outcome.best, outcome.evaluations)
        }
        SearchMode::Hierarchical => {
            let mut optimizer_config = config.hierarchical_engine_config();
            optimizer_config.seed = search_seed;

            let mut optimizer = HierarchicalOptimizer::new(optimizer_config);
            let best = optimizer.run(&original)?;
            (best, optimizer.evaluations())
        }
    };

    info!(
        "Machine {} reel {}: best fitness {:.4} after {} evaluations",
        machine,
        reel_index,
        best.fitness(),
        evaluations
    );

    Ok(RunReport {
        machine,
        reel: reel_index,
        mode: config.mode,
        bounds: original.bounds(),
        distinct_chunks: original.histogram().distinct(),
        evaluations,
        original: original.into_chromosome(),
        best,
    })
}
