pub mod chromosome;
pub mod distance;
pub mod operators;
pub mod population;
pub mod evolution_engine;
pub mod hierarchical;
pub mod progress;

pub use chromosome::Chromosome;
pub use distance::{levenshtein, euclidean, mean_chunk_distance, DistanceMetric};
pub use population::{Family, Population};
pub use evolution_engine::{EvolutionConfig, EvolutionEngine, EvolutionOutcome, ProgressCallback};
pub use hierarchical::{HierarchicalConfig, HierarchicalOptimizer};
pub use progress::{ChannelProgressCallback, LogProgressCallback, ProgressMessage, SilentProgressCallback};
