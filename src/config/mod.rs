pub mod traits;
pub mod sampling;
pub mod evolution;
pub mod hierarchical;
pub mod manager;

pub use manager::{ConfigManager, AppConfig, ENV_PREFIX};
pub use sampling::SamplingConfig;
pub use evolution::EvolutionConfig;
pub use hierarchical::HierarchicalConfig;
pub use traits::ConfigSection;
