pub mod bounds;
pub mod histogram;
pub mod sampler;
pub mod window;

pub use bounds::LengthBounds;
pub use histogram::ChunkHistogram;
pub use sampler::{ChunkSampler, Original};
pub use window::{circular_window, random_window};
