pub mod generation;
pub mod reconstruction;
pub mod sampling;

pub use reconstruction::{reconstruct, reconstruct_set};
