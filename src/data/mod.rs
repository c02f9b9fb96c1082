pub mod reels;

pub use reels::{ReelSet, ReelSetLoader};
