//! Reconstruction of hidden integer sequences (reel strips) from statistical
//! samples of their overlapping windows, using a steady-state genetic search
//! or a recursive hierarchical search.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{ReelsearchError, Result};
