/*
 * Weighted random number generation, and a live histogram of it.
 * random_util draws numbers from a density shape by rejection sampling,
 * histogram and graph accumulate and lay out those draws, app draws them.
 */

pub mod app;
pub mod config;
pub mod geometry;
pub mod graph;
pub mod histogram;
pub mod random_util;
pub mod utils;

pub use random_util::{DensityShape, SampleError, WeightedRandom, gaussian, polynomial};
