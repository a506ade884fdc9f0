//! Dotwalk Core Library
//!
//! Graph model, traversal and path algorithms, the indexed priority queue,
//! DOT notation, and per-step state export for the dotwalk visualizer.

pub mod dot;
pub mod error;
pub mod graph;
pub mod heap;
pub mod logging;
pub mod paths;
pub mod snapshot;
pub mod vertex;
pub mod walk;
