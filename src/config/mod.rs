//! Configuration module for the up/down graph.

pub mod demo;
pub mod graph;
pub mod plot;
pub mod rounds;

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use demo::DEMO;
pub use graph::{GRAPH, GraphConfig, PROCESS, ProcessConfig, SCALE, ScaleConfig};
pub use plot::PLOT_CONFIG;
pub use rounds::ROUNDS;
