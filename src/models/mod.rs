// Pure graph models: the line generator, sample storage and Y-axis scaling.
// Nothing in here knows about egui or the network.

pub mod line;
pub mod ring_buffer;
pub mod scale;
pub mod series;

// Re-export key types for convenience
pub use line::{LineVertex, line_vertices};
pub use ring_buffer::PriceRing;
pub use scale::{Bounds, ScaleTracker};
pub use series::SeriesGenerator;
