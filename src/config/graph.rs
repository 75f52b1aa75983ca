//! Line generator, ring buffer and Y-axis scale tuning.
//!
//! All of these are cosmetic. The line is not a market, so the values only
//! need to look plausible at 60 fps.

/// Ornstein-Uhlenbeck style generator constants.
pub struct ProcessConfig {
    /// Long-run level the series is pulled back towards (also the seed value)
    pub mu: f64,
    /// Mean-reversion strength per step (0.0 = pure random walk)
    pub theta: f64,
    /// Scale applied to the uniform noise draw
    pub sigma: f64,
    /// Noise is drawn uniformly from [-noise_amplitude, +noise_amplitude]
    pub noise_amplitude: f64,
    /// Hard cap on the absolute change of a single step
    pub max_step: f64,
    /// Extra drift per step once a round outcome is known
    pub bias_weight: f64,
}

pub const PROCESS: ProcessConfig = ProcessConfig {
    mu: 100.0,
    theta: 0.04,
    sigma: 0.9,
    noise_amplitude: 1.0,
    max_step: 1.5,
    bias_weight: 0.35,
};

/// Ring buffer, stepping cadence and drawing geometry.
pub struct GraphConfig {
    /// Number of samples kept on screen (N)
    pub ring_len: usize,
    /// Trailing window used by the smoothed read (K)
    pub smoothing_window: usize,
    /// Seconds of simulated time per generator step
    pub step_period_sec: f64,
    /// Upper bound on generator steps executed in one frame
    pub max_catch_up_steps: usize,
    /// Fixed canvas height in points
    pub canvas_height: f32,
    /// Fraction of the canvas width (from the left) that the line occupies
    pub viewport_fraction: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    /// Horizontal gridlines drawn across the canvas
    pub grid_lines: usize,
}

pub const GRAPH: GraphConfig = GraphConfig {
    ring_len: 160,
    smoothing_window: 5,
    step_period_sec: 0.08,
    max_catch_up_steps: 160,
    canvas_height: 420.0,
    viewport_fraction: 0.6,
    margin_top: 24.0,
    margin_bottom: 24.0,
    grid_lines: 6,
};

/// Y-axis easing.
pub struct ScaleConfig {
    /// Padding added to each end, as a fraction of the data span
    pub pad_fraction: f64,
    /// Minimum padding added to each end
    pub min_pad: f64,
    /// Exponential smoothing factor applied per frame (0.0..=1.0)
    pub smooth_rate: f64,
    /// Largest absolute change of either bound in a single frame
    pub max_delta_per_frame: f64,
    /// Smallest allowed distance between min and max
    pub min_span: f64,
}

pub const SCALE: ScaleConfig = ScaleConfig {
    pad_fraction: 0.12,
    min_pad: 0.5,
    smooth_rate: 0.08,
    max_delta_per_frame: 0.6,
    min_span: 1.0,
};
