//! Runtime configuration with defaults.
//!
//! The command line overrides individual fields; everything else falls back
//! to the values below.

use std::time::Duration;

use crate::graph::AxisRange;

/// Configuration for the sampling driver.
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Delay between two batches.
    pub tick_interval: Duration,
    /// Number of sampling steps per batch.
    pub batch_size: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(10),
            batch_size: 10,
        }
    }
}

/// Configuration for the graph surface.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Logical domain mapped onto the raster.
    pub domain: AxisRange,
    /// Horizontal distance between two dashes of a reference line, in pixels.
    pub grid_stride: usize,
    /// Logical y values that get a reference line.
    pub grid_levels: Vec<f32>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            domain: AxisRange::default(),
            grid_stride: 10,
            grid_levels: vec![-1.0, 0.0, 1.0],
        }
    }
}

/// Configuration for show mode.
#[derive(Debug, Clone)]
pub struct ShowConfig {
    /// Length of one animation pass.
    pub duration: Duration,
    /// Smallest box width as a fraction of the track.
    pub min_scale: f32,
    /// Largest box width as a fraction of the track.
    pub max_scale: f32,
    /// Text shown inside the animated box.
    pub label: String,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1000),
            min_scale: 0.1,
            max_scale: 1.0,
            label: "Interpolate!".to_string(),
        }
    }
}

/// Combined configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Sampling driver settings.
    pub sampler: SamplerConfig,
    /// Graph surface settings.
    pub graph: GraphConfig,
    /// Show mode settings.
    pub show: ShowConfig,
}
