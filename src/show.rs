//! Show mode: a label box that grows under the selected curve.

use std::time::{Duration, Instant};

use crate::config::ShowConfig;
use crate::curve::Curve;

/// One pass of the scale animation.
#[derive(Debug, Clone)]
pub struct ShowAnimation {
    curve: Curve,
    started: Option<Instant>,
    duration: Duration,
    min_scale: f32,
    max_scale: f32,
}

impl ShowAnimation {
    /// Create an idle animation.
    pub fn new(config: &ShowConfig) -> Self {
        Self {
            curve: Curve::default(),
            started: None,
            duration: config.duration,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
        }
    }

    /// Start (or restart) a pass at `now`.
    pub fn start_at(&mut self, curve: Curve, now: Instant) {
        self.curve = curve;
        self.started = Some(now);
    }

    /// Stop the pass and return to the initial scale.
    pub fn cancel(&mut self) {
        self.started = None;
    }

    /// Linear time fraction in `[0, 1]`; 0 when idle.
    pub fn time_fraction_at(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Check if the pass is still moving at `now`.
    pub fn is_running_at(&self, now: Instant) -> bool {
        self.started.is_some() && self.time_fraction_at(now) < 1.0
    }

    /// Box width as a fraction of the track. May leave `[min, max]` for
    /// curves that anticipate or overshoot.
    pub fn scale_at(&self, now: Instant) -> f32 {
        let value = self.curve.value(self.time_fraction_at(now));
        self.min_scale + (self.max_scale - self.min_scale) * value
    }

    /// Box width in cells for a track of `track` cells, clamped to the track.
    pub fn width_at(&self, now: Instant, track: u16) -> u16 {
        let cells = (self.scale_at(now) * f32::from(track)).round();
        cells.clamp(1.0, f32::from(track.max(1))) as u16
    }
}
