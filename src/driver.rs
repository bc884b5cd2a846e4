//! Curve sampling driver.
//!
//! The driver walks progress from 0 to 1 in steps of one pixel column,
//! evaluates the curve at each step and plots the result. Work is done in
//! fixed-size batches, one batch per timer tick, so the event loop stays
//! responsive between batches.

use std::fmt;
use std::time::{Duration, Instant};

use crate::config::SamplerConfig;
use crate::curve::Interpolator;
use crate::error::{EaseplotError, Result};
use crate::graph::GraphSurface;
use crate::timer::RepeatingTimer;

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// No run in progress.
    #[default]
    Idle,
    /// A run is in progress and ticking.
    Running,
}

/// Outcome of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverEvent {
    /// A batch was plotted and the run continues.
    Batch {
        /// Points plotted so far in this run.
        plotted: usize,
    },
    /// Progress passed 1.0 and the run stopped.
    Complete {
        /// Points plotted in this run.
        plotted: usize,
    },
}

/// Periodic sampler feeding a [`GraphSurface`].
pub struct SamplingDriver {
    curve: Option<Box<dyn Interpolator>>,
    timer: RepeatingTimer,
    batch_size: usize,
    columns: usize,
    step: usize,
    progress: f32,
    plotted: usize,
    state: DriverState,
}

impl fmt::Debug for SamplingDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SamplingDriver")
            .field("timer", &self.timer)
            .field("batch_size", &self.batch_size)
            .field("columns", &self.columns)
            .field("progress", &self.progress)
            .field("plotted", &self.plotted)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl SamplingDriver {
    /// Create an idle driver.
    pub fn new(config: &SamplerConfig) -> Self {
        Self {
            curve: None,
            timer: RepeatingTimer::new(config.tick_interval),
            batch_size: config.batch_size.max(1),
            columns: 0,
            step: 0,
            progress: 0.0,
            plotted: 0,
            state: DriverState::Idle,
        }
    }

    /// Begin a run at `now`: reset progress and the surface, start ticking.
    ///
    /// Any run already in progress is replaced.
    pub fn start_at<I>(&mut self, curve: I, surface: &mut GraphSurface, now: Instant) -> Result<()>
    where
        I: Interpolator + 'static,
    {
        let columns = surface.width();
        if columns == 0 {
            return Err(EaseplotError::empty_surface(columns, surface.height()));
        }

        surface.reset();
        self.curve = Some(Box::new(curve));
        self.columns = columns;
        self.step = 0;
        self.progress = 0.0;
        self.plotted = 0;
        self.state = DriverState::Running;
        self.timer.start_at(now);

        tracing::debug!(columns, batch = self.batch_size, "Sampling run started");
        Ok(())
    }

    /// Begin a run now.
    pub fn start<I>(&mut self, curve: I, surface: &mut GraphSurface) -> Result<()>
    where
        I: Interpolator + 'static,
    {
        self.start_at(curve, surface, Instant::now())
    }

    /// Stop ticking. The surface keeps whatever was drawn. Idempotent.
    pub fn cancel(&mut self) {
        if self.state == DriverState::Running {
            tracing::debug!(plotted = self.plotted, "Sampling run cancelled");
        }
        self.timer.stop();
        self.state = DriverState::Idle;
    }

    /// Run a batch if the timer is due at `now`.
    pub fn poll_at(&mut self, surface: &mut GraphSurface, now: Instant) -> Option<DriverEvent> {
        if self.state != DriverState::Running || !self.timer.poll_at(now) {
            return None;
        }
        self.tick(surface)
    }

    /// Time left until the next batch, `None` when no run is active.
    pub fn time_until_next_at(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next_at(now)
    }

    /// Run one batch immediately, ignoring the timer.
    ///
    /// Returns `None` when no run is active.
    pub fn tick(&mut self, surface: &mut GraphSurface) -> Option<DriverEvent> {
        if self.state != DriverState::Running {
            return None;
        }
        let curve = self.curve.as_ref()?;

        for _ in 0..self.batch_size {
            if self.progress > 1.0 {
                break;
            }
            let value = curve.evaluate(self.progress);
            surface.add_point(self.progress, value);
            self.plotted += 1;

            self.step += 1;
            self.progress = self.step as f32 / self.columns as f32;
        }

        if self.progress > 1.0 {
            self.timer.stop();
            self.state = DriverState::Idle;
            tracing::debug!(plotted = self.plotted, "Sampling run complete");
            Some(DriverEvent::Complete {
                plotted: self.plotted,
            })
        } else {
            Some(DriverEvent::Batch {
                plotted: self.plotted,
            })
        }
    }

    /// Tick back to back until the run completes. Returns the number of points plotted.
    pub fn run_to_completion(&mut self, surface: &mut GraphSurface) -> usize {
        while let Some(event) = self.tick(surface) {
            if let DriverEvent::Complete { plotted } = event {
                return plotted;
            }
        }
        self.plotted
    }

    /// Current progress.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Check if a run is in progress.
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Points plotted in the current or last run.
    pub fn plotted(&self) -> usize {
        self.plotted
    }
}
