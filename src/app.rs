//! Application state and logic.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::curve::Curve;
use crate::driver::{DriverEvent, SamplingDriver};
use crate::graph::GraphSurface;
use crate::show::ShowAnimation;
use crate::util;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// What the main panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Animate the sample label.
    #[default]
    Show,
    /// Plot the curve.
    Graph,
}

impl Mode {
    /// Get the other mode.
    pub fn next(self) -> Self {
        match self {
            Mode::Show => Mode::Graph,
            Mode::Graph => Mode::Show,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Show => "Show",
            Mode::Graph => "Graph",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Runtime configuration.
    pub config: Config,
    /// Current mode.
    pub mode: Mode,
    /// Selected curve.
    pub curve: Curve,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Graph surface, allocated once the drawing area is known.
    pub graph: Option<GraphSurface>,
    /// Sampling driver for graph mode.
    pub driver: SamplingDriver,
    /// Show mode animation.
    pub show: ShowAnimation,
    /// Busy indicator, shown while a graph run is in progress.
    pub busy: bool,
    /// Work is suspended because the terminal lost focus.
    pub paused: bool,
    /// Set when the user asked to quit.
    pub should_quit: bool,
    spinner_frame: usize,
    pending_start: bool,
}

impl App {
    /// Create a new application instance. Nothing runs until [`App::update`].
    pub fn new(config: Config, mode: Mode, curve: Curve) -> Self {
        let driver = SamplingDriver::new(&config.sampler);
        let show = ShowAnimation::new(&config.show);
        Self {
            config,
            mode,
            curve,
            theme: Theme::GruvboxDark,
            status: "Ready".to_string(),
            graph: None,
            driver,
            show,
            busy: false,
            paused: false,
            should_quit: false,
            spinner_frame: 0,
            pending_start: false,
        }
    }

    /// Stop everything that is animating or sampling.
    pub fn stop_current_work(&mut self) {
        self.driver.cancel();
        self.show.cancel();
        self.busy = false;
        self.pending_start = false;
    }

    /// (Re)start the current mode with the current curve.
    pub fn update(&mut self, now: Instant) {
        match self.mode {
            Mode::Show => {
                self.busy = false;
                self.show.start_at(self.curve, now);
                self.status = format!("Showing {}", self.curve);
            },
            Mode::Graph => {
                let Some(graph) = self.graph.as_mut() else {
                    // Started once the first layout pass reports a size.
                    self.pending_start = true;
                    return;
                };
                match self.driver.start_at(self.curve, graph, now) {
                    Ok(()) => {
                        self.busy = true;
                        self.status = format!("Graphing {}", self.curve);
                    },
                    Err(e) => {
                        self.busy = false;
                        self.status = format!("Cannot graph: {}", e);
                        tracing::error!("Failed to start sampling: {}", e);
                    },
                }
            },
        }
    }

    /// Report the graph area in pixels. Allocates or resizes the surface and
    /// restarts graph mode when the size changed.
    pub fn set_graph_size(&mut self, width: usize, height: usize, now: Instant) {
        let changed = match self.graph.as_mut() {
            Some(graph) if graph.width() == width && graph.height() == height => false,
            Some(graph) => match graph.resize(width, height) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Ignoring resize: {}", e);
                    false
                },
            },
            None => match GraphSurface::with_config(width, height, &self.config.graph) {
                Ok(graph) => {
                    self.graph = Some(graph);
                    true
                },
                Err(e) => {
                    tracing::warn!("Graph area not ready: {}", e);
                    false
                },
            },
        };

        if self.paused || self.mode != Mode::Graph {
            return;
        }
        if self.pending_start || changed {
            self.pending_start = false;
            self.driver.cancel();
            self.update(now);
        }
    }

    /// Advance timers. Returns `true` when something visible changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let mut redraw = false;

        if let Some(graph) = self.graph.as_mut() {
            match self.driver.poll_at(graph, now) {
                Some(DriverEvent::Complete { plotted }) => {
                    self.busy = false;
                    self.status = format!("{} done ({} samples)", self.curve, plotted);
                },
                Some(DriverEvent::Batch { .. }) | None => {},
            }
            redraw |= graph.take_dirty();
        }

        if self.busy {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            redraw = true;
        }
        if self.mode == Mode::Show && self.show.is_running_at(now) {
            redraw = true;
        }
        redraw
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let idle = Duration::from_millis(100);
        if let Some(until_batch) = self.driver.time_until_next_at(now) {
            until_batch.min(idle)
        } else if self.mode == Mode::Show && self.show.is_running_at(now) {
            Duration::from_millis(16)
        } else {
            idle
        }
    }

    /// Busy indicator glyph.
    pub fn spinner(&self) -> Option<char> {
        self.busy
            .then(|| SPINNER[(self.spinner_frame / 4) % SPINNER.len()])
    }

    /// Select a curve and restart.
    pub fn select_curve(&mut self, curve: Curve, now: Instant) {
        self.stop_current_work();
        self.curve = curve;
        tracing::info!(curve = curve.name(), "Curve selected");
        self.update(now);
    }

    /// Select the next curve.
    pub fn next_curve(&mut self, now: Instant) {
        self.select_curve(self.curve.next(), now);
    }

    /// Select the previous curve.
    pub fn prev_curve(&mut self, now: Instant) {
        self.select_curve(self.curve.prev(), now);
    }

    /// Switch mode and restart.
    pub fn set_mode(&mut self, mode: Mode, now: Instant) {
        self.stop_current_work();
        self.mode = mode;
        tracing::info!(mode = mode.name(), "Mode selected");
        self.update(now);
    }

    /// Toggle between show and graph mode.
    pub fn toggle_mode(&mut self, now: Instant) {
        self.set_mode(self.mode.next(), now);
    }

    /// Run the current mode again.
    pub fn replay(&mut self, now: Instant) {
        self.stop_current_work();
        self.update(now);
    }

    /// Focus lost: stop all work.
    pub fn pause(&mut self) {
        if !self.paused {
            tracing::debug!("Pausing");
            self.stop_current_work();
            self.paused = true;
            self.status = "Paused".to_string();
        }
    }

    /// Focus regained: restart the current mode.
    pub fn resume(&mut self, now: Instant) {
        if self.paused {
            tracing::debug!("Resuming");
            self.paused = false;
            self.update(now);
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy samples of the current curve to the clipboard.
    pub fn copy_samples(&mut self) {
        let steps = self.graph.as_ref().map(|g| g.width()).unwrap_or(100);
        match util::copy_samples(self.curve, steps) {
            Ok(()) => self.status = format!("Copied {} samples of {}", steps + 1, self.curve),
            Err(e) => {
                self.status = format!("Copy failed: {}", e);
                tracing::error!("Copy failed: {}", e);
            },
        }
    }

    /// Request exit.
    pub fn quit(&mut self) {
        self.stop_current_work();
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Pixel;

    fn graph_app() -> (App, Instant) {
        let now = Instant::now();
        let mut app = App::new(Config::default(), Mode::Graph, Curve::Linear);
        app.update(now);
        (app, now)
    }

    #[test]
    fn graph_run_waits_for_layout() {
        let (mut app, now) = graph_app();
        assert!(!app.busy);
        app.set_graph_size(40, 20, now);
        assert!(app.busy);
        assert!(app.driver.is_running());
        assert!(app.spinner().is_some());
    }

    #[test]
    fn run_completes_and_hides_busy_indicator() {
        let (mut app, now) = graph_app();
        app.set_graph_size(40, 20, now);
        let mut t = now;
        for _ in 0..20 {
            t += Duration::from_millis(10);
            app.on_tick(t);
        }
        assert!(!app.busy);
        assert!(app.spinner().is_none());
        assert!(app.status.contains("41 samples"));
    }

    #[test]
    fn pause_cancels_and_resume_restarts() {
        let (mut app, now) = graph_app();
        app.set_graph_size(40, 20, now);
        app.on_tick(now + Duration::from_millis(10));
        app.pause();
        assert!(!app.driver.is_running());
        let traced = app.graph.as_ref().unwrap().raster().count(Pixel::Trace);
        app.on_tick(now + Duration::from_millis(50));
        assert_eq!(app.graph.as_ref().unwrap().raster().count(Pixel::Trace), traced);

        app.resume(now + Duration::from_millis(60));
        assert!(app.driver.is_running());
        assert_eq!(app.graph.as_ref().unwrap().raster().count(Pixel::Trace), 0);
    }

    #[test]
    fn selecting_a_curve_restarts_the_run() {
        let (mut app, now) = graph_app();
        app.set_graph_size(40, 20, now);
        app.next_curve(now);
        assert_eq!(app.curve, Curve::Overshoot);
        assert!(app.driver.is_running());
        assert_eq!(app.driver.progress(), 0.0);
    }

    #[test]
    fn switching_to_show_stops_sampling() {
        let (mut app, now) = graph_app();
        app.set_graph_size(40, 20, now);
        app.toggle_mode(now);
        assert_eq!(app.mode, Mode::Show);
        assert!(!app.driver.is_running());
        assert!(!app.busy);
        assert!(app.show.is_running_at(now + Duration::from_millis(100)));
    }

    #[test]
    fn resize_restarts_a_running_graph() {
        let (mut app, now) = graph_app();
        app.set_graph_size(40, 20, now);
        app.on_tick(now + Duration::from_millis(10));
        app.set_graph_size(60, 20, now + Duration::from_millis(15));
        assert_eq!(app.graph.as_ref().unwrap().width(), 60);
        assert!(app.driver.is_running());
        assert_eq!(app.driver.plotted(), 0);
    }

    #[test]
    fn poll_timeout_waits_for_the_next_batch() {
        let (mut app, now) = graph_app();
        assert_eq!(app.poll_timeout(now), Duration::from_millis(100));
        app.set_graph_size(40, 20, now);
        assert_eq!(app.poll_timeout(now), Duration::from_millis(10));
        assert_eq!(app.poll_timeout(now + Duration::from_millis(4)), Duration::from_millis(6));
        app.stop_current_work();
        assert_eq!(app.poll_timeout(now), Duration::from_millis(100));
    }
}
