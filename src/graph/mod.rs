//! Graph surface: logical-to-pixel mapping and an accumulating trace.
//!
//! The surface owns a [`Raster`] sized to the drawing area. [`GraphSurface::reset`]
//! clears it and draws dashed reference lines; [`GraphSurface::add_point`] sets
//! one pixel per sample and never erases earlier samples. Rendering only copies
//! the raster out, so all drawing work happens in those two operations.

mod raster;

pub use raster::{Pixel, Raster};

use crate::config::GraphConfig;
use crate::error::{EaseplotError, Result};

/// Logical domain mapped onto the raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Left edge.
    pub x_min: f32,
    /// Right edge.
    pub x_max: f32,
    /// Bottom edge.
    pub y_min: f32,
    /// Top edge.
    pub y_max: f32,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: -1.5,
            y_max: 1.5,
        }
    }
}

impl AxisRange {
    /// Create a range, rejecting empty or inverted spans.
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Result<Self> {
        // Written so that NaN bounds fail too.
        if !(x_max > x_min) || !(y_max > y_min) {
            return Err(EaseplotError::invalid_domain(x_min, x_max, y_min, y_max));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Default x range with a vertical range of `[y_min, y_max]`.
    ///
    /// The plot is reflected about the row of logical zero, so only ranges
    /// with `y_min == -y_max` map the full range onto the raster.
    pub fn symmetric(y_min: f32, y_max: f32) -> Result<Self> {
        if y_min != -y_max {
            return Err(EaseplotError::asymmetric_range(y_min, y_max));
        }
        let x = Self::default();
        Self::new(x.x_min, x.x_max, y_min, y_max)
    }

    /// Width of the x range.
    pub fn x_span(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Height of the y range.
    pub fn y_span(&self) -> f32 {
        self.y_max - self.y_min
    }
}

/// Round half up, then clamp into `[0, len - 1]`.
fn to_pixel(v: f32, len: usize) -> usize {
    let rounded = (v + 0.5).floor();
    if rounded <= 0.0 {
        0
    } else {
        (rounded as usize).min(len.saturating_sub(1))
    }
}

/// A retained 2-D plot.
#[derive(Debug, Clone)]
pub struct GraphSurface {
    range: AxisRange,
    raster: Raster,
    grid_stride: usize,
    grid_levels: Vec<f32>,
    dirty: bool,
}

impl GraphSurface {
    /// Create a surface with the default domain and reference lines.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_config(width, height, &GraphConfig::default())
    }

    /// Create a surface from configuration.
    ///
    /// The raster is allocated here and starts out reset, so points may be
    /// added immediately.
    pub fn with_config(width: usize, height: usize, config: &GraphConfig) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EaseplotError::empty_surface(width, height));
        }
        let mut surface = Self {
            range: config.domain,
            raster: Raster::new(width, height),
            grid_stride: config.grid_stride.max(1),
            grid_levels: config.grid_levels.clone(),
            dirty: true,
        };
        surface.reset();
        Ok(surface)
    }

    /// Reallocate the raster for new dimensions and reset it.
    ///
    /// Does nothing when the dimensions are unchanged.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(EaseplotError::empty_surface(width, height));
        }
        if width != self.width() || height != self.height() {
            tracing::debug!(width, height, "Resizing graph raster");
            self.raster = Raster::new(width, height);
            self.reset();
        }
        Ok(())
    }

    /// Replace the logical domain. Takes effect on the next reset or point.
    ///
    /// Spans must be positive; use [`AxisRange::new`] to validate untrusted input.
    pub fn set_domain(&mut self, x_min: f32, x_max: f32, y_min: f32, y_max: f32) {
        debug_assert!(x_max > x_min && y_max > y_min, "empty domain");
        self.range = AxisRange {
            x_min,
            x_max,
            y_min,
            y_max,
        };
    }

    /// Current logical domain.
    pub fn domain(&self) -> AxisRange {
        self.range
    }

    /// Clear to background and draw the dashed reference lines.
    pub fn reset(&mut self) {
        self.raster.fill(Pixel::Background);
        let rows: Vec<usize> = self.grid_levels.iter().map(|&y| self.map_y(y)).collect();
        for x in (0..self.width()).step_by(self.grid_stride) {
            for &row in &rows {
                self.raster.set(x, row, Pixel::Grid);
            }
        }
        self.dirty = true;
    }

    /// Plot one sample. Earlier samples stay in place.
    pub fn add_point(&mut self, x: f32, y: f32) {
        let px = self.map_x(x);
        let py = self.map_y(y);
        self.raster.set(px, py, Pixel::Trace);
        self.dirty = true;
    }

    /// Map a logical x to a pixel column.
    pub fn map_x(&self, x: f32) -> usize {
        let width = self.width();
        let scaled = (x - self.range.x_min) / self.range.x_span() * width as f32;
        to_pixel(scaled, width)
    }

    /// Map a logical y to a pixel row.
    ///
    /// Row 0 is the top of the raster, so the scaled value is reflected about
    /// the row of logical zero.
    pub fn map_y(&self, y: f32) -> usize {
        let height = self.height();
        let span = self.range.y_span();
        let scaled = (y - self.range.y_min) / span * height as f32;
        let center = (0.0 - self.range.y_min) / span * height as f32;
        to_pixel(center + (center - scaled), height)
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.raster.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.raster.height()
    }

    /// The retained raster.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Whether anything changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(w: usize, h: usize) -> GraphSurface {
        GraphSurface::new(w, h).unwrap()
    }

    #[test]
    fn x_boundaries_hit_first_and_last_column() {
        let s = surface(100, 150);
        assert_eq!(s.map_x(0.0), 0);
        assert_eq!(s.map_x(1.0), 99);
        assert_eq!(s.map_x(0.5), 50);
    }

    #[test]
    fn x_mapping_is_monotonic_and_in_range() {
        let s = surface(37, 20);
        let mut last = 0;
        for i in 0..=1000 {
            let px = s.map_x(i as f32 / 1000.0);
            assert!(px >= last);
            assert!(px < 37);
            last = px;
        }
    }

    #[test]
    fn y_mapping_is_monotonic_decreasing_and_in_range() {
        let s = surface(10, 41);
        let mut last = usize::MAX;
        for i in 0..=1000 {
            let y = -1.5 + 3.0 * i as f32 / 1000.0;
            let py = s.map_y(y);
            assert!(py <= last);
            assert!(py < 41);
            last = py;
        }
    }

    #[test]
    fn symmetric_range_centers_zero() {
        let s = surface(100, 150);
        assert_eq!(s.map_y(0.0), 75);
        assert_eq!(s.map_y(1.0), 25);
        assert_eq!(s.map_y(-1.0), 125);
        assert_eq!(75 - s.map_y(1.0), s.map_y(-1.0) - 75);
    }

    #[test]
    fn out_of_range_points_are_pinned() {
        let s = surface(100, 150);
        assert_eq!(s.map_x(-3.0), 0);
        assert_eq!(s.map_x(7.0), 99);
        assert_eq!(s.map_y(9.0), 0);
        assert_eq!(s.map_y(-1.5), 149);
        assert_eq!(s.map_y(-9.0), 149);
    }

    #[test]
    fn reset_draws_dashed_reference_lines() {
        let s = surface(100, 150);
        let r = s.raster();
        for row in [25, 75, 125] {
            for x in 0..100 {
                let expected = if x % 10 == 0 { Pixel::Grid } else { Pixel::Background };
                assert_eq!(r.get(x, row), expected, "x={x} row={row}");
            }
        }
        assert_eq!(r.count(Pixel::Grid), 30);
        assert_eq!(r.count(Pixel::Trace), 0);
    }

    #[test]
    fn points_accumulate_until_reset() {
        let mut s = surface(100, 150);
        s.add_point(0.1, 0.5);
        s.add_point(0.9, -0.5);
        assert_eq!(s.raster().count(Pixel::Trace), 2);
        assert_eq!(s.raster().get(10, 50), Pixel::Trace);
        s.reset();
        assert_eq!(s.raster().count(Pixel::Trace), 0);
    }

    #[test]
    fn dirty_flag_tracks_changes() {
        let mut s = surface(10, 10);
        assert!(s.take_dirty());
        assert!(!s.take_dirty());
        s.add_point(0.5, 0.5);
        assert!(s.take_dirty());
    }

    #[test]
    fn set_domain_changes_mapping() {
        let mut s = surface(100, 100);
        s.set_domain(0.0, 2.0, -1.0, 1.0);
        assert_eq!(s.map_x(1.0), 50);
        assert_eq!(s.map_y(0.0), 50);
        assert_eq!(s.domain().y_max, 1.0);
    }

    #[test]
    fn resize_reallocates_and_clears() {
        let mut s = surface(10, 10);
        s.add_point(0.5, 0.5);
        s.resize(20, 30).unwrap();
        assert_eq!((s.width(), s.height()), (20, 30));
        assert_eq!(s.raster().count(Pixel::Trace), 0);
        assert!(s.resize(0, 30).is_err());
    }

    #[test]
    fn empty_surface_is_rejected() {
        assert!(matches!(
            GraphSurface::new(0, 10),
            Err(EaseplotError::EmptySurface { .. })
        ));
    }

    #[test]
    fn axis_range_validates_spans() {
        assert!(AxisRange::new(0.0, 1.0, -1.0, 1.0).is_ok());
        assert!(AxisRange::new(1.0, 1.0, -1.0, 1.0).is_err());
        assert!(AxisRange::new(0.0, 1.0, 2.0, -2.0).is_err());
        assert!(AxisRange::new(f32::NAN, 1.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn symmetric_range_rejects_offset_ranges() {
        let range = AxisRange::symmetric(-2.0, 2.0).unwrap();
        assert_eq!((range.x_min, range.x_max), (0.0, 1.0));
        assert!(matches!(
            AxisRange::symmetric(0.0, 2.0),
            Err(EaseplotError::AsymmetricRange { .. })
        ));
        assert!(AxisRange::symmetric(-0.5, 1.5).is_err());
        assert!(AxisRange::symmetric(1.0, -1.0).is_err());
        assert!(AxisRange::symmetric(0.0, 0.0).is_err());
    }

    #[test]
    fn symmetric_range_spans_the_full_height() {
        let mut s = surface(10, 100);
        let r = AxisRange::symmetric(-2.0, 2.0).unwrap();
        s.set_domain(r.x_min, r.x_max, r.y_min, r.y_max);
        let rows: Vec<usize> = [-2.0, -1.0, 0.0, 1.0, 2.0]
            .iter()
            .map(|&y| s.map_y(y))
            .collect();
        assert_eq!(rows, vec![99, 75, 50, 25, 0]);
    }
}
