//! Blits a retained raster into the terminal buffer.
//!
//! Each cell holds two pixel rows: the upper half block is drawn in the top
//! pixel's color on a background of the bottom pixel's color.

use super::ThemeColors;
use crate::graph::Raster;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

const UPPER_HALF: &str = "▀";

/// Widget copying a [`Raster`] unmodified to the screen.
#[derive(Debug)]
pub struct RasterView<'a> {
    raster: &'a Raster,
    colors: &'a ThemeColors,
}

impl<'a> RasterView<'a> {
    /// Create a view over a raster.
    pub fn new(raster: &'a Raster, colors: &'a ThemeColors) -> Self {
        Self { raster, colors }
    }
}

impl Widget for RasterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = area.width.min(self.raster.width() as u16);
        let rows = area.height.min(self.raster.height().div_ceil(2) as u16);

        for cy in 0..rows {
            for cx in 0..cols {
                let x = usize::from(cx);
                let top = self.raster.get(x, usize::from(cy) * 2);
                let bottom = self.raster.get(x, usize::from(cy) * 2 + 1);
                let style = Style::default()
                    .fg(self.colors.pixel(top))
                    .bg(self.colors.pixel(bottom));
                if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                    cell.set_symbol(UPPER_HALF).set_style(style);
                }
            }
        }
    }
}
