//! Retained pixel buffer.

use std::fmt;

use ndarray::Array2;

/// Color class of a single raster pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pixel {
    /// Empty plot area.
    #[default]
    Background,
    /// Dashed reference line.
    Grid,
    /// Plotted sample.
    Trace,
}

impl Pixel {
    /// Character used for text output.
    pub fn symbol(self) -> char {
        match self {
            Pixel::Background => '.',
            Pixel::Grid => '-',
            Pixel::Trace => '*',
        }
    }
}

/// A `width x height` grid of pixels, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixels: Array2<Pixel>,
}

impl Raster {
    /// Allocate a raster filled with background.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), Pixel::Background),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Overwrite every pixel.
    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// Pixel at column `x`, row `y`. Out-of-bounds reads as background.
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.pixels.get((y, x)).copied().unwrap_or_default()
    }

    /// Set the pixel at column `x`, row `y`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        if let Some(p) = self.pixels.get_mut((y, x)) {
            *p = pixel;
        }
    }

    /// Number of pixels of the given kind.
    pub fn count(&self, pixel: Pixel) -> usize {
        self.pixels.iter().filter(|&&p| p == pixel).count()
    }

    /// Non-background pixels as `(column, row, pixel)`.
    pub fn lit(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        self.pixels
            .indexed_iter()
            .filter(|(_, p)| **p != Pixel::Background)
            .map(|((y, x), &p)| (x, y, p))
    }
}

impl fmt::Display for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels.rows() {
            let line: String = row.iter().map(|p| p.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
