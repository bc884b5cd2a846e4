//! Color themes for the UI.

use crate::app::Theme;
use crate::graph::Pixel;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Plot background.
    pub plot_bg: Color,
    /// Reference line dashes.
    pub grid: Color,
    /// Plotted samples.
    pub trace: Color,
    /// Animated box fill.
    pub accent: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                plot_bg: Color::Rgb(0, 0, 0),
                grid: Color::Rgb(189, 174, 147),
                trace: Color::Rgb(184, 187, 38),
                accent: Color::Rgb(131, 165, 152),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                plot_bg: Color::Rgb(249, 245, 215),
                grid: Color::Rgb(124, 111, 100),
                trace: Color::Rgb(121, 116, 14),
                accent: Color::Rgb(7, 102, 120),
            },
        }
    }

    /// Color for a raster pixel.
    pub fn pixel(&self, pixel: Pixel) -> Color {
        match pixel {
            Pixel::Background => self.plot_bg,
            Pixel::Grid => self.grid,
            Pixel::Trace => self.trace,
        }
    }
}
