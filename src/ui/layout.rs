//! Screen layout shared by drawing and graph sizing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the settings panel in cells.
const SETTINGS_WIDTH: u16 = 28;

/// Areas of the main screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    /// Mode and curve selection.
    pub settings: Rect,
    /// Show animation or graph, including its border.
    pub main: Rect,
    /// Status bar.
    pub status: Rect,
    /// Key map bar.
    pub keymap: Rect,
}

impl ScreenLayout {
    /// Split the terminal area.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SETTINGS_WIDTH), Constraint::Min(1)])
            .split(rows[0]);

        Self {
            settings: content[0],
            main: content[1],
            status: rows[1],
            keymap: rows[2],
        }
    }

    /// Inside of the main panel border.
    pub fn main_inner(&self) -> Rect {
        let m = self.main;
        Rect::new(
            m.x.saturating_add(1),
            m.y.saturating_add(1),
            m.width.saturating_sub(2),
            m.height.saturating_sub(2),
        )
    }

    /// Graph raster size in pixels: one column per cell, two rows per cell.
    pub fn graph_pixels(&self) -> (usize, usize) {
        let inner = self.main_inner();
        (usize::from(inner.width), usize::from(inner.height) * 2)
    }
}
