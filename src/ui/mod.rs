//! User interface rendering.

mod layout;
mod raster_view;
mod theme;

use std::time::Instant;

use crate::app::{App, Mode};
use crate::curve::Curve;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub use layout::ScreenLayout;
pub use raster_view::RasterView;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App, now: Instant) {
    let colors = ThemeColors::from_theme(&app.theme);
    let layout = ScreenLayout::new(f.area());

    draw_settings(f, app, layout.settings, &colors);
    match app.mode {
        Mode::Show => draw_show(f, app, layout.main, &colors, now),
        Mode::Graph => draw_graph(f, app, layout.main, &colors),
    }
    draw_status(f, app, layout.status, &colors);
    draw_keymap(f, layout.keymap, &colors);
}

fn panel<'a>(title: String, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg))
}

fn draw_settings(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let radio = |mode: Mode| {
        let mark = if app.mode == mode { "(*)" } else { "( )" };
        Span::styled(
            format!("{} {}  ", mark, mode.name()),
            Style::default().fg(if app.mode == mode {
                colors.heading
            } else {
                colors.text
            }),
        )
    };

    let mut items = vec![
        ListItem::new(Line::from(vec![radio(Mode::Show), radio(Mode::Graph)])),
        ListItem::new(Line::from("")),
    ];
    items.extend(Curve::ALL.iter().map(|&curve| {
        let style = if curve == app.curve {
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        ListItem::new(Line::from(format!(" {}", curve.name()))).style(style)
    }));

    let list = List::new(items).block(panel(" Interpolator ".to_string(), colors));
    f.render_widget(list, area);
}

fn draw_show(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors, now: Instant) {
    let block = panel(format!(" Show - {} ", app.curve), colors);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = app.show.width_at(now, inner.width);
    let height = 3.min(inner.height);
    let bar = Rect::new(
        inner.x + (inner.width - width) / 2,
        inner.y + (inner.height - height) / 2,
        width,
        height,
    );

    let label = &app.config.show.label;
    let text = if label.width() <= usize::from(width) {
        label.as_str()
    } else {
        ""
    };
    let mut lines = vec![Line::from(""); usize::from(height / 2)];
    lines.push(Line::from(text));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.cursor_fg).bg(colors.accent));
    f.render_widget(paragraph, bar);
}

fn draw_graph(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let spinner = app
        .spinner()
        .map(|c| format!(" {}", c))
        .unwrap_or_default();
    let block = panel(format!(" Graph - {}{} ", app.curve, spinner), colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.graph {
        Some(ref graph) => f.render_widget(RasterView::new(graph.raster(), colors), inner),
        None => {
            let para = Paragraph::new("Window too small to graph")
                .style(Style::default().fg(colors.text))
                .alignment(Alignment::Center);
            f.render_widget(para, inner);
        },
    }
}

fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(app.status.as_str())
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));
    f.render_widget(paragraph, area);
}

fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let keymap_text = "q:quit | jk/↑↓:curve | Tab:mode | r:replay | y:copy | T:theme";
    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));
    f.render_widget(paragraph, area);
}
