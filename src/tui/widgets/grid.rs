//! Responsive grid of gradient tiles with copy buttons.

use crate::app::state::{AppState, GridMetrics, TileHitbox};
use crate::config::Config;
use crate::gradient::GradientDescriptor;
use crate::tui::theme::{get_theme, BorderStyle, Theme};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::swatch::Swatch;

/// Breakpoints in terminal columns, roughly sm / md / lg.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..48 => 1,
        48..96 => 2,
        96..144 => 3,
        _ => 4,
    }
}

pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState, area: Rect) {
    let theme = get_theme();

    state.grid = GridMetrics {
        columns: columns_for_width(area.width),
        tile_height: cfg.ui.effective_tile_height(),
        viewport_rows: area.height,
    };
    state.clamp_scroll();
    state.hitboxes.tiles.clear();

    let items = state.view.items();
    if items.is_empty() {
        let empty = Paragraph::new("Nothing generated yet. Press r to refresh.")
            .style(theme.muted());
        frame.render_widget(empty, area);
        return;
    }

    let cols = state.grid.columns;
    let tile_height = state.grid.tile_height;
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols])
        .spacing(1)
        .split(Rect::new(area.x, area.y, area.width, 1));

    let mut hitboxes = Vec::new();
    let mut y = area.y;
    let mut row = state.top_row;
    // A clipped bottom row is still drawn when the border and one pixel row fit.
    while y + 3 <= area.bottom() {
        let height = tile_height.min(area.bottom() - y);
        for (c, col) in columns.iter().enumerate() {
            let index = row * cols + c;
            let Some(descriptor) = items.get(index) else {
                break;
            };
            let tile = Rect::new(col.x, y, col.width, height);
            hitboxes.push(render_tile(
                frame,
                &theme,
                descriptor,
                index,
                index == state.selected,
                tile,
            ));
        }
        if (row + 1) * cols >= items.len() {
            break;
        }
        row += 1;
        y += tile_height;
    }

    state.hitboxes.tiles = hitboxes;
}

fn render_tile(
    frame: &mut Frame,
    theme: &Theme,
    descriptor: &GradientDescriptor,
    index: usize,
    selected: bool,
    area: Rect,
) -> TileHitbox {
    let icons = &theme.icons;
    let (border_set, border_color) = if selected {
        (BorderStyle::selected_set(), theme.palette.accent)
    } else {
        (theme.border_set(), theme.palette.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", index + 1))
        .title_style(theme.muted());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Swatch::new(descriptor.gradient()), inner);

    let mut hitbox = TileHitbox {
        index,
        area,
        css: Rect::default(),
        tailwind: Rect::default(),
    };
    if inner.height == 0 {
        return hitbox;
    }

    let mut css_label = format!(" {} CSS ", icons.copy);
    let mut tw_label = format!(" {} Tailwind ", icons.copy);
    if label_width(&css_label) + label_width(&tw_label) + 3 > inner.width {
        css_label = " CSS ".into();
        tw_label = " TW ".into();
    }
    let (css_w, tw_w) = (label_width(&css_label), label_width(&tw_label));

    // Bottom-right corner of the swatch, like the web cards.
    let row = inner.bottom() - 1;
    let tw_x = inner.right().saturating_sub(tw_w + 1).max(inner.x);
    let css_x = tw_x.saturating_sub(css_w + 1).max(inner.x);
    hitbox.tailwind = Rect::new(tw_x, row, tw_w, 1).intersection(inner);
    hitbox.css = Rect::new(css_x, row, css_w, 1).intersection(inner);

    let button = theme.button().add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(css_label).style(button), hitbox.css);
    frame.render_widget(Paragraph::new(tw_label).style(button), hitbox.tailwind);

    hitbox
}

fn label_width(s: &str) -> u16 {
    u16::try_from(Span::raw(s).width()).unwrap_or(u16::MAX)
}
