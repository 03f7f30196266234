//! Root layout widget - header, grid, status bar and overlays

use crate::app::state::{AppState, Toast, ToastKind};
use crate::config::Config;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{controls, grid, help};

/// ┌──────────────────────────────────────────────┐
/// │ 🎨 Gradient Generator   Type ▾ Style ▾ ⟳     │
/// ├──────────────────────────────────────────────┤
/// │  ┌ 1 ┐  ┌ 2 ┐  ┌ 3 ┐                         │
/// │  │▀▀▀│  │▀▀▀│  │▀▀▀│      grid               │
/// │  └───┘  └───┘  └───┘                         │
/// ├──────────────────────────────────────────────┤
/// │ hints                          n gradients   │
/// └──────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState) {
    let root = frame.area();

    let rows = Layout::vertical([
        Constraint::Length(3), // Header with controls
        Constraint::Min(3),    // Grid
        Constraint::Length(1), // Status bar
    ])
    .split(root);

    controls::render(frame, state, rows[0]);
    grid::render(frame, cfg, state, rows[1]);
    render_status(frame, state, rows[2]);

    if let Some(toast) = &state.toast {
        render_toast(frame, toast, root);
    }
    if state.show_help {
        help::render(frame, root);
    }
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let sep = theme.icons.separator;
    let dim = theme.muted();
    let key = Style::default().fg(theme.palette.accent_alt);

    let hints = Line::from(vec![
        Span::styled(" t", key),
        Span::styled(" type ", dim),
        Span::styled(sep, dim),
        Span::styled(" s", key),
        Span::styled(" style ", dim),
        Span::styled(sep, dim),
        Span::styled(" r", key),
        Span::styled(" refresh ", dim),
        Span::styled(sep, dim),
        Span::styled(" c/w", key),
        Span::styled(" copy ", dim),
        Span::styled(sep, dim),
        Span::styled(" ?", key),
        Span::styled(" help", dim),
    ]);
    frame.render_widget(Paragraph::new(hints), area);

    let len = state.view.items().len();
    let total_rows = state.grid.tile_rows(len).max(1);
    let summary = format!(
        "{len} gradients {sep} row {}/{total_rows} ",
        (state.top_row + 1).min(total_rows)
    );
    frame.render_widget(
        Paragraph::new(summary).style(dim).alignment(Alignment::Right),
        area,
    );
}

fn render_toast(frame: &mut Frame, toast: &Toast, root: Rect) {
    let theme = get_theme();
    let (icon, color) = match toast.kind {
        ToastKind::Success => (theme.icons.success, theme.palette.success),
        ToastKind::Error => (theme.icons.error, theme.palette.error),
    };

    let text = format!(" {icon} {} ", toast.message);
    let width = (Span::raw(&text).width() as u16 + 2).min(root.width);
    let area = Rect::new(root.x + (root.width - width) / 2, root.y + 1, width, 3).intersection(root);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.palette.bg_primary));
    let body = Paragraph::new(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(body, area);
}
