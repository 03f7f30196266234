//! Header bar: title plus the Type / Style / Refresh controls.

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GAP: u16 = 2;

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let view = &state.view;
    let type_label = format!(" Type: {} {} ", view.gradient_type().label(), icons.dropdown);
    let style_label = format!(" Style: {} {} ", view.color_style().label(), icons.dropdown);
    let refresh_label = format!(" {} Refresh ", icons.refresh);

    let widths = [
        text_width(&type_label),
        text_width(&style_label),
        text_width(&refresh_label),
    ];
    let total: u16 = widths.iter().sum::<u16>() + GAP * 2;
    let mut x = inner.right().saturating_sub(total).max(inner.x);

    let mut slots = [Rect::default(); 3];
    for (slot, w) in slots.iter_mut().zip(widths) {
        *slot = Rect::new(x, inner.y, w, 1).intersection(inner);
        x = x.saturating_add(w + GAP);
    }

    let title = Line::from(vec![
        Span::raw(format!("{} ", icons.palette)),
        Span::styled(
            "Gradient Generator",
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" - {}", view.gradient_type().name()),
            Style::default().fg(theme.palette.accent),
        ),
    ]);
    let title_area = Rect::new(
        inner.x,
        inner.y,
        slots[0].x.saturating_sub(inner.x + 1),
        1,
    );
    frame.render_widget(Paragraph::new(title), title_area);

    let select_style = theme.button();
    let refresh_style = theme.primary_button();

    frame.render_widget(Paragraph::new(type_label).style(select_style), slots[0]);
    frame.render_widget(Paragraph::new(style_label).style(select_style), slots[1]);
    frame.render_widget(Paragraph::new(refresh_label).style(refresh_style), slots[2]);

    state.hitboxes.type_control = slots[0];
    state.hitboxes.style_control = slots[1];
    state.hitboxes.refresh = slots[2];
}

fn text_width(s: &str) -> u16 {
    u16::try_from(Span::raw(s).width()).unwrap_or(u16::MAX)
}
