//! Keybinding overlay.

use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const WIDTH: u16 = 64;
const HEIGHT: u16 = 19;

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let popup = centered(area, WIDTH, HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(format!(" {} Keybinds ", theme.icons.help))
        .title_style(Style::default().fg(theme.palette.accent))
        .style(Style::default().bg(theme.palette.bg_primary));

    frame.render_widget(Clear, popup);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left = vec![
        section_header("Gradients", &theme),
        keybind("t / T", "Next / previous type", &theme),
        keybind("1 2 3", "Linear, radial, conic", &theme),
        keybind("s / S", "Next / previous style", &theme),
        keybind("4 5 6", "Pastel, vivid, unique", &theme),
        keybind("r / F5", "Refresh", &theme),
        Line::default(),
        section_header("Copy", &theme),
        keybind("c / Enter", "Copy CSS", &theme),
        keybind("w / y", "Copy Tailwind", &theme),
        keybind("click", "Buttons on each tile", &theme),
    ];
    frame.render_widget(Paragraph::new(left), cols[0]);

    let right = vec![
        section_header("Navigation", &theme),
        keybind("h j k l", "Move selection", &theme),
        keybind("Ctrl+d / u", "Page down / up", &theme),
        keybind("g / G", "Top / bottom", &theme),
        keybind("wheel", "Scroll", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("?", "Toggle this help", &theme),
        keybind("q / Esc", "Quit", &theme),
    ];
    frame.render_widget(Paragraph::new(right), cols[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("── {title} ──"),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{key:11}"),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_small_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered(area, WIDTH, HEIGHT), area);

        let big = Rect::new(0, 0, 100, 40);
        let popup = centered(big, WIDTH, HEIGHT);
        assert_eq!(popup, Rect::new(18, 10, WIDTH, HEIGHT));
    }
}
