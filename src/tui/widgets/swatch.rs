//! Paints a gradient into a rect of half-block cells.

use crate::gradient::{Gradient, Rgb};
use crate::tui::theme::get_theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Each cell holds two vertical pixels: the glyph's foreground is the top
/// one, the background the bottom one.
pub struct Swatch<'a> {
    gradient: &'a Gradient,
}

impl<'a> Swatch<'a> {
    pub fn new(gradient: &'a Gradient) -> Self {
        Self { gradient }
    }
}

impl Widget for Swatch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let glyph = get_theme().icons.half_block;
        let width = f64::from(area.width);
        let height = f64::from(area.height) * 2.0;

        for row in 0..area.height {
            let y = f64::from(row) * 2.0;
            for col in 0..area.width {
                let x = f64::from(col);
                let top = self.gradient.color_at(x, y, width, height);
                let bottom = self.gradient.color_at(x, y + 1.0, width, height);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(glyph).set_fg(to_color(top)).set_bg(to_color(bottom));
                }
            }
        }
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::color::Hsl;

    #[test]
    fn test_fills_every_cell() {
        let gradient = Gradient::Radial {
            from: Hsl::new(0, 100.0, 50.0),
            to: Hsl::new(240, 100.0, 50.0),
        };
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        Swatch::new(&gradient).render(area, &mut buf);

        for y in 0..3 {
            for x in 0..6 {
                let cell = &buf[(x, y)];
                assert_eq!(cell.symbol(), "▀");
                assert!(matches!(cell.fg, Color::Rgb(..)));
                assert!(matches!(cell.bg, Color::Rgb(..)));
            }
        }
    }

    #[test]
    fn test_linear_left_edge_matches_start_color() {
        let from = Hsl::new(0, 100.0, 50.0);
        let gradient = Gradient::Linear {
            angle: 90,
            from,
            to: Hsl::new(240, 100.0, 50.0),
        };
        let area = Rect::new(2, 1, 40, 2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 5));
        Swatch::new(&gradient).render(area, &mut buf);

        let Color::Rgb(r, _, b) = buf[(2, 1)].fg else {
            panic!("expected an rgb color");
        };
        assert!(r > 240 && b < 15);
        // outside the area stays untouched
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
