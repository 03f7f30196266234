//! Chrome styling. The swatches bring their own colors, so the rest of the
//! UI stays neutral.

pub mod borders;
pub mod icons;
pub mod palette;

pub use borders::BorderStyle;
pub use icons::Icons;
pub use palette::Palette;

use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;

#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            palette: Palette::NEUTRAL,
            icons: Icons::unicode(),
        }
    }

    pub fn border_set(&self) -> border::Set<'static> {
        BorderStyle::to_border_set()
    }

    /// Dark pill used for the selects and the copy buttons.
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.palette.fg_primary)
            .bg(self.palette.bg_button)
    }

    /// Filled call-to-action, like the Refresh button.
    pub fn primary_button(&self) -> Style {
        Style::default()
            .fg(self.palette.fg_primary)
            .bg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.palette.fg_secondary)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_theme() -> Theme {
    Theme::new()
}
