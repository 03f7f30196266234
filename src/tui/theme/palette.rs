//! Color palette for the chrome around the swatches.

use ratatui::style::Color;

/// Neutral palette; the gradients carry all the color.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_button: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub const NEUTRAL: Self = Self {
        bg_primary: Color::Rgb(18, 18, 18),      // #121212 near black
        bg_button: Color::Rgb(40, 40, 40),       // #282828 translucent-black stand-in
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff white
        fg_secondary: Color::Rgb(136, 136, 136), // #888888 medium gray
        accent: Color::Rgb(244, 63, 94),         // #f43f5e rose
        accent_alt: Color::Rgb(236, 72, 153),    // #ec4899 pink
        border: Color::Rgb(64, 64, 64),          // #404040 dark gray
        success: Color::Rgb(74, 222, 128),       // #4ade80 green
        error: Color::Rgb(248, 113, 113),        // #f87171 red
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
