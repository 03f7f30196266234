//! Glyphs used by the header, tiles and toasts. Plain Unicode, no Nerd Font
//! required.

#[derive(Debug, Clone)]
pub struct Icons {
    pub palette: &'static str,
    pub copy: &'static str,
    pub refresh: &'static str,
    pub dropdown: &'static str,
    pub help: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub separator: &'static str,
    /// Upper half block; fg paints the top pixel, bg the bottom one.
    pub half_block: char,
}

impl Icons {
    pub const fn unicode() -> Self {
        Self {
            palette: "🎨",
            copy: "⧉",
            refresh: "⟳",
            dropdown: "▾",
            help: "?",
            success: "✓",
            error: "✗",
            separator: "·",
            half_block: '▀',
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::unicode()
    }
}
