//! Border sets for cards and overlays.

use ratatui::symbols::border;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderStyle;

impl BorderStyle {
    /// Rounded corners for tiles, header and overlays.
    pub fn to_border_set() -> border::Set<'static> {
        border::ROUNDED
    }

    /// Heavier outline marking the selected tile.
    pub fn selected_set() -> border::Set<'static> {
        border::THICK
    }
}
