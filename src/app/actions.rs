use super::state::ScrollGeometry;
use crate::gradient::{ColorStyle, GradientDescriptor, GradientType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,
    Resize,
    ToggleHelp,

    // Controls
    SetType(GradientType),
    SetStyle(ColorStyle),
    CycleType,
    CycleTypeBack,
    CycleStyle,
    CycleStyleBack,
    Refresh,

    // Grid
    Select(usize),
    Nav(Nav),
    Copy { index: usize, format: SnippetFormat },
}

/// Selection / scroll movement over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    WheelUp,
    WheelDown,
}

/// Transitions of the gradient list itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    SetType(GradientType),
    SetStyle(ColorStyle),
    Refresh,
    Scrolled(ScrollGeometry),
}

/// Which encoding of a descriptor goes to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetFormat {
    Css,
    Tailwind,
}

impl SnippetFormat {
    pub fn label(self) -> &'static str {
        match self {
            SnippetFormat::Css => "CSS",
            SnippetFormat::Tailwind => "Tailwind",
        }
    }

    pub fn pick(self, descriptor: &GradientDescriptor) -> &str {
        match self {
            SnippetFormat::Css => descriptor.css(),
            SnippetFormat::Tailwind => descriptor.tailwind(),
        }
    }
}
