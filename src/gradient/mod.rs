//! Gradient generation - color sampling, gradient shapes and the CSS /
//! Tailwind encodings handed to the clipboard.
//!
//! Nothing in here touches the terminal. Randomness always comes in through
//! a `&mut impl Rng` so a seeded generator reproduces a batch exactly.

pub mod builder;
pub mod color;
pub mod shape;

pub use builder::{GradientDescriptor, PAGE_SIZE, build_many, build_page};
pub use color::{ColorStyle, Rgb};
pub use shape::{Gradient, GradientType};

/// Returned when a type or style name does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?} (expected one of: {expected})")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
