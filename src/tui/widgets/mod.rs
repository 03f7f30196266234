pub mod controls;
pub mod grid;
pub mod help;
pub mod root;
pub mod swatch;
