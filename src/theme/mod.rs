//! Theme: palette and global stylesheet.

mod colors;
mod styles;

pub use styles::global_styles;
