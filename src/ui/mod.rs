//! Composition of rendered text blocks into screen regions

pub mod join;
pub mod measure;
pub mod status;
pub mod style;

pub use join::{join_horizontal, join_vertical};
pub use measure::{display_height, display_width};
pub use status::{compose_screen, StatusBar};
pub use style::BlockStyle;
