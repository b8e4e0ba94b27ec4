//! Themes and status-bar composition for terminal slide decks
//!
//! [`theme`] resolves a theme identifier from a deck's front matter into a
//! [`StyleConfig`] and never fails: unusable sources fall back to a theme
//! chosen from the terminal's capabilities. [`ui`] joins rendered blocks
//! into screen regions, measuring them in terminal columns.

pub mod config;
pub mod logger;
pub mod theme;
pub mod ui;

pub use theme::{resolve, StyleConfig, ThemeResolver};
pub use ui::{join_horizontal, join_vertical};
