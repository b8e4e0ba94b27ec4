//! Theme resolution for slide decks
//!
//! A theme identifier is either a preset name, an `http` URL, a local path,
//! or empty. [`resolve`] turns any of these into a [`StyleConfig`] for the
//! markdown renderer, falling back on terminal capabilities when the named
//! source cannot be used.

pub mod capability;
pub mod loader;
pub mod models;
pub mod parser;
pub mod presets;


pub use capability::{CapabilitySnapshot, EnvCapabilities, TerminalCapabilities};
pub use loader::{resolve, Diagnostics, LogDiagnostics, ThemeError, ThemeResolver, ThemeSource};
pub use models::StyleConfig;
pub use presets::{default_theme, Preset};
