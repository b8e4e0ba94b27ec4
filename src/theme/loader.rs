//! Theme resolution with fallback
//!
//! A theme identifier may come from untrusted document front matter, so
//! resolution never fails: any fetch, read or parse error is reported to a
//! [`Diagnostics`] sink and the capability-based fallback is used instead.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};

use super::capability::{EnvCapabilities, TerminalCapabilities};
use super::models::StyleConfig;
use super::presets::{default_theme, Preset};

/// Reasons a theme source could not be turned into a style configuration
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to fetch theme from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read theme file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed theme document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Receives the errors that made the resolver fall back.
pub trait Diagnostics {
    fn theme_fallback(&self, identifier: &str, error: &ThemeError);
}

/// Reports fallbacks as warnings through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn theme_fallback(&self, identifier: &str, error: &ThemeError) {
        warn!("Failed to load theme '{identifier}': {error}. Using default theme.");
    }
}

/// Where a theme identifier points to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource<'a> {
    Preset(Preset),
    Remote(&'a str),
    Local(&'a Path),
    Default,
}

impl<'a> ThemeSource<'a> {
    pub fn classify(identifier: &'a str) -> Self {
        if let Some(preset) = Preset::from_name(identifier) {
            return ThemeSource::Preset(preset);
        }
        if identifier.trim().is_empty() {
            return ThemeSource::Default;
        }
        if identifier.starts_with("http") {
            ThemeSource::Remote(identifier)
        } else {
            ThemeSource::Local(Path::new(identifier))
        }
    }
}

/// Turns theme identifiers into style configurations.
///
/// Each call performs at most one blocking HTTP request or one file read.
/// Nothing is cached: resolving the same location twice repeats the I/O.
#[derive(Debug, Clone, Default)]
pub struct ThemeResolver<C = EnvCapabilities, D = LogDiagnostics> {
    capabilities: C,
    diagnostics: D,
    http_timeout: Option<Duration>,
}

impl ThemeResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, D> ThemeResolver<C, D>
where
    C: TerminalCapabilities,
    D: Diagnostics,
{
    pub fn with_capabilities<T: TerminalCapabilities>(self, capabilities: T) -> ThemeResolver<T, D> {
        ThemeResolver {
            capabilities,
            diagnostics: self.diagnostics,
            http_timeout: self.http_timeout,
        }
    }

    pub fn with_diagnostics<T: Diagnostics>(self, diagnostics: T) -> ThemeResolver<C, T> {
        ThemeResolver {
            capabilities: self.capabilities,
            diagnostics,
            http_timeout: self.http_timeout,
        }
    }

    /// Bound remote fetches. Without a timeout a slow server blocks the caller.
    pub fn with_http_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Resolve a theme identifier. Always yields a usable configuration.
    pub fn resolve(&self, identifier: &str) -> StyleConfig {
        let source = ThemeSource::classify(identifier);
        match source {
            ThemeSource::Preset(preset) => {
                debug!("Using preset theme: {}", preset.name());
                preset.config()
            }
            ThemeSource::Default => self.fallback(),
            ThemeSource::Remote(url) => self.load_or_fallback(identifier, self.fetch(url)),
            ThemeSource::Local(path) => self.load_or_fallback(identifier, read_file(path)),
        }
    }

    /// The theme used when no identifier applies, chosen from the terminal
    /// capabilities at the time of the call.
    pub fn fallback(&self) -> StyleConfig {
        if self.capabilities.color_disabled() {
            debug!("Colors disabled, falling back to the notty preset");
            Preset::NoTty.config()
        } else if !self.capabilities.has_dark_background() {
            debug!("Light background, falling back to the light preset");
            Preset::Light.config()
        } else {
            debug!("Falling back to the bundled default theme");
            default_theme()
        }
    }

    fn load_or_fallback(
        &self,
        identifier: &str,
        bytes: Result<Vec<u8>, ThemeError>,
    ) -> StyleConfig {
        match bytes.and_then(|bytes| StyleConfig::from_json(&bytes)) {
            Ok(config) => {
                debug!("Loaded theme from: {identifier}");
                config
            }
            Err(e) => {
                self.diagnostics.theme_fallback(identifier, &e);
                self.fallback()
            }
        }
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, ThemeError> {
        let fetch_error = |source: reqwest::Error| ThemeError::Fetch {
            url: url.to_string(),
            source,
        };

        debug!("Fetching theme from: {url}");
        let client = reqwest::blocking::Client::builder()
            .timeout(self.http_timeout)
            .build()
            .map_err(fetch_error)?;
        let response = client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(fetch_error)?;
        let body = response.bytes().map_err(fetch_error)?;
        Ok(body.to_vec())
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, ThemeError> {
    debug!("Loading theme from: {}", path.display());
    fs::read(path).map_err(|source| ThemeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve a theme against the environment, logging any fallback.
pub fn resolve(identifier: &str) -> StyleConfig {
    ThemeResolver::new().resolve(identifier)
}
