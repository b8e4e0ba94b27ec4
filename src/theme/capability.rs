//! Terminal capability queries used by the fallback path

use std::env;

/// Read-only facts about the terminal the deck is shown on.
///
/// Implementations are queried every time a fallback theme is chosen, so a
/// change in the environment is picked up by the next resolution.
pub trait TerminalCapabilities {
    /// Whether the user asked for output without colors.
    fn color_disabled(&self) -> bool;
    /// Whether the terminal background is dark.
    fn has_dark_background(&self) -> bool;
}

/// Capabilities read from the process environment.
///
/// `NO_COLOR` and `CLICOLOR`/`CLICOLOR_FORCE` control colors, `COLORFGBG`
/// tells the background. A terminal that does not report its background is
/// assumed to be dark.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCapabilities;

impl TerminalCapabilities for EnvCapabilities {
    fn color_disabled(&self) -> bool {
        color_disabled_by(
            env::var("NO_COLOR").ok().as_deref(),
            env::var("CLICOLOR").ok().as_deref(),
            env::var("CLICOLOR_FORCE").ok().as_deref(),
        )
    }

    fn has_dark_background(&self) -> bool {
        env::var("COLORFGBG")
            .ok()
            .and_then(|value| dark_background_from_colorfgbg(&value))
            .unwrap_or(true)
    }
}

/// A fixed set of capabilities, for tests and command line overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySnapshot {
    pub color_disabled: bool,
    pub dark_background: bool,
}

impl CapabilitySnapshot {
    /// Take a snapshot of any capability source.
    pub fn capture(source: &impl TerminalCapabilities) -> Self {
        Self {
            color_disabled: source.color_disabled(),
            dark_background: source.has_dark_background(),
        }
    }
}

impl TerminalCapabilities for CapabilitySnapshot {
    fn color_disabled(&self) -> bool {
        self.color_disabled
    }

    fn has_dark_background(&self) -> bool {
        self.dark_background
    }
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn color_disabled_by(
    no_color: Option<&str>,
    clicolor: Option<&str>,
    clicolor_force: Option<&str>,
) -> bool {
    let forced = is_set(clicolor_force) && clicolor_force != Some("0");
    is_set(no_color) || (clicolor == Some("0") && !forced)
}

/// `COLORFGBG` is `fg;bg` (rxvt also emits `fg;default;bg`). ANSI colors
/// 0-6 and 8 are dark backgrounds.
fn dark_background_from_colorfgbg(value: &str) -> Option<bool> {
    let bg = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(bg < 7 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, None, false)]
    #[case(Some("1"), None, None, true)]
    #[case(Some(""), None, None, false)]
    #[case(None, Some("0"), None, true)]
    #[case(None, Some("0"), Some("1"), false)]
    #[case(None, Some("0"), Some("0"), true)]
    #[case(None, Some("1"), None, false)]
    #[case(Some("1"), Some("1"), Some("1"), true)]
    fn test_color_disabled_rules(
        #[case] no_color: Option<&str>,
        #[case] clicolor: Option<&str>,
        #[case] clicolor_force: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(
            color_disabled_by(no_color, clicolor, clicolor_force),
            expected
        );
    }

    #[rstest]
    #[case("15;0", Some(true))]
    #[case("0;15", Some(false))]
    #[case("0;7", Some(false))]
    #[case("15;8", Some(true))]
    #[case("15;default;0", Some(true))]
    #[case("default;default", None)]
    #[case("", None)]
    fn test_colorfgbg_background(#[case] value: &str, #[case] expected: Option<bool>) {
        assert_eq!(dark_background_from_colorfgbg(value), expected);
    }

    #[test]
    fn test_snapshot_reports_fixed_values() {
        let snapshot = CapabilitySnapshot {
            color_disabled: true,
            dark_background: false,
        };
        assert!(snapshot.color_disabled());
        assert!(!snapshot.has_dark_background());
        assert_eq!(CapabilitySnapshot::capture(&snapshot), snapshot);
    }
}
