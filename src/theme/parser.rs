//! Color value parsing for theme documents

use ratatui::style::Color;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error type for color parsing failures
#[derive(Debug, thiserror::Error)]
pub enum ColorParseError {
    #[error("Invalid hex color format: {0}")]
    InvalidHex(String),
    #[error("Unknown color name: {0}")]
    UnknownName(String),
    #[error("ANSI color index out of range: {0}")]
    InvalidIndex(String),
}

/// Parse a color from various string formats
///
/// Accepted forms are `#RRGGBB`, `#RGB`, an ANSI-256 index such as `"252"`,
/// and the named terminal colors.
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let input = input.trim();

    if input.starts_with('#') {
        return parse_hex_color(input);
    }

    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return parse_indexed_color(input);
    }

    parse_named_color(input)
}

/// Parse hex color in format #RRGGBB or #RGB
fn parse_hex_color(hex: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidHex(hex.to_string());
    let digits = hex.get(1..).ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
    match digits.len() {
        6 => Ok(Color::Rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        // #RGB expands each nibble, 17 = 255/15
        3 => Ok(Color::Rgb(
            channel(&digits[0..1])? * 17,
            channel(&digits[1..2])? * 17,
            channel(&digits[2..3])? * 17,
        )),
        _ => Err(invalid()),
    }
}

fn parse_indexed_color(index: &str) -> Result<Color, ColorParseError> {
    index
        .parse::<u8>()
        .map(Color::Indexed)
        .map_err(|_| ColorParseError::InvalidIndex(index.to_string()))
}

/// Parse named color (case-insensitive)
fn parse_named_color(name: &str) -> Result<Color, ColorParseError> {
    match name.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "white" => Ok(Color::White),
        "dark_gray" | "dark_grey" | "bright_black" => Ok(Color::DarkGray),
        "light_red" | "bright_red" => Ok(Color::LightRed),
        "light_green" | "bright_green" => Ok(Color::LightGreen),
        "light_yellow" | "bright_yellow" => Ok(Color::LightYellow),
        "light_blue" | "bright_blue" => Ok(Color::LightBlue),
        "light_magenta" | "bright_magenta" => Ok(Color::LightMagenta),
        "light_cyan" | "bright_cyan" => Ok(Color::LightCyan),
        "reset" => Ok(Color::Reset),
        _ => Err(ColorParseError::UnknownName(name.to_string())),
    }
}

/// Wrapper for Color that implements serde traits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializableColor(pub Color);

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        SerializableColor(color)
    }
}

impl From<SerializableColor> for Color {
    fn from(sc: SerializableColor) -> Self {
        sc.0
    }
}

impl<'de> Deserialize<'de> for SerializableColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse_color(&value)
            .map(SerializableColor)
            .map_err(|e| D::Error::custom(format!("Failed to parse color: {e}")))
    }
}

impl Serialize for SerializableColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Color::Rgb(r, g, b) => serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}")),
            Color::Indexed(i) => serializer.serialize_str(&i.to_string()),
            Color::Reset => serializer.serialize_str("reset"),
            Color::Black => serializer.serialize_str("black"),
            Color::Red => serializer.serialize_str("red"),
            Color::Green => serializer.serialize_str("green"),
            Color::Yellow => serializer.serialize_str("yellow"),
            Color::Blue => serializer.serialize_str("blue"),
            Color::Magenta => serializer.serialize_str("magenta"),
            Color::Cyan => serializer.serialize_str("cyan"),
            Color::Gray => serializer.serialize_str("gray"),
            Color::DarkGray => serializer.serialize_str("dark_gray"),
            Color::LightRed => serializer.serialize_str("light_red"),
            Color::LightGreen => serializer.serialize_str("light_green"),
            Color::LightYellow => serializer.serialize_str("light_yellow"),
            Color::LightBlue => serializer.serialize_str("light_blue"),
            Color::LightMagenta => serializer.serialize_str("light_magenta"),
            Color::LightCyan => serializer.serialize_str("light_cyan"),
            Color::White => serializer.serialize_str("white"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#ff0000").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#E8B4BC").unwrap(), Color::Rgb(232, 180, 188));
        assert_eq!(parse_color("#f00").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#00f").unwrap(), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_parse_indexed_colors() {
        assert_eq!(parse_color("252").unwrap(), Color::Indexed(252));
        assert_eq!(parse_color("0").unwrap(), Color::Indexed(0));
        assert!(matches!(
            parse_color("256"),
            Err(ColorParseError::InvalidIndex(_))
        ));
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("RED").unwrap(), Color::Red);
        assert_eq!(parse_color("bright_red").unwrap(), Color::LightRed);
        assert_eq!(parse_color("grey").unwrap(), Color::Gray);
    }

    #[test]
    fn test_invalid_colors() {
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("#ff00").is_err());
        assert!(parse_color("#é00").is_err());
        assert!(parse_color("invalid_color").is_err());
        assert!(parse_color("").is_err());
    }

    #[test]
    fn test_indexed_color_serializes_as_number_string() {
        let json = serde_json::to_string(&SerializableColor(Color::Indexed(39))).unwrap();
        assert_eq!(json, "\"39\"");
        let back: SerializableColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.0, Color::Indexed(39));
    }
}
