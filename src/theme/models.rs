//! Style configuration models
//!
//! These types mirror the JSON stylesheet format used by terminal markdown
//! renderers. Every field is optional so partial documents parse, and unknown
//! keys (syntax highlighter palettes, for instance) are ignored.

use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

use super::loader::ThemeError;
use super::parser::SerializableColor;

/// Inline styling shared by every element of a stylesheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePrimitive {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<SerializableColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<SerializableColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossed_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conceal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blink: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl StylePrimitive {
    /// Project this primitive onto a ratatui style.
    ///
    /// Prefixes, suffixes and format strings are layout concerns of the
    /// markdown renderer and have no ratatui equivalent.
    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(color) = self.color {
            style = style.fg(color.0);
        }
        if let Some(color) = self.background_color {
            style = style.bg(color.0);
        }

        let flags = [
            (self.bold, Modifier::BOLD),
            (self.italic, Modifier::ITALIC),
            (self.underline, Modifier::UNDERLINED),
            (self.crossed_out, Modifier::CROSSED_OUT),
            (self.faint, Modifier::DIM),
            (self.conceal, Modifier::HIDDEN),
            (self.inverse, Modifier::REVERSED),
            (self.blink, Modifier::SLOW_BLINK),
        ];
        for (enabled, modifier) in flags {
            match enabled {
                Some(true) => style = style.add_modifier(modifier),
                Some(false) => style = style.remove_modifier(modifier),
                None => {}
            }
        }
        style
    }
}

/// A block-level element: inline style plus indentation and margin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleBlock {
    #[serde(flatten)]
    pub style: StylePrimitive,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleList {
    #[serde(flatten)]
    pub block: StyleBlock,
    pub level_indent: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleCodeBlock {
    #[serde(flatten)]
    pub block: StyleBlock,
    /// Name of the syntax highlighting theme, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTask {
    #[serde(flatten)]
    pub style: StylePrimitive,
    pub ticked: String,
    pub unticked: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    #[serde(flatten)]
    pub block: StyleBlock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_separator: Option<String>,
}

/// Complete stylesheet consumed by the markdown renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub document: StyleBlock,
    pub block_quote: StyleBlock,
    pub paragraph: StyleBlock,
    pub list: StyleList,

    pub heading: StyleBlock,
    pub h1: StyleBlock,
    pub h2: StyleBlock,
    pub h3: StyleBlock,
    pub h4: StyleBlock,
    pub h5: StyleBlock,
    pub h6: StyleBlock,

    pub text: StylePrimitive,
    pub strikethrough: StylePrimitive,
    pub emph: StylePrimitive,
    pub strong: StylePrimitive,
    #[serde(rename = "hr")]
    pub horizontal_rule: StylePrimitive,

    pub item: StylePrimitive,
    pub enumeration: StylePrimitive,
    pub task: StyleTask,

    pub link: StylePrimitive,
    pub link_text: StylePrimitive,
    pub image: StylePrimitive,
    pub image_text: StylePrimitive,

    pub code: StyleBlock,
    pub code_block: StyleCodeBlock,
    pub table: StyleTable,

    pub definition_list: StyleBlock,
    pub definition_term: StylePrimitive,
    pub definition_description: StylePrimitive,

    pub html_block: StyleBlock,
    pub html_span: StyleBlock,
}

impl StyleConfig {
    /// Parse a stylesheet document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ThemeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Style for a heading of the given level, `heading` outside 1..=6.
    pub fn heading(&self, level: usize) -> &StyleBlock {
        match level {
            1 => &self.h1,
            2 => &self.h2,
            3 => &self.h3,
            4 => &self.h4,
            5 => &self.h5,
            6 => &self.h6,
            _ => &self.heading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_partial_document_uses_defaults() {
        let json = br##"{
            "document": { "color": "252", "margin": 2 },
            "h1": { "prefix": "# ", "bold": true },
            "code_block": { "margin": 2, "chroma": { "text": { "color": "#C4C4C4" } } }
        }"##;

        let config = StyleConfig::from_json(json).unwrap();
        assert_eq!(
            config.document.style.color,
            Some(SerializableColor(Color::Indexed(252)))
        );
        assert_eq!(config.document.margin, Some(2));
        assert_eq!(config.heading(1).style.prefix.as_deref(), Some("# "));
        assert_eq!(config.code_block.block.margin, Some(2));
        assert_eq!(config.paragraph, StyleBlock::default());
    }

    #[test]
    fn test_hr_key_maps_to_horizontal_rule() {
        let config = StyleConfig::from_json(br#"{ "hr": { "format": "\n---\n" } }"#).unwrap();
        assert_eq!(config.horizontal_rule.format.as_deref(), Some("\n---\n"));
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        assert!(matches!(
            StyleConfig::from_json(b"{ \"document\": "),
            Err(ThemeError::Parse(_))
        ));
        assert!(matches!(
            StyleConfig::from_json(br#"{ "text": { "color": "not-a-color" } }"#),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn test_heading_out_of_range_uses_generic_heading() {
        let config = StyleConfig {
            heading: StyleBlock {
                style: StylePrimitive {
                    bold: Some(true),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.heading(0).style.bold, Some(true));
        assert_eq!(config.heading(7).style.bold, Some(true));
        assert_eq!(config.heading(3).style.bold, None);
    }

    #[test]
    fn test_primitive_projects_to_ratatui_style() {
        let primitive = StylePrimitive {
            color: Some(SerializableColor(Color::Indexed(228))),
            background_color: Some(SerializableColor(Color::Indexed(63))),
            bold: Some(true),
            faint: Some(true),
            italic: Some(false),
            ..Default::default()
        };

        let style = primitive.style();
        assert_eq!(style.fg, Some(Color::Indexed(228)));
        assert_eq!(style.bg, Some(Color::Indexed(63)));
        assert!(style.add_modifier.contains(Modifier::BOLD | Modifier::DIM));
        assert!(style.sub_modifier.contains(Modifier::ITALIC));
    }
}
