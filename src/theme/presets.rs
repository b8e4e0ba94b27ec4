//! Built-in stylesheets
//!
//! Four named presets need no I/O at all. The embedded default is bundled at
//! build time from `themes/theme.json` and parsed once per process.

use std::sync::OnceLock;

use log::error;
use ratatui::style::Color;

use super::models::{
    StyleBlock, StyleCodeBlock, StyleConfig, StyleList, StylePrimitive, StyleTable, StyleTask,
};
use super::parser::SerializableColor;

const DEFAULT_THEME_JSON: &str = include_str!("../../themes/theme.json");

/// Named presets selectable from a theme identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Ascii,
    Light,
    Dark,
    NoTty,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Ascii, Preset::Light, Preset::Dark, Preset::NoTty];

    /// Exact, case-sensitive match on a preset keyword.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ascii" => Some(Preset::Ascii),
            "light" => Some(Preset::Light),
            "dark" => Some(Preset::Dark),
            "notty" => Some(Preset::NoTty),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Ascii => "ascii",
            Preset::Light => "light",
            Preset::Dark => "dark",
            Preset::NoTty => "notty",
        }
    }

    pub fn config(self) -> StyleConfig {
        match self {
            Preset::Ascii => ascii(),
            Preset::Light => light(),
            Preset::Dark => dark(),
            Preset::NoTty => notty(),
        }
    }
}

/// The bundled default stylesheet.
///
/// The bundled document is covered by tests; should it ever fail to parse,
/// the dark preset stands in so resolution stays total.
pub fn default_theme() -> StyleConfig {
    static DEFAULT: OnceLock<StyleConfig> = OnceLock::new();
    DEFAULT
        .get_or_init(|| {
            StyleConfig::from_json(DEFAULT_THEME_JSON.as_bytes()).unwrap_or_else(|e| {
                error!("Bundled default theme is invalid: {e}. Using the dark preset.");
                dark()
            })
        })
        .clone()
}

fn indexed(index: u8) -> Option<SerializableColor> {
    Some(SerializableColor(Color::Indexed(index)))
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn prefixed(prefix: &str) -> StyleBlock {
    StyleBlock {
        style: StylePrimitive {
            prefix: text(prefix),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn block_prefixed(prefix: &str) -> StylePrimitive {
    StylePrimitive {
        block_prefix: text(prefix),
        ..Default::default()
    }
}

fn wrapped(marker: &str) -> StylePrimitive {
    StylePrimitive {
        block_prefix: text(marker),
        block_suffix: text(marker),
        ..Default::default()
    }
}

/// Plain-text stylesheet using only ASCII markers.
pub fn ascii() -> StyleConfig {
    StyleConfig {
        document: StyleBlock {
            style: StylePrimitive {
                block_prefix: text("\n"),
                block_suffix: text("\n"),
                ..Default::default()
            },
            margin: Some(2),
            ..Default::default()
        },
        block_quote: StyleBlock {
            indent: Some(1),
            indent_token: text("| "),
            ..Default::default()
        },
        list: StyleList {
            level_indent: 4,
            ..Default::default()
        },
        heading: StyleBlock {
            style: StylePrimitive {
                block_suffix: text("\n"),
                ..Default::default()
            },
            ..Default::default()
        },
        h1: prefixed("# "),
        h2: prefixed("## "),
        h3: prefixed("### "),
        h4: prefixed("#### "),
        h5: prefixed("##### "),
        h6: prefixed("###### "),
        strikethrough: wrapped("~~"),
        emph: wrapped("*"),
        strong: wrapped("**"),
        horizontal_rule: StylePrimitive {
            format: text("\n--------\n"),
            ..Default::default()
        },
        item: block_prefixed("* "),
        enumeration: block_prefixed(". "),
        task: StyleTask {
            ticked: "[x] ".to_string(),
            unticked: "[ ] ".to_string(),
            ..Default::default()
        },
        image_text: StylePrimitive {
            format: text("Image: {{.text}} ->"),
            ..Default::default()
        },
        code: StyleBlock {
            style: wrapped("`"),
            ..Default::default()
        },
        code_block: StyleCodeBlock {
            block: StyleBlock {
                margin: Some(2),
                ..Default::default()
            },
            ..Default::default()
        },
        table: StyleTable {
            center_separator: text("|"),
            column_separator: text("|"),
            row_separator: text("-"),
            ..Default::default()
        },
        definition_description: block_prefixed("\n* "),
        ..Default::default()
    }
}

/// Stylesheet for output that is not a terminal: ASCII layout with unicode
/// bullets and no colors.
pub fn notty() -> StyleConfig {
    StyleConfig {
        block_quote: StyleBlock {
            indent: Some(1),
            indent_token: text("│ "),
            ..Default::default()
        },
        item: block_prefixed("• "),
        task: StyleTask {
            ticked: "[✓] ".to_string(),
            unticked: "[ ] ".to_string(),
            ..Default::default()
        },
        image_text: StylePrimitive {
            format: text("Image: {{.text}} →"),
            ..Default::default()
        },
        definition_description: block_prefixed("\n🠶 "),
        ..ascii()
    }
}

/// Palette differences between the dark and light color stylesheets.
struct Palette {
    document: u8,
    heading: u8,
    rule: u8,
    link: u8,
    link_text: u8,
    image: u8,
    code_background: u8,
    code_block: u8,
}

fn colored(palette: &Palette) -> StyleConfig {
    StyleConfig {
        document: StyleBlock {
            style: StylePrimitive {
                block_prefix: text("\n"),
                block_suffix: text("\n"),
                color: indexed(palette.document),
                ..Default::default()
            },
            margin: Some(2),
            ..Default::default()
        },
        block_quote: StyleBlock {
            indent: Some(1),
            indent_token: text("│ "),
            ..Default::default()
        },
        list: StyleList {
            level_indent: 2,
            ..Default::default()
        },
        heading: StyleBlock {
            style: StylePrimitive {
                block_suffix: text("\n"),
                color: indexed(palette.heading),
                bold: Some(true),
                ..Default::default()
            },
            ..Default::default()
        },
        h1: StyleBlock {
            style: StylePrimitive {
                prefix: text(" "),
                suffix: text(" "),
                color: indexed(228),
                background_color: indexed(63),
                bold: Some(true),
                ..Default::default()
            },
            ..Default::default()
        },
        h2: prefixed("## "),
        h3: prefixed("### "),
        h4: prefixed("#### "),
        h5: prefixed("##### "),
        h6: StyleBlock {
            style: StylePrimitive {
                prefix: text("###### "),
                color: indexed(35),
                bold: Some(false),
                ..Default::default()
            },
            ..Default::default()
        },
        strikethrough: StylePrimitive {
            crossed_out: Some(true),
            ..Default::default()
        },
        emph: StylePrimitive {
            italic: Some(true),
            ..Default::default()
        },
        strong: StylePrimitive {
            bold: Some(true),
            ..Default::default()
        },
        horizontal_rule: StylePrimitive {
            color: indexed(palette.rule),
            format: text("\n--------\n"),
            ..Default::default()
        },
        item: block_prefixed("• "),
        enumeration: block_prefixed(". "),
        task: StyleTask {
            ticked: "[✓] ".to_string(),
            unticked: "[ ] ".to_string(),
            ..Default::default()
        },
        link: StylePrimitive {
            color: indexed(palette.link),
            underline: Some(true),
            ..Default::default()
        },
        link_text: StylePrimitive {
            color: indexed(palette.link_text),
            bold: Some(true),
            ..Default::default()
        },
        image: StylePrimitive {
            color: indexed(palette.image),
            underline: Some(true),
            ..Default::default()
        },
        image_text: StylePrimitive {
            color: indexed(243),
            format: text("Image: {{.text}} →"),
            ..Default::default()
        },
        code: StyleBlock {
            style: StylePrimitive {
                prefix: text(" "),
                suffix: text(" "),
                color: indexed(203),
                background_color: indexed(palette.code_background),
                ..Default::default()
            },
            ..Default::default()
        },
        code_block: StyleCodeBlock {
            block: StyleBlock {
                style: StylePrimitive {
                    color: indexed(palette.code_block),
                    ..Default::default()
                },
                margin: Some(2),
                ..Default::default()
            },
            ..Default::default()
        },
        definition_description: block_prefixed("\n🠶 "),
        ..Default::default()
    }
}

pub fn dark() -> StyleConfig {
    colored(&Palette {
        document: 252,
        heading: 39,
        rule: 240,
        link: 30,
        link_text: 35,
        image: 212,
        code_background: 236,
        code_block: 244,
    })
}

pub fn light() -> StyleConfig {
    colored(&Palette {
        document: 234,
        heading: 27,
        rule: 249,
        link: 36,
        link_text: 29,
        image: 205,
        code_background: 254,
        code_block: 242,
    })
}
