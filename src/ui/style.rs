//! Fixed styles for the small blocks drawn around a slide

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};
use ratatui::layout::Alignment;
use ratatui::style::Color;

use super::measure::display_width;

/// Accent used for the author and page blocks.
pub const SALMON: Color = Color::Rgb(0xE8, 0xB4, 0xBC);

/// Space around a block, in columns and lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    pub const fn uniform(n: usize) -> Self {
        Self::symmetric(n, n)
    }

    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub const fn left(n: usize) -> Self {
        Self {
            top: 0,
            right: 0,
            bottom: 0,
            left: n,
        }
    }

    pub const fn right(n: usize) -> Self {
        Self {
            top: 0,
            right: n,
            bottom: 0,
            left: 0,
        }
    }

    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }
}

/// How a piece of text is drawn as a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStyle {
    pub foreground: Option<Color>,
    pub faint: bool,
    pub alignment: Alignment,
    pub padding: Spacing,
    pub margin: Spacing,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            foreground: None,
            faint: false,
            alignment: Alignment::Left,
            padding: Spacing::default(),
            margin: Spacing::default(),
        }
    }
}

pub fn author() -> BlockStyle {
    BlockStyle {
        foreground: Some(SALMON),
        margin: Spacing::left(2),
        ..Default::default()
    }
}

pub fn date() -> BlockStyle {
    BlockStyle {
        faint: true,
        margin: Spacing::symmetric(0, 1),
        ..Default::default()
    }
}

pub fn page() -> BlockStyle {
    BlockStyle {
        foreground: Some(SALMON),
        alignment: Alignment::Right,
        margin: Spacing::right(3),
        ..Default::default()
    }
}

pub fn slide() -> BlockStyle {
    BlockStyle {
        padding: Spacing::uniform(1),
        ..Default::default()
    }
}

pub fn status() -> BlockStyle {
    BlockStyle {
        padding: Spacing::uniform(1),
        ..Default::default()
    }
}

pub fn search() -> BlockStyle {
    BlockStyle {
        faint: true,
        margin: Spacing::left(2),
        ..Default::default()
    }
}

impl BlockStyle {
    /// Render `text` as a block.
    ///
    /// Lines are aligned against the widest line, then padded, styled and
    /// surrounded by the margin. Escape sequences are only written when
    /// `color` is set, and never span a line break.
    pub fn render(&self, text: &str, color: bool) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let widest = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);

        let inner_width = widest + self.padding.horizontal();
        let mut body: Vec<String> = Vec::with_capacity(lines.len() + 2);
        body.extend((0..self.padding.top).map(|_| " ".repeat(inner_width)));
        for line in &lines {
            let aligned = self.align(line, widest);
            body.push(format!(
                "{}{aligned}{}",
                " ".repeat(self.padding.left),
                " ".repeat(self.padding.right)
            ));
        }
        body.extend((0..self.padding.bottom).map(|_| " ".repeat(inner_width)));

        let outer_width = inner_width + self.margin.horizontal();
        let mut out: Vec<String> = Vec::with_capacity(body.len() + 2);
        out.extend((0..self.margin.top).map(|_| " ".repeat(outer_width)));
        for line in body {
            out.push(format!(
                "{}{}{}",
                " ".repeat(self.margin.left),
                self.paint(&line, color),
                " ".repeat(self.margin.right)
            ));
        }
        out.extend((0..self.margin.bottom).map(|_| " ".repeat(outer_width)));
        out.join("\n")
    }

    fn align(&self, line: &str, width: usize) -> String {
        let gap = width.saturating_sub(display_width(line));
        match self.alignment {
            Alignment::Left => format!("{line}{}", " ".repeat(gap)),
            Alignment::Right => format!("{}{line}", " ".repeat(gap)),
            Alignment::Center => {
                let left = gap / 2;
                format!("{}{line}{}", " ".repeat(left), " ".repeat(gap - left))
            }
        }
    }

    fn paint(&self, line: &str, color: bool) -> String {
        if !color || (self.foreground.is_none() && !self.faint) {
            return line.to_string();
        }
        let mut style = ContentStyle::new();
        style.foreground_color = self.foreground.map(to_crossterm);
        if self.faint {
            style.attributes.set(Attribute::Dim);
        }
        style.apply(line).to_string()
    }
}

fn to_crossterm(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Indexed(i) => TermColor::AnsiValue(i),
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
    }
}
