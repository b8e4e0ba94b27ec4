//! Display measurements of rendered text
//!
//! Rendered blocks carry ANSI escape sequences, so widths are counted in
//! terminal columns of the visible characters only.

use unicode_width::UnicodeWidthStr;

/// Columns taken by a single line, skipping CSI and OSC escape sequences.
///
/// Visible runs are measured as whole strings so emoji presentation and ZWJ
/// sequences count as the single glyph the terminal draws.
fn visible_width(line: &str) -> usize {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Normal,
        Esc,
        Csi,
        Osc,
    }

    let mut width = 0;
    let mut run = String::new();
    let mut state = State::Normal;
    for c in line.chars() {
        state = match state {
            State::Normal if c == '\x1b' => {
                width += run.width();
                run.clear();
                State::Esc
            }
            State::Normal => {
                run.push(c);
                State::Normal
            }
            State::Esc if c == '[' => State::Csi,
            State::Esc if c == ']' => State::Osc,
            // two-byte sequences such as ESC \ end here
            State::Esc => State::Normal,
            // CSI ends with a final byte in 0x40..=0x7e
            State::Csi if ('\x40'..='\x7e').contains(&c) => State::Normal,
            State::Csi => State::Csi,
            State::Osc if c == '\x07' => State::Normal,
            State::Osc if c == '\x1b' => State::Esc,
            State::Osc => State::Osc,
        };
    }
    width + run.width()
}

/// Width of the widest line, in terminal columns.
pub fn display_width(block: &str) -> usize {
    block.split('\n').map(visible_width).max().unwrap_or(0)
}

/// Number of lines. Every newline starts a line, so `"a\n"` is two lines
/// high and the empty string is one.
pub fn display_height(block: &str) -> usize {
    block.matches('\n').count() + 1
}
