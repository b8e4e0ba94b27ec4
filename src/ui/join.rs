//! Joining rendered blocks into screen regions
//!
//! Neither join ever truncates. When the requested size cannot hold both
//! blocks they are separated by a single space or newline and overflow.

use super::measure::{display_height, display_width};

/// Place `right` against the right edge of a region `width` columns wide.
pub fn join_horizontal(left: &str, right: &str, width: usize) -> String {
    let length = display_width(left) + display_width(right);
    if width < length {
        return format!("{left} {right}");
    }
    let padding = " ".repeat(width - length);
    format!("{left}{padding}{right}")
}

/// Place `bottom` against the bottom edge of a region `height` lines high.
pub fn join_vertical(top: &str, bottom: &str, height: usize) -> String {
    let length = display_height(top) + display_height(bottom);
    if height < length {
        return format!("{top}\n{bottom}");
    }
    let fill = "\n".repeat(height - length);
    format!("{top}{fill}{bottom}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("left", "right", 20)]
    #[case("left", "right", 9)]
    #[case("日本", "ページ", 12)]
    #[case("", "x", 3)]
    #[case("❤\u{fe0f}", "p", 5)]
    #[case("👨\u{200d}👩\u{200d}👧 team", "p", 10)]
    fn test_horizontal_pads_to_width(#[case] left: &str, #[case] right: &str, #[case] width: usize) {
        let joined = join_horizontal(left, right, width);
        assert_eq!(display_width(&joined), width);
        assert!(joined.starts_with(left));
        assert!(joined.ends_with(right));
        assert_eq!(joined[left.len()..joined.len() - right.len()].trim_matches(' '), "");
    }

    #[test]
    fn test_horizontal_exact_fit_has_no_gap() {
        assert_eq!(join_horizontal("ab", "cd", 4), "abcd");
    }

    #[rstest]
    #[case("left", "right", 8)]
    #[case("left", "right", 0)]
    #[case("日本", "語", 5)]
    fn test_horizontal_overflow_uses_single_space(
        #[case] left: &str,
        #[case] right: &str,
        #[case] width: usize,
    ) {
        assert_eq!(join_horizontal(left, right, width), format!("{left} {right}"));
    }

    #[test]
    fn test_horizontal_ignores_escape_sequences() {
        let left = "\x1b[2mdate\x1b[0m";
        let joined = join_horizontal(left, "p", 10);
        assert_eq!(joined, format!("{left}     p"));
        assert_eq!(display_width(&joined), 10);
    }

    #[test]
    fn test_vertical_pushes_bottom_down() {
        let joined = join_vertical("a\nb", "status", 6);
        assert_eq!(joined, "a\nb\n\n\nstatus");
        assert_eq!(
            join_vertical("slide", "status\nbar", 5),
            "slide\n\nstatus\nbar"
        );
    }

    #[test]
    fn test_vertical_exact_fit_has_no_fill() {
        assert_eq!(join_vertical("top", "bottom", 2), "topbottom");
    }

    #[rstest]
    #[case("a\nb\nc", "d", 3)]
    #[case("a", "b", 0)]
    fn test_vertical_overflow_uses_single_newline(
        #[case] top: &str,
        #[case] bottom: &str,
        #[case] height: usize,
    ) {
        assert_eq!(join_vertical(top, bottom, height), format!("{top}\n{bottom}"));
    }
}
