//! Status bar and full screen composition

use super::join::{join_horizontal, join_vertical};
use super::style;

/// Everything shown in the status bar under a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBar<'a> {
    pub author: &'a str,
    pub date: &'a str,
    /// Zero-based index of the current slide
    pub page: usize,
    pub total: usize,
    /// Query typed so far while searching, replaces author and date
    pub search: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn paging(&self) -> String {
        format!("Slide {} / {}", self.page + 1, self.total)
    }

    /// Render the bar for a screen `width` columns wide.
    ///
    /// The page indicator sits against the right edge; the status padding is
    /// taken out of the width so the padded bar still fits.
    pub fn render(&self, width: usize, color: bool) -> String {
        let left = match self.search {
            Some(query) => style::search().render(&format!("/{query}"), color),
            None => {
                style::author().render(self.author, color) + &style::date().render(self.date, color)
            }
        };
        let right = style::page().render(&self.paging(), color);

        let status = style::status();
        let inner = width.saturating_sub(status.padding.horizontal());
        status.render(&join_horizontal(&left, &right, inner), color)
    }
}

/// Stack a rendered slide and its status bar into a screen `height` lines
/// high, the status bar pushed to the bottom.
pub fn compose_screen(slide: &str, status: &str, height: usize) -> String {
    join_vertical(slide, status, height)
}
