//! Footnote reference marker detection.

use crate::model::Span;

/// Decides which spans are footnote markers on one page.
///
/// The superscript flag is trusted first. Sources that leave the flag unset
/// still get markers through the size test: a bare digit run set noticeably
/// smaller than the page's body text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPolicy {
    /// Body font size of the page
    pub baseline: f32,
    /// Minimum size gap below the baseline for unflagged digit runs
    pub size_delta: f32,
}

impl MarkerPolicy {
    /// Create a policy for a page baseline.
    pub fn new(baseline: f32, size_delta: f32) -> Self {
        Self {
            baseline,
            size_delta,
        }
    }

    /// Footnote label of `span` if it is a marker.
    pub fn marker_label<'a>(&self, span: &'a Span) -> Option<&'a str> {
        if self.is_marker(span) {
            Some(span.trimmed())
        } else {
            None
        }
    }

    /// Check if `span` is a marker.
    pub fn is_marker(&self, span: &Span) -> bool {
        if span.is_blank() {
            return false;
        }
        span.is_superscript
            || (span.is_digits() && span.font_size <= self.baseline - self.size_delta)
    }
}
