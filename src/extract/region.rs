//! Body / footnote region split.

use crate::model::{Page, Span};

/// Region of a page a span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Upper part of the page, where markers are cited
    Body,
    /// Lower part of the page, where footnotes are defined
    Footnote,
}

/// Horizontal cut through a page.
///
/// This is a fixed fraction of the page height. Footnote areas that start
/// above the cut are misread as body text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSplit {
    /// Distance from the top edge, in points
    pub cutoff: f32,
}

impl RegionSplit {
    /// Cut `page` at `ratio` of its height (0.5 = halfway down).
    pub fn for_page(page: &Page, ratio: f32) -> Self {
        Self {
            cutoff: page.height * ratio,
        }
    }

    /// Region of a span; spans exactly on the cut are body text.
    pub fn classify(&self, span: &Span) -> Region {
        if span.origin_y > self.cutoff {
            Region::Footnote
        } else {
            Region::Body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_page_split() {
        let page = Page::new(1, 600.0, 800.0);
        let split = RegionSplit::for_page(&page, 0.5);
        assert_eq!(split.cutoff, 400.0);

        assert_eq!(split.classify(&Span::new("a", 12.0, 80.0)), Region::Body);
        assert_eq!(split.classify(&Span::new("b", 12.0, 400.0)), Region::Body);
        assert_eq!(
            split.classify(&Span::new("c", 9.0, 400.5)),
            Region::Footnote
        );
    }

    #[test]
    fn test_custom_ratio() {
        let page = Page::new(1, 600.0, 1000.0);
        let split = RegionSplit::for_page(&page, 0.75);
        assert_eq!(split.classify(&Span::new("a", 12.0, 700.0)), Region::Body);
        assert_eq!(
            split.classify(&Span::new("b", 9.0, 800.0)),
            Region::Footnote
        );
    }
}
