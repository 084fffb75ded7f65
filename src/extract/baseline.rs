//! Per-page body font size estimation.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::Page;

/// Histogram of font sizes at 0.1pt precision.
#[derive(Debug, Clone, Default)]
pub struct FontHistogram {
    buckets: HashMap<i32, usize>,
}

impl FontHistogram {
    /// Add a font size observation.
    pub fn add_size(&mut self, size: f32) {
        let key = (size * 10.0).round() as i32;
        *self.buckets.entry(key).or_insert(0) += 1;
    }

    /// Most frequent size; ties go to the larger size.
    pub fn mode(&self) -> Option<f32> {
        self.buckets
            .iter()
            .max_by(|(ka, ca), (kb, cb)| ca.cmp(cb).then(ka.cmp(kb)))
            .map(|(key, _)| *key as f32 / 10.0)
    }

    /// Check if nothing was observed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Dominant body font size of a page.
///
/// Only spans with visible text are counted. A page without any yields
/// [`Error::NoBaselineFound`]; callers skip such pages.
pub fn estimate_baseline(page: &Page) -> Result<f32> {
    let mut histogram = FontHistogram::default();
    for span in page.spans.iter().filter(|s| !s.is_blank()) {
        histogram.add_size(span.font_size);
    }

    histogram.mode().ok_or(Error::NoBaselineFound(page.number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Span;

    #[test]
    fn test_mode_is_most_common_size() {
        let page = Page::letter(1).with_spans(vec![
            Span::new("Body one", 12.0, 100.0),
            Span::new("Body two", 12.0, 120.0),
            Span::superscript("1", 7.0, 120.0),
            Span::new("Heading", 18.0, 60.0),
        ]);
        assert_eq!(estimate_baseline(&page).unwrap(), 12.0);
    }

    #[test]
    fn test_tie_prefers_larger_size() {
        let page = Page::letter(1).with_spans(vec![
            Span::new("note", 9.0, 700.0),
            Span::new("body", 11.0, 100.0),
        ]);
        assert_eq!(estimate_baseline(&page).unwrap(), 11.0);
    }

    #[test]
    fn test_blank_spans_do_not_count() {
        let page = Page::letter(1).with_spans(vec![
            Span::new("   ", 20.0, 100.0),
            Span::new("  ", 20.0, 110.0),
            Span::new("word", 10.0, 120.0),
        ]);
        assert_eq!(estimate_baseline(&page).unwrap(), 10.0);
    }

    #[test]
    fn test_empty_page_has_no_baseline() {
        let page = Page::letter(4);
        assert!(matches!(
            estimate_baseline(&page),
            Err(Error::NoBaselineFound(4))
        ));
    }

    #[test]
    fn test_histogram_rounding() {
        let mut histogram = FontHistogram::default();
        assert!(histogram.is_empty());
        histogram.add_size(11.96);
        histogram.add_size(12.04);
        histogram.add_size(9.0);
        assert_eq!(histogram.mode(), Some(12.0));
    }
}
