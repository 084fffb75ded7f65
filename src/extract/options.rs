//! Extraction options and configuration.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options for extracting exhibits from a document.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// How per-page layout failures are handled
    pub error_mode: ErrorMode,

    /// Which pages to scan
    pub pages: PageSelection,

    /// Fraction of the page height above which text is body text
    pub split_ratio: f32,

    /// How much smaller than the baseline a digit run must be to count as a marker
    pub marker_size_delta: f32,

    /// Drop "Page N" footer lines from footnote regions
    pub skip_page_footers: bool,

    /// Whether to scan pages in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip pages whose layout cannot be read).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Set the body/footnote split as a fraction of page height.
    ///
    /// Values outside `0.0..=1.0` are clamped.
    pub fn with_split_ratio(mut self, ratio: f32) -> Self {
        self.split_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Set the minimum size gap between body text and unflagged markers.
    pub fn with_marker_size_delta(mut self, delta: f32) -> Self {
        self.marker_size_delta = delta.max(0.0);
        self
    }

    /// Keep or drop running page footers in footnote regions.
    pub fn with_page_footers_skipped(mut self, skip: bool) -> Self {
        self.skip_page_footers = skip;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            pages: PageSelection::All,
            split_ratio: 0.5,
            marker_size_delta: 1.0,
            skip_page_footers: true,
            parallel: true,
        }
    }
}

/// Error handling mode for page layout failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Treat unreadable pages as empty and continue
    Lenient,
}

/// Page selection for scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Scan all pages
    #[default]
    All,
    /// Scan a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Scan specific pages (1-indexed)
    Pages(Vec<u32>),
    /// Scan several ranges of pages (inclusive, 1-indexed)
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        if let Some((start, end)) = s.split_once('-') {
            if !s.contains(',') {
                return Ok(PageSelection::Range(
                    parse_page(start)?..=parse_page(end)?,
                ));
            }
        }

        let mut ranges = Vec::new();
        for part in s.split(',') {
            let range = match part.split_once('-') {
                Some((start, end)) => parse_page(start)?..=parse_page(end)?,
                None => {
                    let page = parse_page(part)?;
                    page..=page
                }
            };
            ranges.push(range);
        }

        ranges.sort_unstable_by_key(|r| (*r.start(), *r.end()));
        ranges.dedup();
        Ok(PageSelection::Ranges(ranges))
    }
}

fn parse_page(s: &str) -> Result<u32> {
    match s.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(Error::InvalidPageRange(s.trim().to_string())),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_options_builder() {
        let options = ExtractOptions::new()
            .lenient()
            .with_split_ratio(1.7)
            .with_marker_size_delta(2.0)
            .sequential();

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert_eq!(options.split_ratio, 1.0);
        assert_eq!(options.marker_size_delta, 2.0);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert_eq!(options.split_ratio, 0.5);
        assert!(options.skip_page_footers);
        assert!(options.parallel);
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(
            PageSelection::parse("2-4").unwrap(),
            PageSelection::Range(2..=4)
        );
        assert_eq!(
            PageSelection::parse("5,1-2,2,5").unwrap(),
            PageSelection::Ranges(vec![1..=2, 2..=2, 5..=5])
        );
        assert!(PageSelection::parse("0").is_err());
        assert!(PageSelection::parse("a-b").is_err());
    }

    #[test]
    fn test_page_selection_includes() {
        let sel = PageSelection::Pages(vec![1, 3]);
        assert!(sel.includes(3));
        assert!(!sel.includes(2));
        assert!(PageSelection::All.includes(99));
    }

    #[test]
    fn test_wide_ranges_are_not_expanded() {
        let sel = PageSelection::parse("1,1-4000000000").unwrap();
        assert_eq!(sel, PageSelection::Ranges(vec![1..=1, 1..=4_000_000_000]));
        assert!(sel.includes(3_999_999_999));
        assert!(!sel.includes(4_000_000_001));

        let sel = PageSelection::parse("2,7-9").unwrap();
        assert!(sel.includes(8));
        assert!(!sel.includes(5));
    }
}
