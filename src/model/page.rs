//! Page-level layout types.

use serde::{Deserialize, Serialize};

/// A contiguous run of text sharing one font size, position and style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// The text content
    pub text: String,

    /// Font size in points
    pub font_size: f32,

    /// Distance from the top edge of the page to the baseline, in points
    pub origin_y: f32,

    /// Whether the run is raised above the baseline
    pub is_superscript: bool,
}

impl Span {
    /// Create a regular (non-superscript) span.
    pub fn new(text: impl Into<String>, font_size: f32, origin_y: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
            origin_y,
            is_superscript: false,
        }
    }

    /// Create a superscript span.
    pub fn superscript(text: impl Into<String>, font_size: f32, origin_y: f32) -> Self {
        Self {
            is_superscript: true,
            ..Self::new(text, font_size, origin_y)
        }
    }

    /// The text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check if the span carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Check if the trimmed text is a non-empty run of ASCII digits.
    pub fn is_digits(&self) -> bool {
        let t = self.trimmed();
        !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit())
    }

    /// Check if this span sits on a different visual line than one at `prev_y`.
    ///
    /// Allows 30% of the font size as baseline variance.
    pub fn starts_new_line(&self, prev_y: f32) -> bool {
        (self.origin_y - prev_y).abs() > self.font_size * 0.3
    }
}

/// A single page of laid-out text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Text runs in reading order
    pub spans: Vec<Span>,
}

impl Page {
    /// Create a new empty page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            spans: Vec::new(),
        }
    }

    /// Create a new page with standard Letter size (8.5 x 11 inches).
    pub fn letter(number: u32) -> Self {
        Self::new(number, 612.0, 792.0) // 8.5 * 72, 11 * 72
    }

    /// Create a new page with standard A4 size (210 x 297 mm).
    pub fn a4(number: u32) -> Self {
        Self::new(number, 595.0, 842.0) // 210mm * 2.834, 297mm * 2.834
    }

    /// Replace the spans of the page.
    pub fn with_spans(mut self, spans: Vec<Span>) -> Self {
        self.spans = spans;
        self
    }

    /// Append a span to the page.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Check if the page has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::letter(1)
    }
}
