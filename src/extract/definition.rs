//! Footnote definition extraction from the footnote region.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Definition, Span};

use super::baseline::FontHistogram;
use super::marker::MarkerPolicy;

/// A line opening a footnote entry: digit run, whitespace, body.
static DEFINITION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s+(.*)$").expect("DEFINITION_START: hardcoded regex is valid")
});

/// Running page footer such as "Page 3" or "page 3 of 10".
static PAGE_FOOTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*page\s+\d+(\s+of\s+\d+)?\s*$")
        .expect("PAGE_FOOTER: hardcoded regex is valid")
});

/// Join footnote-region spans into text lines.
///
/// A line breaks where the baseline moves, and before every span that
/// labels a new entry: a flagged superscript, or a digit run set smaller
/// than the region's own text by at least `size_delta`. Digits at the
/// region's text size stay inline.
pub fn flatten_region<'a, I>(spans: I, size_delta: f32) -> String
where
    I: IntoIterator<Item = &'a Span>,
    I::IntoIter: Clone,
{
    let spans = spans.into_iter();

    let mut histogram = FontHistogram::default();
    for span in spans.clone().filter(|s| !s.is_blank() && !s.is_superscript) {
        histogram.add_size(span.font_size);
    }
    let labels = histogram
        .mode()
        .map(|size| MarkerPolicy::new(size, size_delta));

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut last_y: Option<f32> = None;
    let mut after_label = false;

    for span in spans {
        let is_label = match &labels {
            Some(policy) => policy.is_marker(span),
            None => span.is_superscript && !span.is_blank(),
        };
        let breaks = match last_y {
            Some(y) => span.starts_new_line(y) || is_label,
            None => false,
        };

        if breaks && !current.trim().is_empty() {
            lines.push(std::mem::take(&mut current));
        } else if after_label
            && !current.ends_with(char::is_whitespace)
            && !span.text.starts_with(char::is_whitespace)
        {
            current.push(' ');
        }

        current.push_str(if is_label { span.trimmed() } else { &span.text });
        after_label = is_label;
        last_y = Some(span.origin_y);
    }

    if !current.trim().is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Extracts definitions from flattened footnote text.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionExtractor {
    skip_page_footers: bool,
}

impl DefinitionExtractor {
    /// Create an extractor.
    pub fn new(skip_page_footers: bool) -> Self {
        Self { skip_page_footers }
    }

    /// Scan line-oriented footnote text.
    ///
    /// Each entry runs from a digit-prefixed line to the next one; text
    /// before the first entry is not part of any definition.
    pub fn extract(&self, text: &str, page_number: u32) -> Vec<Definition> {
        let mut definitions = Vec::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for line in text.lines() {
            if self.skip_page_footers && PAGE_FOOTER.is_match(line) {
                log::debug!("Page {}: dropping footer line {:?}", page_number, line);
                continue;
            }

            if let Some(caps) = DEFINITION_START.captures(line) {
                if let Some((number, body)) = current.take() {
                    definitions.push(finish(number, &body, page_number));
                }
                let body = caps.get(2).map_or("", |m| m.as_str());
                current = Some((caps[1].to_string(), vec![body]));
            } else if let Some((_, body)) = current.as_mut() {
                body.push(line);
            } else if !line.trim().is_empty() {
                log::debug!(
                    "Page {}: footnote text before first entry: {:?}",
                    page_number,
                    line
                );
            }
        }

        if let Some((number, body)) = current {
            definitions.push(finish(number, &body, page_number));
        }
        definitions
    }
}

impl Default for DefinitionExtractor {
    fn default() -> Self {
        Self::new(true)
    }
}

fn finish(number: String, body: &[&str], page_number: u32) -> Definition {
    let text = body
        .iter()
        .flat_map(|line| line.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");
    Definition::new(number, text, page_number)
}
