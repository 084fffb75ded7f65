//! Citing-sentence capture for footnote markers.

use crate::model::{Pointer, Span};

/// Running body text of one page since the last marker.
#[derive(Debug, Clone, Default)]
pub struct PointerAccumulator {
    page_number: u32,
    text: String,
    last_y: Option<f32>,
}

impl PointerAccumulator {
    /// Start an empty accumulator for a page.
    pub fn new(page_number: u32) -> Self {
        Self {
            page_number,
            ..Self::default()
        }
    }

    /// Append an ordinary body span.
    ///
    /// A span on a new visual line is separated from the previous text by a
    /// space unless either side already carries whitespace.
    pub fn push_text(&mut self, span: &Span) {
        if let Some(y) = self.last_y {
            if span.starts_new_line(y)
                && !self.text.ends_with(char::is_whitespace)
                && !span.text.starts_with(char::is_whitespace)
            {
                self.text.push(' ');
            }
        }
        self.text.push_str(&span.text);
        self.last_y = Some(span.origin_y);
    }

    /// Close the running text at a marker and return its pointer.
    pub fn take_pointer(&mut self, footnote_number: &str) -> Pointer {
        let context = last_sentence(&self.text);
        self.text.clear();
        Pointer::new(footnote_number, context, self.page_number)
    }

    /// Text gathered since the last marker.
    pub fn pending_text(&self) -> &str {
        &self.text
    }
}

/// Split text at `.`, `!` or `?` followed by whitespace.
///
/// Terminal punctuation stays with its sentence; empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if let Some(&(_, next)) = chars.peek() {
            if next.is_whitespace() {
                let end = i + c.len_utf8();
                sentences.push(&text[start..end]);
                start = end;
            }
        }
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Last sentence of `text` with whitespace runs collapsed.
pub fn last_sentence(text: &str) -> String {
    split_sentences(text)
        .last()
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
