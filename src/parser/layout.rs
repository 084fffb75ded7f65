//! Layout sources: per-page text spans with size, position and style.
//!
//! [`PdfLayoutSource`] interprets page content streams into [`Span`]s.
//! Only the text-state operators that affect size, vertical position and
//! text rise are tracked; everything else in the stream is ignored.

use std::io::Read;
use std::path::Path;

use crate::detect::{check_source, sniff_header};
use crate::error::{Error, Result};
use crate::model::{Page, Span};

use super::backend::{decode_text_simple, ContentOp, LopdfBackend, PdfBackend, PdfValue};

/// TJ adjustment (thousandths of text space) treated as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Supplies laid-out pages to the extraction pipeline.
pub trait LayoutSource {
    /// Page numbers available from this source, ascending and 1-indexed.
    fn page_numbers(&self) -> Vec<u32>;

    /// Materialize one page.
    fn load_page(&self, number: u32) -> Result<Page>;
}

impl LayoutSource for [Page] {
    fn page_numbers(&self) -> Vec<u32> {
        self.iter().map(|p| p.number).collect()
    }

    fn load_page(&self, number: u32) -> Result<Page> {
        self.iter()
            .find(|p| p.number == number)
            .cloned()
            .ok_or(Error::PageOutOfRange(number, self.len() as u32))
    }
}

impl LayoutSource for Vec<Page> {
    fn page_numbers(&self) -> Vec<u32> {
        self.as_slice().page_numbers()
    }

    fn load_page(&self, number: u32) -> Result<Page> {
        self.as_slice().load_page(number)
    }
}

/// Layout source reading spans from a PDF document.
pub struct PdfLayoutSource<B: PdfBackend = LopdfBackend> {
    backend: B,
}

impl PdfLayoutSource<LopdfBackend> {
    /// Open a PDF file.
    ///
    /// Fails with [`Error::SourceNotFound`] when the path does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let version = check_source(path)?;
        log::debug!("Opening {} ({})", path.display(), version);
        Ok(Self::new(LopdfBackend::load_file(path)?))
    }

    /// Read a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        sniff_header(data)?;
        Ok(Self::new(LopdfBackend::load_bytes(data)?))
    }

    /// Read a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }
}

impl<B: PdfBackend> PdfLayoutSource<B> {
    /// Wrap an already loaded backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: PdfBackend> LayoutSource for PdfLayoutSource<B> {
    fn page_numbers(&self) -> Vec<u32> {
        self.backend.pages().keys().copied().collect()
    }

    fn load_page(&self, number: u32) -> Result<Page> {
        let pages = self.backend.pages();
        let page_id = *pages
            .get(&number)
            .ok_or(Error::PageOutOfRange(number, pages.len() as u32))?;

        let (width, height) = self.backend.page_dimensions(page_id);
        let content = self.backend.page_content(page_id)?;
        let ops = self.backend.decode_content(&content)?;
        let spans = interpret_spans(&ops, height, |font, bytes| {
            self.backend.decode_text(page_id, font, bytes)
        });

        log::debug!("Page {}: {} spans", number, spans.len());
        Ok(Page::new(number, width, height).with_spans(spans))
    }
}

/// Text state tracked while walking a content stream.
#[derive(Debug, Clone)]
struct TextState {
    font_name: Vec<u8>,
    font_size: f32,
    leading: f32,
    rise: f32,
    matrix: TextMatrix,
    in_text: bool,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            font_name: Vec::new(),
            font_size: 12.0,
            leading: 0.0,
            rise: 0.0,
            matrix: TextMatrix::default(),
            in_text: false,
        }
    }
}

impl TextState {
    fn next_line(&mut self) {
        // Without TL, fall back to single spacing at the current size.
        let leading = if self.leading != 0.0 {
            self.leading
        } else {
            self.font_size
        };
        self.matrix.translate(0.0, -leading);
    }

    fn span(&self, text: String, page_height: f32) -> Option<Span> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Span {
            text,
            font_size: self.font_size * self.matrix.vertical_scale(),
            origin_y: page_height - self.matrix.f,
            is_superscript: self.rise > 0.0,
        })
    }
}

/// Interpret content stream operations into spans in stream order.
///
/// `decode` turns a (font resource name, string bytes) pair into text.
/// `origin_y` of each span is measured from the top edge of a page of
/// `page_height` points, ignoring text rise.
pub fn interpret_spans<F>(ops: &[ContentOp], page_height: f32, mut decode: F) -> Vec<Span>
where
    F: FnMut(&[u8], &[u8]) -> String,
{
    let mut spans = Vec::new();
    let mut state = TextState::default();

    for op in ops {
        match op.operator.as_str() {
            "BT" => {
                state.in_text = true;
                state.matrix = TextMatrix::default();
            }
            "ET" => state.in_text = false,
            "Tf" => {
                if let Some(PdfValue::Name(name)) = op.operands.first() {
                    state.font_name = name.clone();
                }
                if let Some(size) = op.number(1) {
                    state.font_size = size;
                }
            }
            "TL" => state.leading = op.number(0).unwrap_or(0.0),
            "Ts" => state.rise = op.number(0).unwrap_or(0.0),
            "Td" => {
                state
                    .matrix
                    .translate(op.number(0).unwrap_or(0.0), op.number(1).unwrap_or(0.0));
            }
            "TD" => {
                let ty = op.number(1).unwrap_or(0.0);
                state.leading = -ty;
                state.matrix.translate(op.number(0).unwrap_or(0.0), ty);
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    state.matrix = TextMatrix {
                        a: op.number(0).unwrap_or(1.0),
                        b: op.number(1).unwrap_or(0.0),
                        c: op.number(2).unwrap_or(0.0),
                        d: op.number(3).unwrap_or(1.0),
                        e: op.number(4).unwrap_or(0.0),
                        f: op.number(5).unwrap_or(0.0),
                    };
                }
            }
            "T*" => state.next_line(),
            "Tj" | "'" | "\"" | "TJ" => {
                if op.operator == "'" || op.operator == "\"" {
                    state.next_line();
                }
                if !state.in_text {
                    continue;
                }

                let text = match op.operator.as_str() {
                    "TJ" => match op.operands.first() {
                        Some(PdfValue::Array(items)) => {
                            decode_tj_array(items, &state.font_name, &mut decode)
                        }
                        _ => String::new(),
                    },
                    // " carries word and char spacing before the string
                    "\"" => string_operand(op.operands.get(2), &state.font_name, &mut decode),
                    _ => string_operand(op.operands.first(), &state.font_name, &mut decode),
                };

                spans.extend(state.span(text, page_height));
            }
            _ => {}
        }
    }

    spans
}

fn string_operand<F>(operand: Option<&PdfValue>, font: &[u8], decode: &mut F) -> String
where
    F: FnMut(&[u8], &[u8]) -> String,
{
    match operand {
        Some(PdfValue::Str(bytes)) => decode(font, bytes),
        _ => String::new(),
    }
}

/// Decode a TJ array, turning large negative adjustments into word spaces.
fn decode_tj_array<F>(items: &[PdfValue], font: &[u8], decode: &mut F) -> String
where
    F: FnMut(&[u8], &[u8]) -> String,
{
    let mut combined = String::new();
    for item in items {
        match item {
            PdfValue::Str(bytes) => combined.push_str(&decode(font, bytes)),
            other => {
                let gap = other.as_number().map(|n| -n).unwrap_or(0.0);
                if gap > TJ_SPACE_THRESHOLD
                    && !combined.is_empty()
                    && !combined.ends_with(char::is_whitespace)
                {
                    combined.push(' ');
                }
            }
        }
    }
    combined
}

/// Affine text matrix [a b c d e f].
#[derive(Debug, Clone, Copy)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32, // X translation
    f: f32, // Y translation
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn vertical_scale(&self) -> f32 {
        (self.c * self.c + self.d * self.d).sqrt()
    }
}

/// Decoder used for spans when no font information is available.
pub fn decode_without_fonts(_font: &[u8], bytes: &[u8]) -> String {
    decode_text_simple(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(operator: &str, operands: Vec<PdfValue>) -> ContentOp {
        ContentOp::new(operator, operands)
    }

    fn num(n: i64) -> PdfValue {
        PdfValue::Integer(n)
    }

    fn text(s: &str) -> PdfValue {
        PdfValue::Str(s.as_bytes().to_vec())
    }

    fn font(size: i64) -> ContentOp {
        op("Tf", vec![PdfValue::Name(b"F1".to_vec()), num(size)])
    }

    #[test]
    fn test_superscript_from_text_rise() {
        let ops = vec![
            op("BT", vec![]),
            font(12),
            op("Td", vec![num(72), num(700)]),
            op("Tj", vec![text("A claim")]),
            font(7),
            op("Ts", vec![num(4)]),
            op("Tj", vec![text("1")]),
            op("Ts", vec![num(0)]),
            font(12),
            op("Tj", vec![text(".")]),
            op("ET", vec![]),
        ];

        let spans = interpret_spans(&ops, 792.0, decode_without_fonts);
        assert_eq!(spans.len(), 3);
        assert!(!spans[0].is_superscript);
        assert!(spans[1].is_superscript);
        assert_eq!(spans[1].font_size, 7.0);
        assert_eq!(spans[1].origin_y, 92.0);
        assert!(!spans[2].is_superscript);
    }

    #[test]
    fn test_origin_is_top_down() {
        let ops = vec![
            op("BT", vec![]),
            font(10),
            op(
                "Tm",
                vec![num(1), num(0), num(0), num(1), num(72), num(100)],
            ),
            op("Tj", vec![text("low")]),
            op("ET", vec![]),
        ];
        let spans = interpret_spans(&ops, 792.0, decode_without_fonts);
        assert_eq!(spans[0].origin_y, 692.0);
    }

    #[test]
    fn test_next_line_uses_leading() {
        let ops = vec![
            op("BT", vec![]),
            font(10),
            op("TL", vec![num(14)]),
            op("Td", vec![num(72), num(700)]),
            op("Tj", vec![text("first")]),
            op("T*", vec![]),
            op("Tj", vec![text("second")]),
            op("'", vec![text("third")]),
            op("ET", vec![]),
        ];
        let spans = interpret_spans(&ops, 800.0, decode_without_fonts);
        let ys: Vec<f32> = spans.iter().map(|s| s.origin_y).collect();
        assert_eq!(ys, vec![100.0, 114.0, 128.0]);
    }

    #[test]
    fn test_tj_array_spacing() {
        let ops = vec![
            op("BT", vec![]),
            font(12),
            op(
                "TJ",
                vec![PdfValue::Array(vec![
                    text("foot"),
                    num(-20),
                    text("note"),
                    num(-300),
                    text("text"),
                ])],
            ),
            op("ET", vec![]),
        ];
        let spans = interpret_spans(&ops, 792.0, decode_without_fonts);
        assert_eq!(spans[0].text, "footnote text");
    }

    #[test]
    fn test_text_outside_bt_is_ignored() {
        let ops = vec![font(12), op("Tj", vec![text("stray")])];
        assert!(interpret_spans(&ops, 792.0, decode_without_fonts).is_empty());
    }

    #[test]
    fn test_memory_source() {
        let pages = vec![Page::letter(1), Page::letter(2)];
        assert_eq!(pages.page_numbers(), vec![1, 2]);
        assert_eq!(pages.load_page(2).unwrap().number, 2);
        assert!(matches!(
            pages.load_page(5),
            Err(Error::PageOutOfRange(5, 2))
        ));
    }
}
