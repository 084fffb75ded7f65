//! PDF layout reading.

mod backend;
mod layout;

pub use backend::{decode_text_simple, ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue};
pub use layout::{decode_without_fonts, interpret_spans, LayoutSource, PdfLayoutSource};
