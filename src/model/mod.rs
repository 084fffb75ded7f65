//! Data model for footnote extraction.
//!
//! Pages and spans are the read-only layout input; pointers and definitions
//! are the intermediate findings; exhibit records are the output rows.

mod exhibit;
mod page;

pub use exhibit::{Definition, ExhibitRecord, ExhibitTable, ExtractionStats, Pointer};
pub use page::{Page, Span};
