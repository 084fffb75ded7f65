//! # footnote-exhibits
//!
//! Footnote and exhibit extraction from PDF documents.
//!
//! Every footnote definition found in the bottom region of a page is linked
//! to the body sentence whose superscript marker cites it, producing one
//! [`ExhibitRecord`] per definition.
//!
//! ## Quick Start
//!
//! ```no_run
//! use footnote_exhibits::{extract_file, render};
//!
//! fn main() -> footnote_exhibits::Result<()> {
//!     let table = extract_file("memo.pdf")?;
//!     for record in &table {
//!         println!("[{}] {} -> {}", record.exhibit_number, record.pointer, record.exhibit_info);
//!     }
//!
//!     render::export(&table, "exhibits.csv", render::ExportFormat::Csv)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Layout**: content streams are interpreted into text spans with size,
//!   vertical position and a superscript flag
//! - **Regions**: spans in the lower part of a page belong to the footnote region
//! - **Baseline**: the most common font size is the body text size
//! - **Pointers**: markers in the body close the sentence that precedes them
//! - **Definitions**: digit-prefixed lines in the footnote region open entries
//! - **Association**: definitions claim pointers with the same label in
//!   document order
//!
//! Pages are scanned in parallel with Rayon; results do not depend on it.

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;
pub mod sample;

pub use detect::{check_source, sniff_header, PdfVersion};
pub use error::{Error, Result};
pub use extract::{extract_from_source, extract_pages, ErrorMode, ExtractOptions, PageSelection};
pub use model::{Definition, ExhibitRecord, ExhibitTable, ExtractionStats, Page, Pointer, Span};
pub use parser::{LayoutSource, PdfLayoutSource};
pub use render::{ExportFormat, ExportOutcome, JsonFormat};
pub use sample::create_sample_pdf;

use std::io::Read;
use std::path::Path;

/// Extract the exhibit table of a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// use footnote_exhibits::extract_file;
///
/// let table = extract_file("memo.pdf").unwrap();
/// println!("{} exhibits", table.exhibit_count());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExhibitTable> {
    extract_file_with_options(path, &ExtractOptions::default())
}

/// Extract the exhibit table of a PDF file.
///
/// The `source_file` column holds the file name of `path`.
///
/// # Example
///
/// ```no_run
/// use footnote_exhibits::{extract_file_with_options, ExtractOptions, PageSelection};
///
/// let options = ExtractOptions::new()
///     .lenient()
///     .with_pages(PageSelection::Range(1..=10));
/// let table = extract_file_with_options("memo.pdf", &options).unwrap();
/// ```
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<ExhibitTable> {
    let path = path.as_ref();
    let source = PdfLayoutSource::open(path)?;
    extract_from_source(&source, &source_name(path), options)
}

/// Extract the exhibit table of an in-memory PDF.
///
/// `source_file` is copied into every record.
pub fn extract_bytes(
    data: &[u8],
    source_file: &str,
    options: &ExtractOptions,
) -> Result<ExhibitTable> {
    let source = PdfLayoutSource::from_bytes(data)?;
    extract_from_source(&source, source_file, options)
}

/// Extract the exhibit table of a PDF read from `reader`.
pub fn extract_reader<R: Read>(
    reader: R,
    source_file: &str,
    options: &ExtractOptions,
) -> Result<ExhibitTable> {
    let source = PdfLayoutSource::from_reader(reader)?;
    extract_from_source(&source, source_file, options)
}

/// File name component of a path, or the whole path when it has none.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let result = extract_file("definitely/not/here.pdf");
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }

    #[test]
    fn test_extract_bytes_rejects_non_pdf() {
        let result = extract_bytes(b"<html></html>", "page.html", &ExtractOptions::default());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_extract_bytes_empty() {
        let result = extract_bytes(&[], "empty.pdf", &ExtractOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(Path::new("/tmp/docs/memo.pdf")), "memo.pdf");
        assert_eq!(source_name(Path::new("memo.pdf")), "memo.pdf");
    }

    #[test]
    fn test_extract_sample_bytes() {
        let bytes = sample::sample_bytes().unwrap();
        let table = extract_bytes(&bytes, "sample.pdf", &ExtractOptions::default()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.exhibit_count(), 3);
        assert_eq!(table.records[2].pointer, "A third reference");
    }
}
