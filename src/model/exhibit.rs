//! Footnote and exhibit types.

use serde::{Deserialize, Serialize};

/// An in-body citation of a footnote, with the sentence that cites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    /// Footnote label as it literally appears
    pub footnote_number: String,

    /// Last sentence of body text preceding the marker
    pub context_sentence: String,

    /// Page the marker was found on (1-indexed)
    pub page_number: u32,
}

impl Pointer {
    /// Create a new pointer.
    pub fn new(
        footnote_number: impl Into<String>,
        context_sentence: impl Into<String>,
        page_number: u32,
    ) -> Self {
        Self {
            footnote_number: footnote_number.into(),
            context_sentence: context_sentence.into(),
            page_number,
        }
    }
}

/// A footnote body found in a page's footnote region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Leading digit run of the footnote entry
    pub footnote_number: String,

    /// Footnote text, trimmed, line breaks collapsed to single spaces
    pub definition_text: String,

    /// Page the definition was found on (1-indexed)
    pub page_number: u32,
}

impl Definition {
    /// Create a new definition.
    pub fn new(
        footnote_number: impl Into<String>,
        definition_text: impl Into<String>,
        page_number: u32,
    ) -> Self {
        Self {
            footnote_number: footnote_number.into(),
            definition_text: definition_text.into(),
            page_number,
        }
    }
}

/// One output row: a definition linked to the pointer that cites it.
///
/// Field order is the column order of every tabular sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitRecord {
    /// Sequential row id, starting at 1
    pub id: u32,

    /// File name of the source document
    pub source_file: String,

    /// Citing sentence, or empty when no pointer matched
    pub pointer: String,

    /// Footnote number
    pub exhibit_number: String,

    /// Footnote text
    pub exhibit_info: String,

    /// Page of the definition (1-indexed)
    pub page_number: u32,

    /// Total definitions in the document, repeated on every row
    pub exhibit_count: u32,
}

impl ExhibitRecord {
    /// Column names in output order.
    pub const COLUMNS: [&'static str; 7] = [
        "id",
        "source_file",
        "pointer",
        "exhibit_number",
        "exhibit_info",
        "page_number",
        "exhibit_count",
    ];

    /// Row values in column order, for text rendering.
    pub fn cells(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.source_file.clone(),
            self.pointer.clone(),
            self.exhibit_number.clone(),
            self.exhibit_info.clone(),
            self.page_number.to_string(),
            self.exhibit_count.to_string(),
        ]
    }
}

/// Counters collected while scanning a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Pages handed to the scanner
    pub pages_scanned: u32,

    /// Pages skipped for lack of a baseline font size
    pub pages_skipped: u32,

    /// Markers detected in body regions
    pub pointer_count: u32,

    /// Definitions detected in footnote regions
    pub definition_count: u32,

    /// Pointers left over after association
    pub unmatched_pointers: u32,

    /// Definitions emitted without a pointer
    pub unmatched_definitions: u32,
}

/// The exhibit table of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExhibitTable {
    /// File name of the source document
    pub source_file: String,

    /// Rows in definition emission order
    pub records: Vec<ExhibitRecord>,

    /// Scan statistics
    #[serde(skip)]
    pub stats: ExtractionStats,
}

impl ExhibitTable {
    /// Create an empty table for a source file.
    pub fn new(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            records: Vec::new(),
            stats: ExtractionStats::default(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no definitions were found.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total definitions in the document.
    pub fn exhibit_count(&self) -> u32 {
        self.records.len() as u32
    }

    /// Iterate over rows.
    pub fn iter(&self) -> std::slice::Iter<'_, ExhibitRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ExhibitTable {
    type Item = &'a ExhibitRecord;
    type IntoIter = std::slice::Iter<'a, ExhibitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
