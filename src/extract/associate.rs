//! Pointer/definition accumulation and association.

use std::collections::{HashMap, VecDeque};

use crate::model::{Definition, ExhibitRecord, ExhibitTable, ExtractionStats, Pointer};

/// Findings of one scanned page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageScan {
    /// Page number (1-indexed)
    pub page_number: u32,
    /// Body font size, or `None` when the page was skipped
    pub baseline: Option<f32>,
    /// Pointers in body order
    pub pointers: Vec<Pointer>,
    /// Definitions in footnote-region order
    pub definitions: Vec<Definition>,
}

impl PageScan {
    /// A page that contributes nothing.
    pub fn skipped(page_number: u32) -> Self {
        Self {
            page_number,
            ..Self::default()
        }
    }
}

/// Document-wide pointer queues and definition list.
///
/// Owned by a single writer; page scans are merged in page order.
#[derive(Debug, Default)]
pub struct Accumulator {
    pointers: HashMap<String, VecDeque<Pointer>>,
    definitions: Vec<Definition>,
    stats: ExtractionStats,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one page scan into the document state.
    pub fn merge(&mut self, scan: PageScan) {
        self.stats.pages_scanned += 1;
        if scan.baseline.is_none() {
            self.stats.pages_skipped += 1;
        }
        self.stats.pointer_count += scan.pointers.len() as u32;
        self.stats.definition_count += scan.definitions.len() as u32;

        for pointer in scan.pointers {
            self.pointers
                .entry(pointer.footnote_number.clone())
                .or_default()
                .push_back(pointer);
        }
        self.definitions.extend(scan.definitions);
    }

    /// Number of definitions gathered so far.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Link definitions to pointers and build the output table.
    ///
    /// Definitions drive the rows: each one takes the oldest pointer queued
    /// under its number, or an empty pointer. Leftover pointers are dropped.
    pub fn associate(mut self, source_file: &str) -> ExhibitTable {
        let exhibit_count = self.definitions.len() as u32;
        let mut table = ExhibitTable::new(source_file);

        for (idx, definition) in self.definitions.into_iter().enumerate() {
            let pointer = self
                .pointers
                .get_mut(&definition.footnote_number)
                .and_then(VecDeque::pop_front);

            let pointer = match pointer {
                Some(p) => p.context_sentence,
                None => {
                    log::debug!(
                        "No pointer for footnote {} on page {}",
                        definition.footnote_number,
                        definition.page_number
                    );
                    self.stats.unmatched_definitions += 1;
                    String::new()
                }
            };

            table.records.push(ExhibitRecord {
                id: idx as u32 + 1,
                source_file: source_file.to_string(),
                pointer,
                exhibit_number: definition.footnote_number,
                exhibit_info: definition.definition_text,
                page_number: definition.page_number,
                exhibit_count,
            });
        }

        let mut leftovers: Vec<&Pointer> = self.pointers.values().flatten().collect();
        leftovers.sort_by_key(|p| p.page_number);
        for pointer in &leftovers {
            log::debug!(
                "Dropping pointer {} on page {}: no matching definition",
                pointer.footnote_number,
                pointer.page_number
            );
        }
        self.stats.unmatched_pointers = leftovers.len() as u32;

        table.stats = self.stats;
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(page: u32, pointers: &[(&str, &str)], definitions: &[(&str, &str)]) -> PageScan {
        PageScan {
            page_number: page,
            baseline: Some(12.0),
            pointers: pointers
                .iter()
                .map(|(n, c)| Pointer::new(*n, *c, page))
                .collect(),
            definitions: definitions
                .iter()
                .map(|(n, t)| Definition::new(*n, *t, page))
                .collect(),
        }
    }

    #[test]
    fn test_definitions_drive_rows() {
        let mut acc = Accumulator::new();
        acc.merge(scan(1, &[("1", "Claim one.")], &[("1", "Note one."), ("2", "Note two.")]));
        let table = acc.associate("doc.pdf");

        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].pointer, "Claim one.");
        assert_eq!(table.records[1].pointer, "");
        assert!(table.iter().all(|r| r.exhibit_count == 2));
        assert_eq!(table.stats.unmatched_definitions, 1);
    }

    #[test]
    fn test_repeated_citations_are_fifo() {
        let mut acc = Accumulator::new();
        acc.merge(scan(1, &[("4", "First cite."), ("4", "Second cite.")], &[]));
        acc.merge(scan(2, &[], &[("4", "Note four."), ("4", "Note four again.")]));
        let table = acc.associate("doc.pdf");

        assert_eq!(table.records[0].pointer, "First cite.");
        assert_eq!(table.records[1].pointer, "Second cite.");
        assert_eq!(table.records[1].page_number, 2);
    }

    #[test]
    fn test_unmatched_pointers_are_dropped() {
        let mut acc = Accumulator::new();
        acc.merge(scan(1, &[("9", "Orphan."), ("1", "Kept.")], &[("1", "Note.")]));
        let table = acc.associate("doc.pdf");

        assert_eq!(table.len(), 1);
        assert_eq!(table.stats.unmatched_pointers, 1);
        assert_eq!(table.stats.pointer_count, 2);
    }

    #[test]
    fn test_ids_are_dense() {
        let mut acc = Accumulator::new();
        acc.merge(scan(1, &[], &[("1", "a"), ("2", "b")]));
        acc.merge(PageScan::skipped(2));
        acc.merge(scan(3, &[], &[("3", "c")]));
        assert_eq!(acc.definition_count(), 3);
        let table = acc.associate("doc.pdf");

        let ids: Vec<u32> = table.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(table.stats.pages_scanned, 3);
        assert_eq!(table.stats.pages_skipped, 1);
    }
}
