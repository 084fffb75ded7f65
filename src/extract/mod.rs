//! Marker-to-definition association engine.
//!
//! Each page goes through the same steps: split into body and footnote
//! regions, estimate the body font size, scan the body for markers and
//! their citing sentences, then scan the footnote region for definitions.
//! Page scans are merged in page order and associated once the whole
//! document has been seen.

mod associate;
mod baseline;
mod definition;
mod marker;
mod options;
mod pointer;
mod region;

pub use associate::{Accumulator, PageScan};
pub use baseline::{estimate_baseline, FontHistogram};
pub use definition::{flatten_region, DefinitionExtractor};
pub use marker::MarkerPolicy;
pub use options::{ErrorMode, ExtractOptions, PageSelection};
pub use pointer::{last_sentence, split_sentences, PointerAccumulator};
pub use region::{Region, RegionSplit};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{ExhibitTable, Page, Span};
use crate::parser::LayoutSource;

/// Scan one page for pointers and definitions.
///
/// Pages without visible text are skipped with a warning.
pub fn scan_page(page: &Page, options: &ExtractOptions) -> PageScan {
    let split = RegionSplit::for_page(page, options.split_ratio);

    let baseline = match estimate_baseline(page) {
        Ok(size) => size,
        Err(e) => {
            log::warn!("Skipping page {}: {}", page.number, e);
            return PageScan::skipped(page.number);
        }
    };
    let policy = MarkerPolicy::new(baseline, options.marker_size_delta);

    let (body, footnotes): (Vec<&Span>, Vec<&Span>) = page
        .spans
        .iter()
        .partition(|s| split.classify(s) == Region::Body);

    let mut accumulator = PointerAccumulator::new(page.number);
    let mut pointers = Vec::new();
    for span in body {
        match policy.marker_label(span) {
            Some(label) => pointers.push(accumulator.take_pointer(label)),
            None => accumulator.push_text(span),
        }
    }

    let footnote_text = flatten_region(footnotes, options.marker_size_delta);
    let definitions =
        DefinitionExtractor::new(options.skip_page_footers).extract(&footnote_text, page.number);

    log::debug!(
        "Page {}: baseline {:.1}pt, {} pointers, {} definitions",
        page.number,
        baseline,
        pointers.len(),
        definitions.len()
    );

    PageScan {
        page_number: page.number,
        baseline: Some(baseline),
        pointers,
        definitions,
    }
}

/// Materialize the selected pages of a layout source.
///
/// In lenient mode a page that fails to load is logged and treated as empty.
pub fn load_pages<S>(source: &S, options: &ExtractOptions) -> Result<Vec<Page>>
where
    S: LayoutSource + ?Sized,
{
    let mut pages = Vec::new();
    for number in source
        .page_numbers()
        .into_iter()
        .filter(|n| options.pages.includes(*n))
    {
        match source.load_page(number) {
            Ok(page) => pages.push(page),
            Err(e) if options.error_mode == ErrorMode::Lenient => {
                log::warn!("Failed to read layout of page {}: {}", number, e);
                pages.push(Page::new(number, 0.0, 0.0));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(pages)
}

/// Scan pages and associate their findings into an exhibit table.
///
/// With `options.parallel` the pages are scanned on the rayon pool; the
/// scans are still merged in page order, so the table is the same either way.
pub fn extract_pages(pages: &[Page], source_file: &str, options: &ExtractOptions) -> ExhibitTable {
    let scans: Vec<PageScan> = if options.parallel && pages.len() > 1 {
        pages.par_iter().map(|p| scan_page(p, options)).collect()
    } else {
        pages.iter().map(|p| scan_page(p, options)).collect()
    };

    let mut accumulator = Accumulator::new();
    for scan in scans {
        accumulator.merge(scan);
    }

    if accumulator.definition_count() == 0 {
        log::info!("{}: no footnote definitions found", source_file);
    }

    let table = accumulator.associate(source_file);
    if table.stats.unmatched_pointers > 0 {
        log::debug!(
            "{}: {} pointers without a definition",
            source_file,
            table.stats.unmatched_pointers
        );
    }
    table
}

/// Run the full pipeline over a layout source.
pub fn extract_from_source<S>(
    source: &S,
    source_file: &str,
    options: &ExtractOptions,
) -> Result<ExhibitTable>
where
    S: LayoutSource + ?Sized,
{
    let pages = load_pages(source, options)?;
    if pages.is_empty() && options.pages != PageSelection::All {
        return Err(Error::InvalidPageRange(format!(
            "{:?} selects no pages of {}",
            options.pages, source_file
        )));
    }
    Ok(extract_pages(&pages, source_file, options))
}
