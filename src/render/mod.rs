//! Output sinks for exhibit tables.

mod json;
mod spreadsheet;
mod text;
mod workbook;

pub use json::{to_json, JsonFormat};
pub use spreadsheet::{to_csv, write_csv};
pub use text::{to_text_table, DEFAULT_MAX_CELL_WIDTH};
pub use workbook::{to_xlsx, write_xlsx, SHEET_NAME};

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::ExhibitTable;

/// File format for [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Pretty-printed JSON array of records
    Json,
    /// Excel workbook with one sheet of records
    Xlsx,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// What [`export`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The table was written to this path
    Written(PathBuf),
    /// The table had no rows; nothing was written
    Empty,
}

/// Write a table to `path`.
///
/// An empty table produces no file.
pub fn export<P: AsRef<Path>>(
    table: &ExhibitTable,
    path: P,
    format: ExportFormat,
) -> Result<ExportOutcome> {
    let path = path.as_ref();
    if table.is_empty() {
        log::info!(
            "{}: empty exhibit table, not writing {}",
            table.source_file,
            path.display()
        );
        return Ok(ExportOutcome::Empty);
    }

    match format {
        ExportFormat::Csv => write_csv(table, BufWriter::new(File::create(path)?))?,
        ExportFormat::Json => std::fs::write(path, to_json(table, JsonFormat::Pretty)?)?,
        ExportFormat::Xlsx => write_xlsx(table, path)?,
    }

    log::info!("Wrote {} exhibits to {}", table.len(), path.display());
    Ok(ExportOutcome::Written(path.to_path_buf()))
}
