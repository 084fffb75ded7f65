//! CSV output, readable by any spreadsheet application.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::{ExhibitRecord, ExhibitTable};

/// Write the header row and every record as CSV.
pub fn write_csv<W: Write>(table: &ExhibitTable, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(ExhibitRecord::COLUMNS)?;
    for record in table {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render a table as a CSV string.
pub fn to_csv(table: &ExhibitTable) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ExhibitTable {
        let mut table = ExhibitTable::new("memo.pdf");
        table.records.push(ExhibitRecord {
            id: 1,
            source_file: "memo.pdf".to_string(),
            pointer: "The lease was signed, then voided.".to_string(),
            exhibit_number: "1".to_string(),
            exhibit_info: "Lease, \"Exhibit A\".".to_string(),
            page_number: 1,
            exhibit_count: 1,
        });
        table
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let csv = to_csv(&table()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "id,source_file,pointer,exhibit_number,exhibit_info,page_number,exhibit_count"
        );
        assert_eq!(
            lines[1],
            "1,memo.pdf,\"The lease was signed, then voided.\",1,\"Lease, \"\"Exhibit A\"\".\",1,1"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let csv = to_csv(&ExhibitTable::new("none.pdf")).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
