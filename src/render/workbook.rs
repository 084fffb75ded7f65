//! Excel workbook output.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::Result;
use crate::model::ExhibitTable;

/// Worksheet holding the exhibit rows.
pub const SHEET_NAME: &str = "Exhibits";

fn fill_sheet(sheet: &mut Worksheet, table: &ExhibitTable) -> Result<()> {
    let header = Format::new().set_bold();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in crate::model::ExhibitRecord::COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (idx, record) in table.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_number(row, 0, record.id)?;
        sheet.write_string(row, 1, record.source_file.as_str())?;
        sheet.write_string(row, 2, record.pointer.as_str())?;
        sheet.write_string(row, 3, record.exhibit_number.as_str())?;
        sheet.write_string(row, 4, record.exhibit_info.as_str())?;
        sheet.write_number(row, 5, record.page_number)?;
        sheet.write_number(row, 6, record.exhibit_count)?;
    }
    Ok(())
}

fn build(table: &ExhibitTable) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    fill_sheet(workbook.add_worksheet(), table)?;
    Ok(workbook)
}

/// Render a table as the bytes of an `.xlsx` file.
pub fn to_xlsx(table: &ExhibitTable) -> Result<Vec<u8>> {
    Ok(build(table)?.save_to_buffer()?)
}

/// Write a table to an `.xlsx` file with a bold header row.
pub fn write_xlsx<P: AsRef<Path>>(table: &ExhibitTable, path: P) -> Result<()> {
    build(table)?.save(path.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExhibitRecord;

    #[test]
    fn test_workbook_is_zip_container() {
        let mut table = ExhibitTable::new("memo.pdf");
        table.records.push(ExhibitRecord {
            id: 1,
            source_file: "memo.pdf".to_string(),
            pointer: "The lease was signed".to_string(),
            exhibit_number: "1".to_string(),
            exhibit_info: "Lease dated May 2.".to_string(),
            page_number: 1,
            exhibit_count: 1,
        });

        let bytes = to_xlsx(&table).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memo.xlsx");
        write_xlsx(&table, &path).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(b"PK"));
    }
}
