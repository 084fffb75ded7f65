//! JSON rendering for exhibit tables.

use crate::error::Result;
use crate::model::ExhibitTable;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize the records of a table as a JSON array.
pub fn to_json(table: &ExhibitTable, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&table.records)?,
        JsonFormat::Compact => serde_json::to_string(&table.records)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExhibitRecord;

    fn table() -> ExhibitTable {
        let mut table = ExhibitTable::new("a.pdf");
        table.records.push(ExhibitRecord {
            id: 1,
            source_file: "a.pdf".to_string(),
            pointer: String::new(),
            exhibit_number: "7".to_string(),
            exhibit_info: "Seventh note.".to_string(),
            page_number: 2,
            exhibit_count: 1,
        });
        table
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&table(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"exhibit_number\": \"7\""));
        assert!(json.contains("\"pointer\": \"\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&table(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        let back: Vec<ExhibitRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table().records);
    }
}
