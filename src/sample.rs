//! Sample document generator.
//!
//! Builds a one-page letter-size PDF with three cited sentences in the body
//! and the matching footnotes near the bottom edge, followed by a running
//! "Page 1" footer. Markers are set as raised 7pt runs, the way word
//! processors typeset footnote references.

use std::io::Write;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::error::Result;

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;

const BODY_SIZE: i64 = 12;
const NOTE_SIZE: i64 = 10;
const MARKER_SIZE: i64 = 7;
const FOOTER_SIZE: i64 = 8;
const MARKER_RISE: i64 = 4;

/// Body lines as (text before marker, marker, text after marker).
const BODY: [(&str, &str, &str); 3] = [
    (
        "This is the first sentence of the document, and it contains a reference to the first footnote",
        "1",
        ".",
    ),
    (
        "Here is another sentence with a second footnote reference",
        "2",
        ".",
    ),
    ("A third reference", "3", " can be found in this line."),
];

/// Footnote entries as (label, text).
const NOTES: [(&str, &str); 3] = [
    ("1", " This is the first footnote, providing more detail."),
    ("2", " The second footnote is here, with additional information."),
    ("3", " And finally, the third footnote appears here."),
];

/// Build the sample document in memory.
pub fn sample_document() -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let content = Content {
        operations: page_operations(),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

/// Write the sample PDF to `path`.
pub fn create_sample_pdf<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut doc = sample_document()?;
    doc.save(path)?;
    log::info!("Created sample document {}", path.display());
    Ok(())
}

/// Write the sample PDF to any writer.
pub fn write_sample<W: Write>(writer: &mut W) -> Result<()> {
    let mut doc = sample_document()?;
    doc.save_to(writer)?;
    Ok(())
}

/// The sample PDF as bytes.
pub fn sample_bytes() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_sample(&mut buf)?;
    Ok(buf)
}

fn page_operations() -> Vec<Operation> {
    let mut ops = Vec::new();

    // Body, from one inch below the top edge, 20pt apart
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Td",
        vec![72.into(), (PAGE_HEIGHT - 72).into()],
    ));
    for (i, (before, marker, after)) in BODY.iter().enumerate() {
        if i > 0 {
            ops.push(Operation::new("Td", vec![0.into(), (-20).into()]));
        }
        show(&mut ops, BODY_SIZE, before);
        show_marker(&mut ops, marker);
        show(&mut ops, BODY_SIZE, after);
    }
    ops.push(Operation::new("ET", vec![]));

    // Footnotes, 14pt apart
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Td", vec![72.into(), 120.into()]));
    for (i, (label, text)) in NOTES.iter().enumerate() {
        if i > 0 {
            ops.push(Operation::new("Td", vec![0.into(), (-14).into()]));
        }
        show_marker(&mut ops, label);
        show(&mut ops, NOTE_SIZE, text);
    }
    ops.push(Operation::new("ET", vec![]));

    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Td", vec![290.into(), 30.into()]));
    show(&mut ops, FOOTER_SIZE, "Page 1");
    ops.push(Operation::new("ET", vec![]));

    ops
}

fn set_font(ops: &mut Vec<Operation>, size: i64) {
    ops.push(Operation::new("Tf", vec!["F1".into(), size.into()]));
}

fn show(ops: &mut Vec<Operation>, size: i64, text: &str) {
    set_font(ops, size);
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
}

fn show_marker(ops: &mut Vec<Operation>, label: &str) {
    set_font(ops, MARKER_SIZE);
    ops.push(Operation::new("Ts", vec![MARKER_RISE.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(label)]));
    ops.push(Operation::new("Ts", vec![0.into()]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{LayoutSource, PdfLayoutSource};

    #[test]
    fn test_sample_bytes_are_pdf() {
        let bytes = sample_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_sample_layout() {
        let source = PdfLayoutSource::from_bytes(&sample_bytes().unwrap()).unwrap();
        assert_eq!(source.page_numbers(), vec![1]);

        let page = source.load_page(1).unwrap();
        assert_eq!(page.dimensions(), (612.0, 792.0));

        let markers: Vec<&str> = page
            .spans
            .iter()
            .filter(|s| s.is_superscript)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(markers, vec!["1", "2", "3", "1", "2", "3"]);

        let footer = page.spans.last().unwrap();
        assert_eq!(footer.text, "Page 1");
        assert_eq!(footer.origin_y, 762.0);
    }
}
