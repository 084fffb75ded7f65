//! Source document checks: existence and PDF header sniffing.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// Length of a version string such as "1.7".
const VERSION_LEN: usize = 3;

/// Version declared in a PDF header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfVersion(pub String);

impl std::fmt::Display for PdfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.0)
    }
}

/// Verify that `path` names an existing PDF file.
///
/// A missing path yields [`Error::SourceNotFound`] so callers can tell it
/// apart from unreadable or malformed documents.
pub fn check_source<P: AsRef<Path>>(path: P) -> Result<PdfVersion> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }

    let mut header = Vec::with_capacity(16);
    File::open(path)?.take(16).read_to_end(&mut header)?;
    sniff_header(&header)
}

/// Read the PDF version from the first bytes of a document.
pub fn sniff_header(data: &[u8]) -> Result<PdfVersion> {
    let rest = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    let version = rest.get(..VERSION_LEN).ok_or(Error::UnknownFormat)?;

    match version {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => Ok(
            PdfVersion(String::from_utf8_lossy(version).into_owned()),
        ),
        _ => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(version).into_owned(),
        )),
    }
}
