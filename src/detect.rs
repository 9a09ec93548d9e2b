//! Workbook format detection.
//!
//! Detection looks at file content, never at the extension, so a text file
//! renamed to `.xlsx` is reported as an unknown format rather than being
//! handed to the wrong decoder.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Compound File Binary magic bytes used by legacy `.xls` workbooks.
const CFB_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Archive entries that identify each ZIP-based workbook flavour.
const XLSX_WORKBOOK_PART: &str = "xl/workbook.xml";
const XLSB_WORKBOOK_PART: &str = "xl/workbook.bin";
const ODS_CONTENT_PART: &str = "content.xml";

/// Detected workbook format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Office Open XML workbook (.xlsx, .xlsm)
    Xlsx,
    /// Binary Office Open XML workbook (.xlsb)
    Xlsb,
    /// Legacy BIFF workbook (.xls)
    Xls,
    /// OpenDocument spreadsheet (.ods)
    Ods,
}

impl FormatType {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Xlsx => "xlsx",
            FormatType::Xlsb => "xlsb",
            FormatType::Xls => "xls",
            FormatType::Ods => "ods",
        }
    }

    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            FormatType::Xlsx => "Excel Workbook",
            FormatType::Xlsb => "Excel Binary Workbook",
            FormatType::Xls => "Excel 97-2003 Workbook",
            FormatType::Ods => "OpenDocument Spreadsheet",
        }
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the format type from a file path.
///
/// # Example
///
/// ```no_run
/// use xlsdump::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("scores.xlsx")?;
/// println!("Detected format: {}", format);
/// # Ok::<(), xlsdump::Error>(())
/// ```
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Result<FormatType> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    detect_format_from_reader(BufReader::new(file)).map_err(|e| match e {
        Error::FileAccess { source, .. } => Error::file_access(path, source),
        other => other,
    })
}

/// Detect the format type from a byte slice.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<FormatType> {
    detect_format_from_reader(Cursor::new(data))
}

/// Detect the format type from a reader.
pub fn detect_format_from_reader<R: Read + Seek>(mut reader: R) -> Result<FormatType> {
    let mut head = Vec::with_capacity(CFB_MAGIC.len());
    reader
        .by_ref()
        .take(CFB_MAGIC.len() as u64)
        .read_to_end(&mut head)
        .map_err(|e| Error::file_access("<stream>", e))?;

    if is_cfb_file(&head) {
        return Ok(FormatType::Xls);
    }
    if !is_zip_file(&head) {
        return Err(Error::UnknownFormat);
    }

    reader
        .seek(SeekFrom::Start(0))
        .map_err(|e| Error::file_access("<stream>", e))?;
    let archive = zip::ZipArchive::new(reader)?;
    detect_by_archive_entries(&archive)
}

/// Classify a ZIP archive by the workbook part it carries.
fn detect_by_archive_entries<R: Read + Seek>(archive: &zip::ZipArchive<R>) -> Result<FormatType> {
    let has = |part: &str| archive.file_names().any(|n| n == part);

    if has(XLSX_WORKBOOK_PART) {
        Ok(FormatType::Xlsx)
    } else if has(XLSB_WORKBOOK_PART) {
        Ok(FormatType::Xlsb)
    } else if has(ODS_CONTENT_PART) {
        Ok(FormatType::Ods)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= ZIP_MAGIC.len() && data[..ZIP_MAGIC.len()] == ZIP_MAGIC
}

/// Check if data starts with the Compound File Binary signature.
pub fn is_cfb_file(data: &[u8]) -> bool {
    data.len() >= CFB_MAGIC.len() && data[..CFB_MAGIC.len()] == CFB_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn archive_with(entries: &[&str]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
            let options = SimpleFileOptions::default();
            for name in entries {
                zip.start_file(*name, options).unwrap();
                zip.write_all(b"<x/>").unwrap();
            }
            zip.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn test_format_type_display() {
        assert_eq!(FormatType::Xlsx.to_string(), "Excel Workbook");
        assert_eq!(FormatType::Ods.to_string(), "OpenDocument Spreadsheet");
    }

    #[test]
    fn test_format_type_extension() {
        assert_eq!(FormatType::Xlsx.extension(), "xlsx");
        assert_eq!(FormatType::Xlsb.extension(), "xlsb");
        assert_eq!(FormatType::Xls.extension(), "xls");
        assert_eq!(FormatType::Ods.extension(), "ods");
    }

    #[test]
    fn test_magic_checks() {
        assert!(is_zip_file(&[0x50, 0x4B, 0x03, 0x04, 0x00]));
        assert!(!is_zip_file(&[0x50, 0x4B])); // Too short
        assert!(is_cfb_file(&CFB_MAGIC));
        assert!(!is_cfb_file(&CFB_MAGIC[..4]));
    }

    #[test]
    fn test_detect_plain_text() {
        let result = detect_format_from_bytes(b"name,score\nkim,3\n");
        assert!(matches!(result, Err(Error::UnknownFormat)));

        let result = detect_format_from_bytes(b"");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_legacy_xls() {
        let mut data = CFB_MAGIC.to_vec();
        data.extend_from_slice(&[0u8; 32]);
        assert_eq!(detect_format_from_bytes(&data).unwrap(), FormatType::Xls);
    }

    #[test]
    fn test_detect_zip_flavours() {
        let xlsx = archive_with(&["[Content_Types].xml", "xl/workbook.xml"]);
        assert_eq!(detect_format_from_bytes(&xlsx).unwrap(), FormatType::Xlsx);

        let xlsb = archive_with(&["xl/workbook.bin"]);
        assert_eq!(detect_format_from_bytes(&xlsb).unwrap(), FormatType::Xlsb);

        let ods = archive_with(&["mimetype", "content.xml"]);
        assert_eq!(detect_format_from_bytes(&ods).unwrap(), FormatType::Ods);
    }

    #[test]
    fn test_detect_unrelated_zip() {
        let docx = archive_with(&["word/document.xml"]);
        assert!(matches!(
            detect_format_from_bytes(&docx),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_detect_truncated_zip() {
        let result = detect_format_from_bytes(&[0x50, 0x4B, 0x03, 0x04, 0x00, 0x00]);
        assert!(matches!(result, Err(Error::Workbook(_))));
    }

    #[test]
    fn test_detect_missing_file() {
        let result = detect_format_from_path("/nonexistent/dir/book.xlsx");
        assert!(matches!(result, Err(Error::FileAccess { .. })));
    }
}
