//! Error types for the xlsdump library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xlsdump operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or rendering a workbook.
///
/// Every variant ends up in the same one-line report, so the split only
/// matters to library callers and tests.
#[derive(Error, Debug)]
pub enum Error {
    /// The workbook file could not be opened or read.
    #[error("{source}: '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is neither a legacy nor an XML-based workbook.
    #[error("Excel file format cannot be determined, you must specify an engine manually.")]
    UnknownFormat,

    /// The workbook decoder rejected the file.
    #[error("{0}")]
    Workbook(String),

    /// The workbook holds no sheets at all.
    #[error("Worksheet index 0 is invalid, 0 worksheets found")]
    NoSheets,

    /// Error while producing the text block.
    #[error("Render error: {0}")]
    Render(String),

    /// A panic escaped the decoder and was caught at the report boundary.
    #[error("{0}")]
    Panicked(String),
}

impl Error {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileAccess {
            path: path.into(),
            source,
        }
    }
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Workbook(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Workbook(err.to_string())
    }
}
