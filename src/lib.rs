//! # xlsdump
//!
//! Print the first sheet of a spreadsheet workbook as a console table.
//!
//! Workbook decoding is delegated to `calamine`; this crate picks the
//! decoder from the file content, turns the first sheet into a [`Frame`]
//! with inferred column types, and renders every row and column as aligned
//! plain text.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Either the whole table or one "Error reading excel file: ..." line.
//! let output = xlsdump::report("scores.xlsx");
//! println!("{}", output);
//!
//! // Fallible variant for callers that want to handle errors themselves.
//! let table = xlsdump::dump("scores.xlsx")?;
//! # Ok::<(), xlsdump::Error>(())
//! ```
//!
//! ## Step by step
//!
//! ```no_run
//! use xlsdump::{reader::read_excel, render::{to_text, RenderOptions}};
//!
//! let frame = read_excel("scores.xlsx")?;
//! let options = RenderOptions::new().with_east_asian_width(true);
//! println!("{}", to_text(&frame, &options)?);
//! # Ok::<(), xlsdump::Error>(())
//! ```

pub mod detect;
pub mod error;
pub mod model;
pub mod reader;
pub mod render;

// Re-exports
pub use detect::{detect_format_from_bytes, detect_format_from_path, FormatType};
pub use error::{Error, Result};
pub use model::{Column, DType, Frame, Value};
pub use reader::read_excel;
pub use render::{to_text, RenderOptions};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Prefix of the single line printed when a workbook cannot be shown.
pub const ERROR_PREFIX: &str = "Error reading excel file";

/// Read a workbook and render its first sheet with default options.
pub fn dump(path: impl AsRef<Path>) -> Result<String> {
    dump_with_options(path, &RenderOptions::default())
}

/// Read a workbook and render its first sheet.
pub fn dump_with_options(path: impl AsRef<Path>, options: &RenderOptions) -> Result<String> {
    let frame = read_excel(path)?;
    render::to_text(&frame, options)
}

/// Read and render a workbook, absorbing every failure.
///
/// Returns the rendered table, or a single line
/// `Error reading excel file: <description>`. Panics raised while decoding
/// are caught and reported the same way, so this never fails.
pub fn report(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| dump(path)))
        .unwrap_or_else(|payload| Err(Error::Panicked(panic_message(payload.as_ref()))));

    match outcome {
        Ok(text) => text,
        Err(e) => {
            log::debug!("{}: {:?}", path.display(), e);
            error_line(&e)
        }
    }
}

/// Format an error as the one-line report.
pub fn error_line(err: &Error) -> String {
    let description = err.to_string().replace(['\r', '\n'], " ");
    format!("{}: {}", ERROR_PREFIX, description)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected panic while reading workbook".to_string()
    }
}
