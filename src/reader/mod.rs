//! Workbook reader.
//!
//! Loads the first sheet of a workbook into a [`Frame`]. Decoding of the
//! file formats themselves is left to `calamine`; this module only picks
//! the decoder, converts cells and infers the header.
//!
//! # Example
//!
//! ```no_run
//! use xlsdump::reader::read_excel;
//!
//! let frame = read_excel("scores.xlsx")?;
//! println!("{} rows x {} columns", frame.row_count(), frame.column_count());
//! # Ok::<(), xlsdump::Error>(())
//! ```

mod cell;
mod header;

pub use cell::is_na_sentinel;
pub use header::column_labels;

use crate::detect::{detect_format_from_path, FormatType};
use crate::error::{Error, Result};
use crate::model::{Column, Frame, Value};
use calamine::{open_workbook, Data, Ods, Range, Reader, Sheets, Xls, Xlsb, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read the first sheet of a workbook, using its first non-blank row as
/// column labels.
pub fn read_excel(path: impl AsRef<Path>) -> Result<Frame> {
    let path = path.as_ref();
    let format = detect_format_from_path(path)?;
    log::debug!("{}: detected {}", path.display(), format);

    let mut workbook = open_sheets(path, format)?;
    let sheet_name = workbook.sheet_names().first().cloned();
    let range = workbook.worksheet_range_at(0).ok_or(Error::NoSheets)??;

    let frame = frame_from_range(&range)?;
    log::debug!(
        "{}: sheet {:?} -> {} rows x {} columns",
        path.display(),
        sheet_name.unwrap_or_default(),
        frame.row_count(),
        frame.column_count()
    );
    Ok(frame)
}

/// Open the workbook with the decoder matching its detected format.
fn open_sheets(path: &Path, format: FormatType) -> Result<Sheets<BufReader<File>>> {
    let sheets = match format {
        FormatType::Xlsx => Sheets::Xlsx(open_as::<Xlsx<_>>(path)?),
        FormatType::Xlsb => Sheets::Xlsb(open_as::<Xlsb<_>>(path)?),
        FormatType::Xls => Sheets::Xls(open_as::<Xls<_>>(path)?),
        FormatType::Ods => Sheets::Ods(open_as::<Ods<_>>(path)?),
    };
    Ok(sheets)
}

fn open_as<R>(path: &Path) -> Result<R>
where
    R: Reader<BufReader<File>>,
    calamine::Error: From<R::Error>,
{
    open_workbook::<R, _>(path).map_err(|e| Error::from(calamine::Error::from(e)))
}

/// Build a frame from a decoded cell range.
///
/// Columns left of the used range are kept (empty) so positions match the
/// sheet, and blank rows are dropped.
pub fn frame_from_range(range: &Range<Data>) -> Result<Frame> {
    let left_pad = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let mut rows = range
        .rows()
        .filter(|row| !cell::is_blank_row(row, left_pad == 0));

    let header_row = match rows.next() {
        Some(row) => row,
        None => return Ok(Frame::new()),
    };

    let width = left_pad + header_row.len();
    let header: Vec<Value> = std::iter::repeat(Value::Empty)
        .take(left_pad)
        .chain(header_row.iter().map(cell::to_header_value))
        .collect();

    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); width];
    for row in rows {
        for slot in columns.iter_mut().take(left_pad) {
            slot.push(Value::Empty);
        }
        for (slot, data) in columns.iter_mut().skip(left_pad).zip(row) {
            slot.push(cell::to_value(data));
        }
    }

    let mut frame = Frame::new();
    for (label, values) in column_labels(&header).into_iter().zip(columns) {
        frame.push_column(Column::new(label, values))?;
    }
    Ok(frame)
}
