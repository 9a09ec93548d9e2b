//! In-memory tabular model.
//!
//! The reader builds a [`Frame`] from the first sheet of a workbook, and the
//! renderer turns it into console text. Nothing here knows about file formats.

mod frame;
mod value;

pub use frame::*;
pub use value::Value;

pub(crate) use value::{bool_text, datetime_text, duration_text, exponent_text, time_text};
