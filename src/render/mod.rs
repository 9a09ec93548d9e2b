//! Output rendering for frames.
//!
//! This module turns a [`Frame`](crate::model::Frame) into the aligned
//! plain-text table printed on the console.
//!
//! # Example
//!
//! ```no_run
//! use xlsdump::{reader::read_excel, render::*};
//!
//! let frame = read_excel("scores.xlsx")?;
//! let text = to_text(&frame, &RenderOptions::default())?;
//! println!("{}", text);
//! # Ok::<(), xlsdump::Error>(())
//! ```

mod format;
mod options;
mod text;

pub use format::{escape_text, format_floats};
pub use options::RenderOptions;
pub use text::to_text;
