//! Plain text renderer implementation.

use crate::error::Result;
use crate::model::Frame;
use unicode_width::UnicodeWidthStr;

use super::format::{escape_text, format_column};
use super::options::RenderOptions;

/// Render a frame as an aligned console table.
///
/// Every row and every column is written; nothing is elided. The result has
/// no trailing newline.
pub fn to_text(frame: &Frame, options: &RenderOptions) -> Result<String> {
    if frame.is_empty() {
        return Ok(render_empty(frame));
    }

    let measure = |s: &str| display_len(s, options.east_asian_width);
    let mut columns: Vec<Vec<String>> = Vec::with_capacity(frame.column_count() + 1);

    if options.show_index {
        let mut index = Vec::with_capacity(frame.row_count() + 1);
        index.push(String::new());
        index.extend((0..frame.row_count()).map(|i| i.to_string()));
        columns.push(index);
    }

    for column in frame.columns() {
        let dtype = column.dtype();
        let mut header = escape_text(&column.label);
        if dtype.is_numeric() {
            header.insert(0, ' ');
        }

        let cells = format_column(column, dtype, options);
        let width = cells
            .iter()
            .map(|c| measure(c.as_str()))
            .chain(std::iter::once(measure(&header)))
            .max()
            .unwrap_or(0);

        let mut rendered = Vec::with_capacity(cells.len() + 1);
        rendered.push(pad_left(&header, width, &measure));
        rendered.extend(cells.iter().map(|c| pad_left(c, width, &measure)));
        columns.push(rendered);
    }

    Ok(adjoin(&columns, &measure))
}

/// Describe a frame without rows.
fn render_empty(frame: &Frame) -> String {
    let labels: Vec<String> = frame.labels().iter().map(|l| escape_text(l)).collect();
    format!(
        "Empty DataFrame\nColumns: [{}]\nIndex: []",
        labels.join(", ")
    )
}

/// Lay columns side by side, each left-justified to its widest cell and
/// separated by one space.
fn adjoin(columns: &[Vec<String>], measure: &dyn Fn(&str) -> usize) -> String {
    let widths: Vec<usize> = columns
        .iter()
        .map(|col| col.iter().map(|c| measure(c.as_str())).max().unwrap_or(0))
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut line = String::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            let cell = col.get(row).map(String::as_str).unwrap_or("");
            line.push_str(cell);
            line.push_str(&" ".repeat(widths[i].saturating_sub(measure(cell))));
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn pad_left(s: &str, width: usize, measure: &dyn Fn(&str) -> usize) -> String {
    let pad = width.saturating_sub(measure(s));
    format!("{}{}", " ".repeat(pad), s)
}

fn display_len(s: &str, east_asian: bool) -> usize {
    if east_asian {
        UnicodeWidthStr::width(s)
    } else {
        s.chars().count()
    }
}
