//! Conversion of decoded spreadsheet cells into model values.

use crate::model::Value;
use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Text cell contents that stand for missing data.
const NA_SENTINELS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Check if a text cell stands for missing data.
pub fn is_na_sentinel(text: &str) -> bool {
    NA_SENTINELS.contains(&text)
}

/// Check if a cell carries nothing at all.
pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Check if a row holds no data.
///
/// A row whose only content is whitespace text in the first sheet column
/// is blank too, matching how blank text lines are skipped.
pub fn is_blank_row(row: &[Data], starts_at_first_column: bool) -> bool {
    match row.iter().rposition(|c| !is_blank(c)) {
        None => true,
        Some(0) if starts_at_first_column => {
            matches!(&row[0], Data::String(s) if s.trim().is_empty())
        }
        Some(_) => false,
    }
}

/// Convert a data cell.
pub fn to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Empty,
        Data::Int(i) => Value::Int(*i),
        Data::Float(f) => Value::number(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::String(s) if is_na_sentinel(s) => Value::Empty,
        Data::String(s) => Value::Text(s.clone()),
        Data::DateTime(dt) => from_excel_datetime(dt),
        Data::DateTimeIso(s) => parse_iso_datetime(s).unwrap_or_else(|| Value::Text(s.clone())),
        Data::DurationIso(s) => parse_iso_duration(s)
            .map(Value::Duration)
            .unwrap_or_else(|| Value::Text(s.clone())),
    }
}

/// Convert a header cell. Unlike data cells, header text is never
/// treated as missing unless it is empty.
pub fn to_header_value(cell: &Data) -> Value {
    match cell {
        Data::String(s) if s.is_empty() => Value::Empty,
        Data::String(s) => Value::Text(s.clone()),
        other => to_value(other),
    }
}

/// Serial dates in `[0, 1)` only carry a time of day.
fn from_excel_datetime(dt: &ExcelDateTime) -> Value {
    if dt.is_duration() {
        return dt
            .as_duration()
            .map(Value::Duration)
            .unwrap_or_else(|| Value::number(dt.as_f64()));
    }

    let serial = dt.as_f64();
    match dt.as_datetime() {
        Some(ndt) if (0.0..1.0).contains(&serial) => Value::Time(ndt.time()),
        Some(ndt) => Value::DateTime(ndt),
        None => Value::number(serial),
    }
}

/// Parse the ISO 8601 date/time strings OpenDocument stores.
fn parse_iso_datetime(text: &str) -> Option<Value> {
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(Value::DateTime(dt));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(Value::DateTime);
    }
    NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
        .ok()
        .map(Value::Time)
}

/// Parse an ISO 8601 duration such as `PT12H30M00S` or `P1DT2H`.
fn parse_iso_duration(text: &str) -> Option<TimeDelta> {
    let body = text.strip_prefix('P')?;
    let (date_part, time_part) = body.split_once('T').unwrap_or((body, ""));

    let mut millis: f64 = 0.0;
    let mut number = String::new();
    let mut parsed_any = false;

    for (part, in_time) in [(date_part, false), (time_part, true)] {
        for c in part.chars() {
            if c.is_ascii_digit() || c == '.' {
                number.push(c);
                continue;
            }
            let amount: f64 = number.parse().ok()?;
            number.clear();
            let unit_ms = match (c, in_time) {
                ('D', false) => 86_400_000.0,
                ('W', false) => 7.0 * 86_400_000.0,
                ('H', true) => 3_600_000.0,
                ('M', true) => 60_000.0,
                ('S', true) => 1_000.0,
                _ => return None,
            };
            millis += amount * unit_ms;
            parsed_any = true;
        }
        if !number.is_empty() {
            return None;
        }
    }

    if !parsed_any {
        return None;
    }
    TimeDelta::try_milliseconds(millis.round() as i64)
}
