//! Per-column cell formatting.
//!
//! Every function here returns one string per value, not yet padded to the
//! column width. Positive numbers and text carry one leading space where a
//! minus sign would go.

use crate::model::{
    bool_text, datetime_text, duration_text, exponent_text, time_text, Column, DType, Value,
};
use chrono::Timelike;

use super::options::RenderOptions;

/// Marker for missing dates and durations.
const NAT: &str = "NaT";

/// Format every value of a column according to its inferred type.
pub fn format_column(column: &Column, dtype: DType, options: &RenderOptions) -> Vec<String> {
    match dtype {
        DType::Int => column.values.iter().map(format_int).collect(),
        DType::Float => {
            let values: Vec<Option<f64>> = column
                .values
                .iter()
                .map(|v| v.as_f64().filter(|f| !f.is_nan()))
                .collect();
            format_floats(&values, options.precision, &options.na_rep)
        }
        DType::Bool => column
            .values
            .iter()
            .map(|v| format!(" {}", object_text(v, options)))
            .collect(),
        DType::DateTime => format_datetimes(&column.values),
        DType::Duration => column
            .values
            .iter()
            .map(|v| match v {
                Value::Duration(d) => duration_text(d),
                _ => NAT.to_string(),
            })
            .collect(),
        DType::Object => column
            .values
            .iter()
            .map(|v| format_object(v, options))
            .collect(),
    }
}

fn format_int(value: &Value) -> String {
    match value {
        Value::Int(i) if *i < 0 => i.to_string(),
        Value::Int(i) => format!(" {}", i),
        other => format!(" {}", other.label().unwrap_or_default()),
    }
}

/// Dates print without a time when every value sits at midnight.
fn format_datetimes(values: &[Value]) -> Vec<String> {
    let date_only = values.iter().all(|v| match v {
        Value::DateTime(dt) => dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0,
        _ => true,
    });

    values
        .iter()
        .map(|v| match v {
            Value::DateTime(dt) => datetime_text(dt, date_only),
            _ => NAT.to_string(),
        })
        .collect()
}

/// Format a cell of a mixed column.
fn format_object(value: &Value, options: &RenderOptions) -> String {
    match value {
        Value::Float(f) if f.is_nan() => format!(" {}", options.na_rep),
        Value::Float(f) => trim_zeros_single(&fixed(*f, options.precision)),
        other => format!(" {}", object_text(other, options)),
    }
}

fn object_text(value: &Value, options: &RenderOptions) -> String {
    match value {
        Value::Empty => options.na_rep.clone(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => fixed(*f, options.precision).trim_start().to_string(),
        Value::Bool(b) => bool_text(*b).to_string(),
        Value::Text(s) => escape_text(s),
        Value::DateTime(dt) => datetime_text(dt, false),
        Value::Time(t) => time_text(t),
        Value::Duration(d) => duration_text(d),
    }
}

/// Escape control characters that would break the row layout.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Fixed notation with a leading space for non-negative values.
fn fixed(f: f64, precision: usize) -> String {
    if f.is_sign_negative() && !f.is_nan() {
        format!("{:.*}", precision, f)
    } else {
        format!(" {:.*}", precision, f)
    }
}

/// Scientific notation with a signed two-digit exponent.
fn scientific(f: f64, precision: usize) -> String {
    if !f.is_finite() {
        return fixed(f, precision);
    }
    let formatted = exponent_text(format!("{:.*e}", precision, f));
    if f.is_sign_negative() {
        formatted
    } else {
        format!(" {}", formatted)
    }
}

/// Format a float column so every value shows the same number of decimals.
///
/// Columns with tiny non-zero values, or with large values that would not
/// fit in `precision + 6` characters, switch to scientific notation.
pub fn format_floats(values: &[Option<f64>], precision: usize, na_rep: &str) -> Vec<String> {
    let with = |f: fn(f64, usize) -> String| -> Vec<String> {
        let mut out: Vec<String> = values
            .iter()
            .map(|v| match v {
                Some(x) => f(*x, precision),
                None => na_rep.to_string(),
            })
            .collect();
        trim_zeros_uniform(&mut out);
        out
    };

    let formatted = with(fixed);

    let max_len = formatted.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    let too_long = max_len > precision + 6;
    let finite = values.iter().flatten().filter(|f| f.is_finite()).map(|f| f.abs());
    let has_large = finite.clone().any(|a| a > 1e6);
    let threshold = 10f64.powi(-(precision as i32));
    let has_small = finite.clone().any(|a| a > 0.0 && a < threshold);

    if has_small || (too_long && has_large) {
        with(scientific)
    } else {
        formatted
    }
}

/// Check for `[space][sign]digits.digits` with nothing else.
fn is_number_with_decimal(s: &str) -> bool {
    let body = s.trim_start();
    let body = body.strip_prefix(['+', '-']).unwrap_or(body);
    match body.split_once('.') {
        Some((int_part, frac)) => {
            !int_part.is_empty()
                && int_part.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Strip trailing zeros from every decimal number in lockstep, keeping at
/// least one digit after the point.
fn trim_zeros_uniform(values: &mut [String]) {
    loop {
        let mut numbers = values.iter().filter(|s| is_number_with_decimal(s)).peekable();
        if numbers.peek().is_none() || !numbers.all(|s| s.ends_with('0')) {
            break;
        }
        for s in values.iter_mut().filter(|s| is_number_with_decimal(s)) {
            s.pop();
        }
    }
    for s in values.iter_mut() {
        if is_number_with_decimal(s) && s.ends_with('.') {
            s.push('0');
        }
    }
}

/// Strip trailing zeros from one decimal number, keeping at least one
/// digit after the point.
fn trim_zeros_single(s: &str) -> String {
    let mut out = s.to_string();
    if is_number_with_decimal(&out) {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.push('0');
        }
    }
    out
}
