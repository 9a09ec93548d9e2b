//! Cell value model.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// A single cell of the tabular dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Missing data
    #[default]
    Empty,
    /// Whole number
    Int(i64),
    /// Fractional (or out of `i64` range) number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Text
    Text(String),
    /// Calendar date with time of day
    DateTime(NaiveDateTime),
    /// Time of day without a date
    Time(NaiveTime),
    /// Elapsed time
    Duration(TimeDelta),
}

impl Value {
    /// Build a numeric value, folding whole floats into `Int`.
    pub fn number(f: f64) -> Self {
        if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Value::Int(f as i64)
        } else {
            Value::Float(f)
        }
    }

    /// Check if this value is missing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Check if this value is an integer or float.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Text used when this value appears as a column label.
    ///
    /// Returns `None` for missing values so the caller can substitute a
    /// positional name.
    pub fn label(&self) -> Option<String> {
        match self {
            Value::Empty => None,
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(float_repr(*f)),
            Value::Bool(b) => Some(bool_text(*b).to_string()),
            Value::Text(s) => Some(s.clone()),
            Value::DateTime(dt) => Some(datetime_text(dt, false)),
            Value::Time(t) => Some(time_text(t)),
            Value::Duration(d) => Some(duration_text(d)),
        }
    }
}

pub(crate) fn bool_text(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

/// Shortest round-trip form of a float, with an explicit exponent sign and
/// at least two exponent digits outside `[1e-4, 1e16)`.
pub(crate) fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = f.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        return exponent_text(format!("{:e}", f));
    }

    let text = f.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Rewrite the exponent of Rust's `{:e}` output as a sign and at least two
/// digits, so `1.5e-5` becomes `1.5e-05` and `1e20` becomes `1e+20`.
pub(crate) fn exponent_text(raw: String) -> String {
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}

/// `YYYY-MM-DD HH:MM:SS`, or just the date when `date_only` is set.
/// Sub-second precision is kept as microseconds when present.
pub(crate) fn datetime_text(dt: &NaiveDateTime, date_only: bool) -> String {
    if date_only {
        dt.format("%Y-%m-%d").to_string()
    } else if dt.nanosecond() / 1_000 != 0 {
        dt.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

pub(crate) fn time_text(t: &NaiveTime) -> String {
    if t.nanosecond() / 1_000 != 0 {
        t.format("%H:%M:%S%.6f").to_string()
    } else {
        t.format("%H:%M:%S").to_string()
    }
}

/// `D days HH:MM:SS`, negative spans carry the sign on the day count.
pub(crate) fn duration_text(d: &TimeDelta) -> String {
    let total = d.num_seconds();
    let days = total.div_euclid(86_400);
    let rest = total.rem_euclid(86_400);
    format!(
        "{} days {:02}:{:02}:{:02}",
        days,
        rest / 3_600,
        (rest % 3_600) / 60,
        rest % 60
    )
}
