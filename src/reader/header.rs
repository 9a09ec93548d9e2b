//! Column label inference from the header row.

use crate::model::Value;
use std::collections::HashMap;

/// Turn header row values into unique column labels.
///
/// Missing labels become `Unnamed: <position>`. Repeated labels get a
/// numeric suffix: `X`, `X.1`, `X.2`. A suffixed name that is already
/// taken gets suffixed again.
pub fn column_labels(header: &[Value]) -> Vec<String> {
    let raw = header
        .iter()
        .enumerate()
        .map(|(i, v)| v.label().unwrap_or_else(|| format!("Unnamed: {}", i)));

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut labels = Vec::with_capacity(header.len());

    for mut label in raw {
        let mut seen = counts.get(&label).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(label.clone(), seen + 1);
            label = format!("{}.{}", label, seen);
            seen = counts.get(&label).copied().unwrap_or(0);
        }
        counts.insert(label.clone(), seen + 1);
        labels.push(label);
    }

    labels
}
