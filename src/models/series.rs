//! Timeline series model.
//!
//! A [`Series`] is a flat, ordered list of range bars. Rows are implied by
//! each entry's `label`; renderers group on it. Colors are not stored here:
//! a renderer looks them up by task name in a
//! [`ColorMap`](crate::color::ColorMap).
//!
//! Entries serialize as `{x, y, completion, name}`, the shape range-bar
//! chart libraries expect (x = row label, y = `[start, end]`). Those
//! libraries take a list of series; [`Series::chart_series`] gives the
//! one-element `[{data: [...]}]` form.

use serde::{Deserialize, Serialize};

/// One bar on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// Row label (`"Cluster {cluster}: Node {slot}"`).
    #[serde(rename = "x")]
    pub label: String,
    /// `[start, end]` in seconds.
    #[serde(rename = "y")]
    pub interval: [f64; 2],
    /// Completion time; equals `interval[1]`.
    pub completion: f64,
    /// Task name, for tooltips and color lookup.
    pub name: String,
}

impl SeriesEntry {
    #[inline]
    pub fn start(&self) -> f64 {
        self.interval[0]
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.interval[1]
    }
}

/// Renderer-agnostic timeline series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub data: Vec<SeriesEntry>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// This series as a renderer's list of series, `[{"data": [...]}]`.
    pub fn chart_series(&self) -> [&Series; 1] {
        [self]
    }

    /// Distinct row labels in first-appearance order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for entry in &self.data {
            if !labels.contains(&entry.label.as_str()) {
                labels.push(&entry.label);
            }
        }
        labels
    }

    /// Entries grouped by row label, rows in first-appearance order.
    pub fn by_label(&self) -> Vec<(&str, Vec<&SeriesEntry>)> {
        let mut rows: Vec<(&str, Vec<&SeriesEntry>)> = Vec::new();
        for entry in &self.data {
            match rows.iter_mut().find(|(label, _)| *label == entry.label) {
                Some((_, entries)) => entries.push(entry),
                None => rows.push((entry.label.as_str(), vec![entry])),
            }
        }
        rows
    }

    /// Latest completion time, 0.0 for an empty series.
    pub fn makespan(&self) -> f64 {
        self.data.iter().map(|e| e.completion).fold(0.0, f64::max)
    }
}
