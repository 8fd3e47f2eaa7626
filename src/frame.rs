//! Minimal ordered column table used as helper input.
//!
//! A [`Frame`] maps column names to equally long columns, in insertion
//! order. Numeric columns use NaN for missing values; in JSON those are
//! written as `null`.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::plotting::error::{PlotError, PlotResult};

/// A single column of numbers or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "RawColumn")]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColumn {
    Numbers(Vec<Option<f64>>),
    Text(Vec<String>),
}

impl From<RawColumn> for Column {
    fn from(raw: RawColumn) -> Self {
        match raw {
            RawColumn::Numbers(values) => {
                Column::Numeric(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
            }
            RawColumn::Text(values) => Column::Text(values),
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Numeric(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Text(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::Text(values.into_iter().map(String::from).collect())
    }
}

/// Level label of a number: integral values drop the trailing `.0`.
pub fn format_level(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display label of every cell.
    pub fn labels(&self) -> Vec<String> {
        match self {
            Column::Numeric(v) => v.iter().map(|x| format_level(*x)).collect(),
            Column::Text(v) => v.clone(),
        }
    }

    /// Distinct labels in order of first appearance.
    pub fn levels(&self) -> Vec<String> {
        let mut seen: IndexMap<String, ()> = IndexMap::new();
        for label in self.labels() {
            seen.entry(label).or_insert(());
        }
        seen.into_keys().collect()
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        match self {
            Column::Numeric(v) => v[a].total_cmp(&v[b]),
            Column::Text(v) => v[a].cmp(&v[b]),
        }
    }

    fn take(&self, rows: &[usize]) -> Column {
        match self {
            Column::Numeric(v) => Column::Numeric(rows.iter().map(|&i| v[i]).collect()),
            Column::Text(v) => Column::Text(rows.iter().map(|&i| v[i].clone()).collect()),
        }
    }
}

/// Insertion-ordered table of equally long columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, Column>", into = "IndexMap<String, Column>")]
pub struct Frame {
    columns: IndexMap<String, Column>,
}

impl TryFrom<IndexMap<String, Column>> for Frame {
    type Error = PlotError;

    fn try_from(columns: IndexMap<String, Column>) -> Result<Self, Self::Error> {
        let mut frame = Frame::new();
        for (name, column) in columns {
            frame.insert(name, column)?;
        }
        Ok(frame)
    }
}

impl From<Frame> for IndexMap<String, Column> {
    fn from(frame: Frame) -> Self {
        frame.columns
    }
}

impl Frame {
    pub fn new() -> Self {
        Frame::default()
    }

    /// Add or replace a column. Its length must match the existing rows.
    pub fn insert(&mut self, name: impl Into<String>, column: impl Into<Column>) -> PlotResult<()> {
        let name = name.into();
        let column = column.into();
        if let Some((_, existing)) = self.columns.iter().find(|(k, _)| **k != name) {
            if existing.len() != column.len() {
                return Err(PlotError::InvalidData(format!(
                    "column '{}' has {} rows, expected {}",
                    name,
                    column.len(),
                    existing.len()
                )));
            }
        }
        self.columns.insert(name, column);
        Ok(())
    }

    /// Builder form of [`Frame::insert`].
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> PlotResult<Self> {
        self.insert(name, column)?;
        Ok(self)
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn column(&self, name: &str) -> PlotResult<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| PlotError::InvalidData(format!("no column named '{}'", name)))
    }

    /// Values of a numeric column.
    pub fn numeric(&self, name: &str) -> PlotResult<&[f64]> {
        match self.column(name)? {
            Column::Numeric(values) => Ok(values),
            Column::Text(_) => Err(PlotError::InvalidData(format!(
                "column '{}' is not numeric",
                name
            ))),
        }
    }

    pub fn labels(&self, name: &str) -> PlotResult<Vec<String>> {
        Ok(self.column(name)?.labels())
    }

    pub fn levels(&self, name: &str) -> PlotResult<Vec<String>> {
        Ok(self.column(name)?.levels())
    }

    /// Rows reordered by `keys`, compared left to right. Ties keep their
    /// original order.
    pub fn sort_by(&self, keys: &[&str]) -> PlotResult<Frame> {
        let key_columns = keys
            .iter()
            .map(|k| self.column(k))
            .collect::<PlotResult<Vec<_>>>()?;
        let mut order: Vec<usize> = (0..self.n_rows()).collect();
        order.sort_by(|&a, &b| {
            key_columns
                .iter()
                .map(|c| c.compare(a, b))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        Ok(self.take(&order))
    }

    /// Frame holding only the given rows, in the given order.
    pub fn take(&self, rows: &[usize]) -> Frame {
        Frame {
            columns: self
                .columns
                .iter()
                .map(|(name, column)| (name.clone(), column.take(rows)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::new()
            .with_column("group", vec!["b", "a", "b", "a"])
            .unwrap()
            .with_column("dose", vec![2.0, 1.0, 1.0, 2.0])
            .unwrap()
            .with_column("score", vec![0.1, 0.2, 0.3, 0.4])
            .unwrap()
    }

    #[test]
    fn test_sort_by_multiple_keys() {
        let sorted = sample().sort_by(&["group", "dose"]).unwrap();
        assert_eq!(sorted.labels("group").unwrap(), vec!["a", "a", "b", "b"]);
        assert_eq!(sorted.numeric("dose").unwrap(), &[1.0, 2.0, 1.0, 2.0]);
        assert_eq!(sorted.numeric("score").unwrap(), &[0.2, 0.4, 0.3, 0.1]);
    }

    #[test]
    fn test_levels_first_appearance() {
        let frame = sample();
        assert_eq!(frame.levels("group").unwrap(), vec!["b", "a"]);
        assert_eq!(frame.levels("dose").unwrap(), vec!["2", "1"]);
        assert_eq!(format_level(0.5), "0.5");
    }

    #[test]
    fn test_errors_name_the_column() {
        let frame = sample();
        let err = frame.numeric("group").unwrap_err().to_string();
        assert!(err.contains("'group'"));
        assert!(frame.column("missing").is_err());
        let mut frame = frame;
        assert!(frame.insert("short", vec![1.0]).is_err());
    }

    #[test]
    fn test_deserialize_with_missing_values() {
        let frame: Frame =
            serde_json::from_str(r#"{"a": [1, null, 3], "b": ["x", "y", "z"]}"#).unwrap();
        assert_eq!((frame.n_rows(), frame.n_columns()), (3, 2));
        assert_eq!(frame.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(frame.numeric("a").unwrap()[1].is_nan());

        let ragged: Result<Frame, _> = serde_json::from_str(r#"{"a": [1, 2], "b": ["x"]}"#);
        assert!(ragged.is_err());
    }
}
