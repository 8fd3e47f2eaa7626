//! Histogram binning.

use serde::Deserialize;

use super::describe::linspace;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::finite_range;

/// Histogram bins: a bin count over the data range or explicit edges.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Bins {
    Count(usize),
    Edges(Vec<f64>),
}

impl Default for Bins {
    fn default() -> Self {
        Bins::Count(10)
    }
}

impl Bins {
    /// Resolve to ascending bin edges for `values`.
    pub fn edges(&self, values: &[f64]) -> PlotResult<Vec<f64>> {
        match self {
            Bins::Count(0) => Err(PlotError::InvalidArgument(
                "bin count must be at least 1".to_string(),
            )),
            Bins::Count(n) => {
                let (lo, hi) = finite_range(values).ok_or(PlotError::EmptyData)?;
                let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
                Ok(linspace(lo, hi, n + 1))
            }
            Bins::Edges(edges) => {
                if edges.len() < 2 || edges.windows(2).any(|w| !(w[0] < w[1])) {
                    return Err(PlotError::InvalidArgument(
                        "bin edges must be at least two strictly increasing values".to_string(),
                    ));
                }
                Ok(edges.clone())
            }
        }
    }
}

/// Count `values` into the bins defined by `edges`.
///
/// Bins are half-open `[e_i, e_{i+1})` except the last, which is closed.
/// NaNs and values outside the edges are ignored.
pub fn histogram(values: &[f64], edges: &[f64]) -> Vec<usize> {
    let n_bins = edges.len().saturating_sub(1);
    let mut counts = vec![0; n_bins];
    if n_bins == 0 {
        return counts;
    }
    let (first, last) = (edges[0], edges[n_bins]);
    for &v in values {
        if v.is_nan() || v < first || v > last {
            continue;
        }
        let bin = if v == last {
            n_bins - 1
        } else {
            edges.partition_point(|e| *e <= v) - 1
        };
        counts[bin] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_bin_closed() {
        let counts = histogram(&[0.0, 0.5, 1.0, 1.5, 2.0, f64::NAN, 3.0], &[0.0, 1.0, 2.0]);
        assert_eq!(counts, vec![2, 3]);
    }

    #[test]
    fn test_count_edges_span_data() {
        let edges = Bins::Count(4).edges(&[1.0, 5.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(edges, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let flat = Bins::Count(1).edges(&[2.0, 2.0]).unwrap();
        assert_eq!(flat, vec![1.5, 2.5]);
    }

    #[test]
    fn test_invalid_bins() {
        assert!(Bins::Count(0).edges(&[1.0]).is_err());
        assert!(Bins::Edges(vec![1.0, 1.0]).edges(&[1.0]).is_err());
        assert!(matches!(Bins::Count(3).edges(&[]), Err(PlotError::EmptyData)));
    }

    #[test]
    fn test_bins_deserialize_untagged() {
        let count: Bins = serde_json::from_str("21").unwrap();
        assert_eq!(count, Bins::Count(21));
        let edges: Bins = serde_json::from_str("[0, 0.5, 1]").unwrap();
        assert_eq!(edges, Bins::Edges(vec![0.0, 0.5, 1.0]));
    }
}
