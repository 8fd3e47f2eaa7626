//! Histogram with white bar edges.

use log::debug;
use serde::Deserialize;

use crate::plotting::prelude::*;
use crate::plotting::BarPlot;
use crate::stats::{histogram, Bins};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistOptions {
    pub bins: Bins,
    /// Bar color; the next color of the style context when absent
    pub color: Option<Color>,
    pub edge_color: Color,
    pub line_width: f64,
    pub alpha: f64,
    pub label: Option<String>,
}

impl Default for HistOptions {
    fn default() -> Self {
        HistOptions {
            bins: Bins::default(),
            color: None,
            edge_color: Color::WHITE,
            line_width: 0.75,
            alpha: 1.0,
            label: None,
        }
    }
}

/// Bars spanning consecutive `edges` with heights `counts`.
pub(crate) fn bin_bars(edges: &[f64], counts: &[usize]) -> BarPlot {
    let centers = edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect();
    let widths = edges.windows(2).map(|w| w[1] - w[0]).collect();
    let heights = counts.iter().map(|&c| c as f64).collect();
    BarPlot::new(centers, heights).widths(widths)
}

/// Histogram of `x`; NaNs are skipped.
pub fn hist<'a>(
    ax: &'a mut Axes,
    style: &mut StyleContext,
    x: &[f64],
    options: &HistOptions,
) -> PlotResult<&'a mut Axes> {
    let edges = options.bins.edges(x)?;
    let counts = histogram(x, &edges);
    debug!(
        "hist: {} values into {} bins",
        counts.iter().sum::<usize>(),
        counts.len()
    );

    let color = options.color.clone().unwrap_or_else(|| style.next_color());
    let mut bars = bin_bars(&edges, &counts)
        .color(color)
        .edge(options.edge_color.clone(), options.line_width)
        .alpha(options.alpha);
    if let Some(ref label) = options.label {
        bars = bars.label(label.clone());
    }
    ax.bar(bars);
    Ok(ax)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_span_edges() {
        let bars = bin_bars(&[0.0, 1.0, 3.0], &[2, 5]);
        assert_eq!(bars.x, vec![0.5, 2.0]);
        assert_eq!(bars.widths, vec![1.0, 2.0]);
        assert_eq!(bars.heights, vec![2.0, 5.0]);
    }

    #[test]
    fn test_hist_consumes_next_color() {
        let mut ax = Axes::new();
        let mut style = StyleContext::default();
        let options = HistOptions {
            bins: Bins::Count(2),
            ..Default::default()
        };
        hist(&mut ax, &mut style, &[0.0, 1.0, 1.0, f64::NAN], &options).unwrap();
        assert_eq!(style.position(), 1);
        let bounds = ax.plots()[0].bounds().unwrap();
        assert_eq!((bounds.x_min, bounds.x_max), (0.0, 1.0));
        assert_eq!(bounds.y_max, 2.0);

        let given = HistOptions {
            color: Some(Color::from("lightgray")),
            ..options
        };
        hist(&mut ax, &mut style, &[0.0, 1.0], &given).unwrap();
        assert_eq!(style.position(), 1);
    }

    #[test]
    fn test_hist_empty_input() {
        let mut ax = Axes::new();
        let result = hist(&mut ax, &mut StyleContext::default(), &[], &HistOptions::default());
        assert!(matches!(result, Err(PlotError::EmptyData)));
    }
}
