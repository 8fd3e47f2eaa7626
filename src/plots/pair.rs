//! Pair plot: histograms on the diagonal, regressions below it.

use indexmap::IndexMap;
use log::info;
use serde::Deserialize;

use super::hist::{hist, HistOptions};
use super::lm::{lm, LmOptions};
use crate::frame::Frame;
use crate::plotting::prelude::*;
use crate::plotting::style::finite_range;
use crate::stats::{linspace, Bins};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PairOptions {
    /// Number of histogram bin edges
    pub n_bins: usize,
    /// Tick positions per variable
    pub ticks: IndexMap<String, Vec<f64>>,
    /// Display names per variable; the column name when absent
    pub labels: IndexMap<String, String>,
    /// Axis limits per variable
    pub limits: IndexMap<String, (f64, f64)>,
    /// Panel size in inches
    pub panel_width: f64,
    pub panel_height: f64,
    pub hist_color: Color,
    pub dpi: f64,
}

impl Default for PairOptions {
    fn default() -> Self {
        PairOptions {
            n_bins: 21,
            ticks: IndexMap::new(),
            labels: IndexMap::new(),
            limits: IndexMap::new(),
            panel_width: 1.5,
            panel_height: 1.5,
            hist_color: Color::LIGHT_GRAY,
            dpi: 100.0,
        }
    }
}

impl PairOptions {
    fn label<'a>(&'a self, var: &'a str) -> &'a str {
        self.labels.get(var).map(String::as_str).unwrap_or(var)
    }

    fn bins(&self, var: &str, values: &[f64]) -> Bins {
        let range = self.limits.get(var).copied().or_else(|| finite_range(values));
        match range {
            Some((lo, hi)) if lo < hi && self.n_bins >= 2 => Bins::Edges(linspace(lo, hi, self.n_bins)),
            _ => Bins::Count(self.n_bins.max(1)),
        }
    }
}

/// Pair plot of every numeric column of `data` in a new figure.
///
/// Panel (row, col) plots column `row` against column `col`. Panels above
/// the diagonal are hidden. Scatter panels take palette colors in drawing
/// order.
pub fn pair(data: &Frame, options: &PairOptions) -> PlotResult<Figure> {
    let names: Vec<&str> = data.names().collect();
    let n = names.len();
    if n == 0 {
        return Err(PlotError::EmptyData);
    }
    let columns = names
        .iter()
        .map(|name| data.numeric(name))
        .collect::<PlotResult<Vec<_>>>()?;
    info!("Drawing pair plot of {} variables", n);

    let mut fig = Figure::from_inches(
        options.panel_width * n as f64,
        options.panel_height * n as f64,
        options.dpi,
    );
    let mut style = StyleContext::from_theme(&fig.theme);
    let mut drawn = 0;
    for (k, ax) in fig.subplots(n, n).into_iter().enumerate() {
        let (row, col) = (k / n, k % n);
        let (xvar, yvar) = (names[col], names[row]);
        if col > row {
            ax.set_axis_off();
            continue;
        }

        if col == row {
            let hist_options = HistOptions {
                bins: options.bins(xvar, columns[col]),
                color: Some(options.hist_color.clone()),
                ..Default::default()
            };
            hist(ax, &mut style, columns[col], &hist_options)?;
            ax.set_title(options.label(xvar));
            ax.set_ylabel("Frequency");
        } else {
            let lm_options = LmOptions {
                color: Some(style.palette_color(drawn)),
                ..Default::default()
            };
            lm(ax, &mut style, columns[col], columns[row], &lm_options)?;
            if let Some(&(lo, hi)) = options.limits.get(yvar) {
                ax.set_ylim(lo, hi);
            }
            if let Some(ticks) = options.ticks.get(yvar) {
                ax.set_yticks(ticks.clone(), None);
            }
            if col == 0 {
                ax.set_ylabel(options.label(yvar));
            }
            drawn += 1;
        }

        if let Some(&(lo, hi)) = options.limits.get(xvar) {
            ax.set_xlim(lo, hi);
        }
        if let Some(ticks) = options.ticks.get(xvar) {
            ax.set_xticks(ticks.clone(), None);
        }
        if row == n - 1 {
            ax.set_xlabel(options.label(xvar));
        }
    }
    Ok(fig)
}
