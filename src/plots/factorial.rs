//! Heatmap of a value over crossed categorical factors.
//!
//! Rows enumerate the level combinations of the row factors, columns those of
//! the column factors, the last factor varying fastest. Tick labels show the
//! innermost factor; every outer factor gets a bracket with a label per run
//! of equal levels, stacked outward from the image.

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::frame::Frame;
use crate::layout::{contiguous_runs, CoordSpace};
use crate::plotting::prelude::*;
use crate::plotting::style::{DominantBaseline, TextAnchor};
use crate::plotting::{Colorbar, Colormap, ImagePlot, Normalize};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FactorialOptions {
    pub row_factors: Vec<String>,
    pub col_factors: Vec<String>,
    /// Numeric column shown in the cells
    pub value_var: String,
    /// Display names per factor column
    pub factor_labels: IndexMap<String, String>,
    /// Display names per factor column and level; missing levels read
    /// `"{factor}={level}"`
    pub level_labels: IndexMap<String, IndexMap<String, String>>,
    pub cmap: Colormap,
    pub ylabel_rotation: f64,
    pub xlabel_rotation: f64,
    /// Gap between a bracket and its label, in data units
    pub pad_label_bar: f64,
    /// Distance between stacked brackets, in data units
    pub pad_per_factor: f64,
    /// Colorbar gap per row factor, as a fraction of the axes width
    pub pad_colorbar: f64,
}

impl Default for FactorialOptions {
    fn default() -> Self {
        FactorialOptions {
            row_factors: Vec::new(),
            col_factors: Vec::new(),
            value_var: String::new(),
            factor_labels: IndexMap::new(),
            level_labels: IndexMap::new(),
            cmap: Colormap::VIRIDIS.reversed(),
            ylabel_rotation: 0.0,
            xlabel_rotation: 0.0,
            pad_label_bar: 0.2,
            pad_per_factor: 1.5,
            pad_colorbar: 0.05,
        }
    }
}

impl FactorialOptions {
    fn factor_label<'a>(&'a self, factor: &'a str) -> &'a str {
        self.factor_labels.get(factor).map(String::as_str).unwrap_or(factor)
    }

    fn level_label(&self, factor: &str, level: &str) -> String {
        self.level_labels
            .get(factor)
            .and_then(|levels| levels.get(level))
            .cloned()
            .unwrap_or_else(|| format!("{}={}", self.factor_label(factor), level))
    }
}

fn cell_count(data: &Frame, factors: &[String]) -> PlotResult<usize> {
    factors
        .iter()
        .map(|f| data.levels(f).map(|levels| levels.len()))
        .product()
}

pub fn factorial_heatmap<'a>(
    ax: &'a mut Axes,
    data: &Frame,
    options: &FactorialOptions,
) -> PlotResult<&'a mut Axes> {
    let (row_factors, col_factors) = (&options.row_factors, &options.col_factors);
    let (Some(inner_row), Some(inner_col)) = (row_factors.last(), col_factors.last()) else {
        return Err(PlotError::InvalidArgument(
            "row and column factors must not be empty".to_string(),
        ));
    };

    let n_row = cell_count(data, row_factors)?;
    let n_col = cell_count(data, col_factors)?;
    if n_row == 0 || n_col == 0 {
        return Err(PlotError::EmptyData);
    }
    let keys: Vec<&str> = row_factors
        .iter()
        .chain(col_factors.iter())
        .map(String::as_str)
        .collect();
    let sorted = data.sort_by(&keys)?;
    let values = sorted.numeric(&options.value_var)?;
    if values.len() != n_row * n_col {
        return Err(PlotError::InvalidData(format!(
            "expected {} x {} = {} cells, found {} rows",
            n_row,
            n_col,
            n_row * n_col,
            values.len()
        )));
    }
    debug!("factorial heatmap: {} x {} cells of '{}'", n_row, n_col, options.value_var);

    let norm = Normalize::autoscale(values);
    let image: Vec<Vec<f64>> = values.chunks(n_col).map(|row| row.to_vec()).collect();
    ax.imshow(ImagePlot::new(image).cmap(options.cmap).norm(norm));

    let bracket = LineStyle::new().color(Color::BLACK).width(0.75);
    let text_style = ax.theme.label_style.clone();

    // Columns: innermost factor on the ticks, outer factors bracketed above.
    let col_labels = sorted.labels(inner_col)?;
    ax.set_xlabel(options.factor_label(inner_col));
    ax.set_xticks(
        (0..n_col).map(|i| i as f64).collect(),
        Some(col_labels[..n_col].to_vec()),
    );
    ax.set_xtick_rotation(options.xlabel_rotation);
    ax.set_xlim(-0.5, n_col as f64 - 0.5);

    for (f, factor) in col_factors.iter().rev().skip(1).enumerate() {
        let levels = sorted.labels(factor)?;
        let bar_y = n_row as f64 - 0.25 + f as f64 * options.pad_per_factor;
        for run in contiguous_runs(&levels[..n_col]) {
            ax.segment(
                (run.start as f64 - 0.4, bar_y),
                (run.end() as f64 + 0.4, bar_y),
                CoordSpace::Data,
                bracket.clone(),
            );
            ax.text(
                run.center(),
                bar_y + options.pad_label_bar,
                options.level_label(factor, &run.value),
                CoordSpace::Data,
                text_style.clone().anchor(TextAnchor::Middle).baseline(DominantBaseline::Auto),
            );
        }
    }

    // Rows: innermost factor on the ticks, outer factors bracketed right.
    let row_labels: Vec<String> = sorted.labels(inner_row)?.into_iter().step_by(n_col).collect();
    ax.set_ylabel(options.factor_label(inner_row));
    ax.set_yticks((0..n_row).map(|i| i as f64).collect(), Some(row_labels));
    ax.set_ytick_rotation(options.ylabel_rotation);
    ax.set_ylim(-0.5, n_row as f64 - 0.5);

    for (f, factor) in row_factors.iter().rev().skip(1).enumerate() {
        let levels: Vec<String> = sorted.labels(factor)?.into_iter().step_by(n_col).collect();
        let bar_x = n_col as f64 - 0.25 + f as f64 * options.pad_per_factor;
        for run in contiguous_runs(&levels) {
            ax.segment(
                (bar_x, run.start as f64 - 0.4),
                (bar_x, run.end() as f64 + 0.4),
                CoordSpace::Data,
                bracket.clone(),
            );
            // Reads top to bottom, glyphs to the right of the anchor.
            ax.text(
                bar_x + options.pad_label_bar,
                run.center(),
                options.level_label(factor, &run.value),
                CoordSpace::Data,
                text_style
                    .clone()
                    .rotation(90.0)
                    .anchor(TextAnchor::Middle)
                    .baseline(DominantBaseline::Auto),
            );
        }
    }

    ax.colorbar(
        Colorbar::new(options.cmap, norm)
            .pad(row_factors.len() as f64 * options.pad_colorbar)
            .title(options.value_var.clone())
            .outline_width(0.75),
    );
    Ok(ax)
}
