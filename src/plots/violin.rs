//! Violins with an overlaid slim box plot.

use log::warn;
use serde::Deserialize;

use super::scaled_widths;
use crate::frame::Frame;
use crate::plotting::prelude::*;
use crate::plotting::Polygon;
use crate::stats::{drop_nan, five_number, gaussian_kde_on, linspace, scott_bandwidth};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViolinOptions {
    /// Y-axis label
    pub value_name: String,
    /// X-axis label
    pub variable_name: String,
    /// Width of the widest violin, in x units
    pub violin_width: f64,
    pub box_width: f64,
    /// Single color for every violin; palette colors per column when absent
    pub color: Option<Color>,
    /// KDE support beyond the data, in bandwidths
    pub cut: f64,
    pub kde_points: usize,
}

impl Default for ViolinOptions {
    fn default() -> Self {
        ViolinOptions {
            value_name: "value".to_string(),
            variable_name: "variable".to_string(),
            violin_width: 0.8,
            box_width: 0.1,
            color: None,
            cut: 2.0,
            kde_points: 100,
        }
    }
}

fn box_line() -> LineStyle {
    LineStyle::new().color(Color::BLACK).width(0.5)
}

/// One violin per numeric column of `data` at positions `0..n`.
pub fn violin<'a>(
    ax: &'a mut Axes,
    style: &StyleContext,
    data: &Frame,
    options: &ViolinOptions,
) -> PlotResult<&'a mut Axes> {
    if data.is_empty() {
        return Err(PlotError::EmptyData);
    }
    let columns = data
        .names()
        .map(|name| data.numeric(name).map(drop_nan))
        .collect::<PlotResult<Vec<_>>>()?;

    let half_box = options.box_width / 2.0;
    for (i, values) in columns.iter().enumerate() {
        let x = i as f64;
        if values.is_empty() {
            warn!("violin: column {} has no values", i);
            continue;
        }

        let bandwidth = scott_bandwidth(values)?;
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min) - options.cut * bandwidth;
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max) + options.cut * bandwidth;
        let density = gaussian_kde_on(values, &linspace(lo, hi, options.kde_points.max(2)))?;
        let widths = scaled_widths(&density.values, options.violin_width / 2.0);

        let mut outline: Vec<(f64, f64)> = density
            .grid
            .iter()
            .zip(&widths)
            .map(|(&v, &w)| (x + w, v))
            .collect();
        outline.extend(density.grid.iter().zip(&widths).rev().map(|(&v, &w)| (x - w, v)));
        let color = options
            .color
            .clone()
            .unwrap_or_else(|| style.palette_color(i));
        ax.add_patch(Polygon::new(outline, FillStyle::new(color)));

        let stats = five_number(values)?;
        ax.add_patch(
            Polygon::rectangle(
                x - half_box,
                stats.q1,
                options.box_width,
                stats.q3 - stats.q1,
                FillStyle::new(Color::WHITE).stroke(Color::BLACK).stroke_width(0.5),
            )
            .z_order(2.0),
        );
        ax.vlines(
            &[x, x],
            &[stats.whisker_low, stats.q3],
            &[stats.q1, stats.whisker_high],
            box_line(),
        );
        ax.hlines(&[stats.median], &[x - half_box], &[x + half_box], box_line());
        if !stats.fliers.is_empty() {
            ax.scatter(vec![x; stats.fliers.len()], stats.fliers.clone())
                .marker(Marker::Circle)
                .size(2.0)
                .color(Color::WHITE)
                .edge_color(Color::BLACK)
                .edge_width(0.25)
                .alpha(0.9)
                .z_order(3.0)
                .build();
        }
    }

    let n = columns.len();
    let names: Vec<String> = data.names().map(String::from).collect();
    ax.set_xticks((0..n).map(|i| i as f64).collect(), Some(names));
    ax.set_xlim(-0.5, n as f64 - 0.5);
    ax.set_xlabel(options.variable_name.clone());
    ax.set_ylabel(options.value_name.clone());
    Ok(ax)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new()
            .with_column("a", vec![1.0, 2.0, 2.5, 3.0, 10.0])
            .unwrap()
            .with_column("b", vec![4.0, 5.0, f64::NAN, 6.0, 5.5])
            .unwrap()
    }

    #[test]
    fn test_violin_layout() {
        let mut ax = Axes::new();
        violin(&mut ax, &StyleContext::default(), &frame(), &ViolinOptions::default()).unwrap();
        let view = ax.view_bounds();
        assert_eq!((view.x_min, view.x_max), (-0.5, 1.5));
        let ticks: Vec<String> = ax.x_ticks().into_iter().map(|(_, l)| l).collect();
        assert_eq!(ticks, vec!["a", "b"]);
        // column a has one flier (10), drawn as white markers
        let fliers: Vec<_> = ax
            .plots()
            .iter()
            .filter(|p| p.z_order() == 3.0)
            .collect();
        assert_eq!(fliers.len(), 1);
        assert_eq!(fliers[0].marker_style().unwrap().fill, Color::WHITE);
    }

    #[test]
    fn test_violin_width_normalized() {
        let mut ax = Axes::new();
        let options = ViolinOptions {
            violin_width: 0.6,
            ..Default::default()
        };
        violin(&mut ax, &StyleContext::default(), &frame(), &options).unwrap();
        let body = ax.plots()[0].bounds().unwrap();
        assert!((body.x_max - 0.3).abs() < 1e-9);
        assert!((body.x_min + 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_text_column_rejected() {
        let data = Frame::new().with_column("g", vec!["x", "y"]).unwrap();
        let mut ax = Axes::new();
        let result = violin(&mut ax, &StyleContext::default(), &data, &ViolinOptions::default());
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
        assert!(ax.plots().is_empty());
    }
}
