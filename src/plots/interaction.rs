//! Interaction plot: group means with standard errors, one line per level.

use serde::Deserialize;

use crate::frame::Frame;
use crate::plotting::prelude::*;
use crate::plotting::ErrorBarPlot;
use crate::stats::{mean, sem};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InteractionOptions {
    /// Horizontal spacing between neighboring lines, in data units
    pub dodge: f64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        InteractionOptions { dodge: 0.05 }
    }
}

/// Mean and standard error of `y_var` for every level of `x_var`, drawn as
/// one error-bar line per level of `line_var`. Levels are taken in sorted
/// order; x levels sit at `0..n`.
pub fn interaction<'a>(
    ax: &'a mut Axes,
    style: &StyleContext,
    data: &Frame,
    line_var: &str,
    x_var: &str,
    y_var: &str,
    options: &InteractionOptions,
) -> PlotResult<&'a mut Axes> {
    let x_labels = data.labels(x_var)?;
    let line_labels = data.labels(line_var)?;
    let y = data.numeric(y_var)?;
    let x_levels = data.sort_by(&[x_var])?.levels(x_var)?;
    let line_levels = data.sort_by(&[line_var])?.levels(line_var)?;
    if x_levels.is_empty() {
        return Err(PlotError::EmptyData);
    }

    let center = (line_levels.len() as f64 - 1.0) / 2.0;
    for (i, line_level) in line_levels.iter().enumerate() {
        let offset = options.dodge * (i as f64 - center);
        let (mut xs, mut means, mut errors) = (Vec::new(), Vec::new(), Vec::new());
        for (j, x_level) in x_levels.iter().enumerate() {
            let group: Vec<f64> = (0..y.len())
                .filter(|&r| &line_labels[r] == line_level && &x_labels[r] == x_level)
                .map(|r| y[r])
                .filter(|v| !v.is_nan())
                .collect();
            if group.is_empty() {
                continue;
            }
            xs.push(j as f64 + offset);
            means.push(mean(&group)?);
            errors.push(if group.len() > 1 { sem(&group)? } else { 0.0 });
        }

        let color = style.palette_color(i);
        let line = LineStyle::new().color(color.clone());
        ax.errorbar(
            ErrorBarPlot::new(xs, means)
                .yerr(errors)
                .bar_style(line.clone())
                .connect(line)
                .marker_style(
                    MarkerStyle::new(Marker::Circle)
                        .fill(color.clone())
                        .edge_color(color),
                )
                .label(line_level.clone()),
        );
    }

    ax.set_xticks((0..x_levels.len()).map(|j| j as f64).collect(), Some(x_levels))
        .set_ylabel(y_var)
        .set_xlabel(x_var)
        .legend_title(line_var);
    Ok(ax)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new()
            .with_column("group", vec!["trt", "ctl", "trt", "ctl", "trt", "ctl", "trt", "ctl"])
            .unwrap()
            .with_column("time", vec![2.0, 2.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0])
            .unwrap()
            .with_column("score", vec![6.0, 3.0, 2.0, 1.0, 8.0, 5.0, 4.0, 3.0])
            .unwrap()
    }

    #[test]
    fn test_lines_dodged_around_levels() {
        let mut ax = Axes::new();
        let style = StyleContext::default();
        let options = InteractionOptions::default();
        interaction(&mut ax, &style, &frame(), "group", "time", "score", &options).unwrap();
        assert_eq!(ax.plots().len(), 2);
        let ctl = ax.plots()[0].bounds().unwrap();
        let trt = ax.plots()[1].bounds().unwrap();
        assert!((ctl.x_min + 0.025).abs() < 1e-12);
        assert!((trt.x_max - 1.025).abs() < 1e-12);
        assert_eq!(ax.plots()[0].label(), Some("ctl"));

        // ctl at time 1: mean 2, sem 1
        assert!((ctl.y_min - 1.0).abs() < 1e-12);
        let ticks: Vec<String> = ax.x_ticks().into_iter().map(|(_, l)| l).collect();
        assert_eq!(ticks, vec!["1", "2"]);
        let legend = ax.legend.as_ref().unwrap();
        assert_eq!(legend.title.as_deref(), Some("group"));
        assert_eq!(legend.entries.len(), 2);
    }

    #[test]
    fn test_missing_column() {
        let mut ax = Axes::new();
        let style = StyleContext::default();
        let options = InteractionOptions::default();
        assert!(interaction(&mut ax, &style, &frame(), "group", "dose", "score", &options).is_err());
    }
}
