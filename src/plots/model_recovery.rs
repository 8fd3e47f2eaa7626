//! Model recovery confusion matrix with an exceedance-probability inset.

use serde::Deserialize;

use crate::layout::CoordSpace;
use crate::plotting::prelude::*;
use crate::plotting::style::{DominantBaseline, TextAnchor};
use crate::plotting::{Colormap, ImagePlot, Spines};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelRecoveryOptions {
    pub cmap: Colormap,
    /// Cell values below this use `color_below`, the rest `color_above`
    pub fontcolor_threshold: f64,
    pub color_below: Color,
    pub color_above: Color,
    pub fontsize_main: f64,
    pub fontsize_inset: f64,
    /// Decimals of the cell values
    pub precision_main: usize,
    pub precision_inset: usize,
}

impl Default for ModelRecoveryOptions {
    fn default() -> Self {
        ModelRecoveryOptions {
            cmap: Colormap::VIRIDIS,
            fontcolor_threshold: 0.7,
            color_below: Color::WHITE,
            color_above: Color::BLACK,
            fontsize_main: 5.0,
            fontsize_inset: 3.0,
            precision_main: 2,
            precision_inset: 2,
        }
    }
}

fn probability_image(
    ax: &mut Axes,
    values: &[Vec<f64>],
    font_size: f64,
    precision: usize,
    options: &ModelRecoveryOptions,
) {
    ax.imshow(
        ImagePlot::new(values.to_vec())
            .cmap(options.cmap)
            .limits(Some(0.0), Some(1.0)),
    );
    let style = ax
        .theme
        .label_style
        .clone()
        .font_size(font_size)
        .anchor(TextAnchor::Middle)
        .baseline(DominantBaseline::Middle);
    for (i, row) in values.iter().enumerate() {
        for (j, &z) in row.iter().enumerate() {
            let color = if z < options.fontcolor_threshold {
                options.color_below.clone()
            } else {
                options.color_above.clone()
            };
            ax.text(
                j as f64,
                i as f64,
                format!("{:.*}", precision, z),
                CoordSpace::Data,
                style.clone().color(color),
            );
        }
    }
    ax.set_spines(Spines::all());
}

/// Posterior model probabilities `mpp` (row: generating model, column:
/// recovered model) with exceedance probabilities `xp` in an inset to the
/// right.
pub fn model_recovery<'a>(
    ax: &'a mut Axes,
    mpp: &[Vec<f64>],
    xp: &[Vec<f64>],
    labels: &[String],
    options: &ModelRecoveryOptions,
) -> PlotResult<&'a mut Axes> {
    let n = mpp.len();
    if n == 0 || mpp.iter().any(|row| row.len() != n) {
        return Err(PlotError::InvalidData(
            "model probabilities must form a non-empty square matrix".to_string(),
        ));
    }
    if labels.len() != n {
        return Err(PlotError::InvalidData(format!(
            "{} model labels for {} models",
            labels.len(),
            n
        )));
    }
    if xp.is_empty() || xp.iter().any(|row| row.len() != xp[0].len()) {
        return Err(PlotError::InvalidData(
            "exceedance probabilities must form a non-empty matrix".to_string(),
        ));
    }

    probability_image(ax, mpp, options.fontsize_main, options.precision_main, options);
    ax.set_tick_length(0.0);
    let positions: Vec<f64> = (0..n).map(|i| i as f64).collect();
    ax.set_xticks(positions.clone(), Some(labels.to_vec()))
        .set_xtick_rotation(45.0)
        .set_xlabel("Recovered model")
        .set_yticks(positions, Some(labels.to_vec()))
        .set_ylabel("Generating model")
        .set_title("Posterior probabilities");

    let inset = ax.inset_axes(1.05, 0.5, 0.5, 0.5);
    probability_image(inset, xp, options.fontsize_inset, options.precision_inset, options);
    inset
        .set_xticks(Vec::new(), None)
        .set_yticks(Vec::new(), None)
        .set_xlabel("Exceedance\nprobabilities");
    Ok(ax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::Overlay;

    fn labels() -> Vec<String> {
        vec!["M1".to_string(), "M2".to_string()]
    }

    #[test]
    fn test_cells_and_font_colors() {
        let mpp = vec![vec![0.9, 0.1], vec![0.25, 0.75]];
        let xp = vec![vec![0.99, 0.01], vec![0.3, 0.7]];
        let mut ax = Axes::new();
        model_recovery(&mut ax, &mpp, &xp, &labels(), &ModelRecoveryOptions::default()).unwrap();

        assert_eq!(ax.overlays().len(), 4);
        match &ax.overlays()[1] {
            Overlay::Text { x, y, content, style, .. } => {
                assert_eq!((*x, *y), (1.0, 0.0));
                assert_eq!(content, "0.10");
                assert_eq!(style.color, Color::WHITE);
                assert_eq!(style.font_size, 5.0);
            }
            other => panic!("expected text, got {:?}", other),
        }
        match &ax.overlays()[3] {
            Overlay::Text { content, style, .. } => {
                assert_eq!(content, "0.75");
                assert_eq!(style.color, Color::BLACK);
            }
            other => panic!("expected text, got {:?}", other),
        }
        assert!(ax.is_y_inverted());
        assert_eq!(ax.spines, Spines::all());
    }

    #[test]
    fn test_inset_without_ticks() {
        let mpp = vec![vec![0.5, 0.5], vec![0.5, 0.5]];
        let mut ax = Axes::new();
        model_recovery(&mut ax, &mpp, &mpp, &labels(), &ModelRecoveryOptions::default()).unwrap();
        let inset = &ax.insets()[0];
        assert!(inset.x_ticks().is_empty());
        assert!(inset.y_ticks().is_empty());
        assert_eq!(inset.x_label.as_ref().unwrap().content, "Exceedance\nprobabilities");
        assert_eq!(inset.overlays().len(), 4);
        let ticks: Vec<String> = ax.x_ticks().into_iter().map(|(_, l)| l).collect();
        assert_eq!(ticks, labels());
        assert_eq!(ax.title.as_ref().unwrap().content, "Posterior probabilities");
    }

    #[test]
    fn test_shape_errors() {
        let mut ax = Axes::new();
        let opts = ModelRecoveryOptions::default();
        let ragged = vec![vec![0.5, 0.5], vec![1.0]];
        assert!(model_recovery(&mut ax, &ragged, &ragged, &labels(), &opts).is_err());
        let square = vec![vec![0.5, 0.5], vec![0.5, 0.5]];
        let one = vec!["M1".to_string()];
        assert!(model_recovery(&mut ax, &square, &square, &one, &opts).is_err());
        assert!(ax.plots().is_empty());
    }
}
