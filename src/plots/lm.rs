//! Scatter with an OLS fit line and confidence band.

use log::debug;
use serde::Deserialize;

use super::check_lengths;
use super::scatter::{scatter, ScatterOptions};
use crate::annotation::{corner_text, format_p, PFormat};
use crate::layout::{AnnotationPosition, Corner};
use crate::plotting::prelude::*;
use crate::plotting::style::finite_range;
use crate::plotting::FillBetween;
use crate::stats::{linspace, ols, pearson, Correlation, OlsFit};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LmOptions {
    /// Shared color of points, line and band; the next color when absent
    pub color: Option<Color>,
    /// Confidence level of the band
    pub level: f64,
    pub band_alpha: f64,
    /// Points on the fit grid
    pub grid_points: usize,
    /// Corner for an "r = ..., p ..." note: a corner name or "auto"
    pub annotation: Option<String>,
    pub p_format: PFormat,
    pub scatter: ScatterOptions,
}

impl Default for LmOptions {
    fn default() -> Self {
        LmOptions {
            color: None,
            level: 0.95,
            band_alpha: 0.6,
            grid_points: 100,
            annotation: None,
            p_format: PFormat::default(),
            scatter: ScatterOptions::default(),
        }
    }
}

/// Result of [`lm`].
#[derive(Debug, Clone)]
pub struct LmFit {
    pub fit: OlsFit,
    pub correlation: Correlation,
    /// Corner holding the annotation, if one was drawn
    pub corner: Option<Corner>,
}

/// Scatter `y` against `x` with the least-squares line and the confidence
/// band of the mean response over the x range.
pub fn lm(
    ax: &mut Axes,
    style: &mut StyleContext,
    x: &[f64],
    y: &[f64],
    options: &LmOptions,
) -> PlotResult<LmFit> {
    if let Some(ref token) = options.annotation {
        token.parse::<AnnotationPosition>()?;
    }
    check_lengths(x, y)?;
    let fit = ols(x, y)?;
    let correlation = pearson(x, y)?;
    debug!(
        "lm: slope {:.4} (p {:.4}), r {:.3}, n {}",
        fit.slope, fit.slope_p, correlation.r, fit.n
    );

    let color = options.color.clone().unwrap_or_else(|| style.next_color());
    let scatter_options = ScatterOptions {
        color: Some(color.clone()),
        ..options.scatter.clone()
    };
    scatter(ax, style, x, y, &scatter_options)?;

    let (lo, hi) = finite_range(x).ok_or(PlotError::EmptyData)?;
    let grid = linspace(lo, hi, options.grid_points.max(2));
    let band = fit.confidence_band(&grid, options.level)?;
    let mean: Vec<f64> = band.iter().map(|b| b.mean).collect();
    let lower: Vec<f64> = band.iter().map(|b| b.lower).collect();
    let upper: Vec<f64> = band.iter().map(|b| b.upper).collect();

    ax.plot(grid.clone(), mean)
        .color(color.clone())
        .z_order(4.0)
        .build();
    ax.fill_between(
        FillBetween::new(grid, lower, upper, FillStyle::new(color).opacity(options.band_alpha))
            .z_order(3.0),
    );

    let corner = match options.annotation {
        Some(ref token) => {
            let text = format!(
                "r = {:.2}\n{}",
                correlation.r,
                format_p(correlation.p_value, &options.p_format)
            );
            Some(corner_text(ax, &text, token, x, y)?)
        }
        None => None,
    };

    Ok(LmFit {
        fit,
        correlation,
        corner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::Overlay;

    fn data() -> (Vec<f64>, Vec<f64>) {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = vec![1.1, 1.9, 3.2, 3.9, 5.1, 5.8];
        (x, y)
    }

    #[test]
    fn test_lm_draws_scatter_line_and_band() {
        let (x, y) = data();
        let mut ax = Axes::new();
        let mut style = StyleContext::default();
        let first = style.peek();
        let result = lm(&mut ax, &mut style, &x, &y, &LmOptions::default()).unwrap();
        assert_eq!(ax.plots().len(), 3);
        let z: Vec<f64> = ax.plots().iter().map(|p| p.z_order()).collect();
        assert_eq!(&z[1..], &[4.0, 3.0]);
        assert_eq!(ax.plots()[0].marker_style().unwrap().fill, first);
        assert_eq!(style.position(), 1);
        assert!(result.fit.slope > 0.9 && result.fit.slope < 1.1);
        assert!(result.correlation.r > 0.99);
        assert!(result.corner.is_none());
    }

    #[test]
    fn test_auto_annotation_placed() {
        let (x, y) = data();
        let mut ax = Axes::new();
        let options = LmOptions {
            annotation: Some("auto".to_string()),
            ..Default::default()
        };
        let result = lm(&mut ax, &mut StyleContext::default(), &x, &y, &options).unwrap();
        // rising data leaves the top-left and bottom-right corners empty
        assert_eq!(result.corner, Some(Corner::TopLeft));
        match &ax.overlays()[0] {
            Overlay::Text { content, .. } => {
                assert!(content.starts_with("r = 1.00\np"));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_token_draws_nothing() {
        let (x, y) = data();
        let mut ax = Axes::new();
        let mut style = StyleContext::default();
        let options = LmOptions {
            annotation: Some("centre".to_string()),
            ..Default::default()
        };
        let result = lm(&mut ax, &mut style, &x, &y, &options);
        assert!(matches!(result, Err(PlotError::InvalidArgument(_))));
        assert!(ax.plots().is_empty());
        assert_eq!(style.position(), 0);
    }

    #[test]
    fn test_degenerate_fit_draws_nothing() {
        let mut ax = Axes::new();
        let result = lm(
            &mut ax,
            &mut StyleContext::default(),
            &[1.0, 2.0],
            &[1.0, 2.0],
            &LmOptions::default(),
        );
        assert!(matches!(result, Err(PlotError::Stats(_))));
        assert!(ax.plots().is_empty());
    }
}
