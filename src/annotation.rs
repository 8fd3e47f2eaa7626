//! Text annotations: bracket lines with labels, corner text, p-values and
//! panel letters.

use serde::Deserialize;

use crate::layout::{best_corner, AnnotationPosition, CoordSpace, Corner};
use crate::plotting::prelude::*;
use crate::plotting::style::{DominantBaseline, TextAnchor};

/// Styling for [`h_text_line`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HTextLineOptions {
    pub line_width: f64,
    /// Vertical offset of the text above the line, in the chosen coordinates
    pub line_text_gap: f64,
    pub font_size: f64,
}

impl Default for HTextLineOptions {
    fn default() -> Self {
        HTextLineOptions {
            line_width: 0.5,
            line_text_gap: 0.0,
            font_size: 5.0,
        }
    }
}

/// Draw a horizontal black line from `x0` to `x1` at `y` with `text`
/// centered above it.
///
/// `coord_type` is `"data"` or `"axes"`; anything else fails before drawing.
pub fn h_text_line<'a>(
    ax: &'a mut Axes,
    text: &str,
    x0: f64,
    x1: f64,
    y: f64,
    coord_type: &str,
    options: &HTextLineOptions,
) -> PlotResult<&'a mut Axes> {
    let space: CoordSpace = coord_type.parse()?;

    let style = ax
        .theme
        .label_style
        .clone()
        .font_size(options.font_size)
        .anchor(TextAnchor::Middle)
        .baseline(DominantBaseline::Auto);
    ax.segment(
        (x0, y),
        (x1, y),
        space,
        LineStyle::new().color(Color::BLACK).width(options.line_width),
    );
    ax.text((x0 + x1) / 2.0, y + options.line_text_gap, text, space, style);
    Ok(ax)
}

/// Put `text` in a corner of the axes.
///
/// `position` names a corner or is `"auto"`, in which case the corner of the
/// current view holding the fewest of the points (`x`, `y`) is used.
pub fn corner_text(
    ax: &mut Axes,
    text: &str,
    position: &str,
    x: &[f64],
    y: &[f64],
) -> PlotResult<Corner> {
    let position: AnnotationPosition = position.parse()?;
    let corner = match position {
        AnnotationPosition::Fixed(corner) => corner,
        AnnotationPosition::Auto => best_corner(x, y, &ax.view_bounds()),
    };

    let (ax_x, ax_y) = corner.anchor();
    let style = ax
        .theme
        .label_style
        .clone()
        .anchor(corner.text_anchor())
        .baseline(corner.baseline());
    ax.text(ax_x, ax_y, text, CoordSpace::Axes, style);
    Ok(corner)
}

/// Cutoffs for [`format_p`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PFormat {
    pub lower_cutoff: f64,
    pub upper_cutoff: f64,
    /// Write "n.s." instead of the value at or above the upper cutoff
    pub ns: bool,
}

impl Default for PFormat {
    fn default() -> Self {
        PFormat {
            lower_cutoff: 0.001,
            upper_cutoff: 0.1,
            ns: false,
        }
    }
}

/// Format a p-value for display.
///
/// Values below `lower_cutoff` read `"p < {lower_cutoff}"`, so the default
/// gives `"p < 0.001"` and a custom cutoff is printed as given.
pub fn format_p(p: f64, format: &PFormat) -> String {
    if p < format.lower_cutoff {
        format!("p < {}", format.lower_cutoff)
    } else if p >= format.upper_cutoff {
        if format.ns {
            "n.s.".to_string()
        } else {
            format!("p = {:.2}", p)
        }
    } else {
        format!("p = {:.3}", p)
    }
}

/// Panel lettering for [`label_axes`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelAxesOptions {
    /// Labels assigned in axes order, reused from the start when exhausted
    pub labels: Vec<String>,
    /// Position in axes fraction
    pub loc: (f64, f64),
    pub font_size: Option<f64>,
}

impl Default for LabelAxesOptions {
    fn default() -> Self {
        LabelAxesOptions {
            labels: ('a'..='z').map(String::from).collect(),
            loc: (-0.3, 1.0),
            font_size: None,
        }
    }
}

/// Letter every axes of `fig` in bold.
pub fn label_axes(fig: &mut Figure, options: &LabelAxesOptions) {
    let (x, y) = options.loc;
    for (ax, label) in fig.get_axes().iter_mut().zip(options.labels.iter().cycle()) {
        let mut style = ax
            .theme
            .label_style
            .clone()
            .bold()
            .anchor(TextAnchor::Start)
            .baseline(DominantBaseline::Auto);
        if let Some(size) = options.font_size {
            style = style.font_size(size);
        }
        ax.text(x, y, label.clone(), CoordSpace::Axes, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::Overlay;

    #[test]
    fn test_format_p_cutoffs() {
        let fmt = PFormat::default();
        assert_eq!(format_p(0.0004, &fmt), "p < 0.001");
        assert_eq!(format_p(0.001, &fmt), "p = 0.001");
        assert_eq!(format_p(0.0234, &fmt), "p = 0.023");
        assert_eq!(format_p(0.1, &fmt), "p = 0.10");
        assert_eq!(format_p(0.456, &fmt), "p = 0.46");
        let ns = PFormat { ns: true, ..fmt };
        assert_eq!(format_p(0.5, &ns), "n.s.");
        assert_eq!(format_p(0.05, &ns), "p = 0.050");
        let strict = PFormat { lower_cutoff: 0.0001, ..fmt };
        assert_eq!(format_p(0.00001, &strict), "p < 0.0001");
    }

    #[test]
    fn test_h_text_line_draws_line_and_text() {
        let mut ax = Axes::new();
        h_text_line(&mut ax, "*", 0.0, 1.0, 2.0, "data", &HTextLineOptions::default()).unwrap();
        assert_eq!(ax.overlays().len(), 2);
        match &ax.overlays()[1] {
            Overlay::Text { x, y, content, style, .. } => {
                assert_eq!((*x, *y), (0.5, 2.0));
                assert_eq!(content, "*");
                assert_eq!(style.font_size, 5.0);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_tokens_fail_before_drawing() {
        let mut ax = Axes::new();
        let err = h_text_line(&mut ax, "x", 0.0, 1.0, 0.0, "figure", &HTextLineOptions::default());
        assert!(matches!(err, Err(PlotError::InvalidArgument(_))));
        let err = corner_text(&mut ax, "x", "middle", &[], &[]);
        assert!(matches!(err, Err(PlotError::InvalidArgument(_))));
        assert!(ax.overlays().is_empty());
        assert!(ax.plots().is_empty());
    }

    #[test]
    fn test_corner_text_auto_uses_view() {
        let mut ax = Axes::new();
        ax.set_xlim(0.0, 10.0).set_ylim(0.0, 10.0);
        let pts = [1.0, 2.0, 8.0, 9.0];
        let corner = corner_text(&mut ax, "r = 0.99", "auto", &pts, &pts).unwrap();
        assert_eq!(corner, Corner::TopLeft);
        let corner = corner_text(&mut ax, "n = 4", "lower right", &pts, &pts).unwrap();
        assert_eq!(corner, Corner::BottomRight);
        assert_eq!(ax.overlays().len(), 2);
    }

    #[test]
    fn test_label_axes_cycles_labels() {
        let mut fig = Figure::new(300.0, 100.0);
        fig.subplots(1, 3);
        let options = LabelAxesOptions {
            labels: vec!["A".to_string(), "B".to_string()],
            ..Default::default()
        };
        label_axes(&mut fig, &options);
        let labels: Vec<String> = fig
            .axes()
            .iter()
            .filter_map(|ax| match ax.overlays().first() {
                Some(Overlay::Text { content, .. }) => Some(content.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["A", "B", "A"]);
    }
}
