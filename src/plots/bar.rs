//! Bar chart of counts with optional value labels.

use serde::Deserialize;

use crate::frame::format_level;
use crate::layout::CoordSpace;
use crate::plotting::prelude::*;
use crate::plotting::style::{DominantBaseline, TextAnchor};
use crate::plotting::BarPlot;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BarOptions {
    /// Tick labels; bar indices when absent
    pub labels: Option<Vec<String>>,
    /// Bar colors; the palette in order when absent
    pub colors: Option<Vec<Color>>,
    /// Write each value above its bar
    pub annotate: bool,
    pub annotation_size: f64,
}

impl Default for BarOptions {
    fn default() -> Self {
        BarOptions {
            labels: None,
            colors: None,
            annotate: true,
            annotation_size: 5.0,
        }
    }
}

/// Bars of height `y` at positions `0..n`.
pub fn bar<'a>(
    ax: &'a mut Axes,
    style: &StyleContext,
    y: &[f64],
    options: &BarOptions,
) -> PlotResult<&'a mut Axes> {
    let xs: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
    let labels = match options.labels {
        Some(ref labels) if labels.len() != y.len() => {
            return Err(PlotError::InvalidArgument(format!(
                "{} labels given for {} bars",
                labels.len(),
                y.len()
            )));
        }
        Some(ref labels) => labels.clone(),
        None => (0..y.len()).map(|i| i.to_string()).collect(),
    };
    let colors = options
        .colors
        .clone()
        .unwrap_or_else(|| (0..y.len()).map(|i| style.palette_color(i)).collect());

    ax.bar(BarPlot::new(xs.clone(), y.to_vec()).colors(colors));
    ax.set_ylabel("Freq.");
    ax.set_xticks(xs.clone(), Some(labels));

    if options.annotate {
        let text_style = ax
            .theme
            .tick_style
            .clone()
            .font_size(options.annotation_size)
            .anchor(TextAnchor::Middle)
            .baseline(DominantBaseline::Auto);
        for (&x, &value) in xs.iter().zip(y) {
            ax.text(x, value, format_level(value), CoordSpace::Data, text_style.clone());
        }
    }
    Ok(ax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::Overlay;

    #[test]
    fn test_bar_labels_and_annotations() {
        let mut ax = Axes::new();
        let style = StyleContext::default();
        bar(&mut ax, &style, &[3.0, 5.0, 2.0], &BarOptions::default()).unwrap();
        assert_eq!(ax.plots().len(), 1);
        assert_eq!(ax.overlays().len(), 3);
        let ticks: Vec<String> = ax.x_ticks().into_iter().map(|(_, l)| l).collect();
        assert_eq!(ticks, vec!["0", "1", "2"]);
        assert!(matches!(&ax.overlays()[1], Overlay::Text { content, .. } if content == "5"));
        assert_eq!(ax.y_label.as_ref().map(|t| t.content.as_str()), Some("Freq."));
    }

    #[test]
    fn test_label_count_mismatch_rejected() {
        let mut ax = Axes::new();
        let options = BarOptions {
            labels: Some(vec!["a".to_string()]),
            ..Default::default()
        };
        assert!(bar(&mut ax, &StyleContext::default(), &[1.0, 2.0], &options).is_err());
        assert!(ax.plots().is_empty());
    }

    #[test]
    fn test_default_colors_follow_palette() {
        let mut ax = Axes::new();
        let style = StyleContext::default();
        let options = BarOptions {
            annotate: false,
            ..Default::default()
        };
        bar(&mut ax, &style, &[1.0, 2.0], &options).unwrap();
        let svg = ax.render_svg(200.0, 200.0);
        assert!(svg.contains(&style.palette_color(1).to_svg_string()));
        assert!(ax.overlays().is_empty());
    }
}
