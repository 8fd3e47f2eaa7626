//! Scatter with translucent faces and solid black outlines.

use serde::Deserialize;

use super::check_lengths;
use crate::plotting::prelude::*;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScatterOptions {
    /// Face color; the next color of the style context when absent
    pub color: Option<Color>,
    pub face_alpha: f64,
    pub edge_alpha: f64,
    /// Marker diameter
    pub size: f64,
    pub edge_width: f64,
    pub label: Option<String>,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        ScatterOptions {
            color: None,
            face_alpha: 0.8,
            edge_alpha: 1.0,
            size: 4.0,
            edge_width: 0.5,
            label: None,
        }
    }
}

/// Circular markers at (x, y), drawn unclipped.
pub fn scatter<'a>(
    ax: &'a mut Axes,
    style: &mut StyleContext,
    x: &[f64],
    y: &[f64],
    options: &ScatterOptions,
) -> PlotResult<&'a mut Axes> {
    check_lengths(x, y)?;
    let color = options.color.clone().unwrap_or_else(|| style.next_color());

    let mut builder = ax
        .scatter(x, y)
        .marker(Marker::Circle)
        .color(color)
        .edge_color(Color::BLACK)
        .face_alpha(options.face_alpha)
        .edge_alpha(options.edge_alpha)
        .size(options.size)
        .edge_width(options.edge_width)
        .clip_on(false);
    if let Some(ref label) = options.label {
        builder = builder.label(label.clone());
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_style() {
        let mut ax = Axes::new();
        let mut style = StyleContext::new(vec![Color::RED, Color::BLUE]);
        scatter(&mut ax, &mut style, &[1.0, 2.0], &[3.0, 4.0], &ScatterOptions::default()).unwrap();
        let plot = &ax.plots()[0];
        assert!(!plot.clip_on());
        let marker = plot.marker_style().unwrap();
        assert_eq!(marker.fill, Color::RED);
        assert_eq!(marker.edge_color, Color::BLACK);
        assert_eq!(marker.fill_opacity, 0.8);
        assert_eq!(marker.edge_opacity, 1.0);
        assert_eq!((marker.size, marker.edge_width), (4.0, 0.5));
        assert_eq!(style.peek(), Color::BLUE);
    }

    #[test]
    fn test_length_mismatch() {
        let mut ax = Axes::new();
        let mut style = StyleContext::default();
        let result = scatter(&mut ax, &mut style, &[1.0], &[], &ScatterOptions::default());
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
        assert_eq!(style.position(), 0);
    }
}
