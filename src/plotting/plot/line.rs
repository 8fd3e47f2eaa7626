//! Line plot implementation.

use super::path_data;
use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, DashPattern, LineStyle, Marker, MarkerStyle};

/// A line connecting data points, optionally with markers.
#[derive(Debug, Clone)]
pub struct LinePlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub line_style: LineStyle,
    /// Draw the connecting line (markers-only when false)
    pub show_line: bool,
    pub marker_style: Option<MarkerStyle>,
    pub label: Option<String>,
    pub z_order: f64,
    pub clip_on: bool,
}

impl LinePlot {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        LinePlot {
            x,
            y,
            line_style: LineStyle::default(),
            show_line: true,
            marker_style: None,
            label: None,
            z_order: 2.0,
            clip_on: true,
        }
    }

    /// Set the line color (and marker face, if markers are on).
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.line_style.color = color.into();
        if let Some(ref mut marker) = self.marker_style {
            marker.fill = self.line_style.color.clone();
        }
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.line_style.width = width;
        self
    }

    pub fn linestyle(mut self, dash: DashPattern) -> Self {
        self.line_style.dash = dash;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.line_style.opacity = alpha.clamp(0.0, 1.0);
        if let Some(ref mut marker) = self.marker_style {
            marker.fill_opacity = self.line_style.opacity;
            marker.edge_opacity = self.line_style.opacity;
        }
        self
    }

    /// Add markers in the line color.
    pub fn marker(mut self, marker: Marker) -> Self {
        let color = self.line_style.color.clone();
        self.marker_style = Some(MarkerStyle {
            marker,
            fill: color.clone(),
            edge_color: color,
            ..Default::default()
        });
        self
    }

    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = Some(style);
        self
    }

    pub fn show_line(mut self, show: bool) -> Self {
        self.show_line = show;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn z_order(mut self, z: f64) -> Self {
        self.z_order = z;
        self
    }

    pub fn clip_on(mut self, clip: bool) -> Self {
        self.clip_on = clip;
        self
    }
}

impl Plot for LinePlot {
    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_xy(&self.x, &self.y)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn z_order(&self) -> f64 {
        self.z_order
    }

    fn clip_on(&self) -> bool {
        self.clip_on
    }

    fn line_style(&self) -> Option<LineStyle> {
        self.show_line.then(|| self.line_style.clone())
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        self.marker_style.clone()
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        let mut svg = String::new();

        let points: Vec<(f64, f64)> = self
            .x
            .iter()
            .zip(self.y.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| ctx.transform(x, y))
            .collect();

        if points.is_empty() {
            return svg;
        }

        if self.show_line && points.len() >= 2 {
            svg.push_str(&format!(
                "<path d=\"{}\" {}/>\n",
                path_data(&points),
                self.line_style.to_svg_style()
            ));
        }

        if let Some(ref marker_style) = self.marker_style {
            for &(x, y) in &points {
                svg.push_str(&marker_style.render_at(x, y));
            }
        }

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new(
            Bounds::new(0.0, 1.0, 0.0, 1.0),
            Bounds::new(0.0, 100.0, 0.0, 100.0),
            false,
        )
    }

    #[test]
    fn test_line_with_markers() {
        let plot = LinePlot::new(vec![0.0, 1.0], vec![0.0, 1.0])
            .color("black")
            .marker(Marker::ThinDiamond);
        let svg = plot.render_svg(&ctx());
        assert!(svg.contains("<path d=\"M0.00,100.00 L100.00,0.00\""));
        assert_eq!(svg.matches("translate(").count(), 2);
    }

    #[test]
    fn test_nan_points_skipped_in_bounds() {
        let plot = LinePlot::new(vec![0.0, f64::NAN, 2.0], vec![1.0, 5.0, 3.0]);
        assert_eq!(plot.bounds(), Some(Bounds::new(0.0, 2.0, 1.0, 3.0)));
    }

    #[test]
    fn test_markers_only() {
        let plot = LinePlot::new(vec![0.5], vec![0.5])
            .marker(Marker::Circle)
            .show_line(false);
        let svg = plot.render_svg(&ctx());
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<path"));
        assert!(plot.line_style().is_none());
    }
}
