//! Scatter plot implementation.

use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, Marker, MarkerStyle};

/// Individual markers at data points.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub marker_style: MarkerStyle,
    pub label: Option<String>,
    /// Optional face color for each point
    pub colors: Option<Vec<Color>>,
    pub z_order: f64,
    pub clip_on: bool,
}

impl ScatterPlot {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        ScatterPlot {
            x,
            y,
            marker_style: MarkerStyle::default(),
            label: None,
            colors: None,
            z_order: 1.0,
            clip_on: true,
        }
    }

    /// Set the face color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.marker_style.fill = color.into();
        self
    }

    pub fn edge_color(mut self, color: impl Into<Color>) -> Self {
        self.marker_style.edge_color = color.into();
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker_style.marker = marker;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.marker_style.size = size;
        self
    }

    /// Per-point face colors.
    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Opacity applied to face and edge alike.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.marker_style.fill_opacity = alpha.clamp(0.0, 1.0);
        self.marker_style.edge_opacity = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn edge_width(mut self, width: f64) -> Self {
        self.marker_style.edge_width = width;
        self
    }

    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = style;
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

impl Plot for ScatterPlot {
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

    fn marker_style(&self) -> Option<MarkerStyle> {
        Some(self.marker_style.clone())
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        let marker = &self.marker_style.marker;
        let radius = self.marker_style.size / 2.0;
        let points = self
            .x
            .iter()
            .zip(self.y.iter())
            .enumerate()
            .filter(|(_, (x, y))| x.is_finite() && y.is_finite());

        // Uniform circles share their attributes through a group wrapper.
        if self.colors.is_none() && marker.is_circle() {
            let mut svg = format!("<g {}>\n", self.marker_style.to_svg_style());
            for (_, (&x, &y)) in points {
                let (px, py) = ctx.transform(x, y);
                svg.push_str(&format!(
                    "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>\n",
                    px, py, radius
                ));
            }
            svg.push_str("</g>\n");
            return svg;
        }

        let mut svg = String::new();
        for (i, (&x, &y)) in points {
            let (px, py) = ctx.transform(x, y);
            let point_style = match self.colors.as_ref().and_then(|c| c.get(i)) {
                Some(color) => self.marker_style.clone().fill(color.clone()),
                None => self.marker_style.clone(),
            };
            svg.push_str(&point_style.render_at(px, py));
        }
        svg
    }
}
