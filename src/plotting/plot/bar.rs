//! Vertical bar plot (also used for histograms).

use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, FillStyle};

/// Vertical bars centered on `x`.
#[derive(Debug, Clone)]
pub struct BarPlot {
    pub x: Vec<f64>,
    pub heights: Vec<f64>,
    /// Bar widths; a single value applies to every bar
    pub widths: Vec<f64>,
    pub bottom: f64,
    /// Face colors; cycled when shorter than the bar count
    pub colors: Vec<Color>,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
    pub alpha: f64,
    pub label: Option<String>,
    pub z_order: f64,
}

impl BarPlot {
    pub fn new(x: Vec<f64>, heights: Vec<f64>) -> Self {
        BarPlot {
            x,
            heights,
            widths: vec![0.8],
            bottom: 0.0,
            colors: vec![Color::default()],
            edge_color: None,
            edge_width: 0.0,
            alpha: 1.0,
            label: None,
            z_order: 1.0,
        }
    }

    pub fn width(mut self, width: f64) -> Self {
        self.widths = vec![width];
        self
    }

    pub fn widths(mut self, widths: Vec<f64>) -> Self {
        self.widths = widths;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.colors = vec![color.into()];
        self
    }

    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        if !colors.is_empty() {
            self.colors = colors;
        }
        self
    }

    pub fn edge(mut self, color: impl Into<Color>, width: f64) -> Self {
        self.edge_color = Some(color.into());
        self.edge_width = width;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn width_at(&self, i: usize) -> f64 {
        match self.widths.len() {
            0 => 0.8,
            1 => self.widths[0],
            _ => self.widths.get(i).copied().unwrap_or(0.8),
        }
    }

    fn style_at(&self, i: usize) -> FillStyle {
        let mut style = FillStyle::new(self.colors[i % self.colors.len()].clone())
            .opacity(self.alpha)
            .stroke_width(self.edge_width);
        style.stroke = self.edge_color.clone();
        style
    }
}

impl Plot for BarPlot {
    fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for (i, (&x, &h)) in self.x.iter().zip(self.heights.iter()).enumerate() {
            if !(x.is_finite() && h.is_finite()) {
                continue;
            }
            let half = self.width_at(i) / 2.0;
            let bar = Bounds::from_points(x - half, self.bottom, x + half, self.bottom + h);
            match bounds {
                Some(ref mut b) => b.include_bounds(&bar),
                None => bounds = Some(bar),
            }
        }
        bounds
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn z_order(&self) -> f64 {
        self.z_order
    }

    fn fill_style(&self) -> Option<FillStyle> {
        Some(self.style_at(0))
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        let mut svg = String::new();
        for (i, (&x, &h)) in self.x.iter().zip(self.heights.iter()).enumerate() {
            if !(x.is_finite() && h.is_finite()) {
                continue;
            }
            let half = self.width_at(i) / 2.0;
            let (x0, y0) = ctx.transform(x - half, self.bottom);
            let (x1, y1) = ctx.transform(x + half, self.bottom + h);
            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
                x0.min(x1),
                y0.min(y1),
                (x1 - x0).abs(),
                (y1 - y0).abs(),
                self.style_at(i).to_svg_style()
            ));
        }
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_include_baseline() {
        let plot = BarPlot::new(vec![0.0, 1.0], vec![3.0, 5.0]).width(0.5);
        let b = plot.bounds().unwrap();
        assert_eq!(b, Bounds::new(-0.25, 1.25, 0.0, 5.0));
    }

    #[test]
    fn test_colors_cycle_per_bar() {
        let ctx = RenderContext::new(
            Bounds::new(-1.0, 3.0, 0.0, 2.0),
            Bounds::new(0.0, 40.0, 0.0, 20.0),
            false,
        );
        let plot = BarPlot::new(vec![0.0, 1.0, 2.0], vec![1.0, 1.0, 1.0])
            .colors(vec![Color::RED, Color::BLUE])
            .edge(Color::WHITE, 0.75);
        let svg = plot.render_svg(&ctx);
        assert_eq!(svg.matches("rgb(255,0,0)").count(), 2);
        assert_eq!(svg.matches("stroke=\"rgb(255,255,255)\"").count(), 3);
    }
}
