//! Error bars with optional caps, markers and connecting line.

use super::path_data;
use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, LineStyle, MarkerStyle};

/// Error bars around (x, y) points.
///
/// Errors are distances below/above (or left/right of) the point.
#[derive(Debug, Clone)]
pub struct ErrorBarPlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub yerr: Option<Vec<(f64, f64)>>,
    pub xerr: Option<Vec<(f64, f64)>>,
    /// Style of the bars and caps
    pub bar_style: LineStyle,
    /// Cap length in user units; 0 disables caps
    pub cap_size: f64,
    /// Line through the points
    pub connect: Option<LineStyle>,
    pub marker_style: Option<MarkerStyle>,
    pub label: Option<String>,
    pub z_order: f64,
}

impl ErrorBarPlot {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        ErrorBarPlot {
            x,
            y,
            yerr: None,
            xerr: None,
            bar_style: LineStyle::new().color(Color::BLACK),
            cap_size: 0.0,
            connect: None,
            marker_style: None,
            label: None,
            z_order: 2.0,
        }
    }

    /// Symmetric vertical errors.
    pub fn yerr(mut self, err: Vec<f64>) -> Self {
        self.yerr = Some(err.into_iter().map(|e| (e, e)).collect());
        self
    }

    /// Asymmetric vertical errors as (below, above).
    pub fn yerr_asymmetric(mut self, err: Vec<(f64, f64)>) -> Self {
        self.yerr = Some(err);
        self
    }

    /// Symmetric horizontal errors.
    pub fn xerr(mut self, err: Vec<f64>) -> Self {
        self.xerr = Some(err.into_iter().map(|e| (e, e)).collect());
        self
    }

    pub fn bar_style(mut self, style: LineStyle) -> Self {
        self.bar_style = style;
        self
    }

    pub fn cap_size(mut self, size: f64) -> Self {
        self.cap_size = size;
        self
    }

    pub fn connect(mut self, style: LineStyle) -> Self {
        self.connect = Some(style);
        self
    }

    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = Some(style);
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

    fn line(&self, a: (f64, f64), b: (f64, f64)) -> String {
        format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
            a.0,
            a.1,
            b.0,
            b.1,
            self.bar_style.to_svg_style()
        )
    }
}

impl Plot for ErrorBarPlot {
    fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::from_xy(&self.x, &self.y)?;
        for (i, (&x, &y)) in self.x.iter().zip(self.y.iter()).enumerate() {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            if let Some(&(lo, hi)) = self.yerr.as_ref().and_then(|e| e.get(i)) {
                bounds.include_point(x, y - lo);
                bounds.include_point(x, y + hi);
            }
            if let Some(&(lo, hi)) = self.xerr.as_ref().and_then(|e| e.get(i)) {
                bounds.include_point(x - lo, y);
                bounds.include_point(x + hi, y);
            }
        }
        Some(bounds)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn z_order(&self) -> f64 {
        self.z_order
    }

    fn line_style(&self) -> Option<LineStyle> {
        Some(self.connect.clone().unwrap_or_else(|| self.bar_style.clone()))
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        self.marker_style.clone()
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        let mut svg = String::new();
        let half_cap = self.cap_size / 2.0;
        let mut centers = Vec::new();

        for (i, (&x, &y)) in self.x.iter().zip(self.y.iter()).enumerate() {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            centers.push(ctx.transform(x, y));

            if let Some(&(lo, hi)) = self.yerr.as_ref().and_then(|e| e.get(i)) {
                let (px, p_lo) = ctx.transform(x, y - lo);
                let (_, p_hi) = ctx.transform(x, y + hi);
                svg.push_str(&self.line((px, p_lo), (px, p_hi)));
                if half_cap > 0.0 {
                    for py in [p_lo, p_hi] {
                        svg.push_str(&self.line((px - half_cap, py), (px + half_cap, py)));
                    }
                }
            }
            if let Some(&(lo, hi)) = self.xerr.as_ref().and_then(|e| e.get(i)) {
                let (p_lo, py) = ctx.transform(x - lo, y);
                let (p_hi, _) = ctx.transform(x + hi, y);
                svg.push_str(&self.line((p_lo, py), (p_hi, py)));
                if half_cap > 0.0 {
                    for px in [p_lo, p_hi] {
                        svg.push_str(&self.line((px, py - half_cap), (px, py + half_cap)));
                    }
                }
            }
        }

        if let Some(ref style) = self.connect {
            if centers.len() >= 2 {
                svg.push_str(&format!(
                    "<path d=\"{}\" {}/>\n",
                    path_data(&centers),
                    style.to_svg_style()
                ));
            }
        }
        if let Some(ref marker) = self.marker_style {
            for &(px, py) in &centers {
                svg.push_str(&marker.render_at(px, py));
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
            Bounds::new(0.0, 10.0, 0.0, 10.0),
            Bounds::new(0.0, 100.0, 0.0, 100.0),
            false,
        )
    }

    #[test]
    fn test_bounds_include_errors() {
        let plot = ErrorBarPlot::new(vec![1.0, 2.0], vec![5.0, 6.0]).yerr(vec![1.0, 2.0]);
        assert_eq!(plot.bounds(), Some(Bounds::new(1.0, 2.0, 4.0, 8.0)));
        let plot = ErrorBarPlot::new(vec![1.0], vec![5.0]).yerr_asymmetric(vec![(0.5, 3.0)]);
        assert_eq!(plot.bounds(), Some(Bounds::new(1.0, 1.0, 4.5, 8.0)));
    }

    #[test]
    fn test_caps_drawn_at_both_ends() {
        let plot = ErrorBarPlot::new(vec![5.0], vec![5.0])
            .yerr(vec![1.0])
            .cap_size(4.0);
        let svg = plot.render_svg(&ctx());
        assert_eq!(svg.matches("<line").count(), 3);
        assert!(svg.contains("x1=\"48.00\" y1=\"60.00\" x2=\"52.00\" y2=\"60.00\""));
    }

    #[test]
    fn test_horizontal_bar_without_caps() {
        let plot = ErrorBarPlot::new(vec![5.0], vec![0.0]).xerr(vec![2.0]);
        let svg = plot.render_svg(&ctx());
        assert_eq!(svg.matches("<line").count(), 1);
        assert!(svg.contains("x1=\"30.00\" y1=\"100.00\" x2=\"70.00\""));
    }
}
