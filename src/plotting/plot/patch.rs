//! Filled polygon patches in data coordinates.

use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::Plot;
use crate::plotting::style::FillStyle;

/// A closed polygon (violin bodies, CI rectangles, ...).
#[derive(Debug, Clone)]
pub struct Polygon {
    pub points: Vec<(f64, f64)>,
    pub style: FillStyle,
    pub label: Option<String>,
    pub z_order: f64,
    pub clip_on: bool,
}

impl Polygon {
    pub fn new(points: Vec<(f64, f64)>, style: FillStyle) -> Self {
        Polygon {
            points,
            style,
            label: None,
            z_order: 1.0,
            clip_on: true,
        }
    }

    /// Axis-aligned rectangle with lower-left corner (x, y).
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64, style: FillStyle) -> Self {
        Polygon::new(
            vec![
                (x, y),
                (x + width, y),
                (x + width, y + height),
                (x, y + height),
            ],
            style,
        )
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

impl Plot for Polygon {
    fn bounds(&self) -> Option<Bounds> {
        let (x, y): (Vec<f64>, Vec<f64>) = self.points.iter().copied().unzip();
        Bounds::from_xy(&x, &y)
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

    fn fill_style(&self) -> Option<FillStyle> {
        Some(self.style.clone())
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        let points: Vec<String> = self
            .points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&(x, y)| {
                let (px, py) = ctx.transform(x, y);
                format!("{:.2},{:.2}", px, py)
            })
            .collect();
        if points.len() < 3 {
            return String::new();
        }
        format!(
            "<polygon points=\"{}\" {}/>\n",
            points.join(" "),
            self.style.to_svg_style()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::Color;

    #[test]
    fn test_rectangle_bounds_and_svg() {
        let rect = Polygon::rectangle(1.0, -1.0, 0.25, 2.0, FillStyle::outline(Color::BLACK, 0.75));
        assert_eq!(rect.bounds(), Some(Bounds::new(1.0, 1.25, -1.0, 1.0)));
        let ctx = RenderContext::new(Bounds::new(0.0, 2.0, -2.0, 2.0), Bounds::new(0.0, 100.0, 0.0, 100.0), false);
        let svg = rect.render_svg(&ctx);
        assert!(svg.starts_with("<polygon points=\"50.00,75.00 62.50,75.00 62.50,25.00 50.00,25.00\""));
        assert!(svg.contains("fill=\"none\""));
    }
}
