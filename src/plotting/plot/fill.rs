//! Band between two curves.

use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::Plot;
use crate::plotting::style::FillStyle;

/// Region between `y1(x)` and `y2(x)`.
#[derive(Debug, Clone)]
pub struct FillBetween {
    pub x: Vec<f64>,
    pub y1: Vec<f64>,
    pub y2: Vec<f64>,
    pub style: FillStyle,
    pub label: Option<String>,
    pub z_order: f64,
}

impl FillBetween {
    pub fn new(x: Vec<f64>, y1: Vec<f64>, y2: Vec<f64>, style: FillStyle) -> Self {
        FillBetween {
            x,
            y1,
            y2,
            style,
            label: None,
            z_order: 1.0,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn z_order(mut self, z: f64) -> Self {
        self.z_order = z;
        self
    }

    fn finite_triples(&self) -> Vec<(f64, f64, f64)> {
        self.x
            .iter()
            .zip(self.y1.iter().zip(self.y2.iter()))
            .filter(|(x, (a, b))| x.is_finite() && a.is_finite() && b.is_finite())
            .map(|(&x, (&a, &b))| (x, a, b))
            .collect()
    }
}

impl Plot for FillBetween {
    fn bounds(&self) -> Option<Bounds> {
        let triples = self.finite_triples();
        let mut bounds: Option<Bounds> = None;
        for (x, a, b) in triples {
            let segment = Bounds::from_points(x, a, x, b);
            match bounds {
                Some(ref mut bb) => bb.include_bounds(&segment),
                None => bounds = Some(segment),
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
        Some(self.style.clone())
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        let triples = self.finite_triples();
        if triples.len() < 2 {
            return String::new();
        }
        // Upper edge left to right, then lower edge back.
        let outline: Vec<String> = triples
            .iter()
            .map(|&(x, a, _)| ctx.transform(x, a))
            .chain(triples.iter().rev().map(|&(x, _, b)| ctx.transform(x, b)))
            .map(|(px, py)| format!("{:.2},{:.2}", px, py))
            .collect();
        format!(
            "<polygon points=\"{}\" {}/>\n",
            outline.join(" "),
            self.style.to_svg_style()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::Color;

    #[test]
    fn test_band_outline_closes() {
        let band = FillBetween::new(
            vec![0.0, 1.0, 2.0],
            vec![1.0, 2.0, 3.0],
            vec![0.0, 0.5, 1.0],
            FillStyle::new(Color::RED).opacity(0.6),
        );
        assert_eq!(band.bounds(), Some(Bounds::new(0.0, 2.0, 0.0, 3.0)));
        let ctx = RenderContext::new(Bounds::new(0.0, 2.0, 0.0, 3.0), Bounds::new(0.0, 2.0, 0.0, 3.0), false);
        let svg = band.render_svg(&ctx);
        assert!(svg.contains(
            "points=\"0.00,2.00 1.00,1.00 2.00,0.00 2.00,2.00 1.00,2.50 0.00,3.00\""
        ));
        assert!(svg.contains("fill-opacity=\"0.6\""));
    }
}
