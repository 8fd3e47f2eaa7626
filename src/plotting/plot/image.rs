//! Color-mapped matrix images (heatmaps).

use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::Plot;
use crate::plotting::style::{Colormap, Normalize};

/// A rows x cols matrix drawn as colored cells centered on integer
/// coordinates: column `c` spans `c-0.5..c+0.5` on x, row `r` on y.
#[derive(Debug, Clone)]
pub struct ImagePlot {
    pub values: Vec<Vec<f64>>,
    pub cmap: Colormap,
    pub norm: Normalize,
    pub z_order: f64,
}

impl ImagePlot {
    /// Image normalized over the finite range of `values`.
    pub fn new(values: Vec<Vec<f64>>) -> Self {
        let flat: Vec<f64> = values.iter().flatten().copied().collect();
        ImagePlot {
            norm: Normalize::autoscale(&flat),
            values,
            cmap: Colormap::default(),
            z_order: 0.0,
        }
    }

    pub fn cmap(mut self, cmap: Colormap) -> Self {
        self.cmap = cmap;
        self
    }

    pub fn norm(mut self, norm: Normalize) -> Self {
        self.norm = norm;
        self
    }

    /// Override one or both ends of the color normalization.
    pub fn limits(mut self, vmin: Option<f64>, vmax: Option<f64>) -> Self {
        if let Some(v) = vmin {
            self.norm.vmin = v;
        }
        if let Some(v) = vmax {
            self.norm.vmax = v;
        }
        self
    }

    pub fn rows(&self) -> usize {
        self.values.len()
    }

    pub fn cols(&self) -> usize {
        self.values.iter().map(|row| row.len()).max().unwrap_or(0)
    }
}

impl Plot for ImagePlot {
    fn bounds(&self) -> Option<Bounds> {
        if self.rows() == 0 || self.cols() == 0 {
            return None;
        }
        Some(Bounds::new(
            -0.5,
            self.cols() as f64 - 0.5,
            -0.5,
            self.rows() as f64 - 0.5,
        ))
    }

    fn z_order(&self) -> f64 {
        self.z_order
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        let mut svg = String::from("<g shape-rendering=\"crispEdges\">\n");
        for (r, row) in self.values.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value.is_nan() {
                    continue;
                }
                let (x0, y0) = ctx.transform(c as f64 - 0.5, r as f64 - 0.5);
                let (x1, y1) = ctx.transform(c as f64 + 0.5, r as f64 + 0.5);
                svg.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
                    x0.min(x1),
                    y0.min(y1),
                    (x1 - x0).abs(),
                    (y1 - y0).abs(),
                    self.cmap.map(value, &self.norm).to_svg_string()
                ));
            }
        }
        svg.push_str("</g>\n");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_center_cells_on_integers() {
        let image = ImagePlot::new(vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);
        assert_eq!(image.bounds(), Some(Bounds::new(-0.5, 2.5, -0.5, 1.5)));
        assert_eq!(image.norm, Normalize::new(0.0, 5.0));
    }

    #[test]
    fn test_nan_cells_skipped() {
        let image = ImagePlot::new(vec![vec![0.0, f64::NAN], vec![1.0, 2.0]]);
        let ctx = RenderContext::new(
            image.bounds().unwrap(),
            Bounds::new(0.0, 20.0, 0.0, 20.0),
            true,
        );
        let svg = image.render_svg(&ctx);
        assert_eq!(svg.matches("<rect").count(), 3);
        // row 0 sits at the top when the y axis is inverted
        assert!(svg.contains("<rect x=\"0.00\" y=\"0.00\" width=\"10.00\" height=\"10.00\""));
    }

    #[test]
    fn test_limits_override_norm() {
        let image = ImagePlot::new(vec![vec![0.2, 0.4]]).limits(Some(0.0), Some(1.0));
        assert_eq!(image.norm, Normalize::new(0.0, 1.0));
    }
}
