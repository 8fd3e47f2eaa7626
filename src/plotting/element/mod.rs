//! Visual elements for plots.

mod axis;
mod colorbar;
mod grid;
mod legend;
pub mod text;

pub use axis::{format_number, AxisConfig};
pub use colorbar::Colorbar;
pub use grid::GridConfig;
pub use legend::{Legend, LegendEntry, LegendPosition};
pub use text::Text;

/// Bounding box for elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Create bounds from corner points.
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Bounds {
            x_min: x1.min(x2),
            x_max: x1.max(x2),
            y_min: y1.min(y2),
            y_max: y1.max(y2),
        }
    }

    /// Bounds of the finite (x, y) pairs, if any.
    pub fn from_xy(x: &[f64], y: &[f64]) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            if !(xi.is_finite() && yi.is_finite()) {
                continue;
            }
            match bounds {
                Some(ref mut b) => b.include_point(xi, yi),
                None => bounds = Some(Bounds::new(xi, xi, yi, yi)),
            }
        }
        bounds
    }

    /// Create a unit bounds (0 to 1).
    pub fn unit() -> Self {
        Bounds::new(0.0, 1.0, 0.0, 1.0)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Expand bounds to include a point.
    pub fn include_point(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Expand bounds to include another bounds.
    pub fn include_bounds(&mut self, other: &Bounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Grow each side by `fraction` of the width/height.
    pub fn pad(&self, fraction: f64) -> Bounds {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Bounds::new(
            self.x_min - dx,
            self.x_max + dx,
            self.y_min - dy,
            self.y_max + dy,
        )
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::unit()
    }
}

/// Mapping from data space into the pixel rectangle of one axes.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// The data bounds being rendered.
    pub data_bounds: Bounds,
    /// The pixel bounds to render into.
    pub pixel_bounds: Bounds,
    /// Whether y grows downward (image orientation).
    pub y_inverted: bool,
}

impl RenderContext {
    pub fn new(data_bounds: Bounds, pixel_bounds: Bounds, y_inverted: bool) -> Self {
        RenderContext {
            data_bounds,
            pixel_bounds,
            y_inverted,
        }
    }

    /// Transform a data point to pixel coordinates.
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        let x_norm = (x - self.data_bounds.x_min) / self.data_bounds.width();
        let y_norm = (y - self.data_bounds.y_min) / self.data_bounds.height();
        self.transform_axes(x_norm, if self.y_inverted { 1.0 - y_norm } else { y_norm })
    }

    /// Transform an axes-fraction point to pixel coordinates.
    pub fn transform_axes(&self, fx: f64, fy: f64) -> (f64, f64) {
        let px = self.pixel_bounds.x_min + fx * self.pixel_bounds.width();
        // SVG has y increasing downward
        let py = self.pixel_bounds.y_max - fy * self.pixel_bounds.height();
        (px, py)
    }

    /// Pixel length of a horizontal data span.
    pub fn x_length(&self, dx: f64) -> f64 {
        dx * self.pixel_bounds.width() / self.data_bounds.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_flips_y() {
        let ctx = RenderContext::new(
            Bounds::new(0.0, 10.0, 0.0, 10.0),
            Bounds::new(100.0, 200.0, 50.0, 150.0),
            false,
        );
        assert_eq!(ctx.transform(0.0, 0.0), (100.0, 150.0));
        assert_eq!(ctx.transform(10.0, 10.0), (200.0, 50.0));
        assert_eq!(ctx.x_length(5.0), 50.0);
    }

    #[test]
    fn test_inverted_y_puts_origin_on_top() {
        let ctx = RenderContext::new(
            Bounds::new(0.0, 10.0, 0.0, 10.0),
            Bounds::new(0.0, 100.0, 0.0, 100.0),
            true,
        );
        assert_eq!(ctx.transform(0.0, 0.0), (0.0, 0.0));
        assert_eq!(ctx.transform_axes(1.0, 1.0), (100.0, 0.0));
    }

    #[test]
    fn test_from_xy_skips_nan() {
        let b = Bounds::from_xy(&[1.0, f64::NAN, 3.0], &[2.0, 0.0, -1.0]).unwrap();
        assert_eq!(b, Bounds::new(1.0, 3.0, -1.0, 2.0));
        assert!(Bounds::from_xy(&[f64::NAN], &[1.0]).is_none());
    }

    #[test]
    fn test_pad() {
        let b = Bounds::new(0.0, 10.0, -2.0, 2.0).pad(0.25);
        assert_eq!(b, Bounds::new(-2.5, 12.5, -3.0, 3.0));
    }
}
