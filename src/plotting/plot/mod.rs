//! Plot types for visualizing data.

mod bar;
mod errorbar;
mod fill;
mod image;
mod line;
mod patch;
mod scatter;

pub use bar::BarPlot;
pub use errorbar::ErrorBarPlot;
pub use fill::FillBetween;
pub use image::ImagePlot;
pub use line::LinePlot;
pub use patch::Polygon;
pub use scatter::ScatterPlot;

use crate::plotting::element::{Bounds, LegendEntry, RenderContext};
use crate::plotting::style::{FillStyle, LineStyle, MarkerStyle};

/// Trait for plot types that can be rendered inside an axes.
pub trait Plot {
    /// Get the data bounds for this plot.
    fn bounds(&self) -> Option<Bounds>;

    /// Get the label for this plot (for legend).
    fn label(&self) -> Option<&str> {
        None
    }

    /// Drawing order; higher values are drawn on top. Equal values keep
    /// insertion order.
    fn z_order(&self) -> f64 {
        0.0
    }

    /// Whether drawing is clipped to the axes rectangle.
    fn clip_on(&self) -> bool {
        true
    }

    /// Get the line style for legend display.
    fn line_style(&self) -> Option<LineStyle> {
        None
    }

    /// Get the marker style for legend display.
    fn marker_style(&self) -> Option<MarkerStyle> {
        None
    }

    /// Get the fill style for legend display.
    fn fill_style(&self) -> Option<FillStyle> {
        None
    }

    /// Create a legend entry for this plot.
    fn legend_entry(&self) -> Option<LegendEntry> {
        self.label().map(|label| {
            let mut entry = LegendEntry::new(label);
            if let Some(style) = self.line_style() {
                entry = entry.line_style(style);
            }
            if let Some(style) = self.marker_style() {
                entry = entry.marker_style(style);
            }
            if let Some(style) = self.fill_style() {
                entry = entry.fill_style(style);
            }
            entry
        })
    }

    /// Render this plot to SVG, returning the SVG elements as a string.
    fn render_svg(&self, ctx: &RenderContext) -> String;
}

/// SVG path data through pixel points (`M x,y L x,y ...`).
pub(crate) fn path_data(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            if i == 0 {
                format!("M{:.2},{:.2}", x, y)
            } else {
                format!(" L{:.2},{:.2}", x, y)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_data() {
        assert_eq!(path_data(&[(0.0, 1.0), (2.5, 3.0)]), "M0.00,1.00 L2.50,3.00");
        assert_eq!(path_data(&[]), "");
    }
}
