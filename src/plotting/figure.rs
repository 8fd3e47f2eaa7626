//! Figure (canvas) implementation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::plotting::axes::Axes;
use crate::plotting::backend::SvgBackend;
use crate::plotting::element::Bounds;
use crate::plotting::error::PlotResult;
use crate::plotting::style::{Color, TextAnchor, Theme, ThemeConfig};

/// Points per inch; figure geometry is laid out in points.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Subplot area as figure fractions: left, right, bottom, top.
const SUBPLOT_AREA: (f64, f64, f64, f64) = (0.125, 0.9, 0.11, 0.88);
/// Gap between subplots as a fraction of the average subplot size.
const SUBPLOT_SPACING: f64 = 0.2;

/// Convert centimetres to inches.
pub fn cm_to_inch(cm: f64) -> f64 {
    cm / 2.54
}

/// A figure containing one or more axes (subplots).
pub struct Figure {
    /// Figure width in points
    pub width: f64,
    /// Figure height in points
    pub height: f64,
    /// Output pixels per point
    pub scale: f64,
    /// Background color
    pub background: Color,
    /// Axes (subplots) in this figure
    axes: Vec<Axes>,
    /// Theme configuration
    pub theme: ThemeConfig,
    /// Figure title
    pub title: Option<String>,
}

impl Figure {
    /// Create a new figure of `width` x `height` points.
    pub fn new(width: f64, height: f64) -> Self {
        let theme = ThemeConfig::default();
        Figure {
            width,
            height,
            scale: 1.0,
            background: theme.background.clone(),
            axes: Vec::new(),
            theme,
            title: None,
        }
    }

    /// Create a figure sized in inches, rendered at `dpi`.
    pub fn from_inches(width: f64, height: f64, dpi: f64) -> Self {
        let mut figure = Figure::new(width * POINTS_PER_INCH, height * POINTS_PER_INCH);
        if dpi > 0.0 {
            figure.scale = dpi / POINTS_PER_INCH;
        }
        figure
    }

    /// Set the background color.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = color.into();
        self
    }

    /// Set the theme. Applies to axes created afterwards.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme.config();
        self.background = self.theme.background.clone();
        self
    }

    /// Set the figure title.
    pub fn suptitle(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn push_axes(&mut self, position: Bounds) -> &mut Axes {
        let mut axes = Axes::with_theme(self.theme.clone());
        axes.position = position;
        let index = self.axes.len();
        self.axes.push(axes);
        &mut self.axes[index]
    }

    /// Add a subplot at the given position.
    /// Uses matplotlib-style indexing: (rows, cols, index) where index is 1-based.
    pub fn add_subplot(&mut self, rows: usize, cols: usize, index: usize) -> &mut Axes {
        let cells = grid_positions(rows, cols, &[]);
        let index = index.clamp(1, cells.len()) - 1;
        self.push_axes(cells[index])
    }

    /// Create a grid of equally sized subplots, returned row by row.
    pub fn subplots(&mut self, rows: usize, cols: usize) -> Vec<&mut Axes> {
        self.grid(rows, cols, &[])
    }

    /// Create a grid of subplots whose row heights follow `height_ratios`
    /// (equal heights when empty or mismatched), returned row by row.
    pub fn grid(&mut self, rows: usize, cols: usize, height_ratios: &[f64]) -> Vec<&mut Axes> {
        let start = self.axes.len();
        for position in grid_positions(rows, cols, height_ratios) {
            self.push_axes(position);
        }
        self.axes.iter_mut().skip(start).collect()
    }

    /// Get the most recent axes, creating one if necessary.
    pub fn gca(&mut self) -> &mut Axes {
        if self.axes.is_empty() {
            return self.add_subplot(1, 1, 1);
        }
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    /// Get all axes.
    pub fn get_axes(&mut self) -> &mut [Axes] {
        &mut self.axes
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    /// Render the figure to an SVG string.
    pub fn render(&self) -> String {
        let mut backend = SvgBackend::new(self.width, self.height).scale(self.scale);

        backend.add_content(format!(
            "<rect width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
            self.width,
            self.height,
            self.background.to_svg_string()
        ));

        if let Some(ref title) = self.title {
            let style = self.theme.title_style.clone().bold();
            let size = style.font_size;
            backend.draw_text(
                self.width / 2.0,
                size * 1.5,
                title,
                &style.font_size(size + 2.0).anchor(TextAnchor::Middle),
            );
        }

        for axes in &self.axes {
            backend.add_content(axes.render_svg(self.width, self.height));
        }

        backend.render()
    }

    /// Save the figure as SVG.
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        let svg = self.render();
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        debug!("Wrote {} bytes of SVG to {}", svg.len(), path.display());
        Ok(())
    }
}

impl Default for Figure {
    /// matplotlib's default 6.4 x 4.8 inch canvas.
    fn default() -> Self {
        Figure::from_inches(6.4, 4.8, 100.0)
    }
}

/// Subplot rectangles (figure fractions) for a rows x cols grid, row 0 on top.
fn grid_positions(rows: usize, cols: usize, height_ratios: &[f64]) -> Vec<Bounds> {
    let rows = rows.max(1);
    let cols = cols.max(1);
    let (left, right, bottom, top) = SUBPLOT_AREA;

    let cell_w = (right - left) / (cols as f64 + SUBPLOT_SPACING * (cols - 1) as f64);
    let gap_w = cell_w * SUBPLOT_SPACING;
    let mean_h = (top - bottom) / (rows as f64 + SUBPLOT_SPACING * (rows - 1) as f64);
    let gap_h = mean_h * SUBPLOT_SPACING;

    let ratios: Vec<f64> = if height_ratios.len() == rows && height_ratios.iter().all(|r| *r > 0.0)
    {
        height_ratios.to_vec()
    } else {
        vec![1.0; rows]
    };
    let total: f64 = ratios.iter().sum();
    let heights: Vec<f64> = ratios
        .iter()
        .map(|r| mean_h * rows as f64 * r / total)
        .collect();

    let mut cells = Vec::with_capacity(rows * cols);
    let mut row_top = top;
    for height in heights {
        for col in 0..cols {
            let x0 = left + col as f64 * (cell_w + gap_w);
            cells.push(Bounds::new(x0, x0 + cell_w, row_top - height, row_top));
        }
        row_top -= height + gap_h;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inches_scales_output() {
        let fig = Figure::from_inches(2.0, 1.0, 144.0);
        assert_eq!((fig.width, fig.height, fig.scale), (144.0, 72.0, 2.0));
        let svg = fig.render();
        assert!(svg.contains("width=\"288.00\" height=\"144.00\" viewBox=\"0 0 144.00 72.00\""));
    }

    #[test]
    fn test_cm_to_inch() {
        assert!((cm_to_inch(2.54) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_grid_rows_follow_height_ratios() {
        let cells = grid_positions(2, 1, &[1.0, 3.0]);
        assert_eq!(cells.len(), 2);
        let (upper, lower) = (cells[0], cells[1]);
        assert!(upper.y_min > lower.y_max);
        assert!((lower.height() / upper.height() - 3.0).abs() < 1e-9);
        assert!((upper.y_max - 0.88).abs() < 1e-12);
        assert!((lower.y_min - 0.11).abs() < 1e-9);
    }

    #[test]
    fn test_subplots_row_major() {
        let mut fig = Figure::new(400.0, 400.0);
        let axes = fig.subplots(2, 2);
        assert_eq!(axes.len(), 4);
        let positions: Vec<Bounds> = fig.axes().iter().map(|a| a.position).collect();
        assert!(positions[0].x_max < positions[1].x_min);
        assert!(positions[0].y_min > positions[2].y_max);
        assert_eq!(positions[0].y_max, positions[1].y_max);
    }

    #[test]
    fn test_gca_creates_axes_once() {
        let mut fig = Figure::default();
        fig.gca().set_title("a");
        fig.gca().set_xlabel("b");
        assert_eq!(fig.axes().len(), 1);
    }

    #[test]
    fn test_render_includes_suptitle_and_axes() {
        let mut fig = Figure::new(200.0, 100.0).suptitle("Overview");
        fig.add_subplot(1, 2, 2).set_title("right");
        let svg = fig.render();
        assert!(svg.contains(">Overview</text>"));
        assert!(svg.contains(">right</text>"));
    }
}
