//! Vertical colorbar drawn to the right of an axes.

use crate::plotting::element::{format_number, Bounds};
use crate::plotting::scale::nice_ticks;
use crate::plotting::style::{
    Color, Colormap, DominantBaseline, LineStyle, Norm, Normalize, TextAnchor, TextStyle,
};

/// Colorbar for an image drawn in the owning axes.
#[derive(Debug, Clone)]
pub struct Colorbar {
    pub cmap: Colormap,
    pub norm: Normalize,
    /// Heading above the bar
    pub title: Option<String>,
    /// Gap between axes and bar, as a fraction of the axes width
    pub pad: f64,
    /// Bar height over bar width
    pub aspect: f64,
    pub outline_width: f64,
    /// Number of color bands
    pub steps: usize,
    pub num_ticks: usize,
}

impl Colorbar {
    pub fn new(cmap: Colormap, norm: Normalize) -> Self {
        Colorbar {
            cmap,
            norm,
            title: None,
            pad: 0.05,
            aspect: 20.0,
            outline_width: 0.75,
            steps: 64,
            num_ticks: 5,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    pub fn outline_width(mut self, width: f64) -> Self {
        self.outline_width = width;
        self
    }

    /// Pixel rectangle of the bar for an axes drawn at `axes_px`.
    pub fn bar_bounds(&self, axes_px: &Bounds) -> Bounds {
        let x0 = axes_px.x_max + self.pad * axes_px.width();
        let width = axes_px.height() / self.aspect.max(1.0);
        Bounds::new(x0, x0 + width, axes_px.y_min, axes_px.y_max)
    }

    pub fn render(&self, axes_px: &Bounds, tick_style: &TextStyle, tick_length: f64) -> String {
        let bar = self.bar_bounds(axes_px);
        let steps = self.steps.max(1);
        let band = bar.height() / steps as f64;
        let mut svg = String::from("<g shape-rendering=\"crispEdges\">\n");

        // Bands run bottom (vmin) to top (vmax).
        for i in 0..steps {
            let t = (i as f64 + 0.5) / steps as f64;
            let y = bar.y_max - (i + 1) as f64 * band;
            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
                bar.x_min,
                y,
                bar.width(),
                band + 0.01,
                self.cmap.sample(t).to_svg_string()
            ));
        }
        svg.push_str("</g>\n");

        let outline = LineStyle::new().color(Color::BLACK).width(self.outline_width);
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            bar.x_min,
            bar.y_min,
            bar.width(),
            bar.height(),
            outline.color.to_svg_string(),
            outline.width
        ));

        let (lo, hi) = (
            self.norm.vmin.min(self.norm.vmax),
            self.norm.vmin.max(self.norm.vmax),
        );
        let label_style = tick_style
            .clone()
            .anchor(TextAnchor::Start)
            .baseline(DominantBaseline::Middle);
        for tick in nice_ticks(lo, hi, self.num_ticks) {
            let t = self.norm.normalize(tick);
            if !(-1e-9..=1.0 + 1e-9).contains(&t) {
                continue;
            }
            let y = bar.y_max - t * bar.height();
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                bar.x_max,
                y,
                bar.x_max + tick_length,
                y,
                outline.to_svg_style()
            ));
            svg.push_str(&label_style.render(
                bar.x_max + tick_length + 2.0,
                y,
                &format_number(tick),
            ));
        }

        if let Some(ref title) = self.title {
            let style = tick_style
                .clone()
                .anchor(TextAnchor::Middle)
                .baseline(DominantBaseline::Auto);
            svg.push_str(&style.render(
                (bar.x_min + bar.x_max) / 2.0,
                bar.y_min - style.font_size * 0.5,
                title,
            ));
        }
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_sits_right_of_axes() {
        let cb = Colorbar::new(Colormap::VIRIDIS, Normalize::new(0.0, 1.0)).pad(0.1);
        let bar = cb.bar_bounds(&Bounds::new(0.0, 100.0, 0.0, 200.0));
        assert_eq!(bar, Bounds::new(10.0 + 100.0, 120.0, 0.0, 200.0));
    }

    #[test]
    fn test_render_bands_ticks_and_title() {
        let cb = Colorbar::new(Colormap::VIRIDIS, Normalize::new(0.0, 1.0)).title("score");
        let svg = cb.render(&Bounds::new(0.0, 100.0, 0.0, 100.0), &TextStyle::new(), 3.0);
        // 64 bands plus the outline
        assert_eq!(svg.matches("<rect").count(), 65);
        assert!(svg.contains(">score</text>"));
        assert!(svg.contains(">0.4</text>"));
        // the top band carries the vmax color
        assert!(svg.contains(&Colormap::VIRIDIS.sample(63.5 / 64.0).to_svg_string()));
    }
}
