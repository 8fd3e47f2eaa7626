//! Axes (subplot) implementation.

use std::cmp::Ordering;

use crate::layout::CoordSpace;
use crate::plotting::data::IntoPlotData;
use crate::plotting::element::{
    AxisConfig, Bounds, Colorbar, GridConfig, Legend, LegendPosition, RenderContext, Text,
};
use crate::plotting::plot::{
    BarPlot, ErrorBarPlot, FillBetween, ImagePlot, LinePlot, Plot, Polygon, ScatterPlot,
};
use crate::plotting::scale::{LinearScale, Scale};
use crate::plotting::style::{
    Color, DashPattern, DominantBaseline, LineStyle, Marker, MarkerStyle, TextAnchor, TextStyle,
    ThemeConfig,
};

/// Fraction of the data range added on each side of auto-scaled limits.
const AUTO_MARGIN: f64 = 0.05;
/// Gap between tick labels and axis labels, in user units.
const LABEL_PAD: f64 = 4.0;
/// Gap between the top of the axes and the title.
const TITLE_PAD: f64 = 6.0;
/// Approximate glyph width relative to the font size.
const CHAR_WIDTH: f64 = 0.6;

/// Text or line drawn above the plots, never clipped.
#[derive(Debug, Clone)]
pub enum Overlay {
    Text {
        x: f64,
        y: f64,
        space: CoordSpace,
        content: String,
        style: TextStyle,
    },
    Segment {
        from: (f64, f64),
        to: (f64, f64),
        space: CoordSpace,
        style: LineStyle,
    },
}

/// Which sides of the axes frame are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spines {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Spines {
    pub fn all() -> Self {
        Spines {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub fn from_theme(theme: &ThemeConfig) -> Self {
        Spines {
            top: theme.show_top_right_spines,
            right: theme.show_top_right_spines,
            bottom: true,
            left: true,
        }
    }
}

/// An axes object representing a single plot area.
pub struct Axes {
    /// Position within the figure (or, for insets, the parent axes) as fractions
    pub position: Bounds,
    /// X-axis scale
    pub x_scale: Box<dyn Scale>,
    /// Y-axis scale
    pub y_scale: Box<dyn Scale>,
    /// Plots contained in this axes
    plots: Vec<Box<dyn Plot>>,
    overlays: Vec<Overlay>,
    insets: Vec<Axes>,
    colorbar: Option<Colorbar>,
    pub title: Option<Text>,
    pub x_label: Option<Text>,
    pub y_label: Option<Text>,
    pub legend: Option<Legend>,
    pub grid: GridConfig,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub spines: Spines,
    /// Draw frame, ticks and axis labels
    pub axis_on: bool,
    /// Data bounds (computed from plots)
    data_bounds: Option<Bounds>,
    /// Manual x-axis limits
    x_lim: Option<(f64, f64)>,
    /// Manual y-axis limits
    y_lim: Option<(f64, f64)>,
    /// Auto limits hug the data without margins
    tight: bool,
    /// Row 0 at the top (image orientation)
    y_inverted: bool,
    pub theme: ThemeConfig,
}

impl Axes {
    /// Create a new axes with default settings.
    pub fn new() -> Self {
        Axes::with_theme(ThemeConfig::default())
    }

    /// Create an axes styled by `theme`.
    pub fn with_theme(theme: ThemeConfig) -> Self {
        let axis_line = LineStyle::new()
            .color(theme.axis_color.clone())
            .width(theme.axis_width);
        let axis = AxisConfig::new()
            .line_style(axis_line)
            .tick_length(theme.tick_length)
            .tick_label_style(theme.tick_style.clone());
        let grid = GridConfig {
            visible: theme.show_grid,
            style: LineStyle::new()
                .color(theme.grid_color.clone())
                .width(theme.grid_width)
                .opacity(theme.grid_opacity),
            ..Default::default()
        };

        Axes {
            position: Bounds::new(0.125, 0.9, 0.11, 0.88),
            x_scale: Box::new(LinearScale::auto()),
            y_scale: Box::new(LinearScale::auto()),
            plots: Vec::new(),
            overlays: Vec::new(),
            insets: Vec::new(),
            colorbar: None,
            title: None,
            x_label: None,
            y_label: None,
            legend: None,
            grid,
            x_axis: axis.clone(),
            y_axis: axis,
            spines: Spines::from_theme(&theme),
            axis_on: true,
            data_bounds: None,
            x_lim: None,
            y_lim: None,
            tight: false,
            y_inverted: false,
            theme,
        }
    }

    /// Set the position within the figure.
    pub fn position(mut self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        self.position = Bounds::new(left, right, bottom, top);
        self
    }

    /// Add a line plot.
    pub fn plot(&mut self, x: impl IntoPlotData, y: impl IntoPlotData) -> LinePlotBuilder<'_> {
        LinePlotBuilder {
            axes: self,
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            color: None,
            linewidth: None,
            linestyle: None,
            marker: None,
            markersize: None,
            marker_edge_width: None,
            marker_style: None,
            alpha: None,
            label: None,
            format: None,
            z_order: None,
            clip_on: true,
        }
    }

    /// Add a scatter plot.
    pub fn scatter(
        &mut self,
        x: impl IntoPlotData,
        y: impl IntoPlotData,
    ) -> ScatterPlotBuilder<'_> {
        ScatterPlotBuilder {
            axes: self,
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            color: None,
            colors: None,
            edge_color: None,
            size: None,
            marker: None,
            face_alpha: None,
            edge_alpha: None,
            label: None,
            edge_width: None,
            z_order: None,
            clip_on: true,
        }
    }

    pub fn bar(&mut self, bars: BarPlot) -> &mut Self {
        self.add_plot(Box::new(bars));
        self
    }

    pub fn fill_between(&mut self, band: FillBetween) -> &mut Self {
        self.add_plot(Box::new(band));
        self
    }

    pub fn add_patch(&mut self, patch: Polygon) -> &mut Self {
        self.add_plot(Box::new(patch));
        self
    }

    pub fn errorbar(&mut self, bars: ErrorBarPlot) -> &mut Self {
        self.add_plot(Box::new(bars));
        self
    }

    /// Horizontal lines at each `y[i]` from `x_min[i]` to `x_max[i]`.
    pub fn hlines(&mut self, y: &[f64], x_min: &[f64], x_max: &[f64], style: LineStyle) -> &mut Self {
        for ((&y, &x0), &x1) in y.iter().zip(x_min).zip(x_max) {
            let mut line = LinePlot::new(vec![x0, x1], vec![y, y]);
            line.line_style = style.clone();
            self.add_plot(Box::new(line));
        }
        self
    }

    /// Vertical lines at each `x[i]` from `y_min[i]` to `y_max[i]`.
    pub fn vlines(&mut self, x: &[f64], y_min: &[f64], y_max: &[f64], style: LineStyle) -> &mut Self {
        for ((&x, &y0), &y1) in x.iter().zip(y_min).zip(y_max) {
            let mut line = LinePlot::new(vec![x, x], vec![y0, y1]);
            line.line_style = style.clone();
            self.add_plot(Box::new(line));
        }
        self
    }

    /// Show a matrix image. Limits hug the cells and row 0 is drawn on top.
    pub fn imshow(&mut self, image: ImagePlot) -> &mut Self {
        self.tight = true;
        self.y_inverted = true;
        self.add_plot(Box::new(image));
        self
    }

    /// Attach a colorbar to the right of the plot area.
    pub fn colorbar(&mut self, colorbar: Colorbar) -> &mut Self {
        self.colorbar = Some(colorbar);
        self
    }

    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: impl Into<String>,
        space: CoordSpace,
        style: TextStyle,
    ) -> &mut Self {
        self.overlays.push(Overlay::Text {
            x,
            y,
            space,
            content: content.into(),
            style,
        });
        self
    }

    pub fn segment(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        space: CoordSpace,
        style: LineStyle,
    ) -> &mut Self {
        self.overlays.push(Overlay::Segment {
            from,
            to,
            space,
            style,
        });
        self
    }

    /// Add an axes inside (or next to) this one. Coordinates are fractions of
    /// this axes' plot area.
    pub fn inset_axes(&mut self, x0: f64, y0: f64, width: f64, height: f64) -> &mut Axes {
        let mut inset = Axes::with_theme(self.theme.clone());
        inset.position = Bounds::new(x0, x0 + width, y0, y0 + height);
        let index = self.insets.len();
        self.insets.push(inset);
        &mut self.insets[index]
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(Text::new(title, self.theme.title_style.clone()));
        self
    }

    /// Set the x-axis label.
    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(Text::new(label, self.theme.label_style.clone()));
        self
    }

    /// Set the y-axis label.
    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(Text::new(label, self.theme.label_style.clone()));
        self
    }

    /// Set the x-axis limits.
    pub fn set_xlim(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_lim = Some((min, max));
        self
    }

    /// Set the y-axis limits, bottom to top. Clears an image inversion.
    pub fn set_ylim(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_lim = Some((min, max));
        self.y_inverted = false;
        self
    }

    /// Draw the y axis top to bottom.
    pub fn invert_yaxis(&mut self) -> &mut Self {
        self.y_inverted = !self.y_inverted;
        self
    }

    pub fn is_y_inverted(&self) -> bool {
        self.y_inverted
    }

    /// Custom x ticks; labels default to the formatted positions.
    pub fn set_xticks(&mut self, positions: Vec<f64>, labels: Option<Vec<String>>) -> &mut Self {
        self.x_axis.set_ticks(positions, labels);
        self
    }

    pub fn set_yticks(&mut self, positions: Vec<f64>, labels: Option<Vec<String>>) -> &mut Self {
        self.y_axis.set_ticks(positions, labels);
        self
    }

    /// Rotate x tick labels counter-clockwise by `degrees`.
    pub fn set_xtick_rotation(&mut self, degrees: f64) -> &mut Self {
        self.x_axis.tick_rotation = degrees;
        self
    }

    /// Rotate y tick labels counter-clockwise by `degrees`.
    pub fn set_ytick_rotation(&mut self, degrees: f64) -> &mut Self {
        self.y_axis.tick_rotation = degrees;
        self
    }

    /// Tick mark length on both axes.
    pub fn set_tick_length(&mut self, length: f64) -> &mut Self {
        self.x_axis.tick_length = length;
        self.y_axis.tick_length = length;
        self
    }

    pub fn set_spines(&mut self, spines: Spines) -> &mut Self {
        self.spines = spines;
        self
    }

    /// Hide frame, ticks and axis labels; plots and overlays still draw.
    pub fn set_axis_off(&mut self) -> &mut Self {
        self.axis_on = false;
        self
    }

    /// Enable or disable the grid.
    pub fn grid(&mut self, visible: bool) -> &mut Self {
        self.grid.visible = visible;
        self
    }

    /// Show the legend.
    pub fn legend(&mut self) -> &mut Self {
        self.legend_mut().visible = true;
        self
    }

    /// Show the legend at a specific position.
    pub fn legend_at(&mut self, position: LegendPosition) -> &mut Self {
        let legend = self.legend_mut();
        legend.visible = true;
        legend.position = position;
        self
    }

    /// Show the legend with a heading.
    pub fn legend_title(&mut self, title: impl Into<String>) -> &mut Self {
        let legend = self.legend_mut();
        legend.visible = true;
        legend.title = Some(title.into());
        self
    }

    fn legend_mut(&mut self) -> &mut Legend {
        let style = self.theme.legend_style.clone();
        self.legend
            .get_or_insert_with(|| Legend::new().visible(false).text_style(style))
    }

    /// Add a plot to this axes.
    pub(crate) fn add_plot(&mut self, plot: Box<dyn Plot>) {
        if let Some(plot_bounds) = plot.bounds() {
            match self.data_bounds {
                Some(ref mut bounds) => bounds.include_bounds(&plot_bounds),
                None => self.data_bounds = Some(plot_bounds),
            }
        }

        if let Some(entry) = plot.legend_entry() {
            self.legend_mut().add_entry(entry);
        }

        self.plots.push(plot);
    }

    pub fn plots(&self) -> &[Box<dyn Plot>] {
        &self.plots
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn insets(&self) -> &[Axes] {
        &self.insets
    }

    pub fn get_colorbar(&self) -> Option<&Colorbar> {
        self.colorbar.as_ref()
    }

    /// Default color for plots added without one.
    fn default_color(&self) -> Color {
        self.theme.color_cycle.first().cloned().unwrap_or_default()
    }

    /// The data rectangle currently shown: manual limits where set,
    /// otherwise the data range with a small margin.
    pub fn view_bounds(&self) -> Bounds {
        let (x_min, x_max) = self.x_lim.unwrap_or_else(|| {
            auto_range(self.data_bounds.map(|b| (b.x_min, b.x_max)), self.tight)
        });
        let (y_min, y_max) = self.y_lim.unwrap_or_else(|| {
            auto_range(self.data_bounds.map(|b| (b.y_min, b.y_max)), self.tight)
        });
        let (x_min, x_max) = widen_empty(x_min, x_max);
        let (y_min, y_max) = widen_empty(y_min, y_max);
        Bounds::new(x_min, x_max, y_min, y_max)
    }

    /// X ticks inside the current view, with their labels.
    pub fn x_ticks(&self) -> Vec<(f64, String)> {
        let view = self.view_bounds();
        ticks_in_view(&self.x_axis, self.x_scale.as_ref(), view.x_min, view.x_max)
    }

    /// Y ticks inside the current view, with their labels.
    pub fn y_ticks(&self) -> Vec<(f64, String)> {
        let view = self.view_bounds();
        ticks_in_view(&self.y_axis, self.y_scale.as_ref(), view.y_min, view.y_max)
    }

    /// Render the axes to SVG for a figure of the given size.
    pub fn render_svg(&self, figure_width: f64, figure_height: f64) -> String {
        let pixel_bounds = Bounds::new(
            self.position.x_min * figure_width,
            self.position.x_max * figure_width,
            (1.0 - self.position.y_max) * figure_height,
            (1.0 - self.position.y_min) * figure_height,
        );
        self.render_in(&pixel_bounds)
    }

    fn render_in(&self, pixel_bounds: &Bounds) -> String {
        let mut svg = String::new();
        let view = self.view_bounds();
        let ctx = RenderContext::new(view, *pixel_bounds, self.y_inverted);

        if self.axis_on {
            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
                pixel_bounds.x_min,
                pixel_bounds.y_min,
                pixel_bounds.width(),
                pixel_bounds.height(),
                self.theme.plot_background.to_svg_string()
            ));
            if self.grid.visible {
                svg.push_str(&self.render_grid(&ctx));
            }
        }

        // Plots in ascending z-order; equal z keeps insertion order.
        let clip_id = format!(
            "clip-{:.0}-{:.0}-{:.0}-{:.0}",
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height()
        );
        svg.push_str(&format!(
            "<defs><clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath></defs>\n",
            clip_id,
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height()
        ));
        let mut order: Vec<&dyn Plot> = self.plots.iter().map(|p| p.as_ref()).collect();
        order.sort_by(|a, b| {
            a.z_order()
                .partial_cmp(&b.z_order())
                .unwrap_or(Ordering::Equal)
        });
        for plot in order {
            if plot.clip_on() {
                svg.push_str(&format!("<g clip-path=\"url(#{})\">\n", clip_id));
                svg.push_str(&plot.render_svg(&ctx));
                svg.push_str("</g>\n");
            } else {
                svg.push_str(&plot.render_svg(&ctx));
            }
        }

        if self.axis_on {
            svg.push_str(&self.render_axes(&ctx));
        }

        for overlay in &self.overlays {
            svg.push_str(&render_overlay(overlay, &ctx));
        }

        if let Some(ref title) = self.title {
            let mut style = title.style.clone();
            style.anchor = TextAnchor::Middle;
            style.baseline = DominantBaseline::Auto;
            svg.push_str(&style.render(
                pixel_bounds.center().0,
                pixel_bounds.y_min - TITLE_PAD,
                &title.content,
            ));
        }

        if let Some(ref legend) = self.legend {
            if legend.visible && !legend.entries.is_empty() {
                svg.push_str(&render_legend(legend, pixel_bounds));
            }
        }

        if let Some(ref colorbar) = self.colorbar {
            svg.push_str(&colorbar.render(
                pixel_bounds,
                &self.y_axis.tick_label_style,
                self.y_axis.tick_length,
            ));
        }

        for inset in &self.insets {
            let child = Bounds::new(
                pixel_bounds.x_min + inset.position.x_min * pixel_bounds.width(),
                pixel_bounds.x_min + inset.position.x_max * pixel_bounds.width(),
                pixel_bounds.y_max - inset.position.y_max * pixel_bounds.height(),
                pixel_bounds.y_max - inset.position.y_min * pixel_bounds.height(),
            );
            svg.push_str(&inset.render_in(&child));
        }

        svg
    }

    fn render_grid(&self, ctx: &RenderContext) -> String {
        let mut svg = String::new();
        let px = &ctx.pixel_bounds;
        let style = self.grid.style.to_svg_style();
        let view = ctx.data_bounds;

        if self.grid.show_x {
            for (tick, _) in self.x_ticks() {
                let (x, _) = ctx.transform(tick, view.y_min);
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    x, px.y_min, x, px.y_max, style
                ));
            }
        }
        if self.grid.show_y {
            for (tick, _) in self.y_ticks() {
                let (_, y) = ctx.transform(view.x_min, tick);
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    px.x_min, y, px.x_max, y, style
                ));
            }
        }
        svg
    }

    fn render_axes(&self, ctx: &RenderContext) -> String {
        let mut svg = String::new();
        let px = &ctx.pixel_bounds;
        let view = ctx.data_bounds;
        let line = |x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle| {
            format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                x1,
                y1,
                x2,
                y2,
                style.to_svg_style()
            )
        };

        // Spines
        let frame = &self.x_axis.line_style;
        if self.spines.bottom {
            svg.push_str(&line(px.x_min, px.y_max, px.x_max, px.y_max, frame));
        }
        if self.spines.top {
            svg.push_str(&line(px.x_min, px.y_min, px.x_max, px.y_min, frame));
        }
        if self.spines.left {
            svg.push_str(&line(px.x_min, px.y_min, px.x_min, px.y_max, frame));
        }
        if self.spines.right {
            svg.push_str(&line(px.x_max, px.y_min, px.x_max, px.y_max, frame));
        }

        // X ticks and labels
        let mut x_extent = 0.0;
        if self.x_axis.visible {
            let ticks = self.x_ticks();
            let axis = &self.x_axis;
            let label_y = px.y_max + axis.tick_length + axis.tick_padding;
            let mut style = axis.tick_label_style.clone();
            if axis.tick_rotation != 0.0 {
                style.anchor = TextAnchor::End;
                style.baseline = DominantBaseline::Middle;
                style.rotation = -axis.tick_rotation;
            } else {
                style.anchor = TextAnchor::Middle;
                style.baseline = DominantBaseline::Hanging;
            }
            for (tick, label) in &ticks {
                let (x, _) = ctx.transform(*tick, view.y_min);
                if axis.tick_length > 0.0 {
                    svg.push_str(&line(x, px.y_max, x, px.y_max + axis.tick_length, &axis.line_style));
                }
                svg.push_str(&style.render(x, label_y, label));
            }
            x_extent = axis.tick_length + axis.tick_padding + x_label_extent(axis, &ticks);
        }

        // Y ticks and labels
        let mut y_extent = 0.0;
        if self.y_axis.visible {
            let ticks = self.y_ticks();
            let axis = &self.y_axis;
            let label_x = px.x_min - axis.tick_length - axis.tick_padding;
            let mut style = axis
                .tick_label_style
                .clone()
                .anchor(TextAnchor::End)
                .baseline(DominantBaseline::Middle);
            if axis.tick_rotation != 0.0 {
                style.rotation = -axis.tick_rotation;
            }
            for (tick, label) in &ticks {
                let (_, y) = ctx.transform(view.x_min, *tick);
                if axis.tick_length > 0.0 {
                    svg.push_str(&line(px.x_min - axis.tick_length, y, px.x_min, y, &axis.line_style));
                }
                svg.push_str(&style.render(label_x, y, label));
            }
            y_extent = axis.tick_length + axis.tick_padding + y_label_extent(axis, &ticks);
        }

        if let Some(ref label) = self.x_label {
            let mut style = label.style.clone();
            style.anchor = TextAnchor::Middle;
            style.baseline = DominantBaseline::Hanging;
            svg.push_str(&style.render(px.center().0, px.y_max + x_extent + LABEL_PAD, &label.content));
        }

        if let Some(ref label) = self.y_label {
            let mut style = label.style.clone();
            style.anchor = TextAnchor::Middle;
            style.baseline = DominantBaseline::Auto;
            style.rotation = -90.0;
            svg.push_str(&style.render(px.x_min - y_extent - LABEL_PAD, px.center().1, &label.content));
        }

        svg
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

fn auto_range(range: Option<(f64, f64)>, tight: bool) -> (f64, f64) {
    match range {
        None => (0.0, 1.0),
        Some((lo, hi)) if tight || hi == lo => (lo, hi),
        Some((lo, hi)) => {
            let margin = (hi - lo) * AUTO_MARGIN;
            (lo - margin, hi + margin)
        }
    }
}

fn widen_empty(lo: f64, hi: f64) -> (f64, f64) {
    if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

fn ticks_in_view(axis: &AxisConfig, scale: &dyn Scale, a: f64, b: f64) -> Vec<(f64, String)> {
    let (lo, hi) = (a.min(b), a.max(b));
    let mut scale = scale.clone_box();
    scale.set_range(lo, hi);
    let tolerance = (hi - lo) * 1e-9;
    axis.resolve_ticks(|n| scale.ticks(n))
        .into_iter()
        .filter(|(t, _)| *t >= lo - tolerance && *t <= hi + tolerance)
        .collect()
}

fn longest_label(ticks: &[(f64, String)]) -> f64 {
    ticks
        .iter()
        .map(|(_, label)| label.chars().count())
        .max()
        .unwrap_or(0) as f64
}

/// Approximate height taken by x tick labels below the ticks.
fn x_label_extent(axis: &AxisConfig, ticks: &[(f64, String)]) -> f64 {
    if ticks.is_empty() {
        return 0.0;
    }
    let font = axis.tick_label_style.font_size;
    let angle = axis.tick_rotation.to_radians().abs();
    longest_label(ticks) * CHAR_WIDTH * font * angle.sin() + font * angle.cos()
}

/// Approximate width taken by y tick labels left of the ticks.
fn y_label_extent(axis: &AxisConfig, ticks: &[(f64, String)]) -> f64 {
    longest_label(ticks) * CHAR_WIDTH * axis.tick_label_style.font_size
}

fn render_overlay(overlay: &Overlay, ctx: &RenderContext) -> String {
    let place = |space: CoordSpace, (x, y): (f64, f64)| match space {
        CoordSpace::Data => ctx.transform(x, y),
        CoordSpace::Axes => ctx.transform_axes(x, y),
    };
    match overlay {
        Overlay::Text {
            x,
            y,
            space,
            content,
            style,
        } => {
            let (px, py) = place(*space, (*x, *y));
            style.render(px, py, content)
        }
        Overlay::Segment {
            from,
            to,
            space,
            style,
        } => {
            let (x1, y1) = place(*space, *from);
            let (x2, y2) = place(*space, *to);
            format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                x1,
                y1,
                x2,
                y2,
                style.to_svg_style()
            )
        }
    }
}

fn render_legend(legend: &Legend, pixel_bounds: &Bounds) -> String {
    let mut svg = String::new();
    let inset = 4.0;
    let (width, height) = legend.size();
    let line_height = legend.text_style.font_size * 1.7;

    let lx = if legend.position.is_left() {
        pixel_bounds.x_min + inset
    } else {
        pixel_bounds.x_max - width - inset
    };
    let ly = if legend.position.is_top() {
        pixel_bounds.y_min + inset
    } else {
        pixel_bounds.y_max - height - inset
    };

    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
        lx,
        ly,
        width,
        height,
        legend.background.to_svg_style()
    ));

    let text_style = legend
        .text_style
        .clone()
        .anchor(TextAnchor::Start)
        .baseline(DominantBaseline::Middle);
    let mut row = 0;
    if let Some(ref title) = legend.title {
        let ty = ly + legend.padding + 0.5 * line_height;
        svg.push_str(&text_style.render(lx + legend.padding, ty, title));
        row += 1;
    }

    for entry in &legend.entries {
        let ey = ly + legend.padding + (row as f64 + 0.5) * line_height;
        let x1 = lx + legend.padding;
        let x2 = x1 + legend.handle_length;
        let mid = (x1 + x2) / 2.0;

        if let Some(ref style) = entry.line_style {
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                x1,
                ey,
                x2,
                ey,
                style.to_svg_style()
            ));
        }

        // Patch handle for bars and bands
        if let Some(ref fill) = entry.fill_style {
            if entry.line_style.is_none() && entry.marker_style.is_none() {
                let size = legend.text_style.font_size;
                svg.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
                    x1,
                    ey - size / 2.0,
                    legend.handle_length,
                    size,
                    fill.to_svg_style()
                ));
            }
        }

        if let Some(ref marker) = entry.marker_style {
            svg.push_str(&marker.render_at(mid, ey));
        }

        svg.push_str(&text_style.render(x2 + legend.label_gap, ey, &entry.label));
        row += 1;
    }

    svg
}

/// Parsed matplotlib-style format string such as `"d-"` or `"k--"`.
#[derive(Debug, Default, PartialEq)]
struct FormatSpec {
    color: Option<Color>,
    marker: Option<Marker>,
    dash: Option<DashPattern>,
}

fn parse_format(fmt: &str) -> FormatSpec {
    let spec = FormatSpec::default();
    let rest = fmt;
    for (token, dash) in [
        ("--", DashPattern::Dashed),
        ("-.", DashPattern::DashDot),
        ("-", DashPattern::Solid),
        (":", DashPattern::Dotted),
    ] {
        if let Some(pos) = rest.find(token) {
            let spec = FormatSpec {
                dash: Some(dash),
                ..spec
            };
            let mut remaining = rest[..pos].to_string();
            remaining.push_str(&rest[pos + token.len()..]);
            return finish_format(spec, &remaining);
        }
    }
    finish_format(spec, rest.trim())
}

fn finish_format(mut spec: FormatSpec, rest: &str) -> FormatSpec {
    for c in rest.chars() {
        if let Some(marker) = Marker::from_format_char(c) {
            spec.marker = Some(marker);
            continue;
        }
        let name = match c {
            'b' => "C0",
            'g' => "green",
            'r' => "red",
            'c' => "cyan",
            'm' => "magenta",
            'y' => "yellow",
            'k' => "black",
            'w' => "white",
            _ => continue,
        };
        spec.color = Some(Color::from(name));
    }
    spec
}

// Builder types for fluent API

/// Builder for line plots.
pub struct LinePlotBuilder<'a> {
    axes: &'a mut Axes,
    x: Vec<f64>,
    y: Vec<f64>,
    color: Option<Color>,
    linewidth: Option<f64>,
    linestyle: Option<DashPattern>,
    marker: Option<Marker>,
    markersize: Option<f64>,
    marker_edge_width: Option<f64>,
    marker_style: Option<MarkerStyle>,
    alpha: Option<f64>,
    label: Option<String>,
    format: Option<String>,
    z_order: Option<f64>,
    clip_on: bool,
}

impl<'a> LinePlotBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.linewidth = Some(width);
        self
    }

    pub fn linestyle(mut self, style: DashPattern) -> Self {
        self.linestyle = Some(style);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn markersize(mut self, size: f64) -> Self {
        self.markersize = Some(size);
        self
    }

    pub fn marker_edge_width(mut self, width: f64) -> Self {
        self.marker_edge_width = Some(width);
        self
    }

    /// Full marker styling; overrides `marker`, `markersize` and the
    /// line color on the markers.
    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = Some(style);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Matplotlib-style format string, e.g. `"o-"`, `"d-"` or `"k--"`.
    pub fn format(mut self, fmt: impl Into<String>) -> Self {
        self.format = Some(fmt.into());
        self
    }

    pub fn z_order(mut self, z: f64) -> Self {
        self.z_order = Some(z);
        self
    }

    pub fn clip_on(mut self, clip: bool) -> Self {
        self.clip_on = clip;
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let spec = self.format.as_deref().map(parse_format).unwrap_or_default();
        let color = self
            .color
            .or(spec.color)
            .unwrap_or_else(|| self.axes.default_color());

        let mut plot = LinePlot::new(self.x, self.y)
            .color(color)
            .linewidth(self.linewidth.unwrap_or(self.axes.theme.line_width));

        if self.format.is_some() && spec.dash.is_none() {
            plot = plot.show_line(false);
        }
        if let Some(dash) = self.linestyle.or(spec.dash) {
            plot = plot.linestyle(dash);
        }
        if let Some(marker) = self.marker.or(spec.marker) {
            plot = plot.marker(marker);
        }
        if let Some(ref mut marker) = plot.marker_style {
            if let Some(size) = self.markersize {
                marker.size = size;
            }
            if let Some(width) = self.marker_edge_width {
                marker.edge_width = width;
            }
        }
        if let Some(style) = self.marker_style {
            plot = plot.marker_style(style);
        }
        if let Some(alpha) = self.alpha {
            plot = plot.alpha(alpha);
        }
        if let Some(label) = self.label {
            plot = plot.label(label);
        }
        if let Some(z) = self.z_order {
            plot = plot.z_order(z);
        }
        plot = plot.clip_on(self.clip_on);

        self.axes.add_plot(Box::new(plot));
        self.axes
    }
}

/// Builder for scatter plots.
pub struct ScatterPlotBuilder<'a> {
    axes: &'a mut Axes,
    x: Vec<f64>,
    y: Vec<f64>,
    color: Option<Color>,
    colors: Option<Vec<Color>>,
    edge_color: Option<Color>,
    size: Option<f64>,
    marker: Option<Marker>,
    face_alpha: Option<f64>,
    edge_alpha: Option<f64>,
    label: Option<String>,
    edge_width: Option<f64>,
    z_order: Option<f64>,
    clip_on: bool,
}

impl<'a> ScatterPlotBuilder<'a> {
    /// Face color; the edge follows it unless set separately.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Per-point face colors.
    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn edge_color(mut self, color: impl Into<Color>) -> Self {
        self.edge_color = Some(color.into());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Opacity of face and edge alike.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.face_alpha = Some(alpha);
        self.edge_alpha = Some(alpha);
        self
    }

    pub fn face_alpha(mut self, alpha: f64) -> Self {
        self.face_alpha = Some(alpha);
        self
    }

    pub fn edge_alpha(mut self, alpha: f64) -> Self {
        self.edge_alpha = Some(alpha);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn edge_width(mut self, width: f64) -> Self {
        self.edge_width = Some(width);
        self
    }

    pub fn z_order(mut self, z: f64) -> Self {
        self.z_order = Some(z);
        self
    }

    pub fn clip_on(mut self, clip: bool) -> Self {
        self.clip_on = clip;
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let color = self.color.unwrap_or_else(|| self.axes.default_color());
        let theme = &self.axes.theme;

        let mut style = MarkerStyle::new(self.marker.unwrap_or(Marker::Circle))
            .size(self.size.unwrap_or(theme.marker_size))
            .edge_width(self.edge_width.unwrap_or(theme.marker_edge_width))
            .edge_color(self.edge_color.unwrap_or_else(|| color.clone()))
            .fill(color);
        if let Some(alpha) = self.face_alpha {
            style = style.fill_opacity(alpha);
        }
        if let Some(alpha) = self.edge_alpha {
            style = style.edge_opacity(alpha);
        }

        let mut plot = ScatterPlot::new(self.x, self.y)
            .marker_style(style)
            .clip_on(self.clip_on);
        if let Some(colors) = self.colors {
            plot = plot.colors(colors);
        }
        if let Some(label) = self.label {
            plot = plot.label(label);
        }
        if let Some(z) = self.z_order {
            plot = plot.z_order(z);
        }

        self.axes.add_plot(Box::new(plot));
        self.axes
    }
}
