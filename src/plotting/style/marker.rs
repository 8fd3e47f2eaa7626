//! Marker styles for scatter plots and line plot points.

use super::color::Color;

/// Marker shapes for data points.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Marker {
    /// No marker
    #[default]
    None,
    Circle,
    Square,
    /// Upward-pointing triangle
    Triangle,
    Diamond,
    /// Thin diamond ("d" in matplotlib format strings)
    ThinDiamond,
    Plus,
}

impl Marker {
    /// Parse from matplotlib-style format character.
    pub fn from_format_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Marker::Circle),
            's' => Some(Marker::Square),
            '^' => Some(Marker::Triangle),
            'D' => Some(Marker::Diamond),
            'd' => Some(Marker::ThinDiamond),
            '+' => Some(Marker::Plus),
            _ => None,
        }
    }

    /// Generate SVG path data for the marker centered at origin.
    /// The size parameter is the radius (half the marker size).
    pub fn to_svg_path(&self, size: f64) -> Option<String> {
        match self {
            Marker::None | Marker::Circle => None,
            Marker::Square => {
                let s = size;
                Some(format!(
                    "M{},{} L{},{} L{},{} L{},{} Z",
                    -s, -s, s, -s, s, s, -s, s
                ))
            }
            Marker::Triangle => {
                let h = size * 1.1547;
                Some(format!(
                    "M0,{:.3} L{:.3},{:.3} L{:.3},{:.3} Z",
                    -h,
                    -size,
                    h * 0.5,
                    size,
                    h * 0.5
                ))
            }
            Marker::Diamond => {
                let s = size * 1.2;
                Some(format!("M0,{:.3} L{:.3},0 L0,{:.3} L{:.3},0 Z", -s, s, s, -s))
            }
            Marker::ThinDiamond => {
                let s = size * 1.2;
                let w = s * 0.6;
                Some(format!("M0,{:.3} L{:.3},0 L0,{:.3} L{:.3},0 Z", -s, w, s, -w))
            }
            Marker::Plus => Some(format!(
                "M{:.3},0 L{:.3},0 M0,{:.3} L0,{:.3}",
                -size, size, -size, size
            )),
        }
    }

    /// Check if this marker should be rendered as a circle element.
    pub fn is_circle(&self) -> bool {
        matches!(self, Marker::Circle)
    }
}

/// Style configuration for markers.
///
/// Face and edge carry separate opacities so a marker can have a translucent
/// face with a solid outline.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    /// The marker shape
    pub marker: Marker,
    /// Marker size (diameter)
    pub size: f64,
    /// Fill color
    pub fill: Color,
    /// Edge/stroke color
    pub edge_color: Color,
    /// Edge/stroke width
    pub edge_width: f64,
    /// Fill opacity
    pub fill_opacity: f64,
    /// Edge opacity
    pub edge_opacity: f64,
}

impl MarkerStyle {
    /// Create a new marker style.
    pub fn new(marker: Marker) -> Self {
        MarkerStyle {
            marker,
            ..Default::default()
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn fill(mut self, color: impl Into<Color>) -> Self {
        self.fill = color.into();
        self
    }

    pub fn edge_color(mut self, color: impl Into<Color>) -> Self {
        self.edge_color = color.into();
        self
    }

    pub fn edge_width(mut self, width: f64) -> Self {
        self.edge_width = width;
        self
    }

    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn edge_opacity(mut self, opacity: f64) -> Self {
        self.edge_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("fill=\"{}\"", self.fill.to_svg_string()),
            format!("stroke=\"{}\"", self.edge_color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.edge_width),
        ];

        if self.fill_opacity < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", self.fill_opacity));
        }
        if self.edge_opacity < 1.0 {
            attrs.push(format!("stroke-opacity=\"{}\"", self.edge_opacity));
        }

        attrs.join(" ")
    }

    /// Render the marker at a specific position, returning SVG elements.
    pub fn render_at(&self, x: f64, y: f64) -> String {
        let style = self.to_svg_style();
        let radius = self.size / 2.0;

        if self.marker.is_circle() {
            format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>\n",
                x, y, radius, style
            )
        } else if let Some(path) = self.marker.to_svg_path(radius) {
            format!(
                "<path d=\"{}\" transform=\"translate({:.2},{:.2})\" {}/>\n",
                path, x, y, style
            )
        } else {
            String::new()
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            marker: Marker::Circle,
            size: 6.0,
            fill: Color::default(),
            edge_color: Color::BLACK,
            edge_width: 1.0,
            fill_opacity: 1.0,
            edge_opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_chars() {
        assert_eq!(Marker::from_format_char('o'), Some(Marker::Circle));
        assert_eq!(Marker::from_format_char('d'), Some(Marker::ThinDiamond));
        assert_eq!(Marker::from_format_char('-'), None);
    }

    #[test]
    fn test_separate_face_and_edge_opacity() {
        let style = MarkerStyle::new(Marker::Circle)
            .fill("C0")
            .fill_opacity(0.8)
            .edge_color(Color::BLACK)
            .edge_opacity(0.5);
        let svg = style.render_at(1.0, 2.0);
        assert!(svg.starts_with("<circle"));
        assert!(svg.contains("fill-opacity=\"0.8\""));
        assert!(svg.contains("stroke-opacity=\"0.5\""));
    }

    #[test]
    fn test_none_marker_renders_nothing() {
        assert!(MarkerStyle::new(Marker::None).render_at(0.0, 0.0).is_empty());
    }
}
