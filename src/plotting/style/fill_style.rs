//! Fill styling options for shapes.

use super::color::Color;

/// Style configuration for filled shapes (bars, bands, violin bodies, patches).
#[derive(Debug, Clone)]
pub struct FillStyle {
    /// Fill color ("none" for an outline-only patch)
    pub color: Color,
    /// Fill opacity (0.0 - 1.0)
    pub opacity: f64,
    /// Stroke/border color (None for no stroke)
    pub stroke: Option<Color>,
    /// Stroke width
    pub stroke_width: f64,
}

impl FillStyle {
    pub fn new(color: impl Into<Color>) -> Self {
        FillStyle {
            color: color.into(),
            ..Default::default()
        }
    }

    /// Outline-only style.
    pub fn outline(stroke: impl Into<Color>, width: f64) -> Self {
        FillStyle {
            color: Color::from("none"),
            opacity: 1.0,
            stroke: Some(stroke.into()),
            stroke_width: width,
        }
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn stroke(mut self, color: impl Into<Color>) -> Self {
        self.stroke = Some(color.into());
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![format!("fill=\"{}\"", self.color.to_svg_string())];

        if self.opacity < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", self.opacity));
        }

        match self.stroke {
            Some(ref stroke) if self.stroke_width > 0.0 => {
                attrs.push(format!("stroke=\"{}\"", stroke.to_svg_string()));
                attrs.push(format!("stroke-width=\"{}\"", self.stroke_width));
            }
            _ => attrs.push("stroke=\"none\"".to_string()),
        }

        attrs.join(" ")
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle {
            color: Color::default(),
            opacity: 1.0,
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::new(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_has_no_fill() {
        let style = FillStyle::outline("black", 0.75);
        let svg = style.to_svg_style();
        assert!(svg.contains("fill=\"none\""));
        assert!(svg.contains("stroke=\"#000000\""));
        assert!(svg.contains("stroke-width=\"0.75\""));
    }

    #[test]
    fn test_zero_width_stroke_is_dropped() {
        let style = FillStyle::new(Color::WHITE).stroke(Color::BLACK).stroke_width(0.0);
        assert!(style.to_svg_style().contains("stroke=\"none\""));
    }
}
