//! Line styling options.

use super::color::Color;

/// Dash pattern for lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    /// Custom dash array [dash_length, gap_length, ...]
    Custom(Vec<f64>),
}

impl DashPattern {
    /// Convert to SVG stroke-dasharray value.
    pub fn to_svg_dasharray(&self) -> Option<String> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some("8,4".to_string()),
            DashPattern::Dotted => Some("2,2".to_string()),
            DashPattern::DashDot => Some("8,4,2,4".to_string()),
            DashPattern::Custom(arr) if arr.is_empty() => None,
            DashPattern::Custom(arr) => Some(
                arr.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }
}

/// Style configuration for lines.
#[derive(Debug, Clone)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    /// Dash pattern
    pub dash: DashPattern,
    /// Opacity (0.0 - 1.0)
    pub opacity: f64,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Generate SVG stroke attributes (no fill).
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("stroke=\"{}\"", self.color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.width),
            "stroke-linecap=\"butt\"".to_string(),
            "stroke-linejoin=\"round\"".to_string(),
            "fill=\"none\"".to_string(),
        ];

        if self.opacity < 1.0 {
            attrs.push(format!("stroke-opacity=\"{}\"", self.opacity));
        }

        if let Some(dasharray) = self.dash.to_svg_dasharray() {
            attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
        }

        attrs.join(" ")
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.0,
            dash: DashPattern::Solid,
            opacity: 1.0,
        }
    }
}
