//! Color definitions and utilities.

use std::fmt;

use serde::Deserialize;

/// Represents a color for plotting elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named color (e.g., "red", "slategray", "C0")
    Named(String),
}

impl Color {
    /// Create a new RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a new RGBA color.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba(r, g, b, a.clamp(0.0, 1.0))
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::Rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)? as f64 / 255.0,
            )),
            _ => None,
        }
    }

    /// Same color with the given opacity (matplotlib's `to_rgba(color, alpha)`).
    pub fn with_alpha(&self, alpha: f64) -> Color {
        let (r, g, b) = self.to_rgb();
        Color::rgba(r, g, b, alpha)
    }

    /// Whether this is the special "none" color (no paint).
    pub fn is_none(&self) -> bool {
        matches!(self, Color::Named(name) if name.eq_ignore_ascii_case("none"))
    }

    /// Convert the color to an SVG-compatible string.
    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => resolve_named_color(name),
        }
    }

    /// Get the alpha value (opacity) of the color.
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgba(_, _, _, a) => *a,
            Color::Named(_) if self.is_none() => 0.0,
            _ => 1.0,
        }
    }

    /// Convert to RGB tuple, resolving named colors.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (*r, *g, *b),
            Color::Rgba(r, g, b, _) => (*r, *g, *b),
            Color::Named(name) => Color::from_hex(&resolve_named_color(name))
                .map(|c| c.to_rgb())
                .unwrap_or((0, 0, 0)),
        }
    }

    /// Linear interpolation between two colors in RGB space.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (r0, g0, b0) = self.to_rgb();
        let (r1, g1, b1) = other.to_rgb();
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }

    // Predefined colors
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_string())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if s.starts_with('#') || s.chars().all(|c| c.is_ascii_hexdigit()) && s.len() >= 6 {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, f64)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, f64)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

/// Resolve a named color to its hex value.
fn resolve_named_color(name: &str) -> String {
    let hex = match name.to_lowercase().as_str() {
        "none" => return "none".to_string(),
        "black" | "k" => "#000000",
        "white" | "w" => "#FFFFFF",
        "red" | "r" => "#FF0000",
        "green" | "g" => "#008000",
        "blue" | "b" => "#0000FF",
        "yellow" | "y" => "#FFFF00",
        "cyan" | "aqua" | "c" => "#00FFFF",
        "magenta" | "fuchsia" | "m" => "#FF00FF",
        "orange" => "#FFA500",
        "purple" => "#800080",
        "gray" | "grey" => "#808080",
        "lightgray" | "lightgrey" => "#D3D3D3",
        "darkgray" | "darkgrey" => "#404040",
        "pink" => "#FFC0CB",
        "brown" => "#A52A2A",
        "navy" => "#000080",
        "teal" => "#008080",
        "lightblue" => "#ADD8E6",
        "steelblue" => "#4682B4",

        // Paper palette (CSS names)
        "slategray" | "slategrey" => "#708090",
        "darksalmon" => "#E9967A",
        "mediumaquamarine" => "#66CDAA",
        "indianred" => "#CD5C5C",
        "orchid" => "#DA70D6",
        "paleturquoise" => "#AFEEEE",
        "tan" => "#D2B48C",
        "lightpink" => "#FFB6C1",

        // Matplotlib-style cycle colors (C0-C9)
        "c0" => "#1f77b4",
        "c1" => "#ff7f0e",
        "c2" => "#2ca02c",
        "c3" => "#d62728",
        "c4" => "#9467bd",
        "c5" => "#8c564b",
        "c6" => "#e377c2",
        "c7" => "#7f7f7f",
        "c8" => "#bcbd22",
        "c9" => "#17becf",

        // Might be a valid CSS color
        _ => return name.to_string(),
    };
    hex.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#708090"), Some(Color::Rgb(112, 128, 144)));
        assert_eq!(Color::from_hex("zz0000"), None);
        assert_eq!(Color::from_hex("#123"), None);
    }

    #[test]
    fn test_with_alpha_resolves_named() {
        let c = Color::from("darksalmon").with_alpha(0.5);
        assert_eq!(c, Color::Rgba(233, 150, 122, 0.5));
    }

    #[test]
    fn test_none_color() {
        let c = Color::from("none");
        assert!(c.is_none());
        assert_eq!(c.to_svg_string(), "none");
        assert_eq!(c.alpha(), 0.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(&b, 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(a.lerp(&b, 1.0), Color::Rgb(255, 255, 255));
        assert_eq!(a.lerp(&b, 0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn test_deserialize_from_string() {
        let c: Color = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(c, Color::Rgb(255, 0, 0));
        let c: Color = serde_json::from_str("\"C1\"").unwrap();
        assert_eq!(c.to_svg_string(), "#ff7f0e");
    }
}
