//! Text styling options.

use super::color::Color;

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Light,
}

impl FontWeight {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
            FontWeight::Light => "300",
        }
    }
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Anchor at the start (left for LTR text)
    #[default]
    Start,
    Middle,
    /// Anchor at the end (right for LTR text)
    End,
}

impl TextAnchor {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Vertical alignment for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DominantBaseline {
    /// Text sits on the anchor
    #[default]
    Auto,
    /// Text is centered on the anchor
    Middle,
    /// Text hangs below the anchor
    Hanging,
}

impl DominantBaseline {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            DominantBaseline::Auto => "auto",
            DominantBaseline::Middle => "central",
            DominantBaseline::Hanging => "hanging",
        }
    }

    /// Offset of the first line, in line heights, for a block of `lines` lines.
    fn first_line_shift(&self, lines: usize) -> f64 {
        let extra = lines.saturating_sub(1) as f64;
        match self {
            DominantBaseline::Auto => -extra,
            DominantBaseline::Middle => -extra / 2.0,
            DominantBaseline::Hanging => 0.0,
        }
    }
}

/// Line height used for multi-line text, in em.
pub const LINE_SPACING: f64 = 1.2;

/// Style configuration for text elements.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Font family (e.g., "Arial", "sans-serif")
    pub font_family: String,
    /// Font size in user units
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub anchor: TextAnchor,
    pub baseline: DominantBaseline,
    /// Rotation angle in degrees (clockwise, SVG convention)
    pub rotation: f64,
    pub opacity: f64,
}

impl TextStyle {
    /// Create a new text style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn baseline(mut self, baseline: DominantBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Generate SVG presentation attributes, anchor and baseline included.
    pub fn to_svg_attrs(&self) -> String {
        let mut attrs = vec![
            format!("font-family=\"{}\"", self.font_family),
            format!("font-size=\"{}\"", self.font_size),
            format!("font-weight=\"{}\"", self.weight.to_svg_string()),
            format!("fill=\"{}\"", self.color.to_svg_string()),
            format!("text-anchor=\"{}\"", self.anchor.to_svg_string()),
            format!(
                "dominant-baseline=\"{}\"",
                self.baseline.to_svg_string()
            ),
        ];

        if self.opacity < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", self.opacity));
        }

        attrs.join(" ")
    }

    /// Render `content` at (x, y). Embedded newlines become stacked `tspan`s
    /// aligned according to the baseline.
    pub fn render(&self, x: f64, y: f64, content: &str) -> String {
        let transform = if self.rotation != 0.0 {
            format!(" transform=\"rotate({},{:.2},{:.2})\"", self.rotation, x, y)
        } else {
            String::new()
        };

        let lines: Vec<&str> = content.split('\n').collect();
        let body = if lines.len() == 1 {
            escape_xml(content)
        } else {
            let shift = self.baseline.first_line_shift(lines.len()) * LINE_SPACING;
            lines
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let dy = if i == 0 { shift } else { LINE_SPACING };
                    format!(
                        "<tspan x=\"{:.2}\" dy=\"{}em\">{}</tspan>",
                        x,
                        dy,
                        escape_xml(line)
                    )
                })
                .collect()
        };

        format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" {}{}>{}</text>\n",
            x,
            y,
            self.to_svg_attrs(),
            transform,
            body
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            weight: FontWeight::Normal,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
            baseline: DominantBaseline::Auto,
            rotation: 0.0,
            opacity: 1.0,
        }
    }
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_has_no_tspans() {
        let svg = TextStyle::new().render(10.0, 20.0, "a < b");
        assert!(svg.contains("a &lt; b"));
        assert!(!svg.contains("tspan"));
    }

    #[test]
    fn test_multi_line_bottom_aligned_shifts_up() {
        let svg = TextStyle::new().render(0.0, 0.0, "r = 0.50\np = 0.010");
        assert_eq!(svg.matches("<tspan").count(), 2);
        assert!(svg.contains("dy=\"-1.2em\">r = 0.50"));
        assert!(svg.contains("dy=\"1.2em\">p = 0.010"));
    }

    #[test]
    fn test_multi_line_hanging_starts_at_anchor() {
        let svg = TextStyle::new()
            .baseline(DominantBaseline::Hanging)
            .render(0.0, 0.0, "a\nb");
        assert!(svg.contains("dy=\"0em\">a"));
    }

    #[test]
    fn test_rotation_transform() {
        let svg = TextStyle::new().rotation(270.0).render(5.0, 6.0, "x");
        assert!(svg.contains("rotate(270,5.00,6.00)"));
    }
}
