//! SVG rendering backend.

use crate::plotting::style::{FillStyle, TextStyle};

/// Accumulates SVG fragments for one document.
///
/// Geometry is laid out in user units (points); `scale` only changes the
/// rendered size, through the `viewBox`.
#[derive(Debug)]
pub struct SvgBackend {
    /// Canvas width in user units
    pub width: f64,
    /// Canvas height in user units
    pub height: f64,
    /// Output size multiplier
    pub scale: f64,
    /// SVG content accumulated during rendering
    content: Vec<String>,
    /// SVG defs section (clip paths)
    defs: Vec<String>,
    /// Whether to include XML declaration
    include_declaration: bool,
}

impl SvgBackend {
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            scale: 1.0,
            content: Vec::new(),
            defs: Vec::new(),
            include_declaration: true,
        }
    }

    pub fn scale(mut self, scale: f64) -> Self {
        if scale > 0.0 && scale.is_finite() {
            self.scale = scale;
        }
        self
    }

    /// Set whether to include XML declaration.
    pub fn include_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    /// Add raw SVG content.
    pub fn add_content(&mut self, content: String) {
        self.content.push(content);
    }

    /// Add content to the defs section.
    pub fn add_def(&mut self, def: String) {
        self.defs.push(def);
    }

    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &FillStyle) {
        self.content.push(format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>",
            x,
            y,
            width,
            height,
            style.to_svg_style()
        ));
    }

    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        self.content.push(style.render(x, y, text));
    }

    /// Render the final SVG string.
    pub fn render(self) -> String {
        let declaration = if self.include_declaration {
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        } else {
            ""
        };

        let defs_section = if self.defs.is_empty() {
            String::new()
        } else {
            format!("<defs>\n{}\n</defs>\n", self.defs.join("\n"))
        };

        format!(
            "{}<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.2}\" height=\"{:.2}\" viewBox=\"0 0 {:.2} {:.2}\">\n{}{}\n</svg>\n",
            declaration,
            self.width * self.scale,
            self.height * self.scale,
            self.width,
            self.height,
            defs_section,
            self.content.join("\n")
        )
    }
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self::new(460.8, 345.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::Color;

    #[test]
    fn test_scale_only_changes_output_size() {
        let mut backend = SvgBackend::new(100.0, 50.0).scale(2.0).include_declaration(false);
        backend.draw_rect(0.0, 0.0, 100.0, 50.0, &FillStyle::new(Color::WHITE));
        let svg = backend.render();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("width=\"200.00\" height=\"100.00\" viewBox=\"0 0 100.00 50.00\""));
        assert!(svg.contains("<rect x=\"0.00\""));
    }

    #[test]
    fn test_defs_emitted_once() {
        let mut backend = SvgBackend::default();
        backend.add_def("<clipPath id=\"a\"/>".to_string());
        backend.draw_text(1.0, 2.0, "a<b", &TextStyle::new());
        let svg = backend.render();
        assert_eq!(svg.matches("<defs>").count(), 1);
        assert!(svg.contains("a&lt;b"));
    }
}
