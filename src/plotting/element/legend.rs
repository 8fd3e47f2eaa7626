//! Legend configuration.

use crate::plotting::style::{Color, FillStyle, LineStyle, MarkerStyle, TextStyle};

/// Position of the legend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LegendPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LegendPosition {
    pub fn is_left(&self) -> bool {
        matches!(self, LegendPosition::TopLeft | LegendPosition::BottomLeft)
    }

    pub fn is_top(&self) -> bool {
        matches!(self, LegendPosition::TopLeft | LegendPosition::TopRight)
    }
}

/// A single entry in the legend.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub line_style: Option<LineStyle>,
    pub marker_style: Option<MarkerStyle>,
    /// Fill style (bars, bands)
    pub fill_style: Option<FillStyle>,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>) -> Self {
        LegendEntry {
            label: label.into(),
            line_style: None,
            marker_style: None,
            fill_style: None,
        }
    }

    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = Some(style);
        self
    }

    pub fn fill_style(mut self, style: FillStyle) -> Self {
        self.fill_style = Some(style);
        self
    }
}

/// Legend configuration.
#[derive(Debug, Clone)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub position: LegendPosition,
    pub visible: bool,
    /// Optional heading drawn above the entries
    pub title: Option<String>,
    /// Background fill style
    pub background: FillStyle,
    pub text_style: TextStyle,
    /// Padding inside the legend box
    pub padding: f64,
    /// Length of the line sample
    pub handle_length: f64,
    /// Gap between handle and label
    pub label_gap: f64,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: LegendEntry) {
        self.entries.push(entry);
    }

    pub fn position(mut self, position: LegendPosition) -> Self {
        self.position = position;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Approximate box size for the current entries.
    pub fn size(&self) -> (f64, f64) {
        let font = self.text_style.font_size;
        let line_height = font * 1.7;
        let char_width = font * 0.6;
        let widest = self
            .entries
            .iter()
            .map(|e| e.label.chars().count())
            .chain(self.title.iter().map(|t| t.chars().count()))
            .max()
            .unwrap_or(0) as f64;
        let rows = self.entries.len() + usize::from(self.title.is_some());
        let width = self.padding * 2.0 + self.handle_length + self.label_gap + widest * char_width;
        let height = self.padding * 2.0 + rows as f64 * line_height;
        (width, height)
    }
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            entries: Vec::new(),
            position: LegendPosition::TopRight,
            visible: true,
            title: None,
            background: FillStyle::new(Color::WHITE)
                .opacity(0.8)
                .stroke(Color::BLACK)
                .stroke_width(0.5),
            text_style: TextStyle::new().font_size(10.0),
            padding: 4.0,
            handle_length: 12.0,
            label_gap: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_adds_a_row() {
        let mut legend = Legend::new();
        legend.add_entry(LegendEntry::new("a"));
        let (_, h1) = legend.size();
        legend.title = Some("group".to_string());
        let (w2, h2) = legend.size();
        assert!(h2 > h1);
        assert!(w2 > 0.0);
    }
}
