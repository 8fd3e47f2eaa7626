//! Explicit default-color cycle shared by consecutive plot calls.

use super::color::Color;
use super::theme::{Theme, ThemeConfig};

/// Palette plus the position of the next default color.
///
/// Helpers that pick "the next color" take a `&mut StyleContext` next to the
/// axes they draw on, so call order alone decides color assignment.
#[derive(Debug, Clone)]
pub struct StyleContext {
    palette: Vec<Color>,
    next: usize,
}

impl StyleContext {
    /// Context cycling through `palette`. An empty palette falls back to the
    /// default theme's colors.
    pub fn new(palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            Theme::default().config().color_cycle
        } else {
            palette
        };
        StyleContext { palette, next: 0 }
    }

    pub fn from_theme(theme: &ThemeConfig) -> Self {
        StyleContext::new(theme.color_cycle.clone())
    }

    /// Return the next default color and advance the cycle.
    pub fn next_color(&mut self) -> Color {
        let color = self.peek();
        self.next = (self.next + 1) % self.palette.len();
        color
    }

    /// The color `next_color` would return, without advancing.
    pub fn peek(&self) -> Color {
        self.palette[self.next].clone()
    }

    /// Positional palette lookup (`C{i}`), wrapping. Does not advance.
    pub fn palette_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()].clone()
    }

    /// Index of the next default color.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Restart the cycle at the first color.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        StyleContext::from_theme(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_color_advances_and_wraps() {
        let mut ctx = StyleContext::new(vec![Color::RED, Color::BLUE]);
        assert_eq!(ctx.next_color(), Color::RED);
        assert_eq!(ctx.next_color(), Color::BLUE);
        assert_eq!(ctx.next_color(), Color::RED);
        assert_eq!(ctx.position(), 1);
    }

    #[test]
    fn test_palette_color_does_not_advance() {
        let mut ctx = StyleContext::new(vec![Color::RED, Color::BLUE, Color::BLACK]);
        assert_eq!(ctx.palette_color(4), Color::BLUE);
        assert_eq!(ctx.position(), 0);
        assert_eq!(ctx.next_color(), Color::RED);
        ctx.reset();
        assert_eq!(ctx.peek(), Color::RED);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let ctx = StyleContext::new(Vec::new());
        assert_eq!(ctx.palette().len(), 8);
    }
}
