//! Grid configuration.

use crate::plotting::style::{Color, LineStyle};

/// Grid lines at the major ticks.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub visible: bool,
    pub style: LineStyle,
    pub show_x: bool,
    pub show_y: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            visible: false,
            style: LineStyle::new()
                .color(Color::LIGHT_GRAY)
                .width(0.5)
                .opacity(0.8),
            show_x: true,
            show_y: true,
        }
    }
}
