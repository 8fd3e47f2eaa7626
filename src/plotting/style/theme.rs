//! Predefined themes for plots.

use serde::Deserialize;

use super::color::Color;
use super::text_style::TextStyle;

/// Predefined plot themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Compact publication style: small fonts, muted palette, open frame
    #[default]
    Paper,
    /// White background, tab10 palette, grid on
    Default,
    /// Seaborn-inspired theme
    Seaborn,
}

/// Theme configuration containing all style settings.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Background color for the figure
    pub background: Color,
    /// Background color for the plot area
    pub plot_background: Color,
    /// Color for axis lines
    pub axis_color: Color,
    /// Color for grid lines
    pub grid_color: Color,
    /// Grid line opacity
    pub grid_opacity: f64,
    /// Whether to show grid by default
    pub show_grid: bool,
    /// Whether the top and right spines are drawn
    pub show_top_right_spines: bool,
    /// Color for text
    pub text_color: Color,
    pub title_style: TextStyle,
    pub label_style: TextStyle,
    pub tick_style: TextStyle,
    pub legend_style: TextStyle,
    /// Color cycle for plot series
    pub color_cycle: Vec<Color>,
    /// Default line width
    pub line_width: f64,
    /// Default marker size
    pub marker_size: f64,
    /// Default marker edge width
    pub marker_edge_width: f64,
    /// Default patch edge width
    pub patch_line_width: f64,
    /// Axis line width
    pub axis_width: f64,
    /// Tick mark length
    pub tick_length: f64,
    /// Grid line width
    pub grid_width: f64,
}

impl Theme {
    /// Get the configuration for this theme.
    pub fn config(&self) -> ThemeConfig {
        match self {
            Theme::Paper => ThemeConfig::paper_theme(),
            Theme::Default => ThemeConfig::default_theme(),
            Theme::Seaborn => ThemeConfig::seaborn_theme(),
        }
    }
}

impl ThemeConfig {
    fn paper_theme() -> Self {
        let text = TextStyle::new().font_size(6.0).color(Color::BLACK);
        ThemeConfig {
            background: Color::WHITE,
            plot_background: Color::WHITE,
            axis_color: Color::BLACK,
            grid_color: Color::LIGHT_GRAY,
            grid_opacity: 0.8,
            show_grid: false,
            show_top_right_spines: false,
            text_color: Color::BLACK,
            title_style: text.clone(),
            label_style: text.clone(),
            tick_style: text.clone(),
            legend_style: text,
            color_cycle: paper_color_cycle(),
            line_width: 1.0,
            marker_size: 6.0,
            marker_edge_width: 1.0,
            patch_line_width: 0.75,
            axis_width: 0.75,
            tick_length: 3.5,
            grid_width: 0.5,
        }
    }

    fn default_theme() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            plot_background: Color::WHITE,
            axis_color: Color::BLACK,
            grid_color: Color::LIGHT_GRAY,
            grid_opacity: 0.8,
            show_grid: true,
            show_top_right_spines: true,
            text_color: Color::BLACK,
            title_style: TextStyle::new().font_size(14.0).bold().color(Color::BLACK),
            label_style: TextStyle::new().font_size(12.0).color(Color::BLACK),
            tick_style: TextStyle::new().font_size(10.0).color(Color::BLACK),
            legend_style: TextStyle::new().font_size(10.0).color(Color::BLACK),
            color_cycle: default_color_cycle(),
            line_width: 1.5,
            marker_size: 6.0,
            marker_edge_width: 1.0,
            patch_line_width: 1.0,
            axis_width: 1.0,
            tick_length: 5.0,
            grid_width: 0.5,
        }
    }

    fn seaborn_theme() -> Self {
        let text_color = Color::rgb(50, 50, 50);
        ThemeConfig {
            background: Color::WHITE,
            plot_background: Color::rgb(234, 234, 242),
            axis_color: Color::rgb(100, 100, 100),
            grid_color: Color::WHITE,
            grid_opacity: 1.0,
            show_grid: true,
            show_top_right_spines: false,
            text_color: text_color.clone(),
            title_style: TextStyle::new().font_size(14.0).bold().color(text_color.clone()),
            label_style: TextStyle::new().font_size(12.0).color(text_color.clone()),
            tick_style: TextStyle::new().font_size(10.0).color(Color::rgb(100, 100, 100)),
            legend_style: TextStyle::new().font_size(10.0).color(text_color),
            color_cycle: seaborn_color_cycle(),
            line_width: 1.75,
            marker_size: 6.0,
            marker_edge_width: 1.0,
            patch_line_width: 1.0,
            axis_width: 1.0,
            tick_length: 5.0,
            grid_width: 1.0,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Theme::default().config()
    }
}

fn paper_color_cycle() -> Vec<Color> {
    [
        "slategray",
        "darksalmon",
        "mediumaquamarine",
        "indianred",
        "orchid",
        "paleturquoise",
        "tan",
        "lightpink",
    ]
    .into_iter()
    .map(Color::from)
    .collect()
}

fn default_color_cycle() -> Vec<Color> {
    (0..10).map(|i| Color::from(format!("C{}", i))).collect()
}

fn seaborn_color_cycle() -> Vec<Color> {
    vec![
        Color::rgb(0x4c, 0x72, 0xb0),
        Color::rgb(0xdd, 0x84, 0x52),
        Color::rgb(0x55, 0xa8, 0x68),
        Color::rgb(0xc4, 0x4e, 0x52),
        Color::rgb(0x81, 0x72, 0xb3),
        Color::rgb(0x93, 0x78, 0x60),
        Color::rgb(0xda, 0x8b, 0xc3),
        Color::rgb(0x8c, 0x8c, 0x8c),
        Color::rgb(0xcc, 0xb9, 0x74),
        Color::rgb(0x64, 0xb5, 0xcd),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_is_default() {
        let config = ThemeConfig::default();
        assert_eq!(config.tick_style.font_size, 6.0);
        assert!(!config.show_grid);
        assert!(!config.show_top_right_spines);
        assert_eq!(config.color_cycle.len(), 8);
        assert_eq!(config.color_cycle[1].to_svg_string(), "#E9967A");
    }

    #[test]
    fn test_theme_deserializes_lowercase() {
        let theme: Theme = serde_json::from_str("\"seaborn\"").unwrap();
        assert_eq!(theme, Theme::Seaborn);
    }
}
