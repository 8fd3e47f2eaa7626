//! Axis configuration.

use crate::plotting::style::{Color, LineStyle, TextStyle};

/// Configuration for one axis (ticks, tick labels, axis line).
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Whether ticks and tick labels are drawn
    pub visible: bool,
    /// Axis line style (also used for tick marks)
    pub line_style: LineStyle,
    /// Length of tick marks; 0 hides the marks but keeps the labels
    pub tick_length: f64,
    /// Style for tick labels
    pub tick_label_style: TextStyle,
    /// Number of ticks to generate automatically
    pub num_ticks: usize,
    /// Padding between tick marks and labels
    pub tick_padding: f64,
    /// Custom tick positions (overrides automatic generation)
    pub tick_positions: Option<Vec<f64>>,
    /// Custom tick labels (paired with tick_positions)
    pub tick_labels: Option<Vec<String>>,
    /// Tick label rotation in degrees (counter-clockwise, matplotlib convention)
    pub tick_rotation: f64,
    /// Fixed number of decimals for tick labels
    pub tick_decimals: Option<usize>,
}

impl AxisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub fn tick_length(mut self, length: f64) -> Self {
        self.tick_length = length;
        self
    }

    pub fn num_ticks(mut self, num: usize) -> Self {
        self.num_ticks = num;
        self
    }

    pub fn tick_label_style(mut self, style: TextStyle) -> Self {
        self.tick_label_style = style;
        self
    }

    /// Set custom tick positions and (optionally) labels.
    pub fn set_ticks(&mut self, positions: Vec<f64>, labels: Option<Vec<String>>) {
        self.tick_positions = Some(positions);
        self.tick_labels = labels;
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: f64) -> String {
        if let Some(decimals) = self.tick_decimals {
            return format!("{:.prec$}", value, prec = decimals);
        }
        format_number(value)
    }

    /// Tick positions and labels, given the automatically generated ticks.
    pub fn resolve_ticks(&self, auto: impl FnOnce(usize) -> Vec<f64>) -> Vec<(f64, String)> {
        let positions = match self.tick_positions {
            Some(ref positions) => positions.clone(),
            None => auto(self.num_ticks),
        };
        positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| {
                let label = self
                    .tick_labels
                    .as_ref()
                    .and_then(|labels| labels.get(i).cloned())
                    .unwrap_or_else(|| self.format_tick(pos));
                (pos, label)
            })
            .collect()
    }
}

/// Compact number formatting used for tick labels.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e5 || value.abs() < 1e-3 {
        format!("{:.1e}", value)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let s = format!("{:.3}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            visible: true,
            line_style: LineStyle::new().color(Color::BLACK).width(1.0),
            tick_length: 5.0,
            tick_label_style: TextStyle::new().font_size(10.0),
            num_ticks: 5,
            tick_padding: 2.0,
            tick_positions: None,
            tick_labels: None,
            tick_rotation: 0.0,
            tick_decimals: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-1.5), "-1.5");
        assert_eq!(format_number(250000.0), "2.5e5");
    }

    #[test]
    fn test_custom_labels_fall_back_to_numbers() {
        let mut axis = AxisConfig::new();
        axis.set_ticks(vec![0.0, 1.0, 2.0], Some(vec!["a".to_string(), "b".to_string()]));
        let ticks = axis.resolve_ticks(|_| Vec::new());
        assert_eq!(ticks[0].1, "a");
        assert_eq!(ticks[2].1, "2");
    }

    #[test]
    fn test_fixed_decimals() {
        let axis = AxisConfig {
            tick_decimals: Some(2),
            ..Default::default()
        };
        assert_eq!(axis.format_tick(0.5), "0.50");
    }
}
