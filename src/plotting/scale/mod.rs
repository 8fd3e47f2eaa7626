//! Axis scaling and tick generation.

mod linear;

pub use linear::LinearScale;

/// Trait for axis scale transformations.
pub trait Scale: std::fmt::Debug {
    /// Transform a data value to normalized coordinates (0.0 - 1.0).
    fn transform(&self, value: f64) -> f64;

    /// Inverse transform from normalized coordinates to data value.
    fn inverse(&self, normalized: f64) -> f64;

    /// Set the data range for this scale.
    fn set_range(&mut self, min: f64, max: f64);

    /// Get the current data range.
    fn range(&self) -> (f64, f64);

    /// Generate nice tick values for this scale.
    fn ticks(&self, num_ticks: usize) -> Vec<f64>;

    /// Clone the scale into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Scale>;
}

impl Clone for Box<dyn Scale> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Compute "nice" numbers for axis ticks.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Generate nice tick positions inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || !(max > min) || !min.is_finite() || !max.is_finite() {
        return vec![(min + max) / 2.0];
    }

    let range = nice_number(max - min, false);
    let tick_spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let first = (min / tick_spacing).ceil() as i64;
    let last = (max / tick_spacing).floor() as i64;

    (first..=last)
        .map(|k| k as f64 * tick_spacing)
        // Snap values like 0.30000000000000004 onto the grid.
        .map(|t| (t / tick_spacing).round() * tick_spacing)
        .map(|t| if t.abs() < tick_spacing * 1e-9 { 0.0 } else { t })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_unit_range() {
        let ticks = nice_ticks(0.0, 1.0, 5);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], 0.0);
        assert!((ticks[5] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_nice_ticks_stay_inside_range() {
        let ticks = nice_ticks(-0.37, 4.2, 5);
        assert!(ticks.iter().all(|&t| (-0.37..=4.2).contains(&t)));
        assert_eq!(ticks, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(nice_ticks(2.0, 2.0, 5), vec![2.0]);
    }
}
