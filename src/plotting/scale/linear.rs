//! Linear scale transformation.

use super::{nice_ticks, Scale};

/// A linear scale for axis transformation.
#[derive(Debug, Clone)]
pub struct LinearScale {
    min: f64,
    max: f64,
}

impl LinearScale {
    /// Create a linear scale over `[min, max]`; an empty range is widened.
    pub fn new(min: f64, max: f64) -> Self {
        let mut scale = LinearScale::auto();
        scale.set_range(min, max);
        scale
    }

    /// Unit scale, to be set later.
    pub fn auto() -> Self {
        LinearScale { min: 0.0, max: 1.0 }
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale::auto()
    }
}

impl Scale for LinearScale {
    fn transform(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    fn inverse(&self, normalized: f64) -> f64 {
        self.min + normalized * (self.max - self.min)
    }

    fn set_range(&mut self, min: f64, max: f64) {
        if min < max {
            self.min = min;
            self.max = max;
        } else {
            let padding = if min == 0.0 { 0.5 } else { min.abs() * 0.1 };
            self.min = min - padding;
            self.max = max + padding;
        }
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn ticks(&self, num_ticks: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, num_ticks)
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_roundtrip() {
        let scale = LinearScale::new(-2.0, 6.0);
        assert_eq!(scale.transform(2.0), 0.5);
        assert_eq!(scale.inverse(0.25), 0.0);
    }

    #[test]
    fn test_empty_range_is_widened() {
        let scale = LinearScale::new(0.0, 0.0);
        assert_eq!(scale.range(), (-0.5, 0.5));
    }
}
