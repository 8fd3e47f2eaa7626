//! Pearson product-moment correlation.

use super::describe::mean;
use super::intervals::t_two_sided_p;
use crate::plotting::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub r: f64,
    /// Two-sided p-value for r != 0
    pub p_value: f64,
    pub n: usize,
}

/// Pearson's r over the pairs where both values are finite.
pub fn pearson(x: &[f64], y: &[f64]) -> PlotResult<Correlation> {
    if x.len() != y.len() {
        return Err(PlotError::Stats(format!(
            "x and y lengths differ ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .unzip();
    let n = xs.len();
    if n < 3 {
        return Err(PlotError::Stats(format!(
            "correlation needs at least 3 points, got {}",
            n
        )));
    }

    let (mx, my) = (mean(&xs)?, mean(&ys)?);
    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (a, b) in xs.iter().zip(ys.iter()) {
        sxx += (a - mx).powi(2);
        syy += (b - my).powi(2);
        sxy += (a - mx) * (b - my);
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(PlotError::Stats(
            "correlation undefined for a constant variable".to_string(),
        ));
    }

    let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
    let df = (n - 2) as f64;
    let p_value = if r.abs() >= 1.0 {
        0.0
    } else {
        t_two_sided_p(r * (df / (1.0 - r * r)).sqrt(), df)?
    };
    Ok(Correlation { r, p_value, n })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_correlation() {
        let c = pearson(&[1.0, 2.0, 3.0, 4.0], &[8.0, 6.0, 4.0, 2.0]).unwrap();
        assert!((c.r + 1.0).abs() < 1e-12);
        assert_eq!(c.p_value, 0.0);
        assert_eq!(c.n, 4);
    }

    #[test]
    fn test_known_r_and_p() {
        let c = pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 3.0, 2.0, 5.0, 4.0]).unwrap();
        assert!((c.r - 0.8).abs() < 1e-12);
        // same t-test as the slope of the matching regression
        assert!((c.p_value - 0.1041).abs() < 1e-3);
    }

    #[test]
    fn test_nan_pairs_skipped() {
        let c = pearson(&[1.0, f64::NAN, 2.0, 3.0], &[2.0, 0.0, 4.0, 6.0]).unwrap();
        assert_eq!(c.n, 3);
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
    }
}
