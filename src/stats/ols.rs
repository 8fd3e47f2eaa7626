//! Ordinary least squares with a single predictor.

use super::describe::mean;
use super::intervals::{t_ppf, t_two_sided_p};
use crate::plotting::error::{PlotError, PlotResult};

/// Fitted `y = intercept + slope * x`.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    pub intercept: f64,
    pub slope: f64,
    pub intercept_se: f64,
    pub slope_se: f64,
    /// Two-sided p-value of the intercept t-test
    pub intercept_p: f64,
    /// Two-sided p-value of the slope t-test
    pub slope_p: f64,
    /// Residual standard error
    pub residual_se: f64,
    /// Residual degrees of freedom (n - 2)
    pub df: f64,
    pub r_squared: f64,
    pub n: usize,
    x_mean: f64,
    sxx: f64,
}

/// Point on a confidence band of the mean response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPoint {
    pub x: f64,
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

fn coefficient_p(estimate: f64, se: f64, df: f64) -> PlotResult<f64> {
    if se == 0.0 {
        return Ok(if estimate == 0.0 { 1.0 } else { 0.0 });
    }
    t_two_sided_p(estimate / se, df)
}

/// Fit a straight line through the pairs where both values are finite.
pub fn ols(x: &[f64], y: &[f64]) -> PlotResult<OlsFit> {
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
            "linear fit needs at least 3 points, got {}",
            n
        )));
    }

    let x_mean = mean(&xs)?;
    let y_mean = mean(&ys)?;
    let sxx: f64 = xs.iter().map(|v| (v - x_mean).powi(2)).sum();
    let syy: f64 = ys.iter().map(|v| (v - y_mean).powi(2)).sum();
    let sxy: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(a, b)| (a - x_mean) * (b - y_mean))
        .sum();
    if sxx == 0.0 {
        return Err(PlotError::Stats("x has zero variance".to_string()));
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let sse: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(a, b)| (b - intercept - slope * a).powi(2))
        .sum();
    let df = (n - 2) as f64;
    let residual_se = (sse / df).sqrt();
    let slope_se = residual_se / sxx.sqrt();
    let intercept_se = residual_se * (1.0 / n as f64 + x_mean * x_mean / sxx).sqrt();
    let r_squared = if syy == 0.0 { 1.0 } else { 1.0 - sse / syy };

    Ok(OlsFit {
        intercept,
        slope,
        intercept_se,
        slope_se,
        intercept_p: coefficient_p(intercept, intercept_se, df)?,
        slope_p: coefficient_p(slope, slope_se, df)?,
        residual_se,
        df,
        r_squared,
        n,
        x_mean,
        sxx,
    })
}

impl OlsFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Confidence band of the mean response at each of `xs`.
    pub fn confidence_band(&self, xs: &[f64], level: f64) -> PlotResult<Vec<BandPoint>> {
        let t = t_ppf(0.5 + level / 2.0, self.df)?;
        Ok(xs
            .iter()
            .map(|&x| {
                let mean = self.predict(x);
                let half = t
                    * self.residual_se
                    * (1.0 / self.n as f64 + (x - self.x_mean).powi(2) / self.sxx).sqrt();
                BandPoint {
                    x,
                    mean,
                    lower: mean - half,
                    upper: mean + half,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line_recovered() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 1.5 + 2.0 * v).collect();
        let fit = ols(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.5).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert_eq!(fit.slope_p, 0.0);
        let band = fit.confidence_band(&[2.0], 0.95).unwrap();
        assert!((band[0].upper - band[0].lower).abs() < 1e-9);
    }

    #[test]
    fn test_noisy_fit_statistics() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 3.0, 2.0, 5.0, 4.0];
        let fit = ols(&x, &y).unwrap();
        assert!((fit.slope - 0.8).abs() < 1e-12);
        assert!((fit.intercept - 0.6).abs() < 1e-12);
        assert_eq!(fit.df, 3.0);
        // sse = 3.6, s = sqrt(1.2), se(slope) = s / sqrt(10)
        assert!((fit.slope_se - (1.2f64 / 10.0).sqrt()).abs() < 1e-12);
        assert!((fit.r_squared - 0.64).abs() < 1e-12);
        assert!(fit.slope_p > 0.05 && fit.slope_p < 0.2);
    }

    #[test]
    fn test_band_widest_away_from_mean() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 3.0, 2.0, 5.0, 4.0];
        let fit = ols(&x, &y).unwrap();
        let band = fit.confidence_band(&[1.0, 3.0, 5.0], 0.95).unwrap();
        let width = |b: &BandPoint| b.upper - b.lower;
        assert!(width(&band[1]) < width(&band[0]));
        assert!((width(&band[0]) - width(&band[2])).abs() < 1e-9);
        assert!((band[1].mean - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert!(ols(&[1.0, 2.0], &[1.0, 2.0]).is_err());
        assert!(ols(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_err());
        assert!(ols(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
    }
}
