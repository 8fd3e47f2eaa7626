//! Student-t and normal quantiles.

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::plotting::error::{PlotError, PlotResult};

fn check_probability(p: f64) -> PlotResult<()> {
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(PlotError::Stats(format!(
            "probability {} outside the open interval (0, 1)",
            p
        )))
    }
}

fn students_t(df: f64) -> PlotResult<StudentsT> {
    if !(df > 0.0) {
        return Err(PlotError::Stats(format!(
            "degrees of freedom must be positive, got {}",
            df
        )));
    }
    StudentsT::new(0.0, 1.0, df).map_err(|e| PlotError::Stats(e.to_string()))
}

/// Standard normal quantile.
pub fn normal_ppf(p: f64) -> PlotResult<f64> {
    check_probability(p)?;
    let normal = Normal::new(0.0, 1.0).map_err(|e| PlotError::Stats(e.to_string()))?;
    Ok(normal.inverse_cdf(p))
}

/// Quantile of Student's t with `df` degrees of freedom.
pub fn t_ppf(p: f64, df: f64) -> PlotResult<f64> {
    check_probability(p)?;
    Ok(students_t(df)?.inverse_cdf(p))
}

/// Two-sided p-value of a t statistic.
pub fn t_two_sided_p(t: f64, df: f64) -> PlotResult<f64> {
    if t.is_nan() {
        return Err(PlotError::Stats("t statistic is NaN".to_string()));
    }
    if t.is_infinite() {
        return Ok(0.0);
    }
    let dist = students_t(df)?;
    Ok((2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0))
}

/// Central `confidence` interval of a t distribution shifted to `loc` and
/// scaled by `scale`.
pub fn t_interval(confidence: f64, df: f64, loc: f64, scale: f64) -> PlotResult<(f64, f64)> {
    let t = t_ppf(0.5 + confidence / 2.0, df)?;
    Ok((loc - t * scale, loc + t * scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_ppf_known_values() {
        assert!((normal_ppf(0.975).unwrap() - 1.959964).abs() < 1e-5);
        assert!(normal_ppf(0.5).unwrap().abs() < 1e-9);
        assert!(normal_ppf(1.0).is_err());
    }

    #[test]
    fn test_t_ppf_known_values() {
        // t(0.975, 10) = 2.228139
        assert!((t_ppf(0.975, 10.0).unwrap() - 2.228139).abs() < 1e-4);
        assert!(t_ppf(0.975, 0.0).is_err());
    }

    #[test]
    fn test_t_interval_symmetric() {
        let (lo, hi) = t_interval(0.95, 10.0, 5.0, 2.0).unwrap();
        assert!((5.0 - lo - (hi - 5.0)).abs() < 1e-9);
        assert!((hi - 5.0 - 2.0 * 2.228139).abs() < 1e-3);
    }

    #[test]
    fn test_two_sided_p() {
        assert!((t_two_sided_p(0.0, 5.0).unwrap() - 1.0).abs() < 1e-9);
        let p = t_two_sided_p(2.228139, 10.0).unwrap();
        assert!((p - 0.05).abs() < 1e-4);
        assert_eq!(t_two_sided_p(f64::INFINITY, 3.0).unwrap(), 0.0);
    }
}
