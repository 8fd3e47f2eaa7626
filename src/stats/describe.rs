//! Descriptive statistics.

use crate::plotting::error::{PlotError, PlotResult};

/// Arithmetic mean. Errors on empty input.
pub fn mean(values: &[f64]) -> PlotResult<f64> {
    if values.is_empty() {
        return Err(PlotError::EmptyData);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Variance with `ddof` delta degrees of freedom (0 population, 1 sample).
pub fn variance(values: &[f64], ddof: usize) -> PlotResult<f64> {
    let m = mean(values)?;
    let n = values.len();
    if n <= ddof {
        return Err(PlotError::Stats(format!(
            "variance needs more than {} values, got {}",
            ddof, n
        )));
    }
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Ok(ss / (n - ddof) as f64)
}

pub fn std_dev(values: &[f64], ddof: usize) -> PlotResult<f64> {
    variance(values, ddof).map(f64::sqrt)
}

/// Standard error of the mean, from the sample (ddof 1) standard deviation.
pub fn sem(values: &[f64]) -> PlotResult<f64> {
    Ok(std_dev(values, 1)? / (values.len() as f64).sqrt())
}

/// Quantile `q` in [0, 1] with linear interpolation between order statistics.
/// NaNs are ignored.
pub fn quantile(values: &[f64], q: f64) -> PlotResult<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(PlotError::InvalidArgument(format!(
            "quantile {} outside [0, 1]",
            q
        )));
    }
    let mut data = drop_nan(values);
    if data.is_empty() {
        return Err(PlotError::EmptyData);
    }
    data.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted_quantile(&data, q))
}

fn sorted_quantile(data: &[f64], q: f64) -> f64 {
    let pos = (data.len() - 1) as f64 * q;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;
    if (base + 1) < data.len() {
        data[base] + rest * (data[base + 1] - data[base])
    } else {
        data[base]
    }
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

pub fn drop_nan(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Box-plot summary of a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest datum within 1.5 IQR of the first quartile
    pub whisker_low: f64,
    /// Highest datum within 1.5 IQR of the third quartile
    pub whisker_high: f64,
    /// Data beyond the whiskers
    pub fliers: Vec<f64>,
}

/// Quartiles, whiskers and fliers as drawn by a standard box plot.
pub fn five_number(sample: &[f64]) -> PlotResult<BoxStats> {
    let mut data = drop_nan(sample);
    if data.is_empty() {
        return Err(PlotError::EmptyData);
    }
    data.sort_by(|a, b| a.total_cmp(b));

    let q1 = sorted_quantile(&data, 0.25);
    let median = sorted_quantile(&data, 0.5);
    let q3 = sorted_quantile(&data, 0.75);
    let iqr = q3 - q1;
    let (low_fence, high_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    let inside = data.iter().copied().filter(|v| *v >= low_fence && *v <= high_fence);
    let whisker_low = inside.clone().fold(f64::INFINITY, f64::min).min(q1);
    let whisker_high = inside.fold(f64::NEG_INFINITY, f64::max).max(q3);
    let fliers = data
        .iter()
        .copied()
        .filter(|v| *v < low_fence || *v > high_fence)
        .collect();

    Ok(BoxStats {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        fliers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_variance() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&v).unwrap(), 5.0);
        assert_eq!(variance(&v, 0).unwrap(), 4.0);
        assert_eq!(std_dev(&v, 0).unwrap(), 2.0);
        assert!((variance(&v, 1).unwrap() - 32.0 / 7.0).abs() < 1e-12);
        assert!(matches!(mean(&[]), Err(PlotError::EmptyData)));
        assert!(matches!(variance(&[1.0], 1), Err(PlotError::Stats(_))));
    }

    #[test]
    fn test_sem() {
        let v = [1.0, 2.0, 3.0, 4.0];
        let expected = (5.0f64 / 3.0).sqrt() / 2.0;
        assert!((sem(&v).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_interpolates() {
        let v = [4.0, 1.0, f64::NAN, 3.0, 2.0];
        assert_eq!(quantile(&v, 0.5).unwrap(), 2.5);
        assert_eq!(quantile(&v, 0.25).unwrap(), 1.75);
        assert_eq!(quantile(&v, 1.0).unwrap(), 4.0);
        assert!(quantile(&v, 1.5).is_err());
    }

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.0, 1.0, 11);
        assert_eq!(v.len(), 11);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[10], 1.0);
        assert!((v[3] - 0.3).abs() < 1e-12);
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_five_number_fliers() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let stats = five_number(&v).unwrap();
        assert_eq!(stats.median, 3.5);
        assert_eq!(stats.q1, 2.25);
        assert_eq!(stats.q3, 4.75);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 5.0);
        assert_eq!(stats.fliers, vec![100.0]);
    }
}
