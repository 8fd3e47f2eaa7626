//! Gaussian kernel density estimation.

use std::f64::consts::PI;

use super::describe::{drop_nan, linspace, std_dev};
use crate::plotting::error::{PlotError, PlotResult};

/// Density values evaluated on a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Density {
    pub grid: Vec<f64>,
    pub values: Vec<f64>,
}

impl Density {
    /// Largest density value, 0 for an empty grid.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Kernel width from Scott's rule: `n^(-1/5) * sd`.
pub fn scott_bandwidth(sample: &[f64]) -> PlotResult<f64> {
    let sd = if sample.len() > 1 { std_dev(sample, 1)? } else { 0.0 };
    Ok((sample.len() as f64).powf(-0.2) * sd)
}

/// KDE of `sample` (NaNs dropped) on `n_points` evenly spaced points from
/// the sample minimum to its maximum.
pub fn gaussian_kde(sample: &[f64], n_points: usize) -> PlotResult<Density> {
    let data = drop_nan(sample);
    if data.is_empty() {
        return Err(PlotError::EmptyData);
    }
    let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    gaussian_kde_on(&data, &linspace(lo, hi, n_points.max(2)))
}

/// KDE of `sample` (NaNs dropped) evaluated at `grid`.
///
/// A constant sample has no spread to estimate; it yields a flat density
/// of 1 at every grid point.
pub fn gaussian_kde_on(sample: &[f64], grid: &[f64]) -> PlotResult<Density> {
    let data = drop_nan(sample);
    if data.is_empty() {
        return Err(PlotError::EmptyData);
    }
    let bandwidth = scott_bandwidth(&data)?;
    if !(bandwidth > 0.0) {
        return Ok(Density {
            grid: grid.to_vec(),
            values: vec![1.0; grid.len()],
        });
    }

    let norm = 1.0 / (data.len() as f64 * bandwidth * (2.0 * PI).sqrt());
    let values = grid
        .iter()
        .map(|&x| {
            data.iter()
                .map(|&xi| (-0.5 * ((x - xi) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm
        })
        .collect();
    Ok(Density {
        grid: grid.to_vec(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_integrates_to_one() {
        let sample = [1.0, 2.0, 2.5, 3.0, 7.0];
        let grid = linspace(-20.0, 30.0, 5001);
        let density = gaussian_kde_on(&sample, &grid).unwrap();
        let step = grid[1] - grid[0];
        let area: f64 = density
            .values
            .windows(2)
            .map(|w| (w[0] + w[1]) / 2.0 * step)
            .sum();
        assert!((area - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_grid_spans_sample() {
        let density = gaussian_kde(&[3.0, f64::NAN, 1.0, 2.0], 100).unwrap();
        assert_eq!(density.grid.len(), 100);
        assert_eq!(density.grid[0], 1.0);
        assert_eq!(density.grid[99], 3.0);
        // symmetric sample peaks in the middle
        assert!(density.values[50] > density.values[0]);
        assert!((density.values[0] - density.values[99]).abs() < 1e-12);
    }

    #[test]
    fn test_constant_sample_is_flat() {
        let density = gaussian_kde(&[4.0, 4.0, 4.0], 10).unwrap();
        assert!(density.values.iter().all(|v| *v == 1.0));
        assert_eq!(density.max(), 1.0);
        assert!(matches!(gaussian_kde(&[f64::NAN], 10), Err(PlotError::EmptyData)));
    }
}
