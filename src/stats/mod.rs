//! Statistical primitives behind the plotting helpers.
//!
//! Distribution functions come from `statrs`; everything else is computed
//! directly on `f64` slices. NaN handling is documented per function.

mod correlation;
mod describe;
mod histogram;
mod intervals;
mod kde;
mod ols;

pub use correlation::{pearson, Correlation};
pub use describe::{drop_nan, five_number, linspace, mean, quantile, sem, std_dev, variance, BoxStats};
pub use histogram::{histogram, Bins};
pub use intervals::{normal_ppf, t_interval, t_ppf, t_two_sided_p};
pub use kde::{gaussian_kde, gaussian_kde_on, scott_bandwidth, Density};
pub use ols::{ols, BandPoint, OlsFit};
