//! Opinionated statistical plot helpers.
//!
//! Every helper draws onto a caller-owned [`Axes`](crate::plotting::Axes)
//! (or builds a whole [`Figure`](crate::plotting::Figure)), validates its
//! options before the first drawing call and hands the surface back for
//! further composition. Helpers that pick "the next color" take a
//! [`StyleContext`](crate::plotting::StyleContext) so call order alone
//! decides the color assignment.

mod bar;
mod difference;
mod factorial;
mod hist;
mod interaction;
mod lm;
mod model_recovery;
mod pair;
mod raincloud;
mod scatter;
mod violin;

pub use bar::{bar, BarOptions};
pub use difference::{difference, DifferenceOptions};
pub use factorial::{factorial_heatmap, FactorialOptions};
pub use hist::{hist, HistOptions};
pub use interaction::{interaction, InteractionOptions};
pub use lm::{lm, LmFit, LmOptions};
pub use model_recovery::{model_recovery, ModelRecoveryOptions};
pub use pair::{pair, PairOptions};
pub use raincloud::{raincloud, RaincloudOptions};
pub use scatter::{scatter, ScatterOptions};
pub use violin::{violin, ViolinOptions};

use crate::plotting::error::{PlotError, PlotResult};

fn check_lengths(x: &[f64], y: &[f64]) -> PlotResult<()> {
    if x.len() != y.len() {
        return Err(PlotError::InvalidData(format!(
            "x and y lengths differ ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    Ok(())
}

/// Violin half-widths proportional to `values`, the largest being `half_width`.
fn scaled_widths(values: &[f64], half_width: f64) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| half_width * v / max).collect()
}
