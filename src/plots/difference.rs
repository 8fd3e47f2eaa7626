//! Within-subject change: paired lines below, difference histogram above.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use serde::Deserialize;

use super::hist::bin_bars;
use crate::plotting::prelude::*;
use crate::plotting::style::finite_range;
use crate::plotting::{Colormap, TwoSlopeNorm};
use crate::stats::{histogram, linspace, mean, normal_ppf, std_dev, Bins};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DifferenceOptions {
    /// A count of histogram bin edges between `vmin` and `vmax`, or the
    /// edges themselves
    pub bins: Bins,
    /// Color and histogram range; the range of the differences when absent
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
    pub cmap: Colormap,
    /// Standard deviation of the horizontal jitter of subject lines
    pub jitter: f64,
    /// Significance level of the normal confidence intervals
    pub ci_alpha: f64,
    pub seed: Option<u64>,
    /// Tick labels of the two conditions
    pub y0_name: String,
    pub y1_name: String,
}

impl Default for DifferenceOptions {
    fn default() -> Self {
        DifferenceOptions {
            bins: Bins::Count(20),
            vmin: None,
            vmax: None,
            cmap: Colormap::COOLWARM,
            jitter: 0.02,
            ci_alpha: 0.05,
            seed: None,
            y0_name: "y0".to_string(),
            y1_name: "y1".to_string(),
        }
    }
}

/// Standard error with the population standard deviation.
fn population_sem(values: &[f64]) -> PlotResult<f64> {
    Ok(std_dev(values, 0)? / (values.len() as f64).sqrt())
}

fn mean_marker(color: Color) -> MarkerStyle {
    MarkerStyle::new(Marker::ThinDiamond)
        .size(5.0)
        .fill(color)
        .edge_color(Color::BLACK)
        .edge_width(0.5)
}

/// Paired measurements `y0` and `y1` in a new two-panel figure.
///
/// Colors follow the difference `y1 - y0` through a two-slope norm centered
/// at zero, so decreases and increases take opposite ends of `cmap`.
pub fn difference(y0: &[f64], y1: &[f64], options: &DifferenceOptions) -> PlotResult<Figure> {
    if y0.len() != y1.len() {
        return Err(PlotError::InvalidData(format!(
            "paired samples differ in length ({} vs {})",
            y0.len(),
            y1.len()
        )));
    }
    if y0.is_empty() {
        return Err(PlotError::EmptyData);
    }
    if !(options.jitter >= 0.0 && options.jitter.is_finite()) {
        return Err(PlotError::InvalidArgument(format!(
            "jitter must be a finite non-negative standard deviation, got {}",
            options.jitter
        )));
    }
    let jitter = Normal::new(0.0, options.jitter).map_err(|e| {
        PlotError::InvalidArgument(format!("jitter {}: {}", options.jitter, e))
    })?;
    let zcrit = normal_ppf(1.0 - options.ci_alpha / 2.0)?;

    let diffs: Vec<f64> = y0.iter().zip(y1).map(|(a, b)| b - a).collect();
    let (lo, hi) = finite_range(&diffs).ok_or(PlotError::EmptyData)?;
    let vmin = options.vmin.unwrap_or(lo);
    let vmax = options.vmax.unwrap_or(hi);
    let norm = TwoSlopeNorm::new(vmin.min(0.0), 0.0, vmax.max(0.0));

    let (mean0, mean1, mean_diff) = (mean(y0)?, mean(y1)?, mean(&diffs)?);
    let (sem0, sem1) = (population_sem(y0)?, population_sem(y1)?);
    let sem_diff = population_sem(&diffs)?;
    let mean_color = options.cmap.map(mean_diff, &norm);

    let seed = options.seed.unwrap_or_else(rand::random);
    debug!(
        "difference: {} pairs, mean {:.3}, jitter seed {}",
        diffs.len(),
        mean_diff,
        seed
    );
    let mut rng = StdRng::seed_from_u64(seed);

    let edges = match options.bins {
        Bins::Count(n) if vmin < vmax && n >= 2 => linspace(vmin, vmax, n),
        Bins::Count(n) => Bins::Count(n.max(1)).edges(&diffs)?,
        ref edges => edges.edges(&diffs)?,
    };
    let counts = histogram(&diffs, &edges);

    let mut fig = Figure::default();
    fig.grid(2, 1, &[1.0, 3.0]);
    let [upper, lower] = fig.get_axes() else {
        return Err(PlotError::RenderError("expected two panels".to_string()));
    };

    for ((&a, &b), &d) in y0.iter().zip(y1).zip(&diffs) {
        let offset: f64 = rng.sample(jitter);
        lower
            .plot(vec![offset, 1.0 + offset], vec![a, b])
            .color(options.cmap.map(d, &norm))
            .alpha(0.1)
            .marker(Marker::Circle)
            .markersize(3.0)
            .marker_edge_width(0.1)
            .z_order(1.0)
            .clip_on(false)
            .build();
    }
    lower.vlines(
        &[0.0, 1.0],
        &[mean0 - zcrit * sem0, mean1 - zcrit * sem1],
        &[mean0 + zcrit * sem0, mean1 + zcrit * sem1],
        LineStyle::new().color(Color::BLACK).width(0.75),
    );
    lower
        .plot(vec![0.0, 1.0], vec![mean0, mean1])
        .color(Color::BLACK)
        .marker_style(mean_marker(mean_color.clone()))
        .z_order(3.0)
        .build();
    lower
        .set_xlim(-0.2, 1.25)
        .set_xticks(
            vec![0.0, 1.0],
            Some(vec![options.y0_name.clone(), options.y1_name.clone()]),
        )
        .set_ylabel("Value");

    let centers: Vec<f64> = edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect();
    upper.bar(
        bin_bars(&edges, &counts)
            .colors(centers.iter().map(|&c| options.cmap.map(c, &norm)).collect())
            .edge(Color::WHITE, 0.5),
    );
    upper
        .plot(vec![mean_diff], vec![0.0])
        .marker_style(mean_marker(mean_color))
        .clip_on(false)
        .z_order(9.0)
        .build();
    upper.hlines(
        &[0.0],
        &[mean_diff - zcrit * sem_diff],
        &[mean_diff + zcrit * sem_diff],
        LineStyle::new().color(Color::BLACK).width(3.0),
    );
    upper
        .set_ylabel("Freq.")
        .set_xlim(vmin, vmax)
        .set_xlabel("Difference");

    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::Norm;

    const Y0: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
    const Y1: [f64; 4] = [2.0, 2.5, 5.0, 4.5];

    fn options() -> DifferenceOptions {
        DifferenceOptions {
            seed: Some(3),
            ..Default::default()
        }
    }

    #[test]
    fn test_panels() {
        let fig = difference(&Y0, &Y1, &options()).unwrap();
        let axes = fig.axes();
        assert_eq!(axes.len(), 2);
        let (upper, lower) = (&axes[0], &axes[1]);
        assert!(upper.position.height() < lower.position.height());

        // histogram, mean diamond, interval bar
        assert_eq!(upper.plots().len(), 3);
        let view = upper.view_bounds();
        assert_eq!((view.x_min, view.x_max), (0.5, 2.0));
        assert_eq!(upper.x_label.as_ref().unwrap().content, "Difference");

        // subject lines, two intervals, mean line
        assert_eq!(lower.plots().len(), 7);
        let ticks: Vec<String> = lower.x_ticks().into_iter().map(|(_, l)| l).collect();
        assert_eq!(ticks, vec!["y0", "y1"]);
    }

    #[test]
    fn test_mean_marker_color_follows_norm() {
        let fig = difference(&Y0, &Y1, &options()).unwrap();
        let diamond = fig.axes()[0].plots()[1].marker_style().unwrap();
        // mean difference 1 over a norm spanning 0..2
        let expected = Colormap::COOLWARM.sample(0.75);
        assert_eq!(diamond.fill, expected);
        assert_eq!(diamond.marker, Marker::ThinDiamond);
        assert_eq!(TwoSlopeNorm::new(0.0, 0.0, 2.0).normalize(1.0), 0.75);
    }

    #[test]
    fn test_seed_reproducible() {
        let a = difference(&Y0, &Y1, &options()).unwrap().render();
        let b = difference(&Y0, &Y1, &options()).unwrap().render();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            difference(&Y0, &Y1[..3], &options()),
            Err(PlotError::InvalidData(_))
        ));
        assert!(matches!(difference(&[], &[], &options()), Err(PlotError::EmptyData)));
        let negative = DifferenceOptions {
            jitter: -1.0,
            ..options()
        };
        assert!(matches!(
            difference(&Y0, &Y1, &negative),
            Err(PlotError::InvalidArgument(_))
        ));
        let unbounded = DifferenceOptions {
            jitter: f64::INFINITY,
            ..options()
        };
        assert!(matches!(
            difference(&Y0, &Y1, &unbounded),
            Err(PlotError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_explicit_bin_edges() {
        let opts = DifferenceOptions {
            bins: Bins::Edges(vec![0.0, 0.5, 1.0, 1.5, 2.0]),
            ..options()
        };
        let fig = difference(&Y0, &Y1, &opts).unwrap();
        let bounds = fig.axes()[0].plots()[0].bounds().unwrap();
        assert_eq!((bounds.x_min, bounds.x_max), (0.0, 2.0));

        let unsorted = DifferenceOptions {
            bins: Bins::Edges(vec![1.0, 0.0]),
            ..options()
        };
        assert!(matches!(
            difference(&Y0, &Y1, &unsorted),
            Err(PlotError::InvalidArgument(_))
        ));

        let parsed: DifferenceOptions = serde_json::from_str(r#"{"bins": [-1, 0, 1]}"#).unwrap();
        assert_eq!(parsed.bins, Bins::Edges(vec![-1.0, 0.0, 1.0]));
    }
}
