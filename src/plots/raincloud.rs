//! Raincloud plot: half violin, mean with confidence box, jittered points.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use super::scaled_widths;
use crate::frame::Frame;
use crate::plotting::prelude::*;
use crate::plotting::{ErrorBarPlot, Polygon};
use crate::stats::{drop_nan, gaussian_kde, mean, sem, t_interval};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RaincloudOptions {
    /// Shift of the point cloud to the left of each column position
    pub dodge: f64,
    /// Spread of the uniform horizontal jitter
    pub jitter: f64,
    pub scatter_line_width: f64,
    pub scatter_alpha: f64,
    /// Point area, in squared points
    pub scatter_size: f64,
    pub violin_alpha: f64,
    pub violin_width: f64,
    pub box_line_width: f64,
    pub box_width: f64,
    /// Confidence level of the box around the mean
    pub ci: f64,
    pub cap_size: f64,
    /// Column colors; palette colors in order when absent
    pub colors: Option<Vec<Color>>,
    /// Jitter seed; drawn at random when absent
    pub seed: Option<u64>,
}

impl Default for RaincloudOptions {
    fn default() -> Self {
        RaincloudOptions {
            dodge: 0.25,
            jitter: 0.15,
            scatter_line_width: 0.25,
            scatter_alpha: 0.7,
            scatter_size: 6.0,
            violin_alpha: 0.5,
            violin_width: 0.5,
            box_line_width: 0.75,
            box_width: 0.25,
            ci: 0.95,
            cap_size: 2.0,
            colors: None,
            seed: None,
        }
    }
}

/// One raincloud per numeric column of `data` at positions `0..n`.
/// NaNs are dropped per column.
pub fn raincloud<'a>(
    ax: &'a mut Axes,
    style: &StyleContext,
    data: &Frame,
    options: &RaincloudOptions,
) -> PlotResult<&'a mut Axes> {
    if data.is_empty() {
        return Err(PlotError::EmptyData);
    }
    let columns = data
        .names()
        .map(|name| data.numeric(name).map(drop_nan))
        .collect::<PlotResult<Vec<_>>>()?;

    let seed = options.seed.unwrap_or_else(rand::random);
    debug!("raincloud: jitter seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let w = options.box_width;
    let black = LineStyle::new().color(Color::BLACK).width(options.box_line_width);
    for (i, values) in columns.iter().enumerate() {
        let x = i as f64;
        let color = match options.colors {
            Some(ref colors) if !colors.is_empty() => colors[i % colors.len()].clone(),
            _ => style.palette_color(i),
        };

        let avg = mean(values)?;
        let se = sem(values)?;
        let (ci_lo, ci_hi) = t_interval(options.ci, (values.len() - 1) as f64, avg, se)?;

        // Right half of the violin
        let density = gaussian_kde(values, 100)?;
        let widths = scaled_widths(&density.values, options.violin_width / 2.0);
        let mut outline = vec![(x, density.grid[0])];
        outline.extend(density.grid.iter().zip(&widths).map(|(&v, &dw)| (x + dw, v)));
        outline.push((x, density.grid[density.grid.len() - 1]));
        ax.add_patch(Polygon::new(
            outline,
            FillStyle::new(color.clone()).opacity(options.violin_alpha),
        ));

        ax.add_patch(
            Polygon::rectangle(
                x,
                ci_lo,
                w,
                ci_hi - ci_lo,
                FillStyle::outline(color.clone(), options.box_line_width),
            )
            .z_order(2.0),
        );
        ax.hlines(&[avg], &[x], &[x + w], black.clone());
        ax.errorbar(
            ErrorBarPlot::new(vec![x + w / 2.0], vec![avg])
                .yerr(vec![se])
                .bar_style(black.clone())
                .cap_size(options.cap_size),
        );

        let jittered: Vec<f64> = values
            .iter()
            .map(|_| x - options.dodge + options.jitter * rng.random_range(0.0..1.0))
            .collect();
        ax.scatter(jittered, values.clone())
            .color(color)
            .edge_color(Color::BLACK)
            .edge_width(options.scatter_line_width)
            .alpha(options.scatter_alpha)
            .size(options.scatter_size.sqrt())
            .clip_on(false)
            .z_order(5.0)
            .build();
    }

    let names: Vec<String> = data.names().map(String::from).collect();
    ax.set_xticks((0..columns.len()).map(|i| i as f64).collect(), Some(names));
    Ok(ax)
}
