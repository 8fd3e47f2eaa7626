//! Plot job files.
//!
//! A job is a JSON object naming one helper and its inputs:
//!
//! ```json
//! {
//!   "width": 4.0, "height": 3.0, "theme": "paper", "title": "Scores",
//!   "plot": { "kind": "hist", "x": [1.2, 3.4, 2.2], "options": { "bins": 5 } }
//! }
//! ```
//!
//! Every key of `options` is optional. Colors are color names or hex strings,
//! colormaps are names such as `"viridis_r"`.

use std::fs::File;
use std::io::BufReader;

use log::info;
use serde::Deserialize;

use crate::frame::Frame;
use crate::plots::{
    bar, difference, factorial_heatmap, hist, interaction, lm, model_recovery, pair, raincloud,
    scatter, violin, BarOptions, DifferenceOptions, FactorialOptions, HistOptions,
    InteractionOptions, LmOptions, ModelRecoveryOptions, PairOptions, RaincloudOptions,
    ScatterOptions, ViolinOptions,
};
use crate::plotting::prelude::*;

/// One figure to render.
#[derive(Deserialize, Debug, Clone)]
pub struct PlotJob {
    /// Figure size in inches, for single-axes plots
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_dpi")]
    pub dpi: f64,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub title: Option<String>,
    pub plot: PlotSpec,
}

fn default_width() -> f64 { 6.4 }

fn default_height() -> f64 { 4.8 }

fn default_dpi() -> f64 { 100.0 }

/// The helper to run, tagged by `kind`.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlotSpec {
    Bar {
        y: Vec<f64>,
        #[serde(default)]
        options: BarOptions,
    },
    Hist {
        x: Vec<f64>,
        #[serde(default)]
        options: HistOptions,
    },
    Scatter {
        x: Vec<f64>,
        y: Vec<f64>,
        #[serde(default)]
        options: ScatterOptions,
    },
    Lm {
        x: Vec<f64>,
        y: Vec<f64>,
        #[serde(default)]
        options: LmOptions,
    },
    Violin {
        data: Frame,
        #[serde(default)]
        options: ViolinOptions,
    },
    Raincloud {
        data: Frame,
        #[serde(default)]
        options: RaincloudOptions,
    },
    Factorial {
        data: Frame,
        options: FactorialOptions,
    },
    ModelRecovery {
        mpp: Vec<Vec<f64>>,
        xp: Vec<Vec<f64>>,
        labels: Vec<String>,
        #[serde(default)]
        options: ModelRecoveryOptions,
    },
    Interaction {
        data: Frame,
        line_var: String,
        x_var: String,
        y_var: String,
        #[serde(default)]
        options: InteractionOptions,
    },
    /// Builds its own grid; the job's size and theme do not apply
    Pair {
        data: Frame,
        #[serde(default)]
        options: PairOptions,
    },
    /// Builds its own two-panel figure; the job's size and theme do not apply
    Difference {
        y0: Vec<f64>,
        y1: Vec<f64>,
        #[serde(default)]
        options: DifferenceOptions,
    },
}

impl PlotSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            PlotSpec::Bar { .. } => "bar",
            PlotSpec::Hist { .. } => "hist",
            PlotSpec::Scatter { .. } => "scatter",
            PlotSpec::Lm { .. } => "lm",
            PlotSpec::Violin { .. } => "violin",
            PlotSpec::Raincloud { .. } => "raincloud",
            PlotSpec::Factorial { .. } => "factorial",
            PlotSpec::ModelRecovery { .. } => "model_recovery",
            PlotSpec::Interaction { .. } => "interaction",
            PlotSpec::Pair { .. } => "pair",
            PlotSpec::Difference { .. } => "difference",
        }
    }
}

impl PlotJob {
    /// Load a job from a JSON file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let job: PlotJob = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(job)
    }

    /// Run the helper into a new figure.
    pub fn render(&self) -> PlotResult<Figure> {
        info!("Rendering {} plot", self.plot.kind());
        let mut fig = match self.plot {
            PlotSpec::Pair {
                ref data,
                ref options,
            } => pair(data, options)?,
            PlotSpec::Difference {
                ref y0,
                ref y1,
                ref options,
            } => difference(y0, y1, options)?,
            _ => {
                let mut fig =
                    Figure::from_inches(self.width, self.height, self.dpi).theme(self.theme);
                let mut style = StyleContext::from_theme(&fig.theme);
                self.draw(fig.gca(), &mut style)?;
                fig
            }
        };
        if let Some(ref title) = self.title {
            fig = fig.suptitle(title.clone());
        }
        Ok(fig)
    }

    fn draw(&self, ax: &mut Axes, style: &mut StyleContext) -> PlotResult<()> {
        match self.plot {
            PlotSpec::Bar { ref y, ref options } => {
                bar(ax, style, y, options)?;
            }
            PlotSpec::Hist { ref x, ref options } => {
                hist(ax, style, x, options)?;
            }
            PlotSpec::Scatter {
                ref x,
                ref y,
                ref options,
            } => {
                scatter(ax, style, x, y, options)?;
            }
            PlotSpec::Lm {
                ref x,
                ref y,
                ref options,
            } => {
                let fit = lm(ax, style, x, y, options)?;
                info!(
                    "Fit: intercept {:.4}, slope {:.4}, r = {:.3}",
                    fit.fit.intercept, fit.fit.slope, fit.correlation.r
                );
            }
            PlotSpec::Violin {
                ref data,
                ref options,
            } => {
                violin(ax, style, data, options)?;
            }
            PlotSpec::Raincloud {
                ref data,
                ref options,
            } => {
                raincloud(ax, style, data, options)?;
            }
            PlotSpec::Factorial {
                ref data,
                ref options,
            } => {
                factorial_heatmap(ax, data, options)?;
            }
            PlotSpec::ModelRecovery {
                ref mpp,
                ref xp,
                ref labels,
                ref options,
            } => {
                model_recovery(ax, mpp, xp, labels, options)?;
            }
            PlotSpec::Interaction {
                ref data,
                ref line_var,
                ref x_var,
                ref y_var,
                ref options,
            } => {
                interaction(ax, style, data, line_var, x_var, y_var, options)?;
            }
            PlotSpec::Pair { .. } | PlotSpec::Difference { .. } => {
                return Err(PlotError::InvalidConfig(format!(
                    "{} plots build their own figure",
                    self.plot.kind()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_job_with_defaults() {
        let job: PlotJob = serde_json::from_str(
            r#"{"plot": {"kind": "hist", "x": [1, 2, 2, 3], "options": {"bins": 3, "color": "salmon"}}}"#,
        )
        .unwrap();
        assert_eq!((job.width, job.height, job.dpi), (6.4, 4.8, 100.0));
        assert_eq!(job.theme, Theme::Paper);
        assert_eq!(job.plot.kind(), "hist");
        match job.plot {
            PlotSpec::Hist { ref options, .. } => {
                assert_eq!(options.bins, crate::stats::Bins::Count(3));
                assert_eq!(options.line_width, 0.75);
            }
            ref other => panic!("expected hist, got {:?}", other),
        }
        let fig = job.render().unwrap();
        assert_eq!(fig.axes().len(), 1);
        assert_eq!(fig.axes()[0].plots().len(), 1);
    }

    #[test]
    fn test_frame_kinds_and_title() {
        let job: PlotJob = serde_json::from_str(
            r#"{
                "title": "Scores",
                "plot": {
                    "kind": "violin",
                    "data": {"pre": [1, 2, 3, 4], "post": [2, 3, null, 5]},
                    "options": {"value_name": "score"}
                }
            }"#,
        )
        .unwrap();
        let svg = job.render().unwrap().render();
        assert!(svg.contains(">Scores</text>"));
        assert!(svg.contains(">score</text>"));
    }

    #[test]
    fn test_unknown_kind_and_bad_colormap() {
        let unknown = serde_json::from_str::<PlotJob>(r#"{"plot": {"kind": "pie", "x": [1]}}"#);
        assert!(unknown.is_err());
        let bad = serde_json::from_str::<PlotJob>(
            r#"{"plot": {"kind": "model_recovery", "mpp": [[1]], "xp": [[1]], "labels": ["a"],
                "options": {"cmap": "rainbow"}}}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_figure_kinds() {
        let job: PlotJob = serde_json::from_str(
            r#"{"plot": {"kind": "difference", "y0": [1, 2, 3], "y1": [2, 2, 4],
                "options": {"seed": 1, "y0_name": "pre"}}}"#,
        )
        .unwrap();
        assert_eq!(job.render().unwrap().axes().len(), 2);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("plotkit_config_test_job.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(br#"{"width": 3, "plot": {"kind": "bar", "y": [3, 1, 2]}}"#)
            .unwrap();
        let job = PlotJob::load(path.to_str().unwrap()).unwrap();
        assert_eq!(job.width, 3.0);
        std::fs::remove_file(&path).unwrap();

        let err = PlotJob::load("/nonexistent/plotkit/job.json").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
