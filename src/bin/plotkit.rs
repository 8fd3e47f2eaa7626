use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use plotkit::annotation::{h_text_line, label_axes, HTextLineOptions, LabelAxesOptions};
use plotkit::config::PlotJob;
use plotkit::frame::Frame;
use plotkit::plots::{
    difference, factorial_heatmap, interaction, lm, model_recovery, pair, raincloud, violin,
    DifferenceOptions, FactorialOptions, InteractionOptions, LmOptions, ModelRecoveryOptions,
    PairOptions, RaincloudOptions, ViolinOptions,
};
use plotkit::plotting::prelude::*;

#[derive(Parser)]
#[command(name = "plotkit")]
#[command(
    about = "Statistical plots as SVG",
    long_about = "Renders opinionated statistical plots (raincloud, violin, regression, factorial heatmaps and more) from JSON job files."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render one plot job file to SVG
    Render {
        /// JSON job file naming the plot kind, its data and options
        #[arg(long, required = true)]
        job: String,
        /// Output SVG file
        #[arg(long, required = true)]
        out: String,
        /// Overwrite existing output
        #[arg(short, long)]
        force: bool,
    },
    /// Write one example SVG per plot helper
    Demo {
        /// Directory for the example files; created if missing
        #[arg(long, required = true)]
        out_dir: String,
        /// Overwrite existing output
        #[arg(short, long)]
        force: bool,
    },
}

// Create the parent directory and refuse to clobber existing files
fn check_output_paths(paths: &[PathBuf], force: bool) -> Result<()> {
    for path in paths {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            info!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        if !force && path.exists() {
            bail!(
                "Output file {} already exists. Use --force to overwrite.",
                path.display()
            );
        }
    }
    Ok(())
}

fn render_job(job_path: &str, out: &str, force: bool) -> Result<()> {
    let out = PathBuf::from(out);
    check_output_paths(std::slice::from_ref(&out), force)?;
    let job = PlotJob::load(job_path).with_context(|| format!("loading job file {}", job_path))?;
    let fig = job
        .render()
        .with_context(|| format!("rendering {} plot", job.plot.kind()))?;
    fig.save(&out)
        .with_context(|| format!("writing {}", out.display()))?;
    info!("Wrote {}", out.display());
    Ok(())
}

/// Normal draws, rounded to two decimals.
fn sample(rng: &mut StdRng, mean: f64, sd: f64, n: usize) -> Result<Vec<f64>> {
    let dist = Normal::new(mean, sd)?;
    Ok((0..n)
        .map(|_| (dist.sample(rng) * 100.0).round() / 100.0)
        .collect())
}

fn demo_figures() -> Result<Vec<(&'static str, Figure)>> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut figures = Vec::new();

    // Groups for violin and raincloud
    let groups = Frame::new()
        .with_column("control", sample(&mut rng, 0.0, 1.0, 40)?)?
        .with_column("low", sample(&mut rng, 0.8, 1.2, 40)?)?
        .with_column("high", sample(&mut rng, 1.5, 0.8, 40)?)?;

    let mut fig = Figure::from_inches(6.0, 2.5, 100.0);
    let style = StyleContext::from_theme(&fig.theme);
    fig.subplots(1, 2);
    if let [left, right] = fig.get_axes() {
        violin(left, &style, &groups, &ViolinOptions::default())?;
        let options = RaincloudOptions {
            seed: Some(7),
            ..Default::default()
        };
        raincloud(right, &style, &groups, &options)?;
        h_text_line(right, "*", 0.0, 2.0, 4.0, "data", &HTextLineOptions::default())?;
    }
    label_axes(&mut fig, &LabelAxesOptions::default());
    figures.push(("distributions", fig));

    // Regression with an automatically placed annotation
    let x = sample(&mut rng, 5.0, 2.0, 50)?;
    let noise = sample(&mut rng, 0.0, 1.5, 50)?;
    let y: Vec<f64> = x.iter().zip(&noise).map(|(x, e)| 1.0 + 0.6 * x + e).collect();
    let mut fig = Figure::from_inches(3.0, 3.0, 100.0);
    let mut style = StyleContext::from_theme(&fig.theme);
    let options = LmOptions {
        annotation: Some("auto".to_string()),
        ..Default::default()
    };
    let ax = fig.gca();
    lm(ax, &mut style, &x, &y, &options)?;
    ax.set_xlabel("x").set_ylabel("y");
    figures.push(("lm", fig));

    // 2 x 2 x 2 design
    let mut a = Vec::new();
    let mut b = Vec::new();
    let mut c = Vec::new();
    for (i, value) in sample(&mut rng, 10.0, 3.0, 8)?.into_iter().enumerate() {
        a.push(if i < 4 { "low" } else { "high" });
        b.push(if i % 4 < 2 { "x" } else { "y" });
        c.push(value);
    }
    let cells = Frame::new()
        .with_column("A", a)?
        .with_column("B", b)?
        .with_column("C", vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0])?
        .with_column("rt", c)?;
    let options = FactorialOptions {
        row_factors: vec!["A".to_string(), "B".to_string()],
        col_factors: vec!["C".to_string()],
        value_var: "rt".to_string(),
        ..Default::default()
    };
    let mut fig = Figure::from_inches(3.0, 3.0, 100.0);
    factorial_heatmap(fig.gca(), &cells, &options)?;
    figures.push(("factorial", fig));

    let mut fig = Figure::from_inches(3.0, 2.5, 100.0);
    let style = StyleContext::from_theme(&fig.theme);
    interaction(fig.gca(), &style, &cells, "A", "B", "rt", &InteractionOptions::default())?;
    figures.push(("interaction", fig));

    let mpp = vec![
        vec![0.82, 0.11, 0.07],
        vec![0.2, 0.71, 0.09],
        vec![0.05, 0.15, 0.8],
    ];
    let xp = vec![
        vec![1.0, 0.0, 0.0],
        vec![0.02, 0.98, 0.0],
        vec![0.0, 0.0, 1.0],
    ];
    let labels: Vec<String> = ["RW", "RW+P", "Hybrid"].iter().map(|s| s.to_string()).collect();
    let mut fig = Figure::from_inches(3.0, 3.0, 100.0);
    model_recovery(fig.gca(), &mpp, &xp, &labels, &ModelRecoveryOptions::default())?;
    figures.push(("model_recovery", fig));

    let pre = sample(&mut rng, 5.0, 1.0, 30)?;
    let shift = sample(&mut rng, 0.4, 0.8, 30)?;
    let post: Vec<f64> = pre.iter().zip(&shift).map(|(p, s)| p + s).collect();
    let traits = Frame::new()
        .with_column("pre", pre.clone())?
        .with_column("post", post.clone())?
        .with_column("change", shift)?;
    figures.push(("pair", pair(&traits, &PairOptions::default())?));

    let options = DifferenceOptions {
        seed: Some(11),
        y0_name: "pre".to_string(),
        y1_name: "post".to_string(),
        ..Default::default()
    };
    figures.push(("difference", difference(&pre, &post, &options)?));

    Ok(figures)
}

fn write_demo(out_dir: &str, force: bool) -> Result<()> {
    let figures = demo_figures().context("building demo figures")?;
    let paths: Vec<PathBuf> = figures
        .iter()
        .map(|(name, _)| Path::new(out_dir).join(format!("{}.svg", name)))
        .collect();
    check_output_paths(&paths, force)?;
    for ((_, fig), path) in figures.iter().zip(&paths) {
        fig.save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        }
        .unwrap_or_else(|e| panic!("Could not open log file '{}': {}", path, e));
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    log_builder.init();

    let result = match &cli.command {
        Commands::Render { job, out, force } => render_job(job, out, *force),
        Commands::Demo { out_dir, force } => write_demo(out_dir, *force),
    };
    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
