#![deny(unsafe_code)]
//! CLI binary for the boids flocking simulation.
//!
//! Subcommands:
//! - `simulate`: generate a random sky, run it N generations, write a GIF
//! - `schema`: print the run configuration parameters

mod error;

use boids_core::{BoidsError, SkyConfig, Srgb};
use boids_flock::{generate_sky_seeded, simulate};
use boids_render::animation::write_gif;
use boids_render::snapshot::write_png;
use boids_render::RenderConfig;
use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "boids", about = "Boid flocking simulation on a toroidal sky")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a random flock and write an animated GIF.
    Simulate {
        #[command(flatten)]
        sky: SkyArgs,

        #[command(flatten)]
        render: RenderArgs,

        /// Output file path.
        #[arg(short, long, default_value = "boids.gif")]
        output: PathBuf,

        /// Also write the final generation as a PNG.
        #[arg(long)]
        last_frame: Option<PathBuf>,
    },
    /// Print the configuration schema.
    Schema,
}

/// Run parameters. Unset flags fall back to `--config`, then to defaults.
#[derive(Args)]
struct SkyArgs {
    /// JSON file with a run configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of boids.
    #[arg(long)]
    boids: Option<usize>,

    /// Side length of the square sky.
    #[arg(long)]
    width: Option<f64>,

    /// Speed of every boid at generation 0.
    #[arg(long)]
    initial_speed: Option<f64>,

    /// Speed cap.
    #[arg(long)]
    max_speed: Option<f64>,

    /// Number of generations to simulate.
    #[arg(long)]
    generations: Option<usize>,

    /// Interaction radius.
    #[arg(long)]
    proximity: Option<f64>,

    /// Separation gain.
    #[arg(long)]
    separation: Option<f64>,

    /// Alignment gain.
    #[arg(long)]
    alignment: Option<f64>,

    /// Cohesion gain.
    #[arg(long)]
    cohesion: Option<f64>,

    /// Length of one time step.
    #[arg(long)]
    time_step: Option<f64>,

    /// PRNG seed for a reproducible initial sky.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct RenderArgs {
    /// Output image side length in pixels.
    #[arg(long, default_value_t = 2000)]
    canvas_width: u32,

    /// Draw every Nth generation.
    #[arg(long, default_value_t = 20)]
    frequency: usize,

    /// Boid disc radius in pixels.
    #[arg(long, default_value_t = 5.0)]
    boid_size: f64,

    /// Boid color as hex.
    #[arg(long, default_value = "#ffffff")]
    boid_color: String,

    /// Background color as hex.
    #[arg(long, default_value = "#add8e6")]
    background: String,
}

impl SkyArgs {
    /// Layers explicit flags over the config file (or the defaults).
    fn resolve(self) -> Result<SkyConfig, CliError> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
                let value: serde_json::Value = serde_json::from_str(&text)
                    .map_err(|e| CliError::Input(format!("invalid config JSON: {e}")))?;
                SkyConfig::from_json(&value)?
            }
            None => SkyConfig::default(),
        };
        if let Some(v) = self.boids {
            cfg.count = v;
        }
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.initial_speed {
            cfg.initial_speed = v;
        }
        if let Some(v) = self.max_speed {
            cfg.max_speed = v;
        }
        if let Some(v) = self.generations {
            cfg.generations = v;
        }
        if let Some(v) = self.proximity {
            cfg.proximity = v;
        }
        if let Some(v) = self.separation {
            cfg.separation = v;
        }
        if let Some(v) = self.alignment {
            cfg.alignment = v;
        }
        if let Some(v) = self.cohesion {
            cfg.cohesion = v;
        }
        if let Some(v) = self.time_step {
            cfg.time_step = v;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        Ok(cfg)
    }
}

impl RenderArgs {
    /// Checked before the sky is generated so a bad frame setting never
    /// costs a full simulation.
    fn resolve(self) -> Result<RenderConfig, CliError> {
        if self.frequency == 0 {
            return Err(BoidsError::InvalidFrequency.into());
        }
        let render = RenderConfig {
            canvas_width: self.canvas_width,
            boid_size: self.boid_size,
            boid_color: Srgb::from_hex(&self.boid_color)?,
            background: Srgb::from_hex(&self.background)?,
        };
        render.validate()?;
        Ok(render)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&SkyConfig::param_schema())?);
        }
        Command::Simulate {
            sky,
            render,
            output,
            last_frame,
        } => {
            let cfg = sky.resolve()?;
            let frequency = render.frequency;
            let render = render.resolve()?;
            cfg.validate()?;

            let initial = generate_sky_seeded(&cfg, cfg.seed)?;
            info!(boids = cfg.count, width = cfg.width, "initial sky generated");

            let snapshots = simulate(&initial, cfg.generations, cfg.time_step)?;
            info!(snapshots = snapshots.len(), "simulation complete");

            let frames = write_gif(&snapshots, &render, frequency, &output)?;
            info!(frames, output = %output.display(), "gif written");

            if let (Some(path), Some(last)) = (&last_frame, snapshots.last()) {
                write_png(last, &render, path)?;
                info!(path = %path.display(), "final snapshot written");
            }

            if cli.json {
                let info = serde_json::json!({
                    "config": cfg,
                    "snapshots": snapshots.len(),
                    "frames": frames,
                    "output": output.display().to_string(),
                    "last_frame": last_frame.as_ref().map(|p| p.display().to_string()),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "simulated {} boids for {} generations -> {} ({frames} frames)",
                    cfg.count,
                    cfg.generations,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
