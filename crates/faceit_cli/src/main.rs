//! FaceIt CLI
//!
//! Evaluate the face model from the command line and print the results as
//! JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use faceit_core::{
    DrawParameters, EyeBrows, Eyes, FaceConfig, FaceGeometry, FaceStore, FacialExpression, Mouth,
    Move, Ordered, Rect,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "faceit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "FaceIt face model CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the draw parameters for an expression
    Params {
        #[command(flatten)]
        face: FaceArgs,
    },

    /// Print the face geometry for an expression inside a bounding rect
    Geometry {
        #[command(flatten)]
        face: FaceArgs,

        /// Bounds width
        #[arg(long, default_value = "200")]
        width: f32,

        /// Bounds height
        #[arg(long, default_value = "200")]
        height: f32,

        /// Bounds origin x
        #[arg(long, default_value = "0")]
        x: f32,

        /// Bounds origin y
        #[arg(long, default_value = "0")]
        y: f32,

        /// Print stroke paths instead of primitives
        #[arg(long)]
        paths: bool,
    },

    /// Apply moves in order and print the face after each one
    Apply {
        #[command(flatten)]
        face: FaceArgs,

        /// Moves: happier, sadder, relax, furrow, toggle-eyes
        #[arg(required = true)]
        moves: Vec<Move>,
    },

    /// Show version and the expression tables
    Info,
}

/// Options shared by every command that builds a face
#[derive(Args)]
struct FaceArgs {
    /// Face config file (face.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting eyes (open, closed, squinting)
    #[arg(long)]
    eyes: Option<Eyes>,

    /// Starting eyebrows (relaxed, normal, furrowed)
    #[arg(long)]
    eye_brows: Option<EyeBrows>,

    /// Starting mouth (frown, smirk, neutral, grin, smile)
    #[arg(long)]
    mouth: Option<Mouth>,

    /// Skull scale
    #[arg(long)]
    scale: Option<f32>,

    /// Stroke width
    #[arg(long)]
    line_width: Option<f32>,
}

impl FaceArgs {
    fn load(&self) -> Result<FaceConfig> {
        let mut config = match &self.config {
            Some(path) => FaceConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => FaceConfig::default(),
        };

        let expression = &mut config.expression;
        if let Some(eyes) = self.eyes {
            expression.eyes = eyes;
        }
        if let Some(eye_brows) = self.eye_brows {
            expression.eye_brows = eye_brows;
        }
        if let Some(mouth) = self.mouth {
            expression.mouth = mouth;
        }
        if let Some(scale) = self.scale {
            config.style.scale = scale;
        }
        if let Some(line_width) = self.line_width {
            config.style.line_width = line_width;
        }

        config.validate()?;
        debug!(expression = %config.expression, "face options resolved");
        Ok(config)
    }
}

#[derive(Serialize)]
struct Step {
    #[serde(rename = "move")]
    mv: Move,
    expression: FacialExpression,
    params: DrawParameters,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Params { face } => cmd_params(&face),

        Commands::Geometry {
            face,
            width,
            height,
            x,
            y,
            paths,
        } => cmd_geometry(&face, Rect::new(x, y, width, height), paths),

        Commands::Apply { face, moves } => cmd_apply(&face, &moves),

        Commands::Info => cmd_info(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
    println!("{text}");
    Ok(())
}

fn cmd_params(face: &FaceArgs) -> Result<()> {
    let store = FaceStore::from_config(&face.load()?);
    print_json(&store.params())
}

fn cmd_geometry(face: &FaceArgs, bounds: Rect, paths: bool) -> Result<()> {
    if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
        anyhow::bail!(
            "Bounds must have a positive size, got {}x{}",
            bounds.width(),
            bounds.height()
        );
    }

    let store = FaceStore::from_config(&face.load()?);
    let geometry = FaceGeometry::compute(bounds, &store.params());
    info!(
        "Skull radius {:.2} at ({:.2}, {:.2})",
        geometry.skull.radius, geometry.skull.center.x, geometry.skull.center.y
    );

    if paths {
        print_json(&geometry.to_paths())
    } else {
        print_json(&geometry)
    }
}

fn cmd_apply(face: &FaceArgs, moves: &[Move]) -> Result<()> {
    let mut store = FaceStore::from_config(&face.load()?);
    info!("Starting from {}", store.expression());

    let steps: Vec<Step> = moves
        .iter()
        .map(|&mv| {
            store.apply(mv);
            Step {
                mv,
                expression: store.expression(),
                params: store.params(),
            }
        })
        .collect();

    info!("Ended at {}", store.expression());
    print_json(&steps)
}

fn cmd_info() -> Result<()> {
    println!("FaceIt");
    println!("======");
    println!();
    println!("Version: {}", faceit_core::VERSION);
    println!();
    println!("Mouth curvature:");
    for &mouth in Mouth::ALL {
        println!("  {:<8} {:>5.1}", mouth, faceit_core::mouth_curvature(mouth));
    }
    println!();
    println!("Eyebrow tilt:");
    for &brows in EyeBrows::ALL {
        println!("  {:<8} {:>5.1}", brows, faceit_core::eye_brow_tilt(brows));
    }
    println!();
    println!("Eyes drawn open:");
    for eyes in Eyes::ALL {
        println!("  {:<9} {}", eyes, eyes.is_open());
    }

    Ok(())
}
