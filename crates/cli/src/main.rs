#![deny(unsafe_code)]
//! CLI binary for the noise flow field renderer.
//!
//! Subcommands:
//! - `render`: reset a compositor, step it to completion, write a PNG
//! - `params`: print the parameter schema
//! - `list`: print palettes and noise backends

mod error;
mod stats;

use clap::{Parser, Subcommand};
use error::CliError;
use flowfield_core::engine::run_to_completion;
use flowfield_core::{Engine, NoiseKind, Palette, Xorshift64};
use flowfield_engine::config::RANDOM_PALETTE;
use flowfield_engine::{Compositor, FlowfieldConfig};
use flowfield_raster::snapshot::write_png;
use flowfield_raster::PixmapSurface;
use log::{info, warn};
use serde_json::Value;
use stats::LogFrameStats;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "flowfield", about = "Noise flow field stroke renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a full composition and write a PNG snapshot.
    Render {
        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 1000)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 750)]
        height: usize,

        /// Pixel density: the composition is drawn on a canvas of
        /// `width * scale` by `height * scale` pixels.
        #[arg(long, default_value_t = 1.0)]
        scale: f64,

        /// Seed for both the noise field and stroke placement.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Noise backend (simplex, perlin).
        #[arg(long, default_value = "simplex")]
        noise: String,

        /// Composition parameters as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Palette name, or "random". Overrides `palette` in --params.
        #[arg(short, long)]
        palette: Option<String>,

        /// Upper bound on step calls before giving up on completion.
        #[arg(long, default_value_t = 10_000)]
        max_frames: usize,

        /// Time every step and report the totals.
        #[arg(long)]
        stats: bool,

        /// Output file path.
        #[arg(short, long, default_value = "flowfield.png")]
        output: PathBuf,
    },
    /// Print the parameter schema.
    Params,
    /// List available palettes and noise backends.
    List,
}

/// Parses `--params` and applies the `--palette` override.
fn build_config(params: &str, palette: Option<String>) -> Result<FlowfieldConfig, CliError> {
    let mut params: Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let obj = params
        .as_object_mut()
        .ok_or_else(|| CliError::Input("--params must be a JSON object".into()))?;
    if let Some(name) = palette {
        if name != RANDOM_PALETTE && !Palette::exists(&name) {
            return Err(CliError::Input(format!(
                "unknown palette '{name}' (try `flowfield list`)"
            )));
        }
        obj.insert("palette".into(), Value::String(name));
    }
    let config = FlowfieldConfig::from_json(&params)?;
    config.validate()?;
    Ok(config)
}

/// Physical canvas side for a logical side at the given pixel density.
fn scaled_side(side: usize, scale: f64) -> Result<usize, CliError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(CliError::Input(format!("--scale must be positive, got {scale}")));
    }
    let physical = (side as f64 * scale).round();
    if physical < 1.0 || physical > u32::MAX as f64 {
        return Err(CliError::Input(format!(
            "{side}px at scale {scale} gives an unusable canvas side"
        )));
    }
    Ok(physical as usize)
}

#[allow(clippy::too_many_arguments)]
fn render(
    json: bool,
    logical_width: usize,
    logical_height: usize,
    scale: f64,
    seed: u64,
    noise: &str,
    config: FlowfieldConfig,
    max_frames: usize,
    with_stats: bool,
    output: PathBuf,
) -> Result<(), CliError> {
    let width = scaled_side(logical_width, scale)?;
    let height = scaled_side(logical_height, scale)?;
    let noise_kind = NoiseKind::from_name(noise)?;
    if (width, height) != (logical_width, logical_height) {
        info!("canvas {logical_width}x{logical_height} drawn at {width}x{height}");
    }
    let mut compositor = Compositor::new(
        PixmapSurface::new(width, height)?,
        noise_kind.build(seed),
        Xorshift64::new(seed),
        config,
    )?;
    let totals = if with_stats {
        let recorder = LogFrameStats::default();
        let totals = recorder.totals();
        compositor = compositor.with_stats(Box::new(recorder));
        Some(totals)
    } else {
        None
    };

    compositor.reset(width, height)?;
    let frames = run_to_completion(&mut compositor, max_frames);
    let complete = compositor.is_complete();
    let strokes = compositor.strokes_drawn();
    let params = compositor.params();
    if !complete {
        warn!("stopped after {frames} frames with {strokes} strokes drawn");
    }

    let surface = compositor.into_surface();
    write_png(&surface, &output)?;

    let totals = totals.map(|t| *t.borrow());
    if json {
        let mut info = serde_json::json!({
            "width": width,
            "height": height,
            "scale": scale,
            "seed": seed,
            "noise": noise,
            "frames": frames,
            "strokes": strokes,
            "complete": complete,
            "params": params,
            "output": output.display().to_string(),
        });
        if let Some(t) = totals {
            info["stats"] = serde_json::json!({
                "frames": t.frames,
                "mean_ms": t.mean_ms(),
                "slowest_ms": t.slowest.as_secs_f64() * 1000.0,
            });
        }
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        if let Some(t) = totals {
            info!(
                "{} frames, mean {:.3} ms, slowest {:.3} ms",
                t.frames,
                t.mean_ms(),
                t.slowest.as_secs_f64() * 1000.0
            );
        }
        eprintln!(
            "rendered {strokes} strokes ({width}x{height}, {frames} frames, seed {seed}) -> {}",
            output.display()
        );
    }
    Ok(())
}

fn print_params(json: bool) -> Result<(), CliError> {
    let schema = FlowfieldConfig::param_schema();
    if json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }
    if let Some(entries) = schema.as_object() {
        for (name, entry) in entries {
            let default = entry.get("default").map(Value::to_string).unwrap_or_default();
            let description = entry
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default();
            println!("  {name:<24} {default:<10} {description}");
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let palettes = Palette::list_names();
            let noises = NoiseKind::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "palettes": palettes,
                    "noise": noises,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
                println!("Noise:");
                println!("  {}", noises.join(", "));
            }
        }
        Command::Params => print_params(cli.json)?,
        Command::Render {
            width,
            height,
            scale,
            seed,
            noise,
            params,
            palette,
            max_frames,
            stats,
            output,
        } => {
            let config = build_config(&params, palette)?;
            render(
                cli.json, width, height, scale, seed, &noise, config, max_frames, stats,
                output,
            )?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

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
