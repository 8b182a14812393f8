#![deny(unsafe_code)]
//! CLI binary for huewheel.
//!
//! `huewheel <N> <S> <L>` prints N colors evenly spaced around the HSL hue
//! circle, one `r, g, b` line each. `--plot <PATH>` also writes the colors
//! as a PNG color wheel.

mod error;

use clap::Parser;
use error::CliError;
use huewheel_core::{hue_degrees, Rgb, SpreadParams};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "huewheel",
    about = "Generate colors evenly spaced around the HSL color wheel",
    allow_negative_numbers = true
)]
struct Cli {
    /// Number of colors to generate.
    #[arg(value_name = "N")]
    count: usize,

    /// Saturation of the colors, between 0.0 and 1.0.
    #[arg(value_name = "S")]
    saturation: f64,

    /// Lightness of the colors, between 0.0 and 1.0.
    #[arg(value_name = "L")]
    lightness: f64,

    /// Print `#rrggbb` instead of decimal components.
    #[arg(long)]
    hex: bool,

    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Also write the colors as a PNG color wheel to this path.
    #[arg(short, long, value_name = "PATH")]
    plot: Option<PathBuf>,

    /// Edge length of the plot in pixels (at most 8192).
    #[arg(long, default_value_t = 512)]
    size: usize,
}

/// One text line per color.
fn format_lines(colors: &[Rgb], hex: bool) -> Vec<String> {
    colors
        .iter()
        .map(|c| if hex { c.to_hex() } else { c.to_string() })
        .collect()
}

/// JSON document describing the inputs and every generated color.
fn json_report(params: &SpreadParams, colors: &[Rgb]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = colors
        .iter()
        .enumerate()
        .map(|(i, c)| {
            serde_json::json!({
                "hue": hue_degrees(i, colors.len()),
                "r": c.r,
                "g": c.g,
                "b": c.b,
                "hex": c.to_hex(),
            })
        })
        .collect();
    serde_json::json!({
        "count": params.count,
        "saturation": params.saturation,
        "lightness": params.lightness,
        "colors": entries,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    let params = SpreadParams::new(cli.count, cli.saturation, cli.lightness);
    debug!(?params, "generating colors");
    let colors = params.generate()?;
    if cli.plot.is_some() {
        huewheel_render::check_size(cli.size)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        let report = json_report(&params, &colors);
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        for line in format_lines(&colors, cli.hex) {
            writeln!(out, "{line}")?;
        }
    }
    out.flush()?;

    if let Some(path) = cli.plot {
        huewheel_render::snapshot::write_png(&colors, cli.size, &path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
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
