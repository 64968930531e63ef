#![deny(unsafe_code)]
//! CLI binary for the tessella tiling generator.
//!
//! Subcommands:
//! - `render`: draw one generation, write PNG, SVG or a draw-op dump
//! - `list`: print built-in palettes and output formats
//! - `seeds`: print a fresh random seed set

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use tessella_core::params::unknown_keys;
use tessella_core::{Artwork, Palette, SeedSet, TilingConfig};
use tessella_raster::OutputFormat;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tessella", about = "Procedural tiling generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log generation details to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw one generation and write it to a file.
    Render {
        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 640)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 480)]
        height: usize,

        /// Cell side length in pixels.
        #[arg(long, default_value_t = TilingConfig::DEFAULT_SIDE)]
        side: f64,

        /// Spacing between cells in pixels.
        #[arg(long, default_value_t = TilingConfig::DEFAULT_GUTTER)]
        gutter: f64,

        /// Master seed; the five stream seeds are derived from it.
        #[arg(long, conflicts_with = "seeds")]
        seed: Option<u32>,

        /// Full seed set as JSON, as printed by a previous render.
        #[arg(long)]
        seeds: Option<String>,

        /// Restrict the palette choice to one built-in palette.
        #[arg(short, long, conflicts_with = "palettes")]
        palette: Option<String>,

        /// JSON file holding a list of four-color palettes.
        #[arg(long)]
        palettes: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Output format (png, svg, ops); inferred from the extension if omitted.
        #[arg(short, long)]
        format: Option<String>,

        /// Tiling parameters as a JSON string (width, height, side, gutter).
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List built-in palettes and output formats.
    List,
    /// Print a fresh random seed set.
    Seeds,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_seeds(seed: Option<u32>, seeds: Option<&str>) -> Result<SeedSet, CliError> {
    match (seed, seeds) {
        (_, Some(json)) => serde_json::from_str(json)
            .map_err(|e| CliError::Input(format!("invalid --seeds JSON: {e}"))),
        (Some(master), None) => Ok(SeedSet::from_master(master)),
        (None, None) => Ok(SeedSet::random()),
    }
}

fn resolve_palettes(name: Option<&str>, file: Option<&Path>) -> Result<Vec<Palette>, CliError> {
    match (name, file) {
        (_, Some(path)) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            Ok(Palette::list_from_json(&text)?)
        }
        (Some(name), None) => Ok(vec![Palette::from_name(name)?]),
        (None, None) => Ok(Palette::builtin()),
    }
}

fn resolve_format(name: Option<&str>, output: &Path) -> Result<OutputFormat, CliError> {
    let format = match name {
        Some(name) => OutputFormat::from_name(name)?,
        None => OutputFormat::from_path(output)?,
    };
    Ok(format)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let palettes = Palette::list_names();
            let formats = OutputFormat::list_formats();
            if cli.json {
                let info = serde_json::json!({
                    "palettes": palettes,
                    "formats": formats,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
                println!("Formats:");
                for name in formats {
                    println!("  {name}");
                }
            }
        }
        Command::Seeds => {
            let seeds = SeedSet::random();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&seeds)?);
            } else {
                println!("{}", serde_json::to_string(&seeds)?);
            }
        }
        Command::Render {
            width,
            height,
            side,
            gutter,
            seed,
            seeds,
            palette,
            palettes,
            output,
            format,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            for key in unknown_keys(&params, &TilingConfig::PARAM_KEYS) {
                warn!(key = %key, "ignoring unknown --params key");
            }

            let config = TilingConfig::new(width, height)
                .with_side(side)
                .with_gutter(gutter)
                .with_params(&params);
            let seeds = resolve_seeds(seed, seeds.as_deref())?;
            let palettes = resolve_palettes(palette.as_deref(), palettes.as_deref())?;
            let format = resolve_format(format.as_deref(), &output)?;
            debug!(?config, ?seeds, palettes = palettes.len(), "render requested");

            let artwork = Artwork::new(config, palettes, seeds)?;
            let report = tessella_raster::render_to_path(&artwork, format, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "output": output.display().to_string(),
                    "format": format.name(),
                    "report": report,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {}x{} cells ({}x{} px, palette {}) -> {}",
                    report.columns,
                    report.rows,
                    config.width,
                    config.height,
                    report.palette_index,
                    output.display()
                );
                println!("{}", serde_json::to_string(&report.seeds)?);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
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
