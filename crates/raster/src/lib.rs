#![deny(unsafe_code)]
//! Output surfaces for tessella artwork.
//!
//! `tessella-core` only knows the abstract [`Surface`](tessella_core::Surface) interface. This crate
//! provides the concrete targets: an RGBA [`PixelCanvas`] (with PNG encoding
//! behind the `png` feature), an [`SvgSurface`], and JSON dumps of the
//! recorded draw calls. Both the CLI and embedders use [`OutputFormat`] so the
//! format dispatch lives in one place.

pub mod path;
pub mod pixel;
pub mod svg;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::PixelCanvas;
pub use svg::SvgSurface;

use std::path::Path;
use tessella_core::{Artwork, Recorder, Report, TilingError};
use tracing::debug;

/// All recognized output format names.
const FORMAT_NAMES: &[&str] = &["png", "svg", "ops"];

/// Where a rendered artwork goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rasterized RGBA image.
    Png,
    /// Vector image with exact arcs.
    Svg,
    /// Pretty-printed JSON list of the draw calls.
    Ops,
}

impl OutputFormat {
    /// Looks up a format by name (case-insensitive).
    ///
    /// Returns `TilingError::UnknownFormat` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, TilingError> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "ops" | "json" => Ok(OutputFormat::Ops),
            _ => Err(TilingError::UnknownFormat(name.to_string())),
        }
    }

    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, TilingError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| TilingError::UnknownFormat(path.display().to_string()))?;
        Self::from_name(ext)
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Ops => "ops",
        }
    }

    /// Returns a slice of all recognized format names.
    pub fn list_formats() -> &'static [&'static str] {
        FORMAT_NAMES
    }
}

/// Draws `artwork` at its configured size and writes it to `path`.
///
/// Returns the generation report, `TilingError::UnknownFormat` for PNG when
/// the `png` feature is disabled, or `TilingError::Io` on write failure.
pub fn render_to_path(
    artwork: &Artwork,
    format: OutputFormat,
    path: &Path,
) -> Result<Report, TilingError> {
    let (width, height) = (artwork.config().width, artwork.config().height);
    debug!(format = format.name(), path = %path.display(), "rendering");
    match format {
        OutputFormat::Png => render_png(artwork, width, height, path),
        OutputFormat::Svg => {
            let mut surface = SvgSurface::new(width, height)?;
            let report = artwork.generate(&mut surface)?;
            surface.write(path)?;
            Ok(report)
        }
        OutputFormat::Ops => {
            let mut recorder = Recorder::new(width, height);
            let report = artwork.generate(&mut recorder)?;
            let json = serde_json::to_string_pretty(recorder.ops())
                .map_err(|e| TilingError::Io(e.to_string()))?;
            std::fs::write(path, json).map_err(|e| TilingError::Io(e.to_string()))?;
            Ok(report)
        }
    }
}

#[cfg(feature = "png")]
fn render_png(
    artwork: &Artwork,
    width: usize,
    height: usize,
    path: &Path,
) -> Result<Report, TilingError> {
    let mut canvas = PixelCanvas::new(width, height)?;
    let report = artwork.generate(&mut canvas)?;
    snapshot::write_png(&canvas, path)?;
    Ok(report)
}

#[cfg(not(feature = "png"))]
fn render_png(
    _artwork: &Artwork,
    _width: usize,
    _height: usize,
    _path: &Path,
) -> Result<Report, TilingError> {
    Err(TilingError::UnknownFormat("png".into()))
}
