//! PNG encoding of a [`PixelCanvas`].
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! in-memory canvas or SVG output do not pull in the `image` crate.

use crate::pixel::PixelCanvas;
use std::path::Path;
use tessella_core::{Surface, TilingError};

/// Writes the canvas as an RGBA PNG image.
///
/// Returns `TilingError::InvalidDimensions` if the canvas dimensions overflow
/// `u32`, or `TilingError::Io` on write failure.
pub fn write_png(canvas: &PixelCanvas, path: &Path) -> Result<(), TilingError> {
    let w = u32::try_from(canvas.width()).map_err(|_| TilingError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| TilingError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, canvas.as_rgba().to_vec())
        .ok_or_else(|| TilingError::Io("RGBA buffer size mismatch".into()))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| TilingError::Io(e.to_string()))
}
