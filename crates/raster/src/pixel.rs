//! CPU pixel canvas: rasterizes the [`Surface`] calls into an RGBA8 buffer.
//!
//! Filling samples each pixel at its center and uses the non-zero winding
//! rule over all subpaths of the current path. There is no anti-aliasing, so
//! output is exact and reproducible across platforms.

use crate::path::Path;
use glam::DVec2;
use tessella_core::{Srgb, Surface, TilingError};

/// An RGBA8 pixel buffer implementing [`Surface`].
///
/// Starts fully transparent. Anything drawn outside the buffer is clipped.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    path: Path,
    fill_color: Srgb,
}

impl PixelCanvas {
    /// Creates a transparent canvas.
    ///
    /// Returns `TilingError::InvalidDimensions` if either dimension is zero
    /// or the buffer size overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, TilingError> {
        if width == 0 || height == 0 {
            return Err(TilingError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(TilingError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
            path: Path::new(),
            fill_color: Srgb::BLACK,
        })
    }

    /// Read-only access to the row-major RGBA8 buffer.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the canvas, returning its RGBA8 buffer.
    pub fn into_rgba(self) -> Vec<u8> {
        self.pixels
    }

    /// The RGBA value at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        self.pixels
            .get(i..i + 4)
            .and_then(|p| <[u8; 4]>::try_from(p).ok())
    }

    /// Paints pixels of `row` whose centers fall in `[x0, x1)`.
    fn fill_span(&mut self, row: usize, x0: f64, x1: f64, rgba: [u8; 4]) {
        let Some((start, end)) = pixel_range(x0, x1, self.width) else {
            return;
        };
        let base = row * self.width * 4;
        for chunk in self.pixels[base + start * 4..base + end * 4].chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }
}

/// Pixel indices whose centers lie in `[lo, hi)`, clipped to `[0, limit)`.
fn pixel_range(lo: f64, hi: f64, limit: usize) -> Option<(usize, usize)> {
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().min(limit as f64);
    if start.is_nan() || end.is_nan() || start >= end {
        return None;
    }
    Some((start as usize, end as usize))
}

impl Surface for PixelCanvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Srgb) {
        let (x0, x1) = (x.min(x + w), x.max(x + w));
        let (y0, y1) = (y.min(y + h), y.max(y + h));
        let Some((top, bottom)) = pixel_range(y0, y1, self.height) else {
            return;
        };
        let rgba = color.to_rgba8();
        for row in top..bottom {
            self.fill_span(row, x0, x1, rgba);
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, start: f64, end: f64) {
        self.path.arc(DVec2::new(cx, cy), r, start, end);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(DVec2::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(DVec2::new(x, y));
    }

    fn set_fill_color(&mut self, color: Srgb) {
        self.fill_color = color;
    }

    fn fill(&mut self) {
        let edges = self.path.edges();
        if edges.is_empty() {
            return;
        }
        let (lo, hi) = edges.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
            (lo.min(a.y).min(b.y), hi.max(a.y).max(b.y))
        });
        let Some((top, bottom)) = pixel_range(lo, hi, self.height) else {
            return;
        };
        let rgba = self.fill_color.to_rgba8();
        let mut crossings: Vec<(f64, i32)> = Vec::new();

        for row in top..bottom {
            let sy = row as f64 + 0.5;
            crossings.clear();
            for (a, b) in &edges {
                let (upper, lower, dir) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
                if sy < upper.y || sy >= lower.y {
                    continue;
                }
                let t = (sy - upper.y) / (lower.y - upper.y);
                crossings.push((upper.x + t * (lower.x - upper.x), dir));
            }
            crossings.sort_by(|p, q| p.0.total_cmp(&q.0));

            let mut winding = 0;
            let mut span_start = 0.0;
            for &(x, dir) in &crossings {
                let was_inside = winding != 0;
                winding += dir;
                match (was_inside, winding != 0) {
                    (false, true) => span_start = x,
                    (true, false) => self.fill_span(row, span_start, x, rgba),
                    _ => {}
                }
            }
        }
    }
}
