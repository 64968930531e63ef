//! Vector output: a [`Surface`] that writes SVG elements.
//!
//! Arcs are emitted as exact SVG elliptical-arc commands, so the file stays
//! resolution independent. The SVG viewport clips overhanging cells.

use crate::path::arc_sweep;
use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;
use std::path::Path as FsPath;
use tessella_core::{Srgb, Surface, TilingError};

/// Accumulates SVG markup for everything drawn onto it.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: usize,
    height: usize,
    body: String,
    path_data: String,
    subpath_open: bool,
    fill_color: Srgb,
}

impl SvgSurface {
    /// Creates an empty SVG surface.
    ///
    /// Returns `TilingError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, TilingError> {
        if width == 0 || height == 0 {
            return Err(TilingError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            body: String::new(),
            path_data: String::new(),
            subpath_open: false,
            fill_color: Srgb::BLACK,
        })
    }

    /// The complete SVG document.
    pub fn to_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    /// Writes the document to `path`.
    ///
    /// Returns `TilingError::Io` on write failure.
    pub fn write(&self, path: &FsPath) -> Result<(), TilingError> {
        std::fs::write(path, self.to_svg()).map_err(|e| TilingError::Io(e.to_string()))
    }

    fn command(&mut self, cmd: char, x: f64, y: f64) {
        // Writing to a String cannot fail.
        let _ = write!(self.path_data, "{cmd}{x} {y} ");
    }

    fn arc_segment(&mut self, r: f64, sweep: f64, x: f64, y: f64) {
        let large = u8::from(sweep > PI);
        let _ = write!(self.path_data, "A{r} {r} 0 {large} 1 {x} {y} ");
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Srgb) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            x.min(x + w),
            y.min(y + h),
            w.abs(),
            h.abs(),
            color.to_hex()
        );
    }

    fn begin_path(&mut self) {
        self.path_data.clear();
        self.subpath_open = false;
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, start: f64, end: f64) {
        let sweep = arc_sweep(start, end);
        let at = |angle: f64| (cx + r * angle.cos(), cy + r * angle.sin());
        let (sx, sy) = at(start);
        self.line_to(sx, sy);
        if sweep >= TAU {
            // A single SVG arc cannot describe a full circle.
            let (mx, my) = at(start + PI);
            self.arc_segment(r, PI, mx, my);
            self.arc_segment(r, PI, sx, sy);
        } else {
            let (ex, ey) = at(start + sweep);
            self.arc_segment(r, sweep, ex, ey);
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.command('M', x, y);
        self.subpath_open = true;
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if self.subpath_open {
            self.command('L', x, y);
        } else {
            self.move_to(x, y);
        }
    }

    fn set_fill_color(&mut self, color: Srgb) {
        self.fill_color = color;
    }

    fn fill(&mut self) {
        if self.path_data.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            "<path d=\"{}Z\" fill=\"{}\" fill-rule=\"nonzero\"/>",
            self.path_data.replace(" M", " ZM"),
            self.fill_color.to_hex()
        );
    }
}
