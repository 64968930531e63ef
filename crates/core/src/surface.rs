//! The 2D immediate-mode drawing interface shapes render into.
//!
//! The call set mirrors an HTML canvas 2D context: paths are built with
//! `begin_path`/`move_to`/`line_to`/`arc` and painted with `fill`, which
//! closes every subpath and applies the non-zero winding rule.

use crate::color::Srgb;
use serde::{Deserialize, Serialize};

/// A drawing surface of known pixel size.
///
/// Implementations clip anything drawn outside `[0, width) x [0, height)`.
pub trait Surface {
    /// Surface width in device pixels.
    fn width(&self) -> usize;

    /// Surface height in device pixels.
    fn height(&self) -> usize;

    /// Fills an axis-aligned rectangle with `color`.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Srgb);

    /// Discards the current path and starts an empty one.
    fn begin_path(&mut self);

    /// Adds a clockwise arc around `(cx, cy)` from `start` to `end` radians.
    ///
    /// If a subpath is open, a straight segment first joins its current
    /// point to the arc's start.
    fn arc(&mut self, cx: f64, cy: f64, r: f64, start: f64, end: f64);

    /// Starts a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a straight segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Sets the color used by the next `fill`.
    fn set_fill_color(&mut self, color: Srgb);

    /// Fills the current path with the current fill color.
    fn fill(&mut self);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Srgb,
    },
    BeginPath,
    Arc {
        cx: f64,
        cy: f64,
        r: f64,
        start: f64,
        end: f64,
    },
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    SetFillColor {
        color: Srgb,
    },
    Fill,
}

/// A surface that records every call instead of drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder {
    width: usize,
    height: usize,
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Calls recorded so far, in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Consumes the recorder, returning its calls.
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl Surface for Recorder {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Srgb) {
        self.ops.push(DrawOp::FillRect { x, y, w, h, color });
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, start: f64, end: f64) {
        self.ops.push(DrawOp::Arc {
            cx,
            cy,
            r,
            start,
            end,
        });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn set_fill_color(&mut self, color: Srgb) {
        self.ops.push(DrawOp::SetFillColor { color });
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }
}
