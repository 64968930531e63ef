//! The three cell renderers: circle, quarter arc, and right triangle.
//!
//! Shapes are fill-only. Each one emits a single closed path per cell and
//! paints it with the supplied color.

use crate::color::Srgb;
use crate::geometry::{Cell, Orientation};
use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A shape that can occupy one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Quarter disc of radius `side` centered on a corner.
    Arc,
    /// Disc inscribed in the cell.
    Circle,
    /// Right triangle with the right angle on a corner.
    Triangle,
}

impl ShapeKind {
    /// All kinds, in the order the shape iterator draws from.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Arc, ShapeKind::Circle, ShapeKind::Triangle];

    /// Whether rendering this kind consumes an orientation.
    pub fn needs_orientation(self) -> bool {
        !matches!(self, ShapeKind::Circle)
    }

    /// Emits this shape for `cell` as one filled path.
    ///
    /// `orientation` is ignored by circles; arcs and triangles fall back to
    /// [`Orientation::TopLeft`] when it is `None`.
    pub fn render<S: Surface + ?Sized>(
        self,
        surface: &mut S,
        cell: &Cell,
        color: Srgb,
        orientation: Option<Orientation>,
    ) {
        let orientation = orientation.unwrap_or(Orientation::TopLeft);
        surface.begin_path();
        match self {
            ShapeKind::Circle => {
                let center = cell.center();
                surface.arc(center.x, center.y, cell.side / 2.0, 0.0, TAU);
            }
            ShapeKind::Arc => {
                let [pivot, vertical, horizontal] = orientation.triangle_corners(cell);
                let (start, end) = orientation.arc_span();
                surface.arc(pivot.x, pivot.y, cell.side, start, end);
                surface.move_to(vertical.x, vertical.y);
                surface.line_to(pivot.x, pivot.y);
                surface.line_to(horizontal.x, horizontal.y);
            }
            ShapeKind::Triangle => {
                let [a, b, c] = orientation.triangle_corners(cell);
                surface.move_to(a.x, a.y);
                surface.line_to(b.x, b.y);
                surface.line_to(c.x, c.y);
                surface.line_to(a.x, a.y);
            }
        }
        surface.set_fill_color(color);
        surface.fill();
    }
}
