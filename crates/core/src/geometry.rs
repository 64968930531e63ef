//! Cells, corner orientations, and the corner geometry shared by arcs and triangles.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// A point in device pixels. `y` grows downward.
pub type Point = glam::DVec2;

/// One grid square: top-left corner plus side length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub origin: Point,
    pub side: f64,
}

impl Cell {
    pub fn new(origin: Point, side: f64) -> Self {
        Self { origin, side }
    }

    /// Center of the square.
    pub fn center(&self) -> Point {
        self.origin + Point::splat(self.side / 2.0)
    }

    /// The corner named by `orientation`.
    pub fn corner(&self, orientation: Orientation) -> Point {
        let Point { x, y } = self.origin;
        let s = self.side;
        match orientation {
            Orientation::TopLeft => Point::new(x, y),
            Orientation::TopRight => Point::new(x + s, y),
            Orientation::BottomLeft => Point::new(x, y + s),
            Orientation::BottomRight => Point::new(x + s, y + s),
        }
    }
}

/// Which corner of a cell holds a shape's defining vertex.
///
/// For a triangle that is the right-angle vertex; for an arc it is the
/// center of the quarter circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Orientation {
    /// All orientations, in the order the position iterator draws from.
    pub const ALL: [Orientation; 4] = [
        Orientation::TopLeft,
        Orientation::TopRight,
        Orientation::BottomLeft,
        Orientation::BottomRight,
    ];

    /// Corners of the right triangle inscribed in `cell` with its right angle here.
    ///
    /// Returns `[right_angle, vertical_neighbour, horizontal_neighbour]`: the
    /// second vertex shares the right-angle vertex's x, the third shares its y.
    pub fn triangle_corners(self, cell: &Cell) -> [Point; 3] {
        let Point { x, y } = cell.origin;
        let s = cell.side;
        match self {
            Orientation::TopLeft => [
                Point::new(x, y),
                Point::new(x, y + s),
                Point::new(x + s, y),
            ],
            Orientation::TopRight => [
                Point::new(x + s, y),
                Point::new(x + s, y + s),
                Point::new(x, y),
            ],
            Orientation::BottomLeft => [
                Point::new(x, y + s),
                Point::new(x, y),
                Point::new(x + s, y + s),
            ],
            Orientation::BottomRight => [
                Point::new(x + s, y + s),
                Point::new(x + s, y),
                Point::new(x, y + s),
            ],
        }
    }

    /// Start and end angle of the quarter arc centered on this corner.
    ///
    /// Radians, 0 along +x, increasing clockwise on screen. The span always
    /// sweeps across the inside of the cell.
    pub fn arc_span(self) -> (f64, f64) {
        match self {
            Orientation::TopLeft => (0.0, FRAC_PI_2),
            Orientation::TopRight => (FRAC_PI_2, PI),
            Orientation::BottomRight => (PI, 1.5 * PI),
            Orientation::BottomLeft => (1.5 * PI, TAU),
        }
    }
}
