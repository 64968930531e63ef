#![deny(unsafe_code)]
//! Core types for the tessella procedural tiling generator.
//!
//! Provides the `Mulberry32` deterministic stream, `RandomIterator`, the
//! five-axis `SeedSet`, `Srgb` colors and four-color `Palette`s, cell
//! geometry, the `Surface` drawing interface, the three `ShapeKind`s, the
//! tiling engine, and the `Artwork` regenerate/replay entry points.

pub mod artwork;
pub mod color;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod params;
pub mod prng;
pub mod random_iter;
pub mod seed;
pub mod shape;
pub mod surface;
pub mod tiling;

pub use artwork::Artwork;
pub use color::Srgb;
pub use error::TilingError;
pub use geometry::{Cell, Orientation, Point};
pub use palette::Palette;
pub use prng::Mulberry32;
pub use random_iter::RandomIterator;
pub use seed::SeedSet;
pub use shape::ShapeKind;
pub use surface::{DrawOp, Recorder, Surface};
pub use tiling::{compose, generate, Report, Tile, Tiler, TilingConfig};
