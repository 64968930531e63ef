//! Polyline path storage with canvas-style arc flattening.

use glam::DVec2;
use std::f64::consts::TAU;

/// Maximum distance between a flattened arc chord and the true circle, in pixels.
const ARC_TOLERANCE: f64 = 0.25;
/// Upper bound on segments per arc.
const MAX_ARC_SEGMENTS: usize = 1024;

/// Clockwise sweep from `start` to `end`, in `[0, TAU]`.
///
/// A difference of a full turn or more draws the whole circle, as a 2D
/// canvas does; anything else wraps into `[0, TAU)`.
pub fn arc_sweep(start: f64, end: f64) -> f64 {
    let delta = end - start;
    if delta >= TAU {
        TAU
    } else {
        delta.rem_euclid(TAU)
    }
}

/// Number of straight segments needed to keep an arc within tolerance.
pub fn arc_segments(radius: f64, sweep: f64) -> usize {
    if radius <= ARC_TOLERANCE || sweep <= 0.0 {
        return 1;
    }
    let step = 2.0 * (1.0 - ARC_TOLERANCE / radius).acos();
    ((sweep / step).ceil() as usize).clamp(1, MAX_ARC_SEGMENTS)
}

/// A set of polyline subpaths. Each subpath is implicitly closed when filled.
#[derive(Debug, Clone, Default)]
pub struct Path {
    subpaths: Vec<Vec<DVec2>>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.subpaths.clear();
    }

    pub fn subpaths(&self) -> &[Vec<DVec2>] {
        &self.subpaths
    }

    pub fn move_to(&mut self, p: DVec2) {
        self.subpaths.push(vec![p]);
    }

    /// Appends a point; with no open subpath this starts one instead.
    pub fn line_to(&mut self, p: DVec2) {
        match self.subpaths.last_mut() {
            Some(sub) => sub.push(p),
            None => self.move_to(p),
        }
    }

    /// Appends a flattened clockwise arc, joined to the open subpath if any.
    pub fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64) {
        let sweep = arc_sweep(start, end);
        let segments = arc_segments(radius, sweep);
        let at = |angle: f64| center + DVec2::new(angle.cos(), angle.sin()) * radius;
        self.line_to(at(start));
        for i in 1..=segments {
            self.line_to(at(start + sweep * i as f64 / segments as f64));
        }
    }

    /// Non-horizontal edges of every subpath, each closed back to its start.
    pub fn edges(&self) -> Vec<(DVec2, DVec2)> {
        self.subpaths
            .iter()
            .filter(|sub| sub.len() > 1)
            .flat_map(|sub| {
                sub.iter()
                    .zip(sub.iter().cycle().skip(1))
                    .map(|(&a, &b)| (a, b))
            })
            .filter(|(a, b)| a.y != b.y)
            .collect()
    }
}
