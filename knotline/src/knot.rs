//! A control polygon plus the smoothing resolution that turns it into a
//! dense closed curve.

use crate::geometry::smooth;
use crate::model::{Bounds, Vec2};
use crate::polyline::Polyline;

/// One animated smoothed curve. Wraps a [`Polyline`] (the moving
/// control skeleton) with a `steps` resolution: how many interpolated
/// points each curve segment contributes. The dense curve itself is
/// never stored; [`Knot::smoothed`] recomputes it from the current
/// control points every time it is asked.
#[derive(Clone, Debug)]
pub struct Knot {
    polyline: Polyline,
    steps: u32,
}

impl Knot {
    /// `steps` below 1 is clamped; a segment always yields at least one
    /// point.
    pub fn new(steps: u32) -> Self {
        Knot {
            polyline: Polyline::new(),
            steps: steps.max(1),
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn more_steps(&mut self) {
        self.steps += 1;
    }

    /// Floors at 1; a no-op rather than an error below that.
    pub fn fewer_steps(&mut self) {
        if self.steps > 1 {
            self.steps -= 1;
        }
    }

    pub fn add_point(&mut self, point: Vec2, speed: Vec2) {
        self.polyline.add_point(point, speed);
    }

    pub fn delete_last_point(&mut self) {
        self.polyline.delete_last_point();
    }

    pub fn change_speed(&mut self, k: f32) {
        self.polyline.change_speed(k);
    }

    pub fn advance(&mut self, bounds: Bounds) {
        self.polyline.advance(bounds);
    }

    pub fn control_points(&self) -> &[Vec2] {
        self.polyline.points()
    }

    pub fn speeds(&self) -> &[Vec2] {
        self.polyline.speeds()
    }

    pub fn point_count(&self) -> usize {
        self.polyline.len()
    }

    /// Derive the dense closed curve from the current control points.
    ///
    /// Fewer than 3 points is not drawable yet and yields an empty Vec.
    /// Otherwise each control vertex is replaced by a curve segment
    /// through the midpoints of its two adjacent edges, with the vertex
    /// itself as the middle of the control triple. Indices wrap around
    /// the closed loop, so the result is a seamless loop of exactly
    /// `n * steps` points. Pure function of current state: calling it
    /// twice without mutation returns identical sequences.
    pub fn smoothed(&self) -> Vec<Vec2> {
        let pts = self.polyline.points();
        let n = pts.len();
        if n < 3 {
            return Vec::new();
        }
        let mut res = Vec::with_capacity(n * self.steps as usize);
        for i in 0..n {
            // Window (i-2, i-1, i) with wraparound; offsets stay
            // non-negative so the modulo never sees a negative index.
            let p0 = pts[(i + n - 2) % n];
            let p1 = pts[(i + n - 1) % n];
            let p2 = pts[i];
            let triple = [Vec2::midpoint(p0, p1), p1, Vec2::midpoint(p1, p2)];
            res.extend(smooth::sample(&triple, self.steps));
        }
        res
    }
}
