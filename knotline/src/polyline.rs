//! Control polygon with per-vertex velocity.

use crate::model::{Bounds, Vec2};

/// Ordered closed loop of control vertices. `points[i]` moves with
/// `speeds[i]`; the two vectors always have the same length.
#[derive(Clone, Debug, Default)]
pub struct Polyline {
    points: Vec<Vec2>,
    speeds: Vec<Vec2>,
}

impl Polyline {
    pub fn new() -> Self {
        Polyline {
            points: Vec::new(),
            speeds: Vec::new(),
        }
    }

    pub fn add_point(&mut self, point: Vec2, speed: Vec2) {
        self.points.push(point);
        self.speeds.push(speed);
    }

    /// Remove the last vertex. Silent no-op on an empty polygon.
    pub fn delete_last_point(&mut self) {
        self.points.pop();
        self.speeds.pop();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn speeds(&self) -> &[Vec2] {
        &self.speeds
    }

    /// Scale every vertex velocity in place. k > 1 speeds the line up,
    /// 0 < k < 1 slows it down.
    pub fn change_speed(&mut self, k: f32) {
        for s in &mut self.speeds {
            *s = *s * k;
        }
    }

    /// One physics tick: move each vertex by its velocity, then negate
    /// a velocity axis whose new coordinate left the bounds. The
    /// position is deliberately not clamped back inside; a vertex may
    /// overshoot the edge by up to one step and gets pulled back on the
    /// next tick (soft bounce, visible as a brief off-screen excursion).
    pub fn advance(&mut self, bounds: Bounds) {
        for (p, s) in self.points.iter_mut().zip(self.speeds.iter_mut()) {
            *p = *p + *s;
            if p.x < 0.0 || p.x > bounds.width {
                s.x = -s.x;
            }
            if p.y < 0.0 || p.y > bounds.height {
                s.y = -s.y;
            }
        }
    }
}
