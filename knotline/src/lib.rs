pub mod model;
pub mod polyline;
pub mod knot;
pub mod geometry {
    pub mod smooth;
    pub mod tolerance;
}

use knot::Knot;
use model::{Bounds, Vec2};

/// Ordered collection of animated curves, one of which is active and
/// receives edit commands. Owns its knots exclusively; the frame loop
/// drives it with one [`Scene::tick`] per frame and the renderer reads
/// the per-knot point data back out afterwards.
pub struct Scene {
    knots: Vec<Knot>,
    active: usize,
    ver: u64,
}

impl Scene {
    /// A scene always holds at least one knot, empty to begin with.
    pub fn new(initial_steps: u32) -> Self {
        Scene {
            knots: vec![Knot::new(initial_steps)],
            active: 0,
            ver: 1,
        }
    }

    fn bump(&mut self) {
        self.ver += 1;
    }

    /// Monotonic state version; bumps on every mutation so a renderer
    /// can skip re-deriving curves for unchanged frames.
    pub fn version(&self) -> u64 {
        self.ver
    }

    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn knot(&self, idx: usize) -> Option<&Knot> {
        self.knots.get(idx)
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub fn active_knot(&self) -> &Knot {
        &self.knots[self.active]
    }

    pub fn active_knot_mut(&mut self) -> &mut Knot {
        self.bump();
        &mut self.knots[self.active]
    }

    /// Append a fresh empty knot and make it the active one.
    pub fn add_knot(&mut self, initial_steps: u32) {
        self.knots.push(Knot::new(initial_steps));
        self.active = self.knots.len() - 1;
        self.bump();
    }

    /// Cycle the active knot forward, wrapping to the first.
    pub fn select_next(&mut self) {
        self.active = (self.active + 1) % self.knots.len();
        self.bump();
    }

    /// Replace everything with a single fresh empty knot.
    pub fn reset(&mut self, initial_steps: u32) {
        self.knots = vec![Knot::new(initial_steps)];
        self.active = 0;
        self.bump();
    }

    /// Broadcast a velocity scale to every knot in the scene.
    pub fn change_speed_all(&mut self, k: f32) {
        for knot in &mut self.knots {
            knot.change_speed(k);
        }
        self.bump();
    }

    /// One frame of physics for every knot. Paused frames leave all
    /// state untouched. Derived curve data is not held here at all;
    /// the renderer recomputes it lazily from the control points.
    pub fn tick(&mut self, bounds: Bounds, paused: bool) {
        if paused {
            return;
        }
        for knot in &mut self.knots {
            knot.advance(bounds);
        }
        self.bump();
    }

    /// Append a vertex to the active knot.
    pub fn add_point(&mut self, point: Vec2, speed: Vec2) {
        self.active_knot_mut().add_point(point, speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scene_has_one_empty_active_knot() {
        let scene = Scene::new(35);
        assert_eq!(scene.knot_count(), 1);
        assert_eq!(scene.active_index(), 0);
        assert_eq!(scene.active_knot().point_count(), 0);
        assert_eq!(scene.active_knot().steps(), 35);
    }

    #[test]
    fn add_knot_becomes_active() {
        let mut scene = Scene::new(35);
        scene.add_knot(35);
        scene.add_knot(35);
        assert_eq!(scene.knot_count(), 3);
        assert_eq!(scene.active_index(), 2);
    }

    #[test]
    fn select_next_wraps() {
        let mut scene = Scene::new(35);
        scene.add_knot(35);
        assert_eq!(scene.active_index(), 1);
        scene.select_next();
        assert_eq!(scene.active_index(), 0);
        scene.select_next();
        assert_eq!(scene.active_index(), 1);
    }

    #[test]
    fn reset_collapses_to_single_empty_knot() {
        let mut scene = Scene::new(35);
        scene.add_point(Vec2::new(1.0, 1.0), Vec2::ZERO);
        scene.add_knot(20);
        scene.reset(35);
        assert_eq!(scene.knot_count(), 1);
        assert_eq!(scene.active_index(), 0);
        assert_eq!(scene.active_knot().point_count(), 0);
    }

    #[test]
    fn paused_tick_moves_nothing() {
        let mut scene = Scene::new(35);
        scene.add_point(Vec2::new(10.0, 10.0), Vec2::new(1.0, 1.0));
        scene.tick(Bounds::default(), true);
        assert_eq!(scene.active_knot().control_points()[0], Vec2::new(10.0, 10.0));
        scene.tick(Bounds::default(), false);
        assert_eq!(scene.active_knot().control_points()[0], Vec2::new(11.0, 11.0));
    }

    #[test]
    fn version_bumps_on_mutation() {
        let mut scene = Scene::new(35);
        let v0 = scene.version();
        scene.add_point(Vec2::ZERO, Vec2::ZERO);
        assert!(scene.version() > v0);
        let v1 = scene.version();
        scene.tick(Bounds::default(), true);
        assert_eq!(scene.version(), v1, "paused tick is not a mutation");
    }
}
