//! Recursive interpolation over a short control-point list.
//!
//! These helpers turn one control triple (two edge midpoints plus the
//! vertex between them) into a run of dense curve points. The smoothing
//! pass in `knot` feeds one triple per control vertex.

use crate::model::Vec2;

/// Blend an arbitrary-length point list at parameter t ∈ [0, 1].
/// `points` must be non-empty.
///
/// A single point is returned as-is. Otherwise the last point is mixed
/// with the blend of all-but-last: `points[deg]·t + blend(rest)·(1−t)`.
/// The list length strictly decreases, so the recursion always
/// terminates; depth equals the list length (3 for the triples used
/// here).
///
/// For `[a, b, c]` this evaluates to `a(1−t)² + b·t(1−t) + c·t`, which
/// starts at `a`, ends at `c` and is pulled toward `b` in between. The
/// weights stay affine (they sum to 1) but differ from the textbook
/// quadratic Bézier; the curve shape is the point of this engine, so
/// the blend is kept exactly as observed.
pub fn blend(points: &[Vec2], t: f32) -> Vec2 {
    let deg = points.len() - 1;
    if deg == 0 {
        return points[0];
    }
    points[deg] * t + blend(&points[..deg], t) * (1.0 - t)
}

/// Sample `steps` points of the blend at `t = i/steps` for `i in
/// 0..steps`. The interval is half-open on purpose: t never reaches
/// 1.0, so consecutive segments of a closed curve do not duplicate
/// their shared boundary point.
pub fn sample(points: &[Vec2], steps: u32) -> Vec<Vec2> {
    let alpha = 1.0 / steps as f32;
    let mut res = Vec::with_capacity(steps as usize);
    for i in 0..steps {
        res.push(blend(points, i as f32 * alpha));
    }
    res
}
