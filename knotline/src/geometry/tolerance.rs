// Centralized tolerances and helpers for float comparisons

pub const EPS_POS: f32 = 1e-4; // point coincidence threshold (px)

#[inline]
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
