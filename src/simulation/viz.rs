//! Display normalization boundary.
//!
//! The engine's only visualization obligation is the per-cell
//! interpolation parameter; ramp anchors and color blending belong to
//! the consumer.

/// Interpolation parameter `t = clamp(s / s_max, 0, 1)` for one cell.
///
/// A zero or negative `s_max` (ordered or empty population) yields 0
/// everywhere instead of a division fault.
pub fn ramp_parameter(s: f64, s_max: f64) -> f32 {
    if s_max <= 0.0 {
        return 0.0;
    }
    (s / s_max).clamp(0.0, 1.0) as f32
}
