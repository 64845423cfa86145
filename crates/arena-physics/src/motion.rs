//! Velocity decay.

use arena_core::Vec2;

/// Apply one step of friction decay, then stop the body entirely once **both**
/// components drop below `min_speed`.
///
/// The cutoff is componentwise, not magnitude-based: a body gliding along a
/// wall with one large and one tiny component keeps moving.
#[inline]
pub fn decay_velocity(velocity: Vec2, friction: f64, min_speed: f64) -> Vec2 {
    let v = velocity * friction;
    if v.x.abs() < min_speed && v.y.abs() < min_speed {
        Vec2::ZERO
    } else {
        v
    }
}
