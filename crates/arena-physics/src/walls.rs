//! Arena-boundary reflection.

use arena_core::Vec2;

/// Result of one wall-reflection step: the in-bounds position a body should
/// occupy next and its (possibly sign-flipped) velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WallOutcome {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Advance `position` by `velocity` and reflect off the arena walls.
///
/// The candidate position is `position + velocity`.  Each axis is handled
/// independently: a candidate at or beyond `0` or `size - diameter` flips
/// that velocity component's sign and is clamped back into range.  The
/// returned position is always inside `[0, size - diameter]` on both axes.
///
/// `arena` is the full `(width, height)`; the body's own extent is accounted
/// for via `diameter`.
pub fn reflect_walls(position: Vec2, velocity: Vec2, diameter: f64, arena: Vec2) -> WallOutcome {
    let max_x = arena.x - diameter;
    let max_y = arena.y - diameter;

    let mut candidate = position + velocity;
    let mut velocity = velocity;

    if candidate.x <= 0.0 || candidate.x >= max_x {
        velocity.x = -velocity.x;
        candidate.x = candidate.x.clamp(0.0, max_x);
    }
    if candidate.y <= 0.0 || candidate.y >= max_y {
        velocity.y = -velocity.y;
        candidate.y = candidate.y.clamp(0.0, max_y);
    }

    WallOutcome { position: candidate, velocity }
}
