//! One simulation step over a set of live bodies.
//!
//! The step is the correctness-critical section of the whole system and is
//! structured as snapshot → resolve → commit:
//!
//! 1. **Snapshot**: read every body's `(position, velocity)` through its
//!    motion guard.  The caller guarantees a single logical writer per step,
//!    so the per-body snapshots form one consistent step-wide view.
//! 2. **Broad + narrow phase**: probe all unordered pairs (O(n²), fine at
//!    target scale) and apply collision outcomes *to the snapshot*.  Later
//!    pairs in the same step see earlier resolutions, and no pair ever sees
//!    a half-updated body.
//! 3. **Integrate**: friction decay, minimum-speed cutoff, and wall
//!    reflection, still on the snapshot.
//! 4. **Commit**: one [`Body::apply_step`] per body installs its final
//!    position delta and velocity atomically; each body's position-changed
//!    notification fires after its guard is released.  No lock is held
//!    while consumer callbacks run.
//!
//! The function is deliberately free of scheduling concerns so tests can
//! drive it deterministically, one step at a time.

use std::sync::Arc;

use arena_body::Body;
use arena_core::{SimParams, Vec2};
use arena_physics::{
    decay_velocity, reflect_walls, resolve_pair, BodySnapshot, PairOutcome, WallOutcome,
    DEPENETRATION_EPSILON,
};

use crate::observer::StepObserver;

/// Advance every body by one step.  Returns the number of body-body
/// collisions resolved.
///
/// Must be called from a single logical writer at a time; the driver's worker
/// thread is the only caller during a run.
pub fn step(bodies: &[Arc<Body>], params: &SimParams, observer: &dyn StepObserver) -> usize {
    // ── Phase 1: consistent snapshot ──────────────────────────────────────
    let mut snapshots: Vec<BodySnapshot> = bodies
        .iter()
        .map(|body| {
            let (position, velocity) = body.motion();
            BodySnapshot {
                position,
                velocity,
                mass: body.mass(),
                diameter: body.diameter(),
            }
        })
        .collect();

    // Commit deltas are computed against the pre-step positions.
    let origins: Vec<Vec2> = snapshots.iter().map(|s| s.position).collect();

    // ── Phase 2: pairwise resolution on the snapshot ──────────────────────
    let mut collisions = 0;
    for i in 0..snapshots.len() {
        for j in (i + 1)..snapshots.len() {
            let (a, b) = (snapshots[i], snapshots[j]);
            match resolve_pair(&a, &b, DEPENETRATION_EPSILON) {
                PairOutcome::Separate => {}
                PairOutcome::Degenerate => {
                    log::debug!(
                        "skipping zero-distance pair {} / {}",
                        bodies[i].id(),
                        bodies[j].id()
                    );
                    observer.on_degenerate_pair(bodies[i].id(), bodies[j].id());
                }
                PairOutcome::Collision {
                    velocity_a,
                    velocity_b,
                    position_a,
                    position_b,
                } => {
                    snapshots[i].velocity = velocity_a;
                    snapshots[i].position = position_a;
                    snapshots[j].velocity = velocity_b;
                    snapshots[j].position = position_b;
                    collisions += 1;
                }
            }
        }
    }

    // ── Phase 3 + 4: integrate and commit per body ────────────────────────
    let arena = Vec2::new(params.arena_width, params.arena_height);
    for ((body, snapshot), origin) in bodies.iter().zip(&snapshots).zip(&origins) {
        let velocity = decay_velocity(snapshot.velocity, params.friction, params.min_speed);
        let WallOutcome { position, velocity } =
            reflect_walls(snapshot.position, velocity, body.diameter(), arena);
        body.apply_step(position - *origin, velocity);
    }

    collisions
}
