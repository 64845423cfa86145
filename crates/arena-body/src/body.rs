//! The `Body` entity and its motion guard.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use arena_core::{BodyId, Vec2};

use crate::events::{PositionEvents, Subscription};

/// The mutable motion state, guarded as one unit.
///
/// Position and velocity are read and written together by the collision math,
/// so they live behind a single mutex: there is no observable moment where
/// one has advanced a step and the other has not.
#[derive(Copy, Clone, Debug)]
struct Motion {
    position: Vec2,
    velocity: Vec2,
}

/// A simulated circular body.
///
/// `mass`, `diameter`, and the clamp range are fixed for the body's lifetime;
/// only the `(position, velocity)` pair mutates, and only under the motion
/// guard.  Bodies are shared as `Arc<Body>` between the simulation driver
/// (sole writer during a run) and external consumers (readers and
/// notification recipients).
///
/// # Locking discipline
///
/// Every critical section here is bounded: pure arithmetic, no I/O, no
/// callbacks.  Position-changed notifications always fire **after** the guard
/// is released, so a notification callback may re-enter the body freely.
/// No method acquires two motion guards; any caller that must update two
/// bodies does so one at a time, locking the lower [`BodyId`] first if it
/// ever needs both guards at once.
pub struct Body {
    id: BodyId,
    mass: f64,
    diameter: f64,
    /// Largest position the body may occupy: `arena - diameter` per axis.
    position_max: Vec2,
    motion: Mutex<Motion>,
    events: PositionEvents,
}

impl Body {
    /// Create a body inside `arena` (full width/height).
    ///
    /// The initial position is clamped into `[0, arena - diameter]` so the
    /// bounds invariant holds from the first observable state.
    pub fn new(id: BodyId, position: Vec2, velocity: Vec2, mass: f64, diameter: f64, arena: Vec2) -> Self {
        let position_max = Vec2::new(arena.x - diameter, arena.y - diameter);
        Self {
            id,
            mass,
            diameter,
            position_max,
            motion: Mutex::new(Motion {
                position: position.clamp(Vec2::ZERO, position_max),
                velocity,
            }),
            events: PositionEvents::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> BodyId {
        self.id
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Current position — a consistent snapshot under the guard.
    pub fn position(&self) -> Vec2 {
        self.guard().position
    }

    /// Current velocity — a consistent snapshot under the guard.
    pub fn velocity(&self) -> Vec2 {
        self.guard().velocity
    }

    /// Position and velocity from the *same* guard acquisition.
    pub fn motion(&self) -> (Vec2, Vec2) {
        let m = self.guard();
        (m.position, m.velocity)
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Replace the velocity.
    pub fn set_velocity(&self, velocity: Vec2) {
        self.guard().velocity = velocity;
    }

    /// Atomically install `clamp(position + delta)` and notify subscribers.
    ///
    /// The read-modify-write happens under one guard acquisition, so
    /// concurrent callers never lose an update.  The notification fires after
    /// the guard is released.
    pub fn update_position(&self, delta: Vec2) {
        let new_position = {
            let mut m = self.guard();
            m.position = (m.position + delta).clamp(Vec2::ZERO, self.position_max);
            m.position
        };
        self.events.emit(new_position);
    }

    /// Directly override the position (collision de-penetration).
    ///
    /// Clamped into the arena like [`update_position`](Self::update_position);
    /// notifies after release.
    pub fn set_position(&self, position: Vec2) {
        let new_position = {
            let mut m = self.guard();
            m.position = position.clamp(Vec2::ZERO, self.position_max);
            m.position
        };
        self.events.emit(new_position);
    }

    /// Install one simulation step's position delta and matching velocity in
    /// a single guard acquisition, then notify.
    ///
    /// This is the driver's commit operation: readers either see the state
    /// from before the step or the complete state after it, never a position
    /// that has advanced ahead of its velocity.
    pub fn apply_step(&self, delta: Vec2, velocity: Vec2) {
        let new_position = {
            let mut m = self.guard();
            m.position = (m.position + delta).clamp(Vec2::ZERO, self.position_max);
            m.velocity = velocity;
            m.position
        };
        self.events.emit(new_position);
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// Register a position-changed callback; see [`Subscription`].
    pub fn subscribe(&self, callback: impl Fn(Vec2) + Send + Sync + 'static) -> Subscription {
        self.events.subscribe(callback)
    }

    /// Number of live position-changed subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }

    // ── private ───────────────────────────────────────────────────────────

    /// Acquire the motion guard.
    ///
    /// Critical sections contain no panicking code, so a poisoned guard can
    /// only mean a prior caller panicked outside our control; the inner state
    /// is still consistent and is recovered rather than propagated.
    fn guard(&self) -> MutexGuard<'_, Motion> {
        self.motion.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (position, velocity) = self.motion();
        f.debug_struct("Body")
            .field("id", &self.id)
            .field("position", &position)
            .field("velocity", &velocity)
            .field("mass", &self.mass)
            .field("diameter", &self.diameter)
            .finish()
    }
}
