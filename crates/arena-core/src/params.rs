//! Simulation parameters.
//!
//! # Design
//!
//! All tunables of a run live in one `SimParams` value that is validated once,
//! up front, before any thread is spawned or lock acquired.  The rest of the
//! workspace treats a `SimParams` it receives as already-valid and never
//! re-checks.
//!
//! The defaults reproduce the classic 400×400 arena: 20 px bodies launched at
//! speed 30 from the central spawn box, decaying by 1 % per step, stepped
//! every 16 ms.

use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::vec2::Vec2;

/// Top-level configuration for a simulation run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Arena width.  Bodies occupy `[0, arena_width - diameter]` on x.
    pub arena_width: f64,

    /// Arena height.  Bodies occupy `[0, arena_height - diameter]` on y.
    pub arena_height: f64,

    /// Diameter of every body created by the default factory.
    pub body_diameter: f64,

    /// Mass of every body created by the default factory.
    pub body_mass: f64,

    /// Per-step multiplicative velocity decay, in `(0, 1]`.  1.0 disables
    /// friction entirely.
    pub friction: f64,

    /// When **both** velocity components fall below this magnitude the body
    /// is brought to a full stop.
    pub min_speed: f64,

    /// Magnitude of every spawn velocity; direction is a uniform random angle.
    pub initial_speed: f64,

    /// Spawn positions are sampled uniformly from
    /// `[spawn_margin, size - spawn_margin]` on each axis.
    pub spawn_margin: f64,

    /// Worker tick period.  Step duration is subtracted from this before
    /// sleeping, so a cheap step yields a steady cadence.
    pub step_interval: Duration,

    /// Master RNG seed.  The same seed always produces the same spawn layout.
    pub seed: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            arena_width:   400.0,
            arena_height:  400.0,
            body_diameter: 20.0,
            body_mass:     1.0,
            friction:      0.99,
            min_speed:     0.1,
            initial_speed: 30.0,
            spawn_margin:  100.0,
            step_interval: Duration::from_millis(16),
            seed:          0,
        }
    }
}

impl SimParams {
    /// Check every cross-field invariant and reject unusable configurations.
    ///
    /// Called by the simulation builder; fails with [`CoreError::Config`]
    /// carrying a human-readable reason.
    pub fn validate(&self) -> CoreResult<()> {
        fn fail(reason: String) -> CoreResult<()> {
            Err(CoreError::Config(reason))
        }

        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return fail(format!(
                "arena dimensions must be positive, got {}x{}",
                self.arena_width, self.arena_height
            ));
        }
        if self.body_diameter <= 0.0 {
            return fail(format!("body diameter must be positive, got {}", self.body_diameter));
        }
        if self.body_mass <= 0.0 {
            return fail(format!("body mass must be positive, got {}", self.body_mass));
        }
        if self.body_diameter >= self.arena_width || self.body_diameter >= self.arena_height {
            return fail(format!(
                "body diameter {} does not fit a {}x{} arena",
                self.body_diameter, self.arena_width, self.arena_height
            ));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return fail(format!("friction must be in (0, 1], got {}", self.friction));
        }
        if self.min_speed < 0.0 {
            return fail(format!("min_speed must be non-negative, got {}", self.min_speed));
        }
        if self.initial_speed < 0.0 {
            return fail(format!("initial_speed must be non-negative, got {}", self.initial_speed));
        }
        if self.spawn_margin < 0.0 {
            return fail(format!("spawn_margin must be non-negative, got {}", self.spawn_margin));
        }
        let (spawn_min, spawn_max) = self.spawn_bounds();
        if spawn_min.x > spawn_max.x || spawn_min.y > spawn_max.y {
            return fail(format!(
                "spawn margin {} leaves no room for a body in a {}x{} arena",
                self.spawn_margin, self.arena_width, self.arena_height
            ));
        }
        if self.step_interval.is_zero() {
            return fail("step_interval must be non-zero".to_string());
        }
        Ok(())
    }

    /// Upper-left-inclusive position range a body may occupy: `(0, 0)` to
    /// `(arena - diameter)` for a body of the configured diameter.
    #[inline]
    pub fn position_bounds(&self) -> (Vec2, Vec2) {
        (
            Vec2::ZERO,
            Vec2::new(
                self.arena_width - self.body_diameter,
                self.arena_height - self.body_diameter,
            ),
        )
    }

    /// Inclusive range spawn positions are sampled from.
    ///
    /// The upper bound is additionally capped to the position bounds so a
    /// freshly spawned body never starts outside its clamped range.
    pub fn spawn_bounds(&self) -> (Vec2, Vec2) {
        let (_, pos_max) = self.position_bounds();
        (
            Vec2::new(self.spawn_margin, self.spawn_margin),
            Vec2::new(
                (self.arena_width - self.spawn_margin).min(pos_max.x),
                (self.arena_height - self.spawn_margin).min(pos_max.y),
            ),
        )
    }
}
