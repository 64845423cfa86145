//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! One `SimRng` is seeded from `SimParams::seed` and owns all randomness of a
//! run: spawn positions and launch angles.  The same seed therefore always
//! produces the same initial layout, which is what the determinism tests pin.
//!
//! `child(offset)` derives an independent stream (seed mixed with the 64-bit
//! fractional golden ratio) for any future consumer that must not perturb the
//! main sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::params::SimParams;
use crate::vec2::Vec2;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level deterministic RNG.
///
/// Used only from the thread that owns it; derive a [`child`](SimRng::child)
/// for any other consumer instead of sharing.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    // ── Spawn sampling ────────────────────────────────────────────────────

    /// Uniform position inside the spawn region of `params`.
    pub fn spawn_position(&mut self, params: &SimParams) -> Vec2 {
        let (min, max) = params.spawn_bounds();
        Vec2::new(
            self.0.gen_range(min.x..=max.x),
            self.0.gen_range(min.y..=max.y),
        )
    }

    /// Velocity at `params.initial_speed` under a uniform random angle.
    pub fn spawn_velocity(&mut self, params: &SimParams) -> Vec2 {
        let angle = self.0.gen_range(0.0..std::f64::consts::TAU);
        Vec2::from_angle(angle, params.initial_speed)
    }
}
