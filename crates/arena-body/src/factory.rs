//! Body creation seam.
//!
//! The driver receives its factory as a constructor argument — there is no
//! global singleton to look up.  Tests substitute their own `BodyFactory` to
//! observe creation or to produce bodies with unusual mass/diameter mixes.

use std::sync::Arc;

use arena_core::{BodyId, SimParams, Vec2};

use crate::body::Body;

/// Creates bodies for the simulation driver.
///
/// Implementations decide mass, diameter, and clamp bounds; the driver
/// supplies identity and the sampled initial motion.
pub trait BodyFactory: Send + Sync {
    fn create(&self, id: BodyId, position: Vec2, velocity: Vec2) -> Arc<Body>;
}

/// The standard factory: every body gets the same diameter and mass, clamped
/// against the same arena.
#[derive(Clone, Debug)]
pub struct UniformBodyFactory {
    pub diameter: f64,
    pub mass: f64,
    pub arena: Vec2,
}

impl UniformBodyFactory {
    pub fn new(diameter: f64, mass: f64, arena: Vec2) -> Self {
        Self { diameter, mass, arena }
    }

    /// Factory matching `params` (the usual composition-point constructor).
    pub fn from_params(params: &SimParams) -> Self {
        Self {
            diameter: params.body_diameter,
            mass:     params.body_mass,
            arena:    Vec2::new(params.arena_width, params.arena_height),
        }
    }
}

impl BodyFactory for UniformBodyFactory {
    fn create(&self, id: BodyId, position: Vec2, velocity: Vec2) -> Arc<Body> {
        Arc::new(Body::new(id, position, velocity, self.mass, self.diameter, self.arena))
    }
}
