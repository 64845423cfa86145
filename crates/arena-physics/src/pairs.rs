//! Pairwise elastic collision resolution.
//!
//! The resolver works on value snapshots, never on live entities.  The caller
//! (the step loop) owns the question of when snapshots are taken and how the
//! outcome is committed; this module owns only the math:
//!
//! 1. Decompose both velocities along the collision normal and tangent.
//! 2. Exchange the normal components with the 1-D elastic formula
//!    (mass-weighted); tangential components pass through unchanged.
//! 3. Push both bodies apart along the normal so they no longer overlap.
//!
//! A pair at exactly zero distance has no defined normal and is reported as
//! [`PairOutcome::Degenerate`] — the caller skips it.  No random perturbation
//! is applied.

use arena_core::Vec2;

/// Separation slack added on top of the exact touching distance so a resolved
/// pair does not re-trigger on the next step.
pub const DEPENETRATION_EPSILON: f64 = 0.01;

/// Value snapshot of one body, taken under its motion guard.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodySnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f64,
    pub diameter: f64,
}

/// Result of probing one unordered pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PairOutcome {
    /// Centers further apart than the touching distance; nothing to do.
    Separate,

    /// Centers coincide exactly — no collision normal exists.  Skipped.
    Degenerate,

    /// Overlapping pair: post-collision velocities and de-penetrated
    /// positions for both bodies.
    Collision {
        velocity_a: Vec2,
        velocity_b: Vec2,
        position_a: Vec2,
        position_b: Vec2,
    },
}

/// Resolve one unordered pair of body snapshots.
///
/// `epsilon` is the extra separation applied during de-penetration; use
/// [`DEPENETRATION_EPSILON`] unless a test needs exact touching.
pub fn resolve_pair(a: &BodySnapshot, b: &BodySnapshot, epsilon: f64) -> PairOutcome {
    let delta = b.position - a.position;
    let distance = delta.length();
    let min_dist = (a.diameter + b.diameter) / 2.0;

    if distance >= min_dist {
        return PairOutcome::Separate;
    }
    if distance <= 0.0 {
        return PairOutcome::Degenerate;
    }

    let normal = delta / distance;
    let tangent = normal.perpendicular();

    // Scalar components along the collision frame.
    let va_n = a.velocity.dot(normal);
    let vb_n = b.velocity.dot(normal);
    let va_t = a.velocity.dot(tangent);
    let vb_t = b.velocity.dot(tangent);

    // 1-D elastic exchange of the normal components.
    let (m1, m2) = (a.mass, b.mass);
    let va_n_post = (va_n * (m1 - m2) + 2.0 * m2 * vb_n) / (m1 + m2);
    let vb_n_post = (vb_n * (m2 - m1) + 2.0 * m1 * va_n) / (m1 + m2);

    let velocity_a = normal * va_n_post + tangent * va_t;
    let velocity_b = normal * vb_n_post + tangent * vb_t;

    // Symmetric positional correction removing the residual overlap.
    let overlap = 0.5 * (min_dist - distance + epsilon);
    let position_a = a.position - normal * overlap;
    let position_b = b.position + normal * overlap;

    PairOutcome::Collision { velocity_a, velocity_b, position_a, position_b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(px: f64, py: f64, vx: f64, vy: f64) -> BodySnapshot {
        BodySnapshot {
            position: Vec2::new(px, py),
            velocity: Vec2::new(vx, vy),
            mass: 1.0,
            diameter: 20.0,
        }
    }

    fn momentum(s: &[&BodySnapshot]) -> Vec2 {
        s.iter()
            .fold(Vec2::ZERO, |acc, b| acc + b.velocity * b.mass)
    }

    #[test]
    fn separate_pair_untouched() {
        let a = snapshot(0.0, 0.0, 1.0, 0.0);
        let b = snapshot(100.0, 0.0, -1.0, 0.0);
        assert_eq!(resolve_pair(&a, &b, DEPENETRATION_EPSILON), PairOutcome::Separate);
    }

    #[test]
    fn exact_overlap_is_degenerate() {
        let a = snapshot(50.0, 50.0, 1.0, 0.0);
        let b = snapshot(50.0, 50.0, -1.0, 0.0);
        assert_eq!(resolve_pair(&a, &b, DEPENETRATION_EPSILON), PairOutcome::Degenerate);
    }

    #[test]
    fn equal_mass_head_on_swaps_normal_components() {
        let a = snapshot(0.0, 0.0, 5.0, 0.0);
        let b = snapshot(15.0, 0.0, -5.0, 0.0);
        match resolve_pair(&a, &b, DEPENETRATION_EPSILON) {
            PairOutcome::Collision { velocity_a, velocity_b, .. } => {
                assert!((velocity_a.x + 5.0).abs() < 1e-9);
                assert!((velocity_b.x - 5.0).abs() < 1e-9);
                assert!(velocity_a.y.abs() < 1e-9);
                assert!(velocity_b.y.abs() < 1e-9);
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn momentum_conserved_for_arbitrary_pair() {
        let a = BodySnapshot {
            position: Vec2::new(10.0, 12.0),
            velocity: Vec2::new(4.0, -2.5),
            mass: 1.5,
            diameter: 20.0,
        };
        let b = BodySnapshot {
            position: Vec2::new(22.0, 20.0),
            velocity: Vec2::new(-1.0, 3.0),
            mass: 4.0,
            diameter: 20.0,
        };
        let before = momentum(&[&a, &b]);
        match resolve_pair(&a, &b, DEPENETRATION_EPSILON) {
            PairOutcome::Collision { velocity_a, velocity_b, .. } => {
                let after = velocity_a * a.mass + velocity_b * b.mass;
                assert!((before - after).length() < 1e-9, "momentum drift: {before} -> {after}");
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn kinetic_energy_conserved() {
        let a = snapshot(0.0, 0.0, 3.0, 1.0);
        let b = snapshot(12.0, 9.0, -2.0, -4.0);
        let ke = |v: Vec2, m: f64| 0.5 * m * v.length_squared();
        let before = ke(a.velocity, a.mass) + ke(b.velocity, b.mass);
        match resolve_pair(&a, &b, DEPENETRATION_EPSILON) {
            PairOutcome::Collision { velocity_a, velocity_b, .. } => {
                let after = ke(velocity_a, a.mass) + ke(velocity_b, b.mass);
                assert!((before - after).abs() < 1e-9);
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn depenetration_separates_pair() {
        let a = snapshot(100.0, 100.0, 2.0, 0.0);
        let b = snapshot(110.0, 100.0, -2.0, 0.0); // 10 apart, touching distance 20
        match resolve_pair(&a, &b, DEPENETRATION_EPSILON) {
            PairOutcome::Collision { position_a, position_b, .. } => {
                let dist = position_a.distance(position_b);
                assert!(
                    dist >= 20.0 - 1e-9,
                    "pair still penetrating after resolution: {dist}"
                );
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn tangential_component_unchanged() {
        // Pure grazing contact: velocities perpendicular to the normal pass
        // through the exchange untouched.
        let a = snapshot(0.0, 0.0, 0.0, 7.0);
        let b = snapshot(15.0, 0.0, 0.0, -3.0);
        match resolve_pair(&a, &b, DEPENETRATION_EPSILON) {
            PairOutcome::Collision { velocity_a, velocity_b, .. } => {
                assert!((velocity_a.y - 7.0).abs() < 1e-9);
                assert!((velocity_b.y + 3.0).abs() < 1e-9);
                assert!(velocity_a.x.abs() < 1e-9);
                assert!(velocity_b.x.abs() < 1e-9);
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn heavy_body_barely_deflected() {
        let light = BodySnapshot { mass: 1.0, ..snapshot(0.0, 0.0, 10.0, 0.0) };
        let heavy = BodySnapshot { mass: 1000.0, ..snapshot(15.0, 0.0, 0.0, 0.0) };
        match resolve_pair(&light, &heavy, DEPENETRATION_EPSILON) {
            PairOutcome::Collision { velocity_a, velocity_b, .. } => {
                assert!(velocity_a.x < 0.0, "light body should rebound");
                assert!(velocity_b.x.abs() < 0.1, "heavy body should barely move");
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }
}
