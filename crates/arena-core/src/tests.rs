//! Unit tests for arena-core primitives.

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -4.0);
        assert_eq!(a + b, Vec2::new(4.0, -2.0));
        assert_eq!(a - b, Vec2::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a.dot(b), -5.0);
    }

    #[test]
    fn length_and_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        let n = v.normalized();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn perpendicular_is_ccw_normal() {
        let n = Vec2::new(1.0, 0.0);
        assert_eq!(n.perpendicular(), Vec2::new(0.0, 1.0));
        // Perpendicularity holds for arbitrary vectors.
        let v = Vec2::new(2.5, -7.0);
        assert!(v.dot(v.perpendicular()).abs() < 1e-12);
    }

    #[test]
    fn from_angle() {
        let v = Vec2::from_angle(0.0, 30.0);
        assert!((v.x - 30.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
        let w = Vec2::from_angle(std::f64::consts::FRAC_PI_2, 2.0);
        assert!(w.x.abs() < 1e-12);
        assert!((w.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_componentwise() {
        let v = Vec2::new(-5.0, 500.0);
        let c = v.clamp(Vec2::ZERO, Vec2::new(380.0, 380.0));
        assert_eq!(c, Vec2::new(0.0, 380.0));
    }

    #[test]
    fn distance() {
        assert_eq!(Vec2::new(0.0, 0.0).distance(Vec2::new(3.0, 4.0)), 5.0);
    }
}

#[cfg(test)]
mod ids {
    use crate::BodyId;

    #[test]
    fn index_roundtrip() {
        let id = BodyId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(BodyId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(BodyId(0) < BodyId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(BodyId::INVALID.0, u32::MAX);
        assert_eq!(BodyId::default(), BodyId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(BodyId(7).to_string(), "BodyId(7)");
    }
}

#[cfg(test)]
mod params {
    use std::time::Duration;

    use crate::{SimParams, Vec2};

    #[test]
    fn defaults_validate() {
        SimParams::default().validate().unwrap();
    }

    #[test]
    fn default_bounds() {
        let p = SimParams::default();
        assert_eq!(p.position_bounds(), (Vec2::ZERO, Vec2::new(380.0, 380.0)));
        let (min, max) = p.spawn_bounds();
        assert_eq!(min, Vec2::new(100.0, 100.0));
        assert_eq!(max, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn rejects_bad_dimensions() {
        let p = SimParams { arena_width: 0.0, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_oversized_body() {
        let p = SimParams { body_diameter: 400.0, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_bad_friction() {
        assert!(SimParams { friction: 0.0, ..SimParams::default() }.validate().is_err());
        assert!(SimParams { friction: 1.5, ..SimParams::default() }.validate().is_err());
        assert!(SimParams { friction: 1.0, ..SimParams::default() }.validate().is_ok());
    }

    #[test]
    fn rejects_margin_without_room() {
        let p = SimParams { spawn_margin: 250.0, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_zero_interval() {
        let p = SimParams { step_interval: Duration::ZERO, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_negative_mass() {
        let p = SimParams { body_mass: -1.0, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn spawn_bounds_capped_to_position_range() {
        // Tiny margin: spawn box must not let a body start past arena - diameter.
        let p = SimParams { spawn_margin: 0.0, ..SimParams::default() };
        let (_, max) = p.spawn_bounds();
        assert_eq!(max, Vec2::new(380.0, 380.0));
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimParams, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "child streams should diverge");
    }

    #[test]
    fn spawn_position_inside_region() {
        let params = SimParams::default();
        let (min, max) = params.spawn_bounds();
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let p = rng.spawn_position(&params);
            assert!((min.x..=max.x).contains(&p.x), "x out of spawn bounds: {p}");
            assert!((min.y..=max.y).contains(&p.y), "y out of spawn bounds: {p}");
        }
    }

    #[test]
    fn spawn_velocity_has_initial_speed() {
        let params = SimParams::default();
        let mut rng = SimRng::new(7);
        for _ in 0..100 {
            let v = rng.spawn_velocity(&params);
            assert!((v.length() - params.initial_speed).abs() < 1e-9);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
