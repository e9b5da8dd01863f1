#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use glam::Vec2;
    use proptest::prelude::*;

    use starfall_core::enums::AiKind;

    use crate::angles::{angle_delta, bearing_to, turn_toward, wrap_angle};
    use crate::steer::{evaluate, SteerContext};

    fn homing_context(rotation: f32, target: Vec2, turn_speed: f32, dt: f32) -> SteerContext {
        SteerContext {
            kind: AiKind::Homing,
            position: Vec2::ZERO,
            rotation,
            target,
            max_velocity: 100.0,
            max_turning_speed: turn_speed,
            dt,
        }
    }

    #[test]
    fn test_wrap_angle_range() {
        assert_eq!(wrap_angle(0.5), 0.5);
        assert_eq!(wrap_angle(PI), PI);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
        assert!((wrap_angle(3.0 * PI / 2.0) + FRAC_PI_2).abs() < 1e-5);
        assert!((wrap_angle(-3.0 * PI / 2.0) - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_shortest_path_crosses_pi_boundary() {
        // From just below +π to just above -π is a short clockwise hop.
        let from = PI - 0.1;
        let to = -PI + 0.1;
        let delta = angle_delta(from, to);
        assert!((delta - 0.2).abs() < 1e-5, "delta was {delta}");

        let next = turn_toward(from, to, 0.15);
        assert!(
            (next - (-PI + 0.05)).abs() < 1e-5,
            "should wrap past π, got {next}"
        );
    }

    #[test]
    fn test_turn_reaches_target_within_budget() {
        let next = turn_toward(0.0, 0.3, 1.0);
        assert_eq!(next, 0.3);
    }

    #[test]
    fn test_negative_budget_does_not_turn() {
        assert_eq!(turn_toward(0.2, 1.0, -5.0), 0.2);
    }

    #[test]
    fn test_bearing_to_right_is_half_pi() {
        let b = bearing_to(Vec2::ZERO, Vec2::new(10.0, 0.0)).unwrap();
        assert!((b - FRAC_PI_2).abs() < 1e-6);
        assert!(bearing_to(Vec2::ONE, Vec2::ONE).is_none());
    }

    #[test]
    fn test_homing_quarter_turn_in_half_second() {
        // π rad/s for 0.5 s allows exactly the quarter turn to a target on the right.
        let ctx = homing_context(0.0, Vec2::new(50.0, 0.0), PI, 0.5);
        let update = evaluate(&ctx).unwrap();
        assert!((update.rotation - FRAC_PI_2).abs() < 1e-5);
        assert!((update.velocity - Vec2::new(100.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_homing_turn_is_rate_limited() {
        // Target straight behind: only π/4 of rotation allowed this tick.
        let ctx = homing_context(0.0, Vec2::new(0.0, 50.0), FRAC_PI_2, 0.5);
        let update = evaluate(&ctx).unwrap();
        assert!((update.rotation.abs() - PI / 4.0).abs() < 1e-5);
        assert!((update.velocity.length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_homing_on_target_keeps_heading() {
        let ctx = homing_context(1.2, Vec2::ZERO, PI, 0.5);
        let update = evaluate(&ctx).unwrap();
        assert_eq!(update.rotation, 1.2);
    }

    #[test]
    fn test_no_ai_is_noop() {
        let mut ctx = homing_context(0.0, Vec2::new(50.0, 0.0), PI, 0.5);
        ctx.kind = AiKind::None;
        assert!(evaluate(&ctx).is_none());
    }

    proptest! {
        #[test]
        fn prop_turn_is_bounded(
            current in -3.1f32..3.1,
            target in -3.1f32..3.1,
            step in 0.0f32..4.0,
        ) {
            let next = turn_toward(current, target, step);
            prop_assert!(next > -PI && next <= PI);
            prop_assert!(angle_delta(current, next).abs() <= step.min(PI) + 1e-4);
        }

        #[test]
        fn prop_wrap_is_idempotent(angle in -20.0f32..20.0) {
            let once = wrap_angle(angle);
            prop_assert!(once > -PI && once <= PI);
            prop_assert_eq!(wrap_angle(once), once);
        }
    }
}
