//! Angle arithmetic in the "0 = up, clockwise positive" convention.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use starfall_core::types::heading_of;

/// Wrap an angle into (-π, π].
pub fn wrap_angle(angle: f32) -> f32 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in (-π, π].
pub fn angle_delta(from: f32, to: f32) -> f32 {
    wrap_angle(to - from)
}

/// Bearing from one point to another. `None` when the points coincide.
pub fn bearing_to(from: Vec2, to: Vec2) -> Option<f32> {
    heading_of(to - from)
}

/// Rotate `current` toward `target` along the shortest path,
/// moving at most `max_step` radians.
pub fn turn_toward(current: f32, target: f32, max_step: f32) -> f32 {
    let max_step = max_step.max(0.0);
    let step = angle_delta(current, target).clamp(-max_step, max_step);
    wrap_angle(current + step)
}
