//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space position. x = right, y = down (screen convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// World-space velocity in units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Facing angle in radians. 0 = up (-y), positive turns clockwise on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation(pub f32);

/// Uniform sprite scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale(pub f32);

impl Default for Scale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

/// Unit vector a sprite with the given rotation is facing.
///
/// Rotating the "up" vector (0, -1) by `angle` gives (sin, -cos).
pub fn facing(angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(sin, -cos)
}

/// Rotate a vector by `angle` radians (screen-space, clockwise positive).
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Heading of a direction vector, measured from "up". `None` for a zero vector.
pub fn heading_of(v: Vec2) -> Option<f32> {
    if v.x.abs() <= f32::EPSILON && v.y.abs() <= f32::EPSILON {
        return None;
    }
    Some(v.x.atan2(-v.y))
}

/// Simulation time tracking. The frame delta is variable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks run so far.
    pub tick: u64,
    /// Sum of all frame deltas in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}
