//! Simulation constants and tuning defaults.
//!
//! These seed `SimConfig::default()`; a JSON config file can override them.

use std::f32::consts::PI;

// --- Sprite catalog ---

/// Player and enemy ship sheet.
pub const STARSHIP_SHEET_NAME: &str = "starship";
pub const STARSHIP_SHEET_WIDTH: u32 = 64;
pub const STARSHIP_SHEET_HEIGHT: u32 = 16;
pub const STARSHIP_FRAME_WIDTH: u32 = 16;
pub const STARSHIP_FPS: f32 = 8.0;

/// Player projectile sheet (one pixel wide beam).
pub const LASER_SHEET_NAME: &str = "laser";
pub const LASER_SHEET_WIDTH: u32 = 1;
pub const LASER_SHEET_HEIGHT: u32 = 8;
pub const LASER_FRAME_WIDTH: u32 = 1;
pub const LASER_FPS: f32 = 60.0;

/// Death explosion sheet.
pub const EXPLOSION_SHEET_NAME: &str = "explosion";
pub const EXPLOSION_SHEET_WIDTH: u32 = 128;
pub const EXPLOSION_SHEET_HEIGHT: u32 = 16;
pub const EXPLOSION_FRAME_WIDTH: u32 = 16;
pub const EXPLOSION_FPS: f32 = 8.0;

// --- Teams ---

pub const PLAYER_TEAM: u8 = 0;
pub const ENEMY_TEAM: u8 = 1;

// --- Player ---

pub const PLAYER_SCALE: f32 = 5.0;
pub const PLAYER_HEALTH: i32 = 5;
pub const PLAYER_CONTACT_DAMAGE: i32 = 0;
pub const PLAYER_IFRAMES: u8 = 16;

// --- Laser ---

pub const LASER_SCALE: f32 = 5.0;
pub const LASER_HEALTH: i32 = 3;
pub const LASER_DAMAGE: i32 = 1;
pub const LASER_SPEED: f32 = 500.0;
/// Spawn distance ahead of the ship, in ship sprite heights.
pub const LASER_MUZZLE_OFFSET: f32 = 3.0;

// --- Enemy ---

pub const ENEMY_SCALE: f32 = 3.0;
pub const ENEMY_HEALTH: i32 = 5;
pub const ENEMY_CONTACT_DAMAGE: i32 = 1;
pub const ENEMY_IFRAMES: u8 = 16;
pub const ENEMY_MAX_VELOCITY: f32 = 120.0;
pub const ENEMY_MAX_TURNING_SPEED: f32 = PI;

// --- Input ---

/// Velocity change per frame while a direction is held.
pub const INPUT_ACCELERATION: f32 = 200.0;
/// Per-axis velocity clamp.
pub const INPUT_MAX_SPEED: f32 = 200.0;
/// Lerp factor toward zero on an axis with no input.
pub const INPUT_DECAY: f32 = 0.3;

// --- Collision ---

/// Separation speed for overlapping PUSH_ON_COLLISION circles (units/second).
pub const PUSH_SPEED: f32 = 100.0;

// --- Explosion ---

pub const EXPLOSION_SCALE: f32 = 3.0;
