//! Per-frame snapshot handed to the renderer.

use serde::{Deserialize, Serialize};

use crate::components::{FrameRect, SheetId};
use crate::enums::GamePhase;

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub elapsed_secs: f64,
    pub phase: GamePhase,
    /// `None` when no player is alive.
    pub player_health: Option<i32>,
    /// Player position, used by the camera to follow the ship.
    pub player_position: Option<[f32; 2]>,
    pub entity_count: usize,
    pub sprites: Vec<SpriteView>,
}

/// One drawable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteView {
    /// Entity index, stable for the entity's lifetime.
    pub entity: u32,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale: f32,
    pub sheet: SheetId,
    pub source: FrameRect,
    /// Draw with the immunity shader.
    pub immune: bool,
}
