//! Player input delivered to the simulation.
//!
//! Discrete commands are queued and processed at the next tick boundary.
//! Held movement keys arrive as a `MoveIntent` that replaces the previous one.

use serde::{Deserialize, Serialize};

/// Discrete player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a game from the main menu.
    Play,
    /// Start over from the death screen.
    Restart,
    /// Leave the death screen for the main menu.
    MainMenu,
    /// Fire the player's weapon along its facing.
    Fire,
    /// Spawn an enemy at a world-space point.
    SpawnEnemy { x: f32, y: f32 },
}

/// Movement keys held during the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}
