//! Enumerations shared across the simulation.

use serde::{Deserialize, Serialize};

/// Which steering behaviour an entity runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiKind {
    /// Velocity is set by input or physics only.
    #[default]
    None,
    /// Turn toward the per-tick target point and fly at max velocity.
    Homing,
}

/// Top-level game flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Playing,
    DeathScreen,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::MainMenu => "MainMenu",
            GamePhase::Playing => "Playing",
            GamePhase::DeathScreen => "DeathScreen",
        }
    }
}
