//! ECS components stored column-wise in the simulation world.
//!
//! Components are plain data structs. Game logic lives in systems;
//! the small helpers here only answer questions about the data itself.

use serde::{Deserialize, Serialize};

use crate::enums::AiKind;

/// Hit points. Goes negative freely; only compared `<= 0` for death.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health(pub i32);

/// Allegiance. Entities on the same team never damage each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team(pub u8);

/// Collision geometry, relative to the owner's Position and Rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum HitShape {
    /// Segment centered on Position along the facing axis.
    Line { half_length: f32 },
    /// Circle centered on Position.
    Circle { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitBox {
    pub shape: HitShape,
    /// Damage dealt to the other party on contact.
    pub damage: i32,
}

impl HitBox {
    pub fn circle(radius: f32, damage: i32) -> Self {
        Self {
            shape: HitShape::Circle { radius },
            damage,
        }
    }

    pub fn line(half_length: f32, damage: i32) -> Self {
        Self {
            shape: HitShape::Line { half_length },
            damage,
        }
    }
}

/// Invulnerability frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IFrames {
    /// Ticks of immunity granted on each hit.
    pub init: u8,
    /// Remaining immune ticks. Non-zero means damage is ignored.
    pub cur: u8,
}

impl IFrames {
    pub fn new(init: u8) -> Self {
        Self { init, cur: 0 }
    }

    pub fn is_immune(&self) -> bool {
        self.cur > 0
    }
}

/// Behaviour bitset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags(pub u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Visual effect: exempt from the health check, removed when its animation ends.
    pub const PARTICLE: Flags = Flags(1 << 0);
    /// Leaves an explosion particle behind when killed.
    pub const EXPLODE_ON_DEATH: Flags = Flags(1 << 1);
    /// Pushed away from overlapping circles.
    pub const PUSH_ON_COLLISION: Flags = Flags(1 << 2);

    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

/// Opaque handle to a sprite sheet owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetId(pub u16);

/// A horizontal strip of equally sized frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub id: SheetId,
    /// Full sheet width in pixels.
    pub width: u32,
    /// Sheet (and frame) height in pixels.
    pub height: u32,
}

/// Frame-based sprite animation state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub sheet: SpriteSheet,
    pub frame_width: u32,
    /// Current frame, always `< frame_count()`.
    pub frame: u32,
    pub fps: f32,
    /// Seconds accumulated toward the next frame.
    pub elapsed: f32,
}

impl Animation {
    pub fn new(sheet: SpriteSheet, frame_width: u32, fps: f32) -> Self {
        Self {
            sheet,
            frame_width,
            frame: 0,
            fps,
            elapsed: 0.0,
        }
    }

    /// Number of frames in the sheet. A degenerate sheet counts as one frame.
    pub fn frame_count(&self) -> u32 {
        if self.frame_width == 0 {
            return 1;
        }
        (self.sheet.width / self.frame_width).max(1)
    }

    pub fn is_last_frame(&self) -> bool {
        self.frame + 1 >= self.frame_count()
    }

    /// Source rectangle of the current frame within the sheet.
    pub fn source_rect(&self) -> FrameRect {
        FrameRect {
            x: self.frame * self.frame_width,
            y: 0,
            width: self.frame_width,
            height: self.sheet.height,
        }
    }
}

/// Pixel rectangle inside a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Autonomous steering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiInfo {
    pub kind: AiKind,
    /// Cruise speed in units per second.
    pub max_velocity: f32,
    /// Radians per second.
    pub max_turning_speed: f32,
}

impl AiInfo {
    pub fn homing(max_velocity: f32, max_turning_speed: f32) -> Self {
        Self {
            kind: AiKind::Homing,
            max_velocity,
            max_turning_speed,
        }
    }
}

/// Marks the player-controlled ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;
