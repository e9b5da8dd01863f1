//! Runtime configuration.
//!
//! Every field has a default from `constants`, so a config file only needs
//! to name the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::{Animation, SheetId, SpriteSheet};
use crate::constants::*;
use crate::error::ConfigError;

/// One sprite sheet the renderer can draw, identified by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteConfig {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub frame_width: u32,
    pub fps: f32,
}

impl SpriteConfig {
    fn new(name: &str, width: u32, height: u32, frame_width: u32, fps: f32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            frame_width,
            fps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub sprite: String,
    pub scale: f32,
    pub health: i32,
    pub contact_damage: i32,
    pub iframes: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            sprite: STARSHIP_SHEET_NAME.to_string(),
            scale: PLAYER_SCALE,
            health: PLAYER_HEALTH,
            contact_damage: PLAYER_CONTACT_DAMAGE,
            iframes: PLAYER_IFRAMES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserConfig {
    pub sprite: String,
    pub scale: f32,
    pub health: i32,
    pub damage: i32,
    pub speed: f32,
    /// Spawn distance ahead of the ship, in ship sprite heights.
    pub muzzle_offset: f32,
}

impl Default for LaserConfig {
    fn default() -> Self {
        Self {
            sprite: LASER_SHEET_NAME.to_string(),
            scale: LASER_SCALE,
            health: LASER_HEALTH,
            damage: LASER_DAMAGE,
            speed: LASER_SPEED,
            muzzle_offset: LASER_MUZZLE_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub sprite: String,
    pub scale: f32,
    pub health: i32,
    pub contact_damage: i32,
    pub iframes: u8,
    pub max_velocity: f32,
    pub max_turning_speed: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            sprite: STARSHIP_SHEET_NAME.to_string(),
            scale: ENEMY_SCALE,
            health: ENEMY_HEALTH,
            contact_damage: ENEMY_CONTACT_DAMAGE,
            iframes: ENEMY_IFRAMES,
            max_velocity: ENEMY_MAX_VELOCITY,
            max_turning_speed: ENEMY_MAX_TURNING_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    pub sprite: String,
    /// Used when the dying entity has no Scale of its own.
    pub fallback_scale: f32,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            sprite: EXPLOSION_SHEET_NAME.to_string(),
            fallback_scale: EXPLOSION_SCALE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub acceleration: f32,
    pub max_speed: f32,
    pub decay: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            acceleration: INPUT_ACCELERATION,
            max_speed: INPUT_MAX_SPEED,
            decay: INPUT_DECAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    pub push_speed: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            push_speed: PUSH_SPEED,
        }
    }
}

/// Full simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Sprite sheets; a sheet's `SheetId` is its index in this list.
    pub catalog: Vec<SpriteConfig>,
    pub player: PlayerConfig,
    pub laser: LaserConfig,
    pub enemy: EnemyConfig,
    pub explosion: ExplosionConfig,
    pub input: InputConfig,
    pub collision: CollisionConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            catalog: vec![
                SpriteConfig::new(
                    STARSHIP_SHEET_NAME,
                    STARSHIP_SHEET_WIDTH,
                    STARSHIP_SHEET_HEIGHT,
                    STARSHIP_FRAME_WIDTH,
                    STARSHIP_FPS,
                ),
                SpriteConfig::new(
                    LASER_SHEET_NAME,
                    LASER_SHEET_WIDTH,
                    LASER_SHEET_HEIGHT,
                    LASER_FRAME_WIDTH,
                    LASER_FPS,
                ),
                SpriteConfig::new(
                    EXPLOSION_SHEET_NAME,
                    EXPLOSION_SHEET_WIDTH,
                    EXPLOSION_SHEET_HEIGHT,
                    EXPLOSION_FRAME_WIDTH,
                    EXPLOSION_FPS,
                ),
            ],
            player: PlayerConfig::default(),
            laser: LaserConfig::default(),
            enemy: EnemyConfig::default(),
            explosion: ExplosionConfig::default(),
            input: InputConfig::default(),
            collision: CollisionConfig::default(),
        }
    }
}

/// Starting animations for every spawnable entity, resolved from the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSet {
    pub player: Animation,
    pub laser: Animation,
    pub enemy: Animation,
    pub explosion: Animation,
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, sprite) in self.catalog.iter().enumerate() {
            if self.catalog[..i].iter().any(|s| s.name == sprite.name) {
                return Err(ConfigError::DuplicateSprite {
                    name: sprite.name.clone(),
                });
            }
            if sprite.frame_width == 0 {
                return Err(ConfigError::ZeroFrameWidth {
                    name: sprite.name.clone(),
                });
            }
            if sprite.width < sprite.frame_width {
                return Err(ConfigError::SheetNarrowerThanFrame {
                    name: sprite.name.clone(),
                    sheet_width: sprite.width,
                    frame_width: sprite.frame_width,
                });
            }
            if !sprite.fps.is_finite() || sprite.fps < 0.0 {
                return Err(ConfigError::InvalidFps {
                    name: sprite.name.clone(),
                    fps: sprite.fps,
                });
            }
        }

        let scales = [
            ("player.scale", self.player.scale),
            ("laser.scale", self.laser.scale),
            ("enemy.scale", self.enemy.scale),
            ("explosion.fallback_scale", self.explosion.fallback_scale),
        ];
        for (field, value) in scales {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        self.resolve_sprites().map(|_| ())
    }

    /// Look up a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<SpriteSheet> {
        self.catalog
            .iter()
            .position(|s| s.name == name)
            .map(|i| SpriteSheet {
                id: SheetId(i as u16),
                width: self.catalog[i].width,
                height: self.catalog[i].height,
            })
    }

    /// Fresh animation for the named sheet, starting at frame 0.
    pub fn animation(&self, name: &str) -> Result<Animation, ConfigError> {
        let sheet = self.sheet(name).ok_or_else(|| ConfigError::UnknownSprite {
            name: name.to_string(),
        })?;
        let sprite = &self.catalog[sheet.id.0 as usize];
        Ok(Animation::new(sheet, sprite.frame_width, sprite.fps))
    }

    pub fn resolve_sprites(&self) -> Result<SpriteSet, ConfigError> {
        Ok(SpriteSet {
            player: self.animation(&self.player.sprite)?,
            laser: self.animation(&self.laser.sprite)?,
            enemy: self.animation(&self.enemy.sprite)?,
            explosion: self.animation(&self.explosion.sprite)?,
        })
    }

    /// Sheet name for an id, for renderers mapping snapshots back to assets.
    pub fn sheet_name(&self, id: SheetId) -> Option<&str> {
        self.catalog.get(id.0 as usize).map(|s| s.name.as_str())
    }
}
