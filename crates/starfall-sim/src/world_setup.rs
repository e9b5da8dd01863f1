//! Entity spawn factories.
//!
//! Builds the fixed component bundles for the player, its projectiles,
//! enemies and explosion particles. Hitbox extents come from the sprite
//! size times the entity's scale.

use glam::Vec2;
use log::debug;

use starfall_core::components::*;
use starfall_core::config::{SimConfig, SpriteSet};
use starfall_core::constants::{ENEMY_TEAM, PLAYER_TEAM};
use starfall_core::types::{rotate, Position, Rotation, Scale, Velocity};

use crate::ecs::{EntityBundle, EntityId, World};
use crate::systems::lifecycle::ExplosionTemplate;

/// Circle radius covering one frame of an animation at the given scale.
fn frame_radius(anim: &Animation, scale: f32) -> f32 {
    anim.frame_width as f32 * scale * 0.5
}

/// The player's ship at the origin, at rest.
pub fn player_bundle(config: &SimConfig, sprites: &SpriteSet) -> EntityBundle {
    let cfg = &config.player;
    EntityBundle {
        position: Some(Position::new(0.0, 0.0)),
        velocity: Some(Velocity::default()),
        rotation: Some(Rotation(0.0)),
        scale: Some(Scale(cfg.scale)),
        health: Some(Health(cfg.health)),
        hitbox: Some(HitBox::circle(
            frame_radius(&sprites.player, cfg.scale),
            cfg.contact_damage,
        )),
        team: Some(Team(PLAYER_TEAM)),
        iframes: Some(IFrames::new(cfg.iframes)),
        flags: Some(Flags::EXPLODE_ON_DEATH),
        animation: Some(sprites.player),
        ai: None,
        player: Some(Player),
    }
}

pub fn spawn_player(world: &mut World, config: &SimConfig, sprites: &SpriteSet) -> EntityId {
    let id = world.spawn_bundle(player_bundle(config, sprites));
    debug!("spawned player {id}");
    id
}

/// A projectile fired from a ship at `origin` facing `rotation`.
/// It appears a few ship heights ahead of the ship and flies straight on.
pub fn laser_bundle(
    origin: Vec2,
    rotation: f32,
    config: &SimConfig,
    sprites: &SpriteSet,
) -> EntityBundle {
    let cfg = &config.laser;
    let muzzle = Vec2::new(0.0, -cfg.muzzle_offset * sprites.player.sheet.height as f32);
    let half_length = sprites.laser.sheet.height as f32 * cfg.scale * 0.5;

    EntityBundle {
        position: Some(Position(origin + rotate(muzzle, rotation))),
        velocity: Some(Velocity(rotate(Vec2::new(0.0, -cfg.speed), rotation))),
        rotation: Some(Rotation(rotation)),
        scale: Some(Scale(cfg.scale)),
        health: Some(Health(cfg.health)),
        hitbox: Some(HitBox::line(half_length, cfg.damage)),
        team: Some(Team(PLAYER_TEAM)),
        iframes: Some(IFrames::new(0)),
        flags: Some(Flags::NONE),
        animation: Some(sprites.laser),
        ai: None,
        player: None,
    }
}

/// A homing enemy at rest at `at`.
pub fn enemy_bundle(at: Vec2, config: &SimConfig, sprites: &SpriteSet) -> EntityBundle {
    let cfg = &config.enemy;
    EntityBundle {
        position: Some(Position(at)),
        velocity: Some(Velocity::default()),
        rotation: Some(Rotation(0.0)),
        scale: Some(Scale(cfg.scale)),
        health: Some(Health(cfg.health)),
        hitbox: Some(HitBox::circle(
            frame_radius(&sprites.enemy, cfg.scale),
            cfg.contact_damage,
        )),
        team: Some(Team(ENEMY_TEAM)),
        iframes: Some(IFrames::new(cfg.iframes)),
        flags: Some(Flags::EXPLODE_ON_DEATH | Flags::PUSH_ON_COLLISION),
        animation: Some(sprites.enemy),
        ai: Some(AiInfo::homing(cfg.max_velocity, cfg.max_turning_speed)),
        player: None,
    }
}

/// Explosion particle left where an entity died.
pub fn explosion_bundle(
    template: &ExplosionTemplate,
    at: Position,
    rotation: f32,
    scale: f32,
) -> EntityBundle {
    EntityBundle {
        position: Some(at),
        rotation: Some(Rotation(rotation)),
        scale: Some(Scale(scale)),
        flags: Some(Flags::PARTICLE),
        animation: Some(template.animation),
        ..Default::default()
    }
}

pub fn explosion_template(config: &SimConfig, sprites: &SpriteSet) -> ExplosionTemplate {
    ExplosionTemplate {
        animation: sprites.explosion,
        fallback_scale: config.explosion.fallback_scale,
    }
}
