use glam::Vec2;

use starfall_core::components::{Flags, Team};

use crate::ecs::World;
use crate::hit::{intersects, HitGeometry};

/// Counts from one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Pairs that exchanged damage.
    pub hits: u32,
    /// Push-apart nudges applied to individual entities.
    pub pushes: u32,
}

/// Per-entity data captured before any mutation in the pass.
struct Collider {
    idx: usize,
    center: Vec2,
    geometry: HitGeometry,
    team: Team,
    damage: i32,
    push: bool,
}

/// Pairwise hit detection and damage exchange.
///
/// Every unordered pair of entities with Position + Rotation + HitBox + Team +
/// Health + IFrames is tested once. Overlapping pairs on different teams where
/// neither side is invulnerable trade damage and both receive their full
/// invulnerability window. Overlapping circles are additionally pushed apart
/// when flagged PUSH_ON_COLLISION, regardless of team or invulnerability.
pub fn run(world: &mut World, dt: f32, push_speed: f32) -> CollisionResult {
    let mut result = CollisionResult::default();

    let colliders: Vec<Collider> = world
        .alive_entities()
        .into_iter()
        .filter_map(|idx| {
            let pos = world.positions[idx]?;
            let rot = world.rotations[idx]?;
            let hitbox = world.hitboxes[idx]?;
            let team = world.teams[idx]?;
            world.healths[idx]?;
            world.iframes[idx]?;
            let push = world.flags[idx].is_some_and(|f| f.contains(Flags::PUSH_ON_COLLISION));
            Some(Collider {
                idx,
                center: pos.0,
                geometry: HitGeometry::place(&hitbox, pos.0, rot.0),
                team,
                damage: hitbox.damage,
                push,
            })
        })
        .collect();

    for i in 0..colliders.len() {
        for j in (i + 1)..colliders.len() {
            let a = &colliders[i];
            let b = &colliders[j];

            if !intersects(&a.geometry, &b.geometry) {
                continue;
            }

            if a.team != b.team && apply_damage(world, a, b) {
                result.hits += 1;
            }

            if a.geometry.is_circle() && b.geometry.is_circle() {
                result.pushes += push_apart(world, a, b, push_speed * dt);
            }
        }
    }

    result
}

/// Exchange damage if neither side is currently invulnerable.
fn apply_damage(world: &mut World, a: &Collider, b: &Collider) -> bool {
    let (Some(im_a), Some(im_b)) = (world.iframes[a.idx], world.iframes[b.idx]) else {
        return false;
    };
    if im_a.is_immune() || im_b.is_immune() {
        return false;
    }

    if let Some(health) = &mut world.healths[a.idx] {
        health.0 -= b.damage;
    }
    if let Some(health) = &mut world.healths[b.idx] {
        health.0 -= a.damage;
    }
    if let Some(im) = &mut world.iframes[a.idx] {
        im.cur = im.init;
    }
    if let Some(im) = &mut world.iframes[b.idx] {
        im.cur = im.init;
    }
    true
}

/// Nudge flagged entities away from each other's centers.
fn push_apart(world: &mut World, a: &Collider, b: &Collider, distance: f32) -> u32 {
    // Coincident centers have no direction to push along
    let away_from_b = (a.center - b.center).normalize_or_zero();
    if away_from_b == Vec2::ZERO {
        return 0;
    }

    let mut pushes = 0;
    if a.push {
        if let Some(pos) = &mut world.positions[a.idx] {
            pos.0 += away_from_b * distance;
            pushes += 1;
        }
    }
    if b.push {
        if let Some(pos) = &mut world.positions[b.idx] {
            pos.0 -= away_from_b * distance;
            pushes += 1;
        }
    }
    pushes
}
