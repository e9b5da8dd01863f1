use starfall_sim::core::commands::PlayerCommand;
use starfall_sim::core::config::SimConfig;
use starfall_sim::core::enums::GamePhase;
use starfall_sim::core::types::Velocity;
use starfall_sim::SimulationEngine;

const DT: f32 = 1.0 / 60.0;

fn start(config: SimConfig) -> SimulationEngine {
    let mut engine = SimulationEngine::new(config).unwrap();
    engine.queue_command(PlayerCommand::Play);
    engine.tick(DT);
    engine
}

/// Slot of the first live entity that carries an AI component.
fn enemy_slot(engine: &SimulationEngine) -> Option<usize> {
    let world = engine.world();
    world
        .alive_entities()
        .into_iter()
        .find(|&idx| world.ai[idx].is_some())
}

#[test]
fn rammed_player_dies_and_round_ends() {
    let mut engine = start(SimConfig::default());
    // Directly below the player, already facing it
    engine.queue_command(PlayerCommand::SpawnEnemy { x: 0.0, y: 100.0 });

    let mut health_seen = vec![5];
    let mut saw_immunity = false;
    for _ in 0..600 {
        let snap = engine.tick(DT);
        if let Some(h) = snap.player_health {
            if h < *health_seen.last().unwrap() {
                health_seen.push(h);
                saw_immunity |= snap.sprites.iter().any(|s| s.immune);
            }
        }
        if snap.phase == GamePhase::DeathScreen {
            break;
        }
    }

    assert_eq!(engine.phase(), GamePhase::DeathScreen);
    // The lethal hit removes the player in the same tick, so 0 is never reported
    assert_eq!(health_seen, vec![5, 4, 3, 2, 1]);
    assert!(saw_immunity);
    // The enemy survives a player that deals no contact damage
    assert!(enemy_slot(&engine).is_some());
}

#[test]
fn five_lasers_destroy_a_parked_enemy() {
    let mut engine = start(SimConfig::default());
    engine.queue_command(PlayerCommand::SpawnEnemy { x: 0.0, y: -200.0 });
    engine.tick(DT);

    let slot = enemy_slot(&engine).unwrap();
    {
        let world = engine.world_mut();
        world.ai[slot] = None;
        world.velocities[slot] = Some(Velocity::default());
        world.rotations[slot] = Some(Default::default());
    }

    let mut explosions = 0;
    for tick in 0..200 {
        if tick % 20 == 0 && tick < 100 {
            engine.queue_command(PlayerCommand::Fire);
        }
        engine.tick(DT);
        explosions += engine.last_stats().explosions;
    }

    let world = engine.world();
    assert!(!world
        .alive_entities()
        .into_iter()
        .any(|idx| world.teams[idx].is_some_and(|t| t.0 == 1)));
    assert_eq!(explosions, 1);
    assert_eq!(engine.phase(), GamePhase::Playing);
}

#[test]
fn four_lasers_leave_enemy_standing() {
    let mut engine = start(SimConfig::default());
    engine.queue_command(PlayerCommand::SpawnEnemy { x: 0.0, y: -200.0 });
    engine.tick(DT);

    let slot = enemy_slot(&engine).unwrap();
    engine.world_mut().velocities[slot] = Some(Velocity::default());
    engine.world_mut().ai[slot] = None;

    for tick in 0..200 {
        if tick % 20 == 0 && tick < 80 {
            engine.queue_command(PlayerCommand::Fire);
        }
        engine.tick(DT);
    }

    let health = engine.world().healths[slot].unwrap();
    assert_eq!(health.0, 1);
}

#[test]
fn json_config_overrides_reach_the_engine() {
    let config = SimConfig::from_json_str(r#"{ "player": { "health": 2, "scale": 2.0 } }"#).unwrap();
    let mut engine = start(config);

    let snap = engine.tick(DT);

    assert_eq!(snap.player_health, Some(2));
    assert_eq!(snap.sprites[0].scale, 2.0);
}

#[test]
fn snapshot_serializes_for_the_renderer() {
    let mut engine = start(SimConfig::default());
    let snap = engine.tick(DT);

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["phase"], "Playing");
    assert_eq!(json["player_health"], 5);
    assert_eq!(json["sprites"][0]["source"]["width"], 16);
}
