//! Simulation engine: the frame orchestrator.
//!
//! `SimulationEngine` owns the ECS world, processes player commands,
//! runs all systems in a fixed order and produces `FrameSnapshot`s.
//! Completely headless, so every rule can be driven from tests.

use std::collections::VecDeque;

use glam::Vec2;
use log::{debug, info, trace};

use starfall_core::commands::{MoveIntent, PlayerCommand};
use starfall_core::config::{SimConfig, SpriteSet};
use starfall_core::enums::GamePhase;
use starfall_core::error::ConfigError;
use starfall_core::state::FrameSnapshot;
use starfall_core::types::SimTime;

use crate::ecs::{CommandBuffer, EntityId, World};
use crate::systems;
use crate::systems::lifecycle::ExplosionTemplate;
use crate::world_setup;

/// What the systems did during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub steered: usize,
    pub hits: u32,
    pub pushes: u32,
    pub deaths: u32,
    pub explosions: u32,
    pub particles_expired: u32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: SimConfig,
    sprites: SpriteSet,
    explosion: ExplosionTemplate,
    player: Option<EntityId>,
    command_queue: VecDeque<PlayerCommand>,
    move_intent: MoveIntent,
    deferred: CommandBuffer,
    last_stats: TickStats,
}

impl SimulationEngine {
    /// Create an engine in the main menu with an empty world.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sprites = config.resolve_sprites()?;
        let explosion = world_setup::explosion_template(&config, &sprites);

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            config,
            sprites,
            explosion,
            player: None,
            command_queue: VecDeque::new(),
            move_intent: MoveIntent::default(),
            deferred: CommandBuffer::new(),
            last_stats: TickStats::default(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held movement keys. They persist until replaced.
    pub fn set_move_intent(&mut self, intent: MoveIntent) {
        self.move_intent = intent;
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// `dt` is the raw frame time; it is not capped or subdivided. Negative or
    /// non-finite values are treated as a zero-length frame.
    pub fn tick(&mut self, dt: f32) -> FrameSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.process_commands();

        if self.phase == GamePhase::Playing {
            if let Some(player) = self.live_player() {
                systems::input::run(&mut self.world, player, self.move_intent, &self.config.input);
            }
        }

        self.last_stats = self.run_systems(dt);
        self.time.advance(dt);
        self.update_phase();

        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, self.live_player())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for scripted setups and tests.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The player entity, if it is still alive.
    pub fn live_player(&self) -> Option<EntityId> {
        self.player.filter(|&id| self.world.is_alive(id))
    }

    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Play => {
                if self.phase == GamePhase::MainMenu {
                    self.start_game();
                }
            }
            PlayerCommand::Restart => {
                if self.phase == GamePhase::DeathScreen {
                    self.start_game();
                }
            }
            PlayerCommand::MainMenu => {
                if self.phase == GamePhase::DeathScreen {
                    self.set_phase(GamePhase::MainMenu);
                }
            }
            PlayerCommand::Fire => {
                if self.phase != GamePhase::Playing {
                    return;
                }
                let Some(player) = self.live_player() else {
                    return;
                };
                let (Some(pos), Some(rot)) =
                    (self.world.position(player), self.world.rotation(player))
                else {
                    return;
                };
                let bundle = world_setup::laser_bundle(pos.0, rot.0, &self.config, &self.sprites);
                let id = self.world.spawn_bundle(bundle);
                debug!("fired {id}");
            }
            PlayerCommand::SpawnEnemy { x, y } => {
                if self.phase != GamePhase::Playing {
                    return;
                }
                let bundle = world_setup::enemy_bundle(Vec2::new(x, y), &self.config, &self.sprites);
                let id = self.world.spawn_bundle(bundle);
                debug!("spawned enemy {id} at ({x}, {y})");
            }
        }
    }

    /// Clear every flagged entity and put a fresh player at the origin.
    fn start_game(&mut self) {
        let cleared = self.world.clear_flagged();
        self.player = Some(world_setup::spawn_player(
            &mut self.world,
            &self.config,
            &self.sprites,
        ));
        info!("new game: cleared {cleared} entities");
        self.set_phase(GamePhase::Playing);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            info!("phase {} -> {}", self.phase.as_str(), phase.as_str());
            self.phase = phase;
        }
    }

    /// A dead player ends the round.
    fn update_phase(&mut self) {
        if self.phase == GamePhase::Playing && self.live_player().is_none() {
            self.player = None;
            self.set_phase(GamePhase::DeathScreen);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) -> TickStats {
        let mut stats = TickStats::default();
        let target = self
            .live_player()
            .and_then(|id| self.world.position(id))
            .map(|p| p.0);

        // 1. AI steering toward the player
        stats.steered = systems::ai::run(&mut self.world, dt, target);
        // 2. Collision, damage and push-apart
        let collisions =
            systems::collision::run(&mut self.world, dt, self.config.collision.push_speed);
        stats.hits = collisions.hits;
        stats.pushes = collisions.pushes;
        // 3. Movement integration
        systems::movement::run(&mut self.world, dt);
        // 4. Deaths (explosions replace EXPLODE_ON_DEATH entities)
        let deaths =
            systems::lifecycle::run_deaths(&self.world, &self.explosion, &mut self.deferred);
        self.deferred.apply(&mut self.world);
        stats.deaths = deaths.deaths;
        stats.explosions = deaths.explosions;
        // 5. Finished particles
        stats.particles_expired =
            systems::lifecycle::run_particle_expiry(&self.world, &mut self.deferred);
        self.deferred.apply(&mut self.world);
        // 6. Invulnerability countdown
        systems::invulnerability::run(&mut self.world);
        // 7. Animation clock
        systems::animation::run(&mut self.world, dt);

        trace!(
            "tick {}: {} entities, {stats:?}",
            self.time.tick,
            self.world.entity_count()
        );
        stats
    }
}
