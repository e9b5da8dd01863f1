//! Scripted play sessions.
//!
//! A `ScriptedSession` stands in for a human at the keyboard: it presses Play,
//! restarts after every death, fires on a fixed cadence, wanders with random
//! held directions and drops enemies on a ring around the player. All
//! randomness comes from a seeded ChaCha8 stream, so a seed and a plan fully
//! determine the session.

use anyhow::{Context, Result};
use glam::Vec2;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use starfall_core::commands::{MoveIntent, PlayerCommand};
use starfall_core::enums::GamePhase;
use starfall_core::state::FrameSnapshot;
use starfall_core::types::facing;

use crate::game_loop::{GameLoopCommand, GameLoopHandle};

/// Shape of a scripted session. Interval fields count frames; zero disables.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub ticks: u64,
    pub dt: f32,
    pub enemy_interval: u64,
    pub fire_interval: u64,
    /// How long one set of held directions lasts.
    pub steer_interval: u64,
    /// Distance from the player at which enemies appear.
    pub spawn_radius: f32,
}

impl Default for SessionPlan {
    fn default() -> Self {
        Self {
            ticks: 1800,
            dt: 1.0 / 60.0,
            enemy_interval: 90,
            fire_interval: 12,
            steer_interval: 30,
            spawn_radius: 400.0,
        }
    }
}

/// What happened over a whole session.
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    pub frames: u64,
    pub deaths: u32,
    pub restarts: u32,
    pub enemies_spawned: u32,
    pub shots_fired: u32,
    pub peak_entities: usize,
    pub final_snapshot: Option<FrameSnapshot>,
}

pub struct ScriptedSession {
    plan: SessionPlan,
    rng: ChaCha8Rng,
}

impl ScriptedSession {
    pub fn new(plan: SessionPlan, seed: u64) -> Self {
        Self {
            plan,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    /// Commands to send before stepping frame `tick`, given the last snapshot.
    pub fn commands_for(
        &mut self,
        tick: u64,
        previous: Option<&FrameSnapshot>,
    ) -> Vec<GameLoopCommand> {
        let phase = previous.map_or(GamePhase::MainMenu, |s| s.phase);
        match phase {
            GamePhase::MainMenu => vec![GameLoopCommand::Player(PlayerCommand::Play)],
            GamePhase::DeathScreen => vec![GameLoopCommand::Player(PlayerCommand::Restart)],
            GamePhase::Playing => {
                let center = previous
                    .and_then(|s| s.player_position)
                    .map_or(Vec2::ZERO, Vec2::from_array);
                self.playing_commands(tick, center)
            }
        }
    }

    fn playing_commands(&mut self, tick: u64, center: Vec2) -> Vec<GameLoopCommand> {
        let mut commands = Vec::new();

        if every(tick, self.plan.steer_interval) {
            commands.push(GameLoopCommand::Move(self.random_intent()));
        }
        if every(tick, self.plan.enemy_interval) {
            let bearing = self.rng.gen_range(0.0..std::f32::consts::TAU);
            let at = center + facing(bearing) * self.plan.spawn_radius;
            commands.push(GameLoopCommand::Player(PlayerCommand::SpawnEnemy {
                x: at.x,
                y: at.y,
            }));
        }
        if every(tick, self.plan.fire_interval) {
            commands.push(GameLoopCommand::Player(PlayerCommand::Fire));
        }

        commands
    }

    fn random_intent(&mut self) -> MoveIntent {
        MoveIntent {
            up: self.rng.gen_bool(0.3),
            down: self.rng.gen_bool(0.3),
            left: self.rng.gen_bool(0.3),
            right: self.rng.gen_bool(0.3),
        }
    }
}

fn every(tick: u64, interval: u64) -> bool {
    interval > 0 && tick % interval == 0
}

/// Drive a running game loop through the whole session.
pub fn run(handle: &GameLoopHandle, session: &mut ScriptedSession) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut previous: Option<FrameSnapshot> = None;
    let (ticks, dt) = (session.plan.ticks, session.plan.dt);

    for tick in 0..ticks {
        for command in session.commands_for(tick, previous.as_ref()) {
            match &command {
                GameLoopCommand::Player(PlayerCommand::Fire) => summary.shots_fired += 1,
                GameLoopCommand::Player(PlayerCommand::SpawnEnemy { .. }) => {
                    summary.enemies_spawned += 1
                }
                GameLoopCommand::Player(PlayerCommand::Restart) => summary.restarts += 1,
                _ => {}
            }
            handle
                .commands
                .send(command)
                .with_context(|| format!("game loop stopped before frame {tick}"))?;
        }

        handle
            .commands
            .send(GameLoopCommand::Step(dt))
            .with_context(|| format!("game loop stopped before frame {tick}"))?;
        let snapshot = handle
            .snapshots
            .recv()
            .with_context(|| format!("game loop stopped during frame {tick}"))?;

        let was_playing = previous
            .as_ref()
            .is_some_and(|s| s.phase == GamePhase::Playing);
        if was_playing && snapshot.phase == GamePhase::DeathScreen {
            summary.deaths += 1;
            info!(
                "player died at frame {} ({:.1}s)",
                snapshot.tick, snapshot.elapsed_secs
            );
        }
        summary.peak_entities = summary.peak_entities.max(snapshot.entity_count);
        summary.frames += 1;
        previous = Some(snapshot);
    }

    debug!("session finished: {summary:?}");
    summary.final_snapshot = previous;
    Ok(summary)
}
