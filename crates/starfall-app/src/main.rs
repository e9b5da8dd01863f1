//! Starfall headless runner: plays a seeded, scripted session and reports on it.
//!
//! Usage:
//!   cargo run -p starfall-app -- --ticks 3600 --seed 7
//!   RUST_LOG=debug cargo run -p starfall-app -- --config starfall.json --snapshot-out last.json

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use starfall_app::game_loop::spawn_game_loop;
use starfall_app::session::{self, ScriptedSession, SessionPlan};
use starfall_core::config::SimConfig;
use starfall_sim::SimulationEngine;

#[derive(Parser, Debug)]
#[command(name = "starfall")]
#[command(about = "Run a scripted Starfall session without a window")]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 1800)]
    ticks: u64,
    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Seed for the scripted player
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// JSON config file; built-in tuning when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Frames between enemy spawns (0 disables)
    #[arg(long, default_value_t = 90)]
    enemy_interval: u64,
    /// Frames between shots (0 disables)
    #[arg(long, default_value_t = 12)]
    fire_interval: u64,
    /// Write the last frame's snapshot here as JSON
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();
    if !args.dt.is_finite() || args.dt <= 0.0 {
        bail!("--dt must be a positive number of seconds, got {}", args.dt);
    }

    let config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("failed loading config {}", path.display()))?,
        None => SimConfig::default(),
    };
    let engine = SimulationEngine::new(config).context("invalid simulation config")?;
    let handle = spawn_game_loop(engine).context("failed to spawn game loop thread")?;

    let plan = SessionPlan {
        ticks: args.ticks,
        dt: args.dt,
        enemy_interval: args.enemy_interval,
        fire_interval: args.fire_interval,
        ..Default::default()
    };
    info!(
        "running {} frames at {:.4}s with seed {}",
        plan.ticks, plan.dt, args.seed
    );
    let mut script = ScriptedSession::new(plan, args.seed);
    let outcome = session::run(&handle, &mut script);
    handle.shutdown();
    let summary = outcome?;

    info!(
        "{} frames: {} deaths, {} enemies spawned, {} shots, peak {} entities",
        summary.frames,
        summary.deaths,
        summary.enemies_spawned,
        summary.shots_fired,
        summary.peak_entities
    );

    if let (Some(path), Some(snapshot)) = (&args.snapshot_out, &summary.final_snapshot) {
        let json =
            serde_json::to_vec_pretty(snapshot).context("failed to serialize final snapshot")?;
        fs::write(path, json).with_context(|| format!("failed writing {}", path.display()))?;
        info!("final snapshot written to {}", path.display());
    }

    Ok(())
}
