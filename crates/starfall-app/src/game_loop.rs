//! Game loop thread. Owns the simulation engine and steps it on request.
//!
//! Commands and held directions arrive via an `mpsc` channel. Each `Step`
//! advances the engine by one frame and sends the resulting snapshot back
//! on a second channel. The loop exits on `Shutdown` or when either side
//! of the channel pair is dropped.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;

use log::debug;

use starfall_core::commands::{MoveIntent, PlayerCommand};
use starfall_core::state::FrameSnapshot;
use starfall_sim::SimulationEngine;

/// Messages from the driver to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A player command, applied at the next step.
    Player(PlayerCommand),
    /// Replace the held movement keys.
    Move(MoveIntent),
    /// Advance one frame of `dt` seconds and report the snapshot.
    Step(f32),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Driver-side ends of a running game loop.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<GameLoopCommand>,
    pub snapshots: mpsc::Receiver<FrameSnapshot>,
    thread: JoinHandle<u64>,
}

impl GameLoopHandle {
    /// Ask the loop to stop and wait for it. Returns the number of frames stepped.
    pub fn shutdown(self) -> u64 {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        self.thread.join().unwrap_or(0)
    }
}

/// Move `engine` onto a new game loop thread.
pub fn spawn_game_loop(engine: SimulationEngine) -> io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snap_tx, snap_rx) = mpsc::channel::<FrameSnapshot>();

    let thread = std::thread::Builder::new()
        .name("starfall-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, snap_tx))?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        snapshots: snap_rx,
        thread,
    })
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snap_tx: mpsc::Sender<FrameSnapshot>,
) -> u64 {
    let mut steps = 0;
    loop {
        match cmd_rx.recv() {
            Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Move(intent)) => engine.set_move_intent(intent),
            Ok(GameLoopCommand::Step(dt)) => {
                let snapshot = engine.tick(dt);
                steps += 1;
                if snap_tx.send(snapshot).is_err() {
                    debug!("snapshot receiver dropped after {steps} steps");
                    return steps;
                }
            }
            Ok(GameLoopCommand::Shutdown) => {
                debug!("game loop shut down after {steps} steps");
                return steps;
            }
            Err(mpsc::RecvError) => return steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfall_core::config::SimConfig;
    use starfall_core::enums::GamePhase;

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::Play)).unwrap();
        tx.send(GameLoopCommand::Step(0.5)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();

        assert_eq!(
            commands,
            vec![
                GameLoopCommand::Player(PlayerCommand::Play),
                GameLoopCommand::Step(0.5),
                GameLoopCommand::Shutdown,
            ]
        );
    }

    #[test]
    fn test_step_returns_snapshot() {
        let handle = spawn_game_loop(engine()).unwrap();

        handle
            .commands
            .send(GameLoopCommand::Player(PlayerCommand::Play))
            .unwrap();
        handle.commands.send(GameLoopCommand::Step(0.1)).unwrap();
        let snap = handle.snapshots.recv().unwrap();

        assert_eq!(snap.tick, 1);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(handle.shutdown(), 1);
    }

    #[test]
    fn test_move_intent_reaches_engine() {
        let handle = spawn_game_loop(engine()).unwrap();
        let tx = &handle.commands;

        tx.send(GameLoopCommand::Player(PlayerCommand::Play)).unwrap();
        tx.send(GameLoopCommand::Move(MoveIntent {
            down: true,
            ..Default::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::Step(0.5)).unwrap();
        let snap = handle.snapshots.recv().unwrap();

        let [_, y] = snap.player_position.unwrap();
        assert!((y - 100.0).abs() < 1e-3);
        handle.shutdown();
    }

    #[test]
    fn test_loop_exits_when_driver_disconnects() {
        let handle = spawn_game_loop(engine()).unwrap();
        let GameLoopHandle {
            commands, thread, ..
        } = handle;

        commands.send(GameLoopCommand::Step(0.1)).unwrap();
        drop(commands);

        // The queued step still runs before the loop sees the disconnect
        assert_eq!(thread.join().unwrap(), 1);
    }
}
