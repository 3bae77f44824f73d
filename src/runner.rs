#![warn(clippy::all, clippy::pedantic)]

use std::thread::{self, JoinHandle};
use std::time::Instant;

use anyhow::{anyhow, Result};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use log::{debug, info};

use crate::game_loop::{GameLoop, LoopStatus};

/// Player inputs accepted by the game thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Place { x: i32, y: i32 },
    Rotate { steps: usize },
    Swap,
    RightClick { x: i32, y: i32 },
    Stop,
}

/// Handle to a game running on its own thread.
///
/// The thread owns the `GameLoop` outright and interleaves player actions
/// with timer expiry through a single `recv_timeout`, so a timeout can never
/// run concurrently with a placement handler.
pub struct GameHandle {
    sender: Sender<PlayerAction>,
    thread: Option<JoinHandle<()>>,
}

/// Move `game` onto a dedicated thread and start it. Listeners must be
/// registered before spawning; they run on the game thread.
#[must_use]
pub fn spawn(game: GameLoop) -> GameHandle {
    let (sender, receiver) = bounded(64);

    let thread = thread::spawn(move || {
        run_game_thread(game, &receiver);
    });

    GameHandle {
        sender,
        thread: Some(thread),
    }
}

fn run_game_thread(mut game: GameLoop, receiver: &Receiver<PlayerAction>) {
    game.start();

    loop {
        let action = match game.deadline() {
            Some(deadline) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                match receiver.recv_timeout(wait) {
                    Ok(action) => Some(action),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            // No armed timer; just wait for input
            None => match receiver.recv() {
                Ok(action) => Some(action),
                Err(_) => break,
            },
        };

        match action {
            None => game.on_timeout(),
            Some(PlayerAction::Stop) => break,
            Some(PlayerAction::Place { x, y }) => {
                let placed = game.place(x, y);
                debug!("placement at ({x},{y}) -> {placed}");
            }
            Some(PlayerAction::Rotate { steps }) => game.rotate_piece(steps),
            Some(PlayerAction::Swap) => game.swap_pieces(),
            Some(PlayerAction::RightClick { x, y }) => game.right_click(x, y),
        }

        if game.status() == LoopStatus::GameOver {
            break;
        }
    }

    // Deterministic cancellation: the pending timer dies with the thread and
    // no listener fires after this point
    game.stop();
    info!("game thread finished");
}

impl GameHandle {
    /// Queue a player action. Returns `false` when the game thread is gone or
    /// the channel is full.
    pub fn send(&self, action: PlayerAction) -> bool {
        self.sender.try_send(action).is_ok()
    }

    pub fn place(&self, x: i32, y: i32) -> bool {
        self.send(PlayerAction::Place { x, y })
    }

    pub fn rotate(&self, steps: usize) -> bool {
        self.send(PlayerAction::Rotate { steps })
    }

    pub fn swap(&self) -> bool {
        self.send(PlayerAction::Swap)
    }

    pub fn right_click(&self, x: i32, y: i32) -> bool {
        self.send(PlayerAction::RightClick { x, y })
    }

    /// Stop the loop and wait for the game thread to exit.
    pub fn stop(mut self) -> Result<()> {
        let _ = self.sender.send(PlayerAction::Stop);
        self.join_thread()
    }

    /// Wait for the game thread to finish on its own (lives exhausted).
    pub fn join(mut self) -> Result<()> {
        self.join_thread()
    }

    fn join_thread(&mut self) -> Result<()> {
        match self.thread.take() {
            Some(thread) => thread.join().map_err(|_| anyhow!("game thread panicked")),
            None => Ok(()),
        }
    }
}

impl Drop for GameHandle {
    fn drop(&mut self) {
        let _ = self.sender.try_send(PlayerAction::Stop);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
