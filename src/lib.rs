pub mod clear;
pub mod components;
pub mod config;
pub mod events;
pub mod game;
pub mod game_loop;
pub mod highscores;
pub mod runner;
pub mod scoring;
pub mod systems;

#[cfg(test)]
mod tests;

pub use components::{BlockCoordinate, Counters, Grid, Piece, PieceQueue};
pub use config::GameConfig;
pub use events::{CounterKind, LoopSignal};
pub use game_loop::{GameLoop, LoopStatus};
pub use highscores::{ScoreStore, TomlScoreStore};
pub use runner::{GameHandle, PlayerAction};
