#![warn(clippy::all, clippy::pedantic)]

use std::collections::HashSet;

use crate::components::{BlockCoordinate, Piece};

/// Which observable counter changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Score,
    Level,
    Lives,
    Multiplier,
}

/// Lifecycle signals of the loop timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    /// A fresh placement window was armed.
    Armed { delay_ms: u64 },
    /// The loop ended: lives exhausted or stopped externally.
    Ended,
}

/// Invoked with the two visible queue slots (playable piece, preview)
/// whenever the queue changes.
pub type PieceQueueListener = Box<dyn FnMut(&Piece, &Piece) + Send>;

/// Invoked with the set of cleared cells, once per clearing placement.
pub type LineClearedListener = Box<dyn FnMut(&HashSet<BlockCoordinate>) + Send>;

/// Invoked with the grid cell of a secondary click.
pub type RightClickListener = Box<dyn FnMut(i32, i32) + Send>;

/// Invoked on loop timer lifecycle signals.
pub type GameLoopListener = Box<dyn FnMut(LoopSignal) + Send>;

/// Invoked with a counter's new value after it changes.
pub type CounterListener = Box<dyn FnMut(CounterKind, u32) + Send>;

/// Registered callbacks, one collection per event kind. Notification is
/// synchronous, in registration order, on the thread running the triggering
/// operation.
#[derive(Default)]
pub struct Listeners {
    piece_queue: Vec<PieceQueueListener>,
    line_cleared: Vec<LineClearedListener>,
    right_click: Vec<RightClickListener>,
    game_loop: Vec<GameLoopListener>,
    counter: Vec<CounterListener>,
}

impl Listeners {
    pub fn add_piece_queue(&mut self, listener: impl FnMut(&Piece, &Piece) + Send + 'static) {
        self.piece_queue.push(Box::new(listener));
    }

    pub fn add_line_cleared(
        &mut self,
        listener: impl FnMut(&HashSet<BlockCoordinate>) + Send + 'static,
    ) {
        self.line_cleared.push(Box::new(listener));
    }

    pub fn add_right_click(&mut self, listener: impl FnMut(i32, i32) + Send + 'static) {
        self.right_click.push(Box::new(listener));
    }

    pub fn add_game_loop(&mut self, listener: impl FnMut(LoopSignal) + Send + 'static) {
        self.game_loop.push(Box::new(listener));
    }

    pub fn add_counter(&mut self, listener: impl FnMut(CounterKind, u32) + Send + 'static) {
        self.counter.push(Box::new(listener));
    }

    pub(crate) fn notify_queue(&mut self, playable: &Piece, preview: &Piece) {
        for listener in &mut self.piece_queue {
            listener(playable, preview);
        }
    }

    pub(crate) fn notify_line_cleared(&mut self, cleared: &HashSet<BlockCoordinate>) {
        for listener in &mut self.line_cleared {
            listener(cleared);
        }
    }

    pub(crate) fn notify_right_click(&mut self, x: i32, y: i32) {
        for listener in &mut self.right_click {
            listener(x, y);
        }
    }

    pub(crate) fn notify_loop(&mut self, signal: LoopSignal) {
        for listener in &mut self.game_loop {
            listener(signal);
        }
    }

    pub(crate) fn notify_counter(&mut self, kind: CounterKind, value: u32) {
        for listener in &mut self.counter {
            listener(kind, value);
        }
    }
}
