#![warn(clippy::all, clippy::pedantic)]

use std::collections::HashSet;
use std::time::{Duration, Instant};

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::{BlockCoordinate, Counters, Grid, Piece, PieceQueue};
use crate::config::GameConfig;
use crate::events::{CounterKind, Listeners, LoopSignal};
use crate::highscores::ScoreStore;
use crate::scoring;
use crate::systems;

/// Lifecycle of the loop. `GameOver` is terminal: no placement or timeout is
/// processed after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    Initializing,
    Running,
    GameOver,
}

/// The timer-driven state machine coordinating grid, queue, clearing and
/// scoring. All mutation happens synchronously inside its methods; the armed
/// deadline is the only thing an external driver has to watch.
pub struct GameLoop {
    world: World,
    listeners: Listeners,
    status: LoopStatus,
    deadline: Option<Instant>,
    config: GameConfig,
    score_store: Option<Box<dyn ScoreStore + Send>>,
    high_score: u32,
}

impl GameLoop {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(Grid::new(config.cols, config.rows));
        world.insert_resource(Counters::new(config.starting_lives));
        Self {
            world,
            listeners: Listeners::default(),
            status: LoopStatus::Initializing,
            deadline: None,
            config,
            score_store: None,
            high_score: 0,
        }
    }

    /// Attach the persistence seam for the best recorded score. The store is
    /// queried once at `start` and written at game end.
    #[must_use]
    pub fn with_score_store(mut self, store: Box<dyn ScoreStore + Send>) -> Self {
        self.score_store = Some(store);
        self
    }

    // Listener registration. Notification is synchronous, on the thread
    // running the triggering operation.

    pub fn on_queue_change(&mut self, listener: impl FnMut(&Piece, &Piece) + Send + 'static) {
        self.listeners.add_piece_queue(listener);
    }

    pub fn on_line_cleared(
        &mut self,
        listener: impl FnMut(&HashSet<BlockCoordinate>) + Send + 'static,
    ) {
        self.listeners.add_line_cleared(listener);
    }

    pub fn on_right_click(&mut self, listener: impl FnMut(i32, i32) + Send + 'static) {
        self.listeners.add_right_click(listener);
    }

    pub fn on_loop_signal(&mut self, listener: impl FnMut(LoopSignal) + Send + 'static) {
        self.listeners.add_game_loop(listener);
    }

    pub fn on_counter_change(&mut self, listener: impl FnMut(CounterKind, u32) + Send + 'static) {
        self.listeners.add_counter(listener);
    }

    /// Populate the queue, load the best recorded score and arm the first
    /// placement window. Does nothing unless the loop is still initializing.
    pub fn start(&mut self) {
        if self.status != LoopStatus::Initializing {
            debug!("start ignored in state {:?}", self.status);
            return;
        }
        info!("starting game");

        self.high_score = self
            .score_store
            .as_ref()
            .and_then(|store| store.best_score())
            .unwrap_or(0);

        let (playable, preview) = systems::initialise_queue(&mut self.world);
        self.listeners.notify_queue(&playable, &preview);

        self.status = LoopStatus::Running;
        self.arm_timer();
    }

    /// Attempt to place the playable piece at anchor `(x, y)`.
    ///
    /// On success the queue advances, full lines are cleared and scored, and
    /// the timer is rearmed with a fresh delay. On failure nothing changes —
    /// in particular the running timer keeps its deadline — and `false` is
    /// the only signal.
    pub fn place(&mut self, x: i32, y: i32) -> bool {
        if self.status != LoopStatus::Running {
            debug!("placement ignored in state {:?}", self.status);
            return false;
        }

        let before = self.world.resource::<Counters>().clone();
        let Some(sweep) = systems::place_piece(&mut self.world, x, y) else {
            return false;
        };

        if sweep.lines > 0 {
            self.listeners.notify_line_cleared(&sweep.cleared);
        }
        self.announce_queue();
        self.emit_counter_changes(&before);
        self.arm_timer();
        true
    }

    /// Rotate the playable piece in place by `steps` quarter turns and
    /// re-announce the queue.
    pub fn rotate_piece(&mut self, steps: usize) {
        if self.status != LoopStatus::Running {
            return;
        }
        {
            let mut queue = self.world.resource_mut::<PieceQueue>();
            queue.rotate_current(steps);
        }
        self.announce_queue();
    }

    /// Exchange the playable piece and the preview, re-announcing the queue.
    pub fn swap_pieces(&mut self) {
        if self.status != LoopStatus::Running {
            return;
        }
        {
            let mut queue = self.world.resource_mut::<PieceQueue>();
            queue.swap_visible();
        }
        info!("swapped playable piece and preview");
        self.announce_queue();
    }

    /// A secondary click on a grid cell: forwarded to right-click listeners,
    /// then treated as one clockwise turn (three quarter turns).
    pub fn right_click(&mut self, x: i32, y: i32) {
        self.listeners.notify_right_click(x, y);
        self.rotate_piece(3);
    }

    /// Handle an elapsed placement window: a life is lost, the streak resets
    /// and the playable piece is discarded. Exhausting the last life ends the
    /// loop on this same timeout.
    pub fn on_timeout(&mut self) {
        if self.status != LoopStatus::Running {
            debug!("timeout ignored in state {:?}", self.status);
            return;
        }

        let before = self.world.resource::<Counters>().clone();
        let lives = systems::timeout_tick(&mut self.world);
        self.announce_queue();
        self.emit_counter_changes(&before);

        if lives == 0 {
            self.end();
        } else {
            self.arm_timer();
        }
    }

    /// Fire the timeout if the armed deadline has passed. Returns whether a
    /// timeout was processed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline && self.status == LoopStatus::Running => {
                self.on_timeout();
                true
            }
            _ => false,
        }
    }

    /// Stop the loop externally (menu exit, shutdown). The pending timer is
    /// cancelled and the end-of-loop signal fires; the final score is still
    /// recorded.
    pub fn stop(&mut self) {
        if self.status == LoopStatus::Running {
            self.end();
        }
    }

    fn end(&mut self) {
        self.status = LoopStatus::GameOver;
        self.deadline = None;

        let score = self.score();
        info!("game over with score {score}");
        if score > self.high_score {
            self.high_score = score;
            if let Some(store) = self.score_store.as_mut() {
                if let Err(error) = store.record(score) {
                    warn!("failed to record score: {error:#}");
                }
            }
        }

        self.listeners.notify_loop(LoopSignal::Ended);
    }

    fn arm_timer(&mut self) {
        let delay = self.timer_delay_ms();
        self.deadline = Some(Instant::now() + Duration::from_millis(delay));
        self.listeners.notify_loop(LoopSignal::Armed { delay_ms: delay });
    }

    fn announce_queue(&mut self) {
        let (playable, preview) = {
            let queue = self.world.resource::<PieceQueue>();
            (queue.current(), queue.next())
        };
        self.listeners.notify_queue(&playable, &preview);
    }

    fn emit_counter_changes(&mut self, before: &Counters) {
        let after = self.world.resource::<Counters>().clone();
        if after.score != before.score {
            self.listeners.notify_counter(CounterKind::Score, after.score);
        }
        if after.level != before.level {
            self.listeners.notify_counter(CounterKind::Level, after.level);
        }
        if after.lives != before.lives {
            self.listeners.notify_counter(CounterKind::Lives, after.lives);
        }
        if after.multiplier != before.multiplier {
            self.listeners
                .notify_counter(CounterKind::Multiplier, after.multiplier);
        }
    }

    /// Current placement window from the config's delay curve.
    #[must_use]
    pub fn timer_delay_ms(&self) -> u64 {
        let level = self.world.resource::<Counters>().level;
        scoring::delay_ms(
            level,
            self.config.base_delay_ms,
            self.config.delay_step_ms,
            self.config.min_delay_ms,
        )
    }

    #[must_use]
    pub fn status(&self) -> LoopStatus {
        self.status
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.world.resource::<Grid>()
    }

    /// The playable piece, for presentation. Only valid once started.
    #[must_use]
    pub fn playable_piece(&self) -> Option<Piece> {
        self.world
            .get_resource::<PieceQueue>()
            .map(PieceQueue::current)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.world.resource::<Counters>().score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.world.resource::<Counters>().level
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.world.resource::<Counters>().lives
    }

    #[must_use]
    pub fn multiplier(&self) -> u32 {
        self.world.resource::<Counters>().multiplier
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
