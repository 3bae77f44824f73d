#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use crate::config::GameConfig;
    use crate::events::LoopSignal;
    use crate::game_loop::GameLoop;
    use crate::runner::{spawn, PlayerAction};

    // Spin until the condition holds or the budget runs out
    fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    // A config whose first window is far longer than any test
    fn slow_config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_spawn_starts_the_game() {
        let signals = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&signals);

        let mut game = GameLoop::new(slow_config());
        game.on_loop_signal(move |signal| sink.lock().unwrap().push(signal));

        let handle = spawn(game);
        assert!(wait_for(|| !signals.lock().unwrap().is_empty()));
        assert_eq!(
            signals.lock().unwrap()[0],
            LoopSignal::Armed { delay_ms: 12_000 }
        );

        handle.stop().expect("game thread exits cleanly");
    }

    #[test]
    fn test_actions_reach_the_game_thread() {
        let announcements = Arc::new(Mutex::new(0u32));
        let sink = Arc::clone(&announcements);

        let mut game = GameLoop::new(slow_config());
        game.on_queue_change(move |_, _| *sink.lock().unwrap() += 1);

        let handle = spawn(game);
        assert!(wait_for(|| *announcements.lock().unwrap() >= 1));

        // Any catalog piece fits at the centre of an empty board, so a
        // placement always advances and re-announces the queue
        assert!(handle.place(2, 2));
        assert!(wait_for(|| *announcements.lock().unwrap() >= 2));

        assert!(handle.rotate(1));
        assert!(handle.swap());
        assert!(wait_for(|| *announcements.lock().unwrap() >= 4));

        handle.stop().expect("game thread exits cleanly");
    }

    #[test]
    fn test_right_click_forwards_coordinates() {
        let clicks = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&clicks);

        let mut game = GameLoop::new(slow_config());
        game.on_right_click(move |x, y| sink.lock().unwrap().push((x, y)));

        let handle = spawn(game);
        assert!(handle.right_click(1, 4));
        assert!(wait_for(|| !clicks.lock().unwrap().is_empty()));
        assert_eq!(*clicks.lock().unwrap(), vec![(1, 4)]);

        handle.stop().expect("game thread exits cleanly");
    }

    #[test]
    fn test_timeouts_end_the_game_without_input() {
        let signals = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&signals);

        let config = GameConfig {
            starting_lives: 2,
            base_delay_ms: 20,
            delay_step_ms: 0,
            min_delay_ms: 10,
            ..GameConfig::default()
        };
        let mut game = GameLoop::new(config);
        game.on_loop_signal(move |signal| sink.lock().unwrap().push(signal));

        let handle = spawn(game);
        assert!(wait_for(|| {
            signals.lock().unwrap().contains(&LoopSignal::Ended)
        }));

        // Two lives, two windows: armed twice, then ended
        let signals = signals.lock().unwrap();
        let armed = signals
            .iter()
            .filter(|signal| matches!(signal, LoopSignal::Armed { .. }))
            .count();
        assert_eq!(armed, 2);
        assert_eq!(signals.last(), Some(&LoopSignal::Ended));

        handle.join().expect("game thread exits on its own");
    }

    #[test]
    fn test_stop_is_deterministic() {
        let signals = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&signals);

        let mut game = GameLoop::new(slow_config());
        game.on_loop_signal(move |signal| sink.lock().unwrap().push(signal));

        let handle = spawn(game);
        handle.stop().expect("game thread exits cleanly");

        // After the join returns the end signal has fired exactly once and
        // nothing fires later
        let count = {
            let signals = signals.lock().unwrap();
            assert_eq!(signals.last(), Some(&LoopSignal::Ended));
            assert_eq!(
                signals
                    .iter()
                    .filter(|signal| **signal == LoopSignal::Ended)
                    .count(),
                1
            );
            signals.len()
        };

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(signals.lock().unwrap().len(), count);
    }

    #[test]
    fn test_drop_shuts_the_thread_down() {
        let game = GameLoop::new(slow_config());
        let handle = spawn(game);
        assert!(handle.send(PlayerAction::Rotate { steps: 1 }));
        drop(handle);
        // Dropping must not hang or panic; reaching this line is the test
    }
}
