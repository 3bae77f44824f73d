#[cfg(test)]
mod tests {
    use crate::components::Counters;
    use crate::game::STARTING_LIVES;
    use crate::scoring::{apply_sweep, reset_multiplier};

    #[test]
    fn test_counters_start_clean() {
        let counters = Counters::default();
        assert_eq!(counters.score, 0);
        assert_eq!(counters.level, 0);
        assert_eq!(counters.lives, STARTING_LIVES);
        assert_eq!(counters.multiplier, 1);
    }

    #[test]
    fn test_single_line_clear_scores() {
        let mut counters = Counters::default();
        // One full row on a 5-wide board: 1 line, 5 blocks
        apply_sweep(&mut counters, 1, 5);
        assert_eq!(counters.score, 50);
        assert_eq!(counters.multiplier, 2);
        assert_eq!(counters.level, 0);
    }

    #[test]
    fn test_non_clearing_placement_scores_nothing() {
        let mut counters = Counters::default();
        apply_sweep(&mut counters, 0, 0);
        assert_eq!(counters.score, 0);
        assert_eq!(counters.multiplier, 1);
    }

    #[test]
    fn test_multiplier_applies_before_increment() {
        let mut counters = Counters::default();
        apply_sweep(&mut counters, 1, 5);
        assert_eq!(counters.score, 50);

        // Second consecutive clear is worth double
        apply_sweep(&mut counters, 1, 5);
        assert_eq!(counters.score, 150);
        assert_eq!(counters.multiplier, 3);

        // Third is worth triple
        apply_sweep(&mut counters, 1, 5);
        assert_eq!(counters.score, 300);
        assert_eq!(counters.multiplier, 4);
    }

    #[test]
    fn test_non_clearing_placement_resets_streak() {
        let mut counters = Counters::default();
        apply_sweep(&mut counters, 1, 5);
        apply_sweep(&mut counters, 1, 5);
        assert_eq!(counters.multiplier, 3);

        apply_sweep(&mut counters, 0, 0);
        assert_eq!(counters.multiplier, 1);
        // Score is untouched by the reset
        assert_eq!(counters.score, 150);
    }

    #[test]
    fn test_intersection_scoring() {
        let mut counters = Counters::default();
        // A simultaneous row and column on 5x5: 2 lines, 9 distinct blocks
        apply_sweep(&mut counters, 2, 9);
        assert_eq!(counters.score, 180);
        assert_eq!(counters.multiplier, 2);
    }

    #[test]
    fn test_level_is_score_over_thousand() {
        let mut counters = Counters::default();
        counters.score = 950;
        apply_sweep(&mut counters, 1, 5);
        assert_eq!(counters.score, 1000);
        assert_eq!(counters.level, 1);

        counters.score = 2_950;
        apply_sweep(&mut counters, 1, 5);
        assert_eq!(counters.score, 3_050);
        assert_eq!(counters.level, 3);
    }

    #[test]
    fn test_reset_multiplier() {
        let mut counters = Counters::default();
        counters.multiplier = 7;
        reset_multiplier(&mut counters);
        assert_eq!(counters.multiplier, 1);
    }
}
