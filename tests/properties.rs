//! Property tests over the leaderboard, movement bounds, and level quotas

use glam::Vec2;
use proptest::prelude::*;

use turkey_shoot::consts::{SCREEN_WIDTH, ZIGZAG_STEP};
use turkey_shoot::highscores::{HighScores, MAX_HIGH_SCORES};
use turkey_shoot::sim::movement::update_enemy;
use turkey_shoot::sim::state::{Difficulty, Enemy, EnemyKind};
use turkey_shoot::sim::LevelDirector;

proptest! {
    #[test]
    fn leaderboard_stays_sorted_and_capped(scores in proptest::collection::vec(0u64..100_000, 1..40)) {
        let mut board = HighScores::default();
        for (i, score) in scores.iter().enumerate() {
            board.commit(Difficulty::Medium, &format!("p{i}"), *score, 1, "2026-08-23".into());

            let entries = board.entries(Difficulty::Medium);
            prop_assert!(entries.len() <= MAX_HIGH_SCORES);
            prop_assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));
        }

        // The surviving entries are exactly the top scores committed
        let mut expected = scores.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(MAX_HIGH_SCORES);
        let kept: Vec<u64> = board
            .entries(Difficulty::Medium)
            .iter()
            .map(|e| e.score)
            .collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn zigzag_never_leaves_its_lane(
        start_x in 0.0f32..=(SCREEN_WIDTH - 60.0),
        dir in prop::bool::ANY,
        ticks in 1usize..2000,
    ) {
        let kind = EnemyKind::PumpkinPie;
        let max_x = SCREEN_WIDTH - kind.size().x;
        let mut enemy = Enemy {
            id: 1,
            kind,
            pos: Vec2::new(start_x.min(max_x), 0.0),
            speed: kind.base_speed(),
            health: kind.max_health(),
            zigzag_dir: if dir { 1.0 } else { -1.0 },
            phase_offset: 0.0,
            spawn_x: start_x.min(max_x),
            active: true,
        };

        for _ in 0..ticks {
            update_enemy(&mut enemy, 1.0, None);
            prop_assert!(enemy.pos.x >= 0.0 && enemy.pos.x <= max_x);
            // Direction flips sign only; the step magnitude is constant
            prop_assert!(enemy.zigzag_dir.abs() * ZIGZAG_STEP == ZIGZAG_STEP);
        }
    }

    #[test]
    fn every_level_allots_at_least_one_enemy(levels in 1u32..200, difficulty in 0usize..3) {
        let difficulty = Difficulty::ALL[difficulty];
        let mut director = LevelDirector::new(difficulty, 0);
        for _ in 1..levels {
            director.advance(0);
            prop_assert!(director.allotted() >= 1);
        }
    }

    #[test]
    fn speed_multiplier_never_decreases_with_level(levels in 1u32..100) {
        let mut director = LevelDirector::new(Difficulty::Medium, 0);
        let mut last = director.speed_multiplier();
        for _ in 1..levels {
            director.advance(0);
            let next = director.speed_multiplier();
            prop_assert!(next >= last);
            last = next;
        }
    }
}
