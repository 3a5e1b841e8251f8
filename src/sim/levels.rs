//! Level progression and spawn direction
//!
//! Computes the enemy quota, unlocked roster, and spawn cadence per level and
//! difficulty. Level advancement is instantaneous: once the quota is spawned
//! and the field is clear, the next level starts within the same frame.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Difficulty, EnemyKind};
use crate::consts::*;
use crate::ms_to_ticks;

/// Non-boss kinds unlocked per level, sorted by level. The roster
/// accumulates; duplicates are ignored.
const ENEMY_UNLOCKS: &[(u32, &[EnemyKind])] = &[
    (1, &[EnemyKind::Turkey, EnemyKind::Cranberry]),
    (2, &[EnemyKind::PumpkinPie]),
    (4, &[EnemyKind::Stuffing]),
    (6, &[EnemyKind::MashedPotato]),
    (8, &[EnemyKind::GreenBeanCasserole]),
];

/// Drives enemy quota, roster, and spawn cadence for the current level
#[derive(Debug, Clone)]
pub struct LevelDirector {
    difficulty: Difficulty,
    level: u32,
    allotted: u32,
    spawned: u32,
    last_spawn_tick: u64,
    spawn_interval_ticks: u64,
}

impl LevelDirector {
    pub fn new(difficulty: Difficulty, now: u64) -> Self {
        let mut director = Self {
            difficulty,
            level: 1,
            allotted: 0,
            spawned: 0,
            last_spawn_tick: now,
            spawn_interval_ticks: ms_to_ticks(difficulty.spawn_interval_ms()),
        };
        director.allotted = director.allotment_for(1);
        director
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn allotted(&self) -> u32 {
        self.allotted
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn is_boss_level(&self) -> bool {
        self.level % BOSS_LEVEL_INTERVAL == 0
    }

    /// Enemy quota for a level: 10 × (1 + 0.2·(N−1)) × count multiplier,
    /// halved-plus-one on boss levels (guarantees at least the boss)
    fn allotment_for(&self, level: u32) -> u32 {
        let level_factor = 1.0 + (level - 1) as f32 * LEVEL_ENEMY_INCREASE;
        let mut total =
            (BASE_ENEMY_COUNT * level_factor * self.difficulty.count_multiplier()) as u32;
        if level % BOSS_LEVEL_INTERVAL == 0 {
            total = total / 2 + 1;
        }
        total.max(1)
    }

    /// Effective enemy-speed multiplier for the current level and difficulty:
    /// 10% faster every three levels on top of the difficulty base
    pub fn speed_multiplier(&self) -> f32 {
        let steps = (self.level - 1) / LEVELS_PER_SPEED_STEP;
        self.difficulty.speed_multiplier() * (1.0 + steps as f32 * LEVEL_SPEED_INCREASE)
    }

    /// Non-boss kinds unlocked at the current level. Falls back to the
    /// turkey if the table ever yields nothing.
    pub fn unlocked_kinds(&self) -> Vec<EnemyKind> {
        let mut kinds = Vec::new();
        for &(level, unlocked) in ENEMY_UNLOCKS {
            if level > self.level {
                continue;
            }
            for &kind in unlocked {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }
        if kinds.is_empty() {
            kinds.push(EnemyKind::Turkey);
        }
        kinds
    }

    /// Whether the quota and cadence allow a spawn this tick
    pub fn can_spawn(&self, now: u64) -> bool {
        self.spawned < self.allotted && now - self.last_spawn_tick >= self.spawn_interval_ticks
    }

    /// Pick the next kind to spawn, if the cadence allows one.
    ///
    /// The first spawn of a boss level is always the gravy boat; every other
    /// spawn draws uniformly at random from the unlocked non-boss roster.
    pub fn next_spawn(&mut self, now: u64, rng: &mut Pcg32) -> Option<EnemyKind> {
        if !self.can_spawn(now) {
            return None;
        }

        let kind = if self.is_boss_level() && self.spawned == 0 {
            EnemyKind::GravyBoat
        } else {
            let kinds = self.unlocked_kinds();
            kinds[rng.random_range(0..kinds.len())]
        };

        self.spawned += 1;
        self.last_spawn_tick = now;
        debug_assert!(self.spawned <= self.allotted);
        Some(kind)
    }

    /// Level is complete once the quota is spawned and the field is clear
    pub fn is_complete(&self, active_enemies: usize) -> bool {
        self.spawned == self.allotted && active_enemies == 0
    }

    /// Advance to the next level immediately, resetting the spawn counters
    pub fn advance(&mut self, now: u64) {
        self.level += 1;
        self.allotted = self.allotment_for(self.level);
        self.spawned = 0;
        self.last_spawn_tick = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn director_at(difficulty: Difficulty, level: u32) -> LevelDirector {
        let mut director = LevelDirector::new(difficulty, 0);
        for _ in 1..level {
            director.advance(0);
        }
        director
    }

    #[test]
    fn easy_level_one_allots_eight() {
        let director = LevelDirector::new(Difficulty::Easy, 0);
        assert_eq!(director.allotted(), 8);
    }

    #[test]
    fn easy_level_five_is_a_halved_boss_level() {
        // floor(10 × 1.8 × 0.8) = 14, halved-plus-one = 8
        let director = director_at(Difficulty::Easy, 5);
        assert!(director.is_boss_level());
        assert_eq!(director.allotted(), 8);
    }

    #[test]
    fn first_boss_level_spawn_is_the_gravy_boat() {
        let mut director = director_at(Difficulty::Easy, 5);
        let mut rng = Pcg32::seed_from_u64(1);
        let interval = ms_to_ticks(Difficulty::Easy.spawn_interval_ms());

        let first = director.next_spawn(interval, &mut rng);
        assert_eq!(first, Some(EnemyKind::GravyBoat));

        // Every later spawn of the level draws from the non-boss pool
        let mut now = interval;
        while director.spawned() < director.allotted() {
            now += interval;
            let kind = director.next_spawn(now, &mut rng).unwrap();
            assert!(!kind.is_boss());
        }
    }

    #[test]
    fn boss_never_spawns_on_regular_levels() {
        let mut director = LevelDirector::new(Difficulty::Medium, 0);
        let mut rng = Pcg32::seed_from_u64(7);
        let interval = ms_to_ticks(Difficulty::Medium.spawn_interval_ms());

        let mut now = 0;
        while director.spawned() < director.allotted() {
            now += interval;
            let kind = director.next_spawn(now, &mut rng).unwrap();
            assert!(!kind.is_boss());
        }
    }

    #[test]
    fn roster_accumulates_with_level() {
        assert_eq!(
            director_at(Difficulty::Easy, 1).unlocked_kinds(),
            vec![EnemyKind::Turkey, EnemyKind::Cranberry]
        );
        assert_eq!(
            director_at(Difficulty::Easy, 3).unlocked_kinds(),
            vec![EnemyKind::Turkey, EnemyKind::Cranberry, EnemyKind::PumpkinPie]
        );
        let at_eight = director_at(Difficulty::Easy, 8).unlocked_kinds();
        assert_eq!(at_eight.len(), 6);
        assert!(at_eight.contains(&EnemyKind::GreenBeanCasserole));
        assert!(!at_eight.contains(&EnemyKind::GravyBoat));
    }

    #[test]
    fn cadence_gates_spawning() {
        let mut director = LevelDirector::new(Difficulty::Easy, 0);
        let mut rng = Pcg32::seed_from_u64(3);
        let interval = ms_to_ticks(Difficulty::Easy.spawn_interval_ms());

        assert_eq!(director.next_spawn(interval - 1, &mut rng), None);
        assert!(director.next_spawn(interval, &mut rng).is_some());
        // Cadence resets from the spawn tick
        assert_eq!(director.next_spawn(interval + 1, &mut rng), None);
        assert!(director.next_spawn(interval * 2, &mut rng).is_some());
    }

    #[test]
    fn quota_caps_spawning() {
        let mut director = LevelDirector::new(Difficulty::Easy, 0);
        let mut rng = Pcg32::seed_from_u64(9);
        let interval = ms_to_ticks(Difficulty::Easy.spawn_interval_ms());

        let mut now = 0;
        for _ in 0..director.allotted() {
            now += interval;
            assert!(director.next_spawn(now, &mut rng).is_some());
        }
        assert_eq!(director.next_spawn(now + interval * 10, &mut rng), None);
    }

    #[test]
    fn completion_requires_quota_spawned_and_field_clear() {
        let mut director = LevelDirector::new(Difficulty::Easy, 0);
        assert!(!director.is_complete(0));

        let mut rng = Pcg32::seed_from_u64(4);
        let interval = ms_to_ticks(Difficulty::Easy.spawn_interval_ms());
        let mut now = 0;
        while director.spawned() < director.allotted() {
            now += interval;
            director.next_spawn(now, &mut rng);
        }
        assert!(!director.is_complete(3));
        assert!(director.is_complete(0));
    }

    #[test]
    fn advance_moves_to_the_next_level_and_resets_counters() {
        let mut director = LevelDirector::new(Difficulty::Medium, 0);
        director.advance(500);
        assert_eq!(director.level(), 2);
        assert_eq!(director.spawned(), 0);
        // floor(10 × 1.2 × 1.2) = 14
        assert_eq!(director.allotted(), 14);
    }

    #[test]
    fn speed_multiplier_steps_every_three_levels() {
        assert_eq!(director_at(Difficulty::Easy, 1).speed_multiplier(), 1.0);
        assert_eq!(director_at(Difficulty::Easy, 3).speed_multiplier(), 1.0);
        assert_eq!(director_at(Difficulty::Easy, 4).speed_multiplier(), 1.1);
        assert_eq!(director_at(Difficulty::Hard, 7).speed_multiplier(), 2.0 * 1.2);
    }

    #[test]
    fn allotment_is_always_at_least_one() {
        for difficulty in Difficulty::ALL {
            let mut director = LevelDirector::new(difficulty, 0);
            for _ in 0..100 {
                assert!(director.allotted() >= 1);
                director.advance(0);
            }
        }
    }
}
