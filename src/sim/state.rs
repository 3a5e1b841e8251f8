//! Game state and core simulation types
//!
//! The run context (`GameState`) owns every transient entity collection and
//! is threaded explicitly through the frame update, so the whole loop can be
//! driven with synthetic inputs and a synthetic clock.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::effects::{ActiveEffects, EffectKind};
use super::levels::LevelDirector;
use super::messages::MessageLog;
use crate::consts::*;
use crate::ms_to_ticks;

/// Difficulty presets controlling lives, multipliers, and spawn cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn starting_lives(&self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 3,
            Difficulty::Hard => 2,
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    pub fn count_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Medium => 1.2,
            Difficulty::Hard => 1.4,
        }
    }

    pub fn spawn_interval_ms(&self) -> u64 {
        match self {
            Difficulty::Easy => 1250,
            Difficulty::Medium => 1000,
            Difficulty::Hard => 750,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active simulation
    Playing,
    /// Clock frozen, nothing moves or expires
    Paused,
    /// Run ended; the frame update becomes a no-op
    GameOver,
}

/// Movement behaviors for enemies (closed set, exhaustively matched)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Straight,
    Zigzag,
    SineWave,
    TrackPlayer,
}

/// The enemy roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Cranberry,
    Turkey,
    PumpkinPie,
    Stuffing,
    MashedPotato,
    GreenBeanCasserole,
    /// The boss: first spawn of every boss level, never in the random pool
    GravyBoat,
}

impl EnemyKind {
    pub fn size(&self) -> Vec2 {
        match self {
            EnemyKind::Cranberry => Vec2::new(45.0, 45.0),
            EnemyKind::Turkey => Vec2::new(90.0, 90.0),
            EnemyKind::PumpkinPie => Vec2::new(60.0, 60.0),
            EnemyKind::Stuffing => Vec2::new(85.0, 85.0),
            EnemyKind::MashedPotato => Vec2::new(65.0, 65.0),
            EnemyKind::GreenBeanCasserole => Vec2::new(100.0, 100.0),
            EnemyKind::GravyBoat => Vec2::new(110.0, 110.0),
        }
    }

    /// Descent speed in pixels per tick, before multipliers
    pub fn base_speed(&self) -> f32 {
        match self {
            EnemyKind::Cranberry => 2.5,
            EnemyKind::Turkey => 1.5,
            EnemyKind::PumpkinPie => 2.0,
            EnemyKind::Stuffing => 1.5,
            EnemyKind::MashedPotato => 2.0,
            EnemyKind::GreenBeanCasserole => 1.6,
            EnemyKind::GravyBoat => 1.3,
        }
    }

    pub fn max_health(&self) -> u32 {
        match self {
            EnemyKind::Cranberry => 1,
            EnemyKind::Turkey => 3,
            EnemyKind::PumpkinPie => 2,
            EnemyKind::Stuffing => 5,
            EnemyKind::MashedPotato => 3,
            EnemyKind::GreenBeanCasserole => 20,
            EnemyKind::GravyBoat => 10,
        }
    }

    pub fn points(&self) -> u64 {
        match self {
            EnemyKind::Cranberry => 50,
            EnemyKind::Turkey => 100,
            EnemyKind::PumpkinPie => 150,
            EnemyKind::Stuffing => 200,
            EnemyKind::MashedPotato => 75,
            EnemyKind::GreenBeanCasserole => 300,
            EnemyKind::GravyBoat => 500,
        }
    }

    pub fn movement(&self) -> MovementKind {
        match self {
            EnemyKind::Cranberry => MovementKind::Straight,
            EnemyKind::Turkey => MovementKind::Straight,
            EnemyKind::PumpkinPie => MovementKind::Zigzag,
            EnemyKind::Stuffing => MovementKind::Straight,
            EnemyKind::MashedPotato => MovementKind::Straight,
            EnemyKind::GreenBeanCasserole => MovementKind::TrackPlayer,
            EnemyKind::GravyBoat => MovementKind::SineWave,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EnemyKind::Cranberry => "Cranberry",
            EnemyKind::Turkey => "Turkey",
            EnemyKind::PumpkinPie => "Pumpkin Pie",
            EnemyKind::Stuffing => "Stuffing",
            EnemyKind::MashedPotato => "Mashed Potato",
            EnemyKind::GreenBeanCasserole => "Green Bean Casserole",
            EnemyKind::GravyBoat => "Gravy Boat",
        }
    }

    /// Asset id for the sprite provider
    pub fn sprite_id(&self) -> &'static str {
        match self {
            EnemyKind::Cranberry => "cranberry",
            EnemyKind::Turkey => "turkey",
            EnemyKind::PumpkinPie => "pumpkin_pie",
            EnemyKind::Stuffing => "stuffing",
            EnemyKind::MashedPotato => "mashed_potato",
            EnemyKind::GreenBeanCasserole => "green_bean_casserole",
            EnemyKind::GravyBoat => "gravy_boat",
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self, EnemyKind::GravyBoat)
    }
}

/// Player-controlled turret, pinned to a lane near the bottom
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner; y never changes after construction
    pub pos: Vec2,
    last_shot_tick: u64,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(
                SCREEN_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
                SCREEN_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
            ),
            last_shot_tick: 0,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT) / 2.0
    }

    /// Where bullets spawn (tip of the gun)
    pub fn gun_position(&self) -> Vec2 {
        Vec2::new(self.pos.x + PLAYER_WIDTH / 2.0, self.pos.y - PLAYER_GUN_HEIGHT)
    }

    /// Effective cooldown is the base cooldown scaled by the fire-rate
    /// multiplier (1.0 when inactive)
    pub fn can_shoot(&self, now: u64, cooldown_multiplier: f32) -> bool {
        let base = ms_to_ticks(PLAYER_SHOOT_COOLDOWN_MS) as f32;
        now - self.last_shot_tick >= (base * cooldown_multiplier) as u64
    }

    pub fn mark_shot(&mut self, now: u64) {
        self.last_shot_tick = now;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A player bullet, moving straight up at a fixed speed
#[derive(Debug, Clone)]
pub struct Bullet {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub active: bool,
}

impl Bullet {
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT))
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A descending enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Kind base speed scaled by the level/difficulty multiplier at spawn
    pub speed: f32,
    pub health: u32,
    /// Zigzag direction sign (+1 right, -1 left)
    pub zigzag_dir: f32,
    /// Sine-wave phase offset, randomized at spawn
    pub phase_offset: f32,
    /// Spawn x anchor for sine-wave movement
    pub spawn_x: f32,
    pub active: bool,
}

impl Enemy {
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.kind.size())
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.kind.size() / 2.0
    }

    /// Apply damage; returns true when the enemy is destroyed
    pub fn take_damage(&mut self, damage: u32) -> bool {
        self.health = self.health.saturating_sub(damage);
        if self.health == 0 {
            self.active = false;
            true
        } else {
            false
        }
    }
}

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    FireRate,
    ExtraLife,
    SpeedBoost,
    SlowEnemies,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::FireRate,
        PowerUpKind::ExtraLife,
        PowerUpKind::SpeedBoost,
        PowerUpKind::SlowEnemies,
    ];

    pub fn radius(&self) -> f32 {
        match self {
            PowerUpKind::FireRate => 25.0,
            PowerUpKind::ExtraLife => 25.0,
            PowerUpKind::SpeedBoost => 30.0,
            PowerUpKind::SlowEnemies => 20.0,
        }
    }

    /// Effect duration in milliseconds (0 = instant, applied once on pickup)
    pub fn duration_ms(&self) -> u64 {
        match self {
            PowerUpKind::ExtraLife => 0,
            PowerUpKind::FireRate | PowerUpKind::SpeedBoost | PowerUpKind::SlowEnemies => 10_000,
        }
    }

    /// The timed effect this pickup activates, if any
    pub fn effect(&self) -> Option<EffectKind> {
        match self {
            PowerUpKind::FireRate => Some(EffectKind::FireRate),
            PowerUpKind::SpeedBoost => Some(EffectKind::SpeedBoost),
            PowerUpKind::SlowEnemies => Some(EffectKind::SlowEnemies),
            PowerUpKind::ExtraLife => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PowerUpKind::FireRate => "Rapid Fire!",
            PowerUpKind::ExtraLife => "Extra Life!",
            PowerUpKind::SpeedBoost => "Speed Boost!",
            PowerUpKind::SlowEnemies => "Slow Enemies!",
        }
    }

    /// Asset id for the sprite provider
    pub fn sprite_id(&self) -> &'static str {
        match self {
            PowerUpKind::FireRate => "fire_rate",
            PowerUpKind::ExtraLife => "extra_life",
            PowerUpKind::SpeedBoost => "speed_boost",
            PowerUpKind::SlowEnemies => "slow_enemies",
        }
    }
}

/// A falling power-up collectible
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    /// Top-left corner of the bounding box around the circle
    pub pos: Vec2,
    pub active: bool,
}

impl PowerUp {
    pub fn size(&self) -> Vec2 {
        Vec2::splat(self.kind.radius() * 2.0)
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.size())
    }
}

/// Complete run state, owned by the frame update
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    /// Simulation tick counter (the shared monotonic clock)
    pub time_ticks: u64,
    pub lives: u32,
    pub score: u64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    pub effects: ActiveEffects,
    pub director: LevelDirector,
    pub messages: MessageLog,
    pub last_powerup_tick: u64,
    pub rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh run with the given seed
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            seed,
            difficulty,
            phase: GamePhase::Playing,
            time_ticks: 0,
            lives: difficulty.starting_lives(),
            score: 0,
            player: Player::new(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            effects: ActiveEffects::default(),
            director: LevelDirector::new(difficulty, 0),
            messages: MessageLog::new(),
            last_powerup_tick: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn an enemy of the given kind just above the top edge, at a random
    /// x within the spawn margins
    pub fn spawn_enemy(&mut self, kind: EnemyKind) {
        let size = kind.size();
        let x = self
            .rng
            .random_range(ENEMY_SPAWN_MARGIN..SCREEN_WIDTH - size.x - ENEMY_SPAWN_MARGIN);
        let zigzag_dir = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let phase_offset = self.rng.random_range(0.0..std::f32::consts::TAU);
        let speed = kind.base_speed() * self.director.speed_multiplier();
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            kind,
            pos: Vec2::new(x, -size.y),
            speed,
            health: kind.max_health(),
            zigzag_dir,
            phase_offset,
            spawn_x: x,
            active: true,
        });
    }

    /// Spawn a random power-up just above the top edge
    pub fn spawn_powerup(&mut self) {
        let kind = PowerUpKind::ALL[self.rng.random_range(0..PowerUpKind::ALL.len())];
        let diameter = kind.radius() * 2.0;
        let x = self
            .rng
            .random_range(POWERUP_SPAWN_MARGIN..SCREEN_WIDTH - diameter - POWERUP_SPAWN_MARGIN);
        let id = self.next_entity_id();
        self.powerups.push(PowerUp {
            id,
            kind,
            pos: Vec2::new(x, -diameter),
            active: true,
        });
    }

    /// Fire a bullet from the player's gun
    pub fn fire_bullet(&mut self) {
        let gun = self.player.gun_position();
        let id = self.next_entity_id();
        self.bullets.push(Bullet {
            id,
            pos: Vec2::new(gun.x - BULLET_WIDTH / 2.0, gun.y),
            active: true,
        });
    }

    /// End-of-frame reaping: drop every entity whose active flag is false.
    /// Runs once per frame, after all logic for the frame.
    pub fn reap(&mut self) {
        self.bullets.retain(|b| b.active);
        self.enemies.retain(|e| e.active);
        self.powerups.retain(|p| p.active);
    }
}
