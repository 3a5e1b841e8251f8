//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (the 60 Hz tick counter is the shared clock)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod levels;
pub mod messages;
pub mod movement;
pub mod state;
pub mod tick;

pub use collision::{Aabb, BulletHit};
pub use effects::{ActiveEffects, EffectKind};
pub use levels::LevelDirector;
pub use messages::{Message, MessageCategory, MessageLog};
pub use state::{
    Bullet, Difficulty, Enemy, EnemyKind, GamePhase, GameState, MovementKind, Player, PowerUp,
    PowerUpKind,
};
pub use tick::{TickInput, tick};
