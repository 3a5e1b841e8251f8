//! Axis-aligned collision checks over the current-frame snapshot
//!
//! All four resolvers are pure over the active entity collections and must
//! run before any reaping occurs; they flip active flags but never remove
//! elements.

use glam::Vec2;

use super::state::{Bullet, Enemy, EnemyKind, Player, PowerUp, PowerUpKind};
use crate::consts::SCREEN_HEIGHT;

/// Axis-aligned bounding box (closed intervals on both axes)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Closed-interval overlap test: touching edges count as overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }
}

/// A bullet-enemy pair whose hit destroyed the enemy
#[derive(Debug, Clone, Copy)]
pub struct BulletHit {
    pub bullet_id: u32,
    pub enemy_id: u32,
    pub kind: EnemyKind,
    pub points: u64,
}

/// Bullet↔enemy resolution.
///
/// Each bullet damages at most one enemy (the first overlap found in
/// collection order) and deactivates on impact; bullets never pierce.
/// Returns the kills plus the total score delta for the frame.
pub fn resolve_bullet_enemy(
    bullets: &mut [Bullet],
    enemies: &mut [Enemy],
) -> (Vec<BulletHit>, u64) {
    let mut kills = Vec::new();
    let mut score_delta = 0;

    for bullet in bullets.iter_mut() {
        if !bullet.active {
            continue;
        }
        let bullet_rect = bullet.rect();

        for enemy in enemies.iter_mut() {
            if !enemy.active {
                continue;
            }
            if bullet_rect.overlaps(&enemy.rect()) {
                bullet.deactivate();
                if enemy.take_damage(1) {
                    score_delta += enemy.kind.points();
                    kills.push(BulletHit {
                        bullet_id: bullet.id,
                        enemy_id: enemy.id,
                        kind: enemy.kind,
                        points: enemy.kind.points(),
                    });
                }
                break;
            }
        }
    }

    (kills, score_delta)
}

/// Enemy↔player resolution.
///
/// Every overlapping enemy deactivates and counts as one independent
/// life-loss trigger; simultaneous hits in the same frame are not
/// deduplicated.
pub fn resolve_enemy_player(enemies: &mut [Enemy], player: &Player) -> u32 {
    let player_rect = player.rect();
    let mut hits = 0;

    for enemy in enemies.iter_mut() {
        if enemy.active && enemy.rect().overlaps(&player_rect) {
            enemy.active = false;
            hits += 1;
        }
    }

    hits
}

/// Bottom-boundary escapes.
///
/// Enemies whose top edge crosses the bottom of the screen deactivate; each
/// costs one life, same as a player collision.
pub fn resolve_bottom_escapes(enemies: &mut [Enemy]) -> u32 {
    let mut escaped = 0;

    for enemy in enemies.iter_mut() {
        if enemy.active && enemy.pos.y >= SCREEN_HEIGHT {
            enemy.active = false;
            escaped += 1;
        }
    }

    escaped
}

/// Power-up↔player resolution: the first overlapping active power-up is
/// deactivated and returned for effect application
pub fn resolve_powerup_player(powerups: &mut [PowerUp], player: &Player) -> Option<PowerUpKind> {
    let player_rect = player.rect();

    for powerup in powerups.iter_mut() {
        if powerup.active && powerup.rect().overlaps(&player_rect) {
            powerup.active = false;
            return Some(powerup.kind);
        }
    }

    None
}
