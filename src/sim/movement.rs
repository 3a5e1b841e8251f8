//! Per-entity movement for one simulation tick
//!
//! Each update is a deterministic function of the entity's current state, its
//! effective speed, and (for tracking enemies) the player position.

use glam::Vec2;

use super::state::{Bullet, Enemy, MovementKind, Player, PowerUp};
use crate::consts::*;

/// Move the player from held keys, clamped to the playfield
pub fn update_player(player: &mut Player, left: bool, right: bool, speed_multiplier: f32) {
    let step = PLAYER_SPEED * speed_multiplier;
    if left {
        player.pos.x -= step;
    }
    if right {
        player.pos.x += step;
    }
    player.pos.x = player.pos.x.clamp(0.0, SCREEN_WIDTH - PLAYER_WIDTH);
}

/// Advance a bullet.
///
/// Deactivation waits until the whole bullet is above the top edge, not just
/// its top corner, so a shot can still connect with an enemy that is entering
/// the screen from above.
pub fn update_bullet(bullet: &mut Bullet) {
    bullet.pos.y -= BULLET_SPEED;
    if bullet.pos.y < -BULLET_HEIGHT {
        bullet.active = false;
    }
}

/// Advance a falling power-up; deactivates once its top edge passes the
/// bottom of the screen
pub fn update_powerup(powerup: &mut PowerUp) {
    powerup.pos.y += POWERUP_FALL_SPEED;
    if powerup.pos.y > SCREEN_HEIGHT {
        powerup.active = false;
    }
}

/// Advance an enemy by its movement kind.
///
/// `slow_multiplier` is the global slow-enemies modifier; it applies to
/// enemies already on screen, not just future spawns. Bottom-boundary exits
/// are resolved by the collision pass, not here.
pub fn update_enemy(enemy: &mut Enemy, slow_multiplier: f32, player_pos: Option<Vec2>) {
    let speed = enemy.speed * slow_multiplier;
    let max_x = SCREEN_WIDTH - enemy.kind.size().x;

    match enemy.kind.movement() {
        MovementKind::Straight => {
            enemy.pos.y += speed;
        }
        MovementKind::Zigzag => {
            enemy.pos.y += speed;
            enemy.pos.x += enemy.zigzag_dir * ZIGZAG_STEP;
            // Lane-edge reflection: flip the sign the instant either bound is
            // reached, never the magnitude
            if enemy.pos.x <= 0.0 || enemy.pos.x >= max_x {
                enemy.pos.x = enemy.pos.x.clamp(0.0, max_x);
                enemy.zigzag_dir = -enemy.zigzag_dir;
            }
        }
        MovementKind::SineWave => {
            enemy.pos.y += speed;
            let wave = SINE_AMPLITUDE * (SINE_FREQUENCY * enemy.pos.y + enemy.phase_offset).sin();
            enemy.pos.x = (enemy.spawn_x + wave).clamp(0.0, max_x);
        }
        MovementKind::TrackPlayer => match player_pos {
            Some(target) => {
                let dir = (target - enemy.center()).normalize_or_zero();
                if dir == Vec2::ZERO {
                    // Centered on the player already; keep descending
                    enemy.pos.y += speed;
                } else {
                    enemy.pos += dir * speed;
                    enemy.pos.x = enemy.pos.x.clamp(0.0, max_x);
                }
            }
            // No player reference this tick: fall back to straight movement
            None => {
                enemy.pos.y += speed;
            }
        },
    }
}
