//! Frame update orchestrator
//!
//! One call per 60 Hz tick. Phase order within a frame is fixed:
//! inputs, effect expiry, player, bullets, power-ups, spawning, enemy
//! movement, collisions, life accounting, level advancement, message expiry,
//! and finally a single reap of everything deactivated this frame.

use log::{debug, info};

use super::collision::{
    resolve_bottom_escapes, resolve_bullet_enemy, resolve_enemy_player, resolve_powerup_player,
};
use super::messages::MessageCategory;
use super::movement::{update_bullet, update_enemy, update_player, update_powerup};
use super::state::{GamePhase, GameState, PowerUpKind};
use crate::consts::POWERUP_SPAWN_INTERVAL_MS;
use crate::ms_to_ticks;

/// Sampled input for one frame. `left`/`right`/`shoot` are held-key levels;
/// `pause` is a press edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    pub pause: bool,
}

/// Advance the simulation by exactly one tick.
///
/// A paused or ended run is a no-op apart from the pause toggle itself: the
/// clock does not advance, so every pending expiry and cadence freezes with
/// it.
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::GameOver => return,
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return;
            }
        }
    }

    state.time_ticks += 1;
    let now = state.time_ticks;

    for kind in state.effects.expire(now) {
        state.messages.add(
            format!("{} expired", kind.display_name()),
            MessageCategory::Info,
            now,
        );
    }

    update_player(
        &mut state.player,
        input.left,
        input.right,
        state.effects.speed_multiplier(),
    );

    if input.shoot && state.player.can_shoot(now, state.effects.cooldown_multiplier()) {
        state.fire_bullet();
        state.player.mark_shot(now);
    }

    for bullet in &mut state.bullets {
        update_bullet(bullet);
    }

    for powerup in &mut state.powerups {
        update_powerup(powerup);
    }
    if now - state.last_powerup_tick >= ms_to_ticks(POWERUP_SPAWN_INTERVAL_MS) {
        state.spawn_powerup();
        state.last_powerup_tick = now;
    }

    if let Some(kind) = resolve_powerup_player(&mut state.powerups, &state.player) {
        apply_powerup(state, kind, now);
    }

    if let Some(kind) = state.director.next_spawn(now, &mut state.rng) {
        if kind.is_boss() {
            state.messages.add(
                format!("{} incoming!", kind.display_name()),
                MessageCategory::Warning,
                now,
            );
        }
        state.spawn_enemy(kind);
    }

    let slow = state.effects.enemy_slow_multiplier();
    let player_center = state.player.center();
    for enemy in &mut state.enemies {
        update_enemy(enemy, slow, Some(player_center));
    }

    let (kills, score_delta) = resolve_bullet_enemy(&mut state.bullets, &mut state.enemies);
    state.score += score_delta;
    for kill in kills {
        debug!(
            "destroyed {} (+{}) at tick {now}",
            kill.kind.display_name(),
            kill.points
        );
        state.messages.add(
            format!("{} destroyed! +{}", kill.kind.display_name(), kill.points),
            MessageCategory::Kill,
            now,
        );
    }

    let life_losses = resolve_enemy_player(&mut state.enemies, &state.player)
        + resolve_bottom_escapes(&mut state.enemies);
    for _ in 0..life_losses {
        if state.phase == GamePhase::GameOver {
            break;
        }
        lose_life(state, now);
    }

    if state.phase == GamePhase::Playing {
        let active_enemies = state.enemies.iter().filter(|e| e.active).count();
        if state.director.is_complete(active_enemies) {
            state.director.advance(now);
            info!("level {} (score {})", state.director.level(), state.score);
            state.messages.add(
                format!("Level {}", state.director.level()),
                MessageCategory::Info,
                now,
            );
        }
    }

    state.messages.tick(now);
    state.reap();
}

/// Apply a collected power-up: instant kinds resolve immediately, timed kinds
/// (re)arm their effect slot for a full duration from now
fn apply_powerup(state: &mut GameState, kind: PowerUpKind, now: u64) {
    match kind.effect() {
        Some(effect) => {
            state
                .effects
                .activate(effect, now + ms_to_ticks(kind.duration_ms()));
        }
        None => {
            debug_assert_eq!(kind, PowerUpKind::ExtraLife);
            state.lives += 1;
        }
    }
    state
        .messages
        .add(kind.display_name(), MessageCategory::PowerUp, now);
}

fn lose_life(state: &mut GameState, now: u64) {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        info!(
            "game over at level {} with score {}",
            state.director.level(),
            state.score
        );
        state
            .messages
            .add("Game over", MessageCategory::Info, now);
    } else {
        state.messages.add("Life lost!", MessageCategory::Warning, now);
    }
}
