//! Timed power-up effects
//!
//! Player-scoped (fire-rate, speed-boost) and game-scoped (slow-enemies)
//! modifiers with absolute-tick expiries. Re-collecting an active kind only
//! resets its expiry; magnitudes are fixed per kind and never stack, but
//! different kinds compose multiplicatively. The instant extra-life pickup is
//! applied by the orchestrator and is never stored here.

use crate::consts::{FIRE_RATE_MODIFIER, SLOW_ENEMIES_MODIFIER, SPEED_BOOST_MODIFIER};

/// Timed effect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    FireRate,
    SpeedBoost,
    SlowEnemies,
}

impl EffectKind {
    pub const ALL: [EffectKind; 3] = [
        EffectKind::FireRate,
        EffectKind::SpeedBoost,
        EffectKind::SlowEnemies,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EffectKind::FireRate => "Rapid Fire",
            EffectKind::SpeedBoost => "Speed Boost",
            EffectKind::SlowEnemies => "Slow Enemies",
        }
    }
}

/// Active timed modifiers, one expiry slot per kind
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveEffects {
    fire_rate_until: Option<u64>,
    speed_boost_until: Option<u64>,
    slow_enemies_until: Option<u64>,
}

impl ActiveEffects {
    fn slot_mut(&mut self, kind: EffectKind) -> &mut Option<u64> {
        match kind {
            EffectKind::FireRate => &mut self.fire_rate_until,
            EffectKind::SpeedBoost => &mut self.speed_boost_until,
            EffectKind::SlowEnemies => &mut self.slow_enemies_until,
        }
    }

    fn slot(&self, kind: EffectKind) -> Option<u64> {
        match kind {
            EffectKind::FireRate => self.fire_rate_until,
            EffectKind::SpeedBoost => self.speed_boost_until,
            EffectKind::SlowEnemies => self.slow_enemies_until,
        }
    }

    /// Activate a timed effect, or extend it by overwriting its expiry
    pub fn activate(&mut self, kind: EffectKind, expires_at: u64) {
        *self.slot_mut(kind) = Some(expires_at);
    }

    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.slot(kind).is_some()
    }

    /// Remove every effect whose expiry is at or before `now`; returns the
    /// expired kinds so the caller can emit notifications
    pub fn expire(&mut self, now: u64) -> Vec<EffectKind> {
        let mut expired = Vec::new();
        for kind in EffectKind::ALL {
            let slot = self.slot_mut(kind);
            if slot.is_some_and(|at| at <= now) {
                *slot = None;
                expired.push(kind);
            }
        }
        expired
    }

    /// Effective shoot-cooldown factor (<1 shortens the cooldown)
    pub fn cooldown_multiplier(&self) -> f32 {
        if self.is_active(EffectKind::FireRate) {
            FIRE_RATE_MODIFIER
        } else {
            1.0
        }
    }

    /// Effective player-speed factor (>1 speeds movement)
    pub fn speed_multiplier(&self) -> f32 {
        if self.is_active(EffectKind::SpeedBoost) {
            SPEED_BOOST_MODIFIER
        } else {
            1.0
        }
    }

    /// Global enemy-speed factor, applied to every enemy on screen
    pub fn enemy_slow_multiplier(&self) -> f32 {
        if self.is_active(EffectKind::SlowEnemies) {
            SLOW_ENEMIES_MODIFIER
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_are_neutral_by_default() {
        let effects = ActiveEffects::default();
        assert_eq!(effects.cooldown_multiplier(), 1.0);
        assert_eq!(effects.speed_multiplier(), 1.0);
        assert_eq!(effects.enemy_slow_multiplier(), 1.0);
    }

    #[test]
    fn recollecting_extends_expiry_without_changing_magnitude() {
        let mut effects = ActiveEffects::default();
        effects.activate(EffectKind::FireRate, 100);
        assert_eq!(effects.cooldown_multiplier(), FIRE_RATE_MODIFIER);

        // Re-collect before expiry: only the timestamp moves
        effects.activate(EffectKind::FireRate, 300);
        assert_eq!(effects.cooldown_multiplier(), FIRE_RATE_MODIFIER);
        assert!(effects.expire(100).is_empty());
        assert!(effects.is_active(EffectKind::FireRate));

        assert_eq!(effects.expire(300), vec![EffectKind::FireRate]);
        assert_eq!(effects.cooldown_multiplier(), 1.0);
    }

    #[test]
    fn different_kinds_are_concurrently_active_and_independent() {
        let mut effects = ActiveEffects::default();
        effects.activate(EffectKind::FireRate, 100);
        effects.activate(EffectKind::SpeedBoost, 200);

        assert_eq!(effects.cooldown_multiplier(), FIRE_RATE_MODIFIER);
        assert_eq!(effects.speed_multiplier(), SPEED_BOOST_MODIFIER);

        // Fire-rate lapses first; speed boost survives untouched
        assert_eq!(effects.expire(100), vec![EffectKind::FireRate]);
        assert_eq!(effects.cooldown_multiplier(), 1.0);
        assert_eq!(effects.speed_multiplier(), SPEED_BOOST_MODIFIER);
    }

    #[test]
    fn expiry_is_at_or_before_now() {
        let mut effects = ActiveEffects::default();
        effects.activate(EffectKind::SlowEnemies, 50);
        assert!(effects.expire(49).is_empty());
        assert_eq!(effects.expire(50), vec![EffectKind::SlowEnemies]);
        assert_eq!(effects.enemy_slow_multiplier(), 1.0);
    }
}
