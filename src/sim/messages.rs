//! Bounded, time-expiring notification log for on-screen feedback

use std::collections::VecDeque;

use crate::consts::{MESSAGE_DURATION_MS, MESSAGE_MAX_VISIBLE};
use crate::ms_to_ticks;

/// Color/category tag for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Info,
    Kill,
    PowerUp,
    Warning,
}

/// One on-screen notification
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub category: MessageCategory,
    pub expires_at: u64,
}

/// Insertion-ordered message queue, capped at 5 visible entries.
/// Iteration yields oldest first; render top-to-bottom in queue order.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: VecDeque<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message with the default duration, dropping the oldest
    /// entries once over capacity
    pub fn add(&mut self, text: impl Into<String>, category: MessageCategory, now: u64) {
        self.entries.push_back(Message {
            text: text.into(),
            category,
            expires_at: now + ms_to_ticks(MESSAGE_DURATION_MS),
        });
        while self.entries.len() > MESSAGE_MAX_VISIBLE {
            self.entries.pop_front();
        }
    }

    /// Drop every entry whose expiry is at or before `now`, independent of
    /// the capacity trim
    pub fn tick(&mut self, now: u64) {
        self.entries.retain(|m| m.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_trim_drops_the_oldest_first() {
        let mut log = MessageLog::new();
        for i in 0..7 {
            log.add(format!("m{i}"), MessageCategory::Info, 0);
        }
        assert_eq!(log.len(), MESSAGE_MAX_VISIBLE);
        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["m2", "m3", "m4", "m5", "m6"]);
    }

    #[test]
    fn entries_expire_at_or_before_now() {
        let duration = ms_to_ticks(MESSAGE_DURATION_MS);
        let mut log = MessageLog::new();
        log.add("early", MessageCategory::Kill, 0);
        log.add("late", MessageCategory::Kill, 10);

        log.tick(duration - 1);
        assert_eq!(log.len(), 2);

        log.tick(duration);
        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["late"]);

        log.tick(duration + 10);
        assert!(log.is_empty());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut log = MessageLog::new();
        log.add("first", MessageCategory::Info, 0);
        log.add("second", MessageCategory::Warning, 1);
        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
    }
}
