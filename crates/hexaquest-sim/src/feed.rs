//! Combat log and notification feed.
//!
//! The log keeps only the most recent lines. Notifications live until a
//! scheduled expiry task removes them.

use std::collections::VecDeque;

use hexaquest_core::constants::COMBAT_LOG_CAPACITY;
use hexaquest_core::enums::{LogKind, NotificationKind};
use hexaquest_core::events::{CombatLogEntry, Notification};

#[derive(Debug, Default)]
pub struct Feed {
    log: VecDeque<CombatLogEntry>,
    notifications: Vec<Notification>,
    next_id: u64,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a combat log line, evicting the oldest past capacity.
    pub fn log(&mut self, message: impl Into<String>, kind: LogKind, now: f64) {
        let id = self.allocate_id();
        self.log.push_back(CombatLogEntry {
            id,
            message: message.into(),
            kind,
            timestamp: now,
        });
        while self.log.len() > COMBAT_LOG_CAPACITY {
            self.log.pop_front();
        }
    }

    /// Show a banner. Returns its id so the caller can schedule expiry.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.allocate_id();
        self.notifications.push(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a notification. Returns false if it was already gone.
    pub fn expire(&mut self, id: u64) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn log_entries(&self) -> impl Iterator<Item = &CombatLogEntry> {
        self.log.iter()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn clear(&mut self) {
        self.log.clear();
        self.notifications.clear();
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_last_six() {
        let mut feed = Feed::new();
        for i in 0..10 {
            feed.log(format!("line {i}"), LogKind::Info, i as f64);
        }
        let lines: Vec<&str> = feed.log_entries().map(|e| e.message.as_str()).collect();
        assert_eq!(lines, ["line 4", "line 5", "line 6", "line 7", "line 8", "line 9"]);
    }

    #[test]
    fn test_notification_expiry() {
        let mut feed = Feed::new();
        let a = feed.notify("Portal Opened!", NotificationKind::Info);
        let b = feed.notify("YOU DIED", NotificationKind::Boss);
        assert!(feed.expire(a));
        assert!(!feed.expire(a));
        assert_eq!(feed.notifications().len(), 1);
        assert_eq!(feed.notifications()[0].id, b);
    }
}
