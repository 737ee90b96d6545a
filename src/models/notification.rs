//! Notification feed.
//!
//! A short, most-recent-first list of user-facing messages. Older entries
//! fall off once the feed reaches its capacity. Nothing is persisted.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::DEFAULT_NOTIFICATION_CAPACITY;

/// A single message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Monotonic identifier, unique within a feed.
    pub id: u64,
    /// Message text.
    pub message: String,
}

/// Bounded, most-recent-first message list.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    entries: VecDeque<Notification>,
    capacity: usize,
    next_id: u64,
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_NOTIFICATION_CAPACITY)
    }
}

impl NotificationFeed {
    /// Creates a feed holding at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Prepends a message and returns its id.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_front(Notification {
            id,
            message: message.into(),
        });
        self.entries.truncate(self.capacity);
        id
    }

    /// Most recent message.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.front()
    }

    /// Messages, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> + '_ {
        self.entries.iter()
    }

    /// Retained message count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum retained messages.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
