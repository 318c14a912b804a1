//! Queued notification channel.
//!
//! Mutation failures are pushed here instead of being reported inline, so
//! the rendering layer can drain and display them on its own schedule. The
//! queue is bounded; when full, the oldest notification is dropped.

use std::collections::VecDeque;
use std::time::Instant;

const MAX_PENDING: usize = 100;

/// A notification message for the operator.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to display
    pub message: String,
    /// The severity level
    pub level: NotificationLevel,
    /// When the notification was created
    pub timestamp: Instant,
}

/// Severity level for notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl Notification {
    pub fn new(message: String, level: NotificationLevel) -> Self {
        Self {
            message,
            level,
            timestamp: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationLevel::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationLevel::Error)
    }
}

/// Bounded FIFO of pending notifications.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if self.pending.len() == MAX_PENDING {
            self.pending.pop_front();
        }
        self.pending.push_back(notification);
    }

    /// Remove and return the oldest pending notification.
    pub fn pop(&mut self) -> Option<Notification> {
        self.pending.pop_front()
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_oldest_first() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::error("first"));
        queue.push(Notification::success("second"));

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].message, "second");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut queue = NotificationQueue::new();
        for i in 0..MAX_PENDING + 5 {
            queue.push(Notification::info(format!("message {}", i)));
        }

        assert_eq!(queue.len(), MAX_PENDING);
        assert_eq!(queue.pop().unwrap().message, "message 5");
    }

    #[test]
    fn test_levels() {
        assert_eq!(Notification::info("x").level, NotificationLevel::Info);
        assert_eq!(Notification::success("x").level, NotificationLevel::Success);
        assert_eq!(Notification::error("x").level, NotificationLevel::Error);
    }
}
