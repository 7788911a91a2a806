//! # Notifications
//!
//! User-facing messages raised by state operations ("Ürün sepete eklendi!").
//!
//! State managers only see the [`Notifier`] trait. The host decides what a
//! notification becomes:
//! - [`NotificationQueue`]: buffered until the UI drains and renders them
//!   as toasts
//! - [`TracingNotifier`]: written to the log (headless hosts, tests)

use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info, warn};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A single toast-style message.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Notification {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notification::new(NotificationLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notification::new(NotificationLevel::Warning, message)
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync + Debug {
    fn notify(&self, notification: Notification);
}

/// Logs notifications instead of showing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let text = notification.message.as_str();
        match notification.level {
            NotificationLevel::Success | NotificationLevel::Info => info!(text, "Notification"),
            NotificationLevel::Warning => warn!(text, "Notification"),
            NotificationLevel::Error => error!(text, "Notification"),
        }
    }
}

/// FIFO buffer the presentation layer drains after each intent.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Mutex<VecDeque<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: Notification) {
        debug!(level = ?notification.level, text = %notification.message, "Notification queued");
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drains_in_order() {
        let queue = NotificationQueue::new();
        queue.notify(Notification::success("first"));
        queue.notify(Notification::warning("second"));

        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].level, NotificationLevel::Warning);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_notification_json_shape() {
        let json = serde_json::to_value(Notification::success("Ürün sepete eklendi!")).unwrap();
        assert_eq!(json["level"], "success");
        assert_eq!(json["message"], "Ürün sepete eklendi!");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_tracing_notifier_accepts_all_levels() {
        let notifier = TracingNotifier;
        for level in [
            NotificationLevel::Success,
            NotificationLevel::Info,
            NotificationLevel::Warning,
            NotificationLevel::Error,
        ] {
            notifier.notify(Notification::new(level, "test"));
        }
    }
}
