//! Transient notifications.
//!
//! A small queue of toasts that expire after a fixed time. Rendering lives in
//! `views::toast_view`; this module only tracks what is on screen.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::egui_app::types::Notification;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Oldest toasts are dropped beyond this many
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    created: Instant,
}

impl Toast {
    pub fn message(&self) -> &'static str {
        self.notification.message()
    }

    pub fn is_error(&self) -> bool {
        self.notification.is_error()
    }
}

#[derive(Debug)]
pub struct Toasts {
    items: VecDeque<Toast>,
    duration: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(TOAST_DURATION)
    }
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            duration,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        if self.items.len() == MAX_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            notification,
            created: now,
        });
    }

    /// Drop toasts older than the display duration
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.items
            .retain(|toast| now.saturating_duration_since(toast.created) < duration);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
