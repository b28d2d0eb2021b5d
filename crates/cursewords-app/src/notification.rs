//! The transient message shown under the clue line.
//!
//! [`StatusLine`] is the only owner of the current message and of the moment it
//! expires. Showing a message replaces both, so a deadline set for an older message
//! can never clear a newer one.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum NotificationKind {
    Info,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    duration: Duration,
    current: Option<Notification>,
}

impl StatusLine {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    /// Replaces the current message; it expires `duration` after `now`.
    pub fn show(&mut self, text: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            text: text.into(),
            kind,
            expires_at: now + self.duration,
        });
    }

    /// Clears the message if its deadline has passed. Returns `true` if it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| n.expires_at <= now) {
            self.current = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.expires_at)
    }
}
