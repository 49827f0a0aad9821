//! In-memory notifier for tests/dev.

use std::sync::{Mutex, MutexGuard};

use crate::notification::Notification;
use crate::notifier::Notifier;

/// Records notifications in arrival order.
///
/// - No IO
/// - Never drops a notification
#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    received: Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Take everything received so far, leaving the notifier empty.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A poisoned lock only means a panicking test thread held it; the
    // recorded notifications are still valid.
    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.received.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, notification: &Notification) {
        self.lock().push(notification.clone());
    }
}
