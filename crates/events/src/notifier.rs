//! Notification sink abstraction (delivery mechanics only).
//!
//! The fridge hands every [`Notification`] to a [`Notifier`] and forgets about
//! it. Whether the sink logs, pushes to a bus or sends a push message is the
//! sink's business; the fridge never waits on delivery and never observes a
//! delivery failure.

use std::sync::Arc;

use crate::notification::Notification;

/// Single-method notification capability.
///
/// The trait requires `Send + Sync` so one sink can be shared (e.g. via
/// `Arc`) by several fridges and by the test that inspects it.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<N> Notifier for &N
where
    N: Notifier + ?Sized,
{
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}

impl<N> Notifier for Box<N>
where
    N: Notifier + ?Sized,
{
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}

/// Sink that records every notification as a structured `tracing` event.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        let item = notification.name();
        match notification {
            Notification::ZeroStock { .. } => {
                tracing::warn!(kind = notification.kind(), item, "{notification}");
            }
            Notification::Spoiled { count, .. } => {
                tracing::warn!(kind = notification.kind(), item, count = *count, "{notification}");
            }
        }
    }
}
