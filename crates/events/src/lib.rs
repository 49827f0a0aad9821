//! Fridge notifications and the sinks that receive them.

pub mod in_memory;
pub mod notification;
pub mod notifier;

pub use in_memory::InMemoryNotifier;
pub use notification::Notification;
pub use notifier::{Notifier, TracingNotifier};
