//! Change notifications and the single-listener slot each tracker owns.
//!
//! Delivery is synchronous on the caller's thread. A tracker has at most one
//! listener; with none registered the notification is dropped.

use crate::kernel::span::Span;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeNotification {
    pub snapshot_version: u64,
    pub invalidated: Span,
}

pub trait ChangeListener {
    fn on_change(&mut self, notification: &ChangeNotification);
}

impl<F> ChangeListener for F
where
    F: FnMut(&ChangeNotification),
{
    fn on_change(&mut self, notification: &ChangeNotification) {
        self(notification)
    }
}

/// Forwards notifications into a single-consumer channel.
pub struct ChannelListener {
    tx: Sender<ChangeNotification>,
}

pub fn channel_listener() -> (ChannelListener, Receiver<ChangeNotification>) {
    let (tx, rx) = mpsc::channel();
    (ChannelListener { tx }, rx)
}

impl ChangeListener for ChannelListener {
    fn on_change(&mut self, notification: &ChangeNotification) {
        if self.tx.send(*notification).is_err() {
            tracing::trace!("change receiver dropped");
        }
    }
}

#[derive(Default)]
pub struct ListenerSlot {
    listener: Option<Box<dyn ChangeListener>>,
}

impl ListenerSlot {
    /// Replaces any previously registered listener.
    pub fn set(&mut self, listener: impl ChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear(&mut self) {
        self.listener = None;
    }

    pub fn is_set(&self) -> bool {
        self.listener.is_some()
    }

    pub fn emit(&mut self, notification: &ChangeNotification) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(notification);
        }
    }
}

impl std::fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("registered", &self.is_set())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/notify.rs"]
mod tests;
