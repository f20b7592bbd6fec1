//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to emit follow-up actions it uses the Dispatcher.
//! Dispatched actions are queued on a channel and re-enter the full middleware
//! chain once the current action has been reduced.
//!
//! The sender half is `Send`, so background work (PDF export) can report its
//! result the same way; the main loop drains those on its next tick.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action; it re-enters the middleware chain from the beginning
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
