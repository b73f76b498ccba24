//! Process-wide state container
//!
//! Dispatch is synchronous and sequential: every action is reduced and every
//! listener has run before `dispatch` returns.

use crate::actions::Action;
use crate::reducer::reduce;
use crate::types::PlayerState;
use std::fmt;

/// Anything that accepts patch records
///
/// Thunks are written against this so they can drive the real store or a
/// recording dispatcher.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

impl<D: Dispatch + ?Sized> Dispatch for &mut D {
    fn dispatch(&mut self, action: Action) {
        (**self).dispatch(action);
    }
}

/// Handle returned by `Store::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&PlayerState)>;

/// Owns the player state and applies the reducer
pub struct Store {
    state: PlayerState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    dispatched: u64,
}

impl Store {
    pub fn new(initial: PlayerState) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_subscription: 0,
            dispatched: 0,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Number of actions dispatched since creation
    pub fn dispatch_count(&self) -> u64 {
        self.dispatched
    }

    /// Reduce an action into the state and notify listeners
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.kind(), "Dispatch");

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.dispatched += 1;

        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Register a listener called after every dispatch
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PlayerState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(PlayerState::default())
    }
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        Store::dispatch(self, action);
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("dispatched", &self.dispatched)
            .finish()
    }
}
