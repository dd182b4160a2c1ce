//! Listener registry and subscription handles

use std::fmt;
use std::sync::{Arc, Weak};

/// Zero-argument callback invoked after every completed transition
pub type Listener = Arc<dyn Fn() + Send + Sync + 'static>;

/// Identity of a registered listener.
///
/// Two listeners with identical behavior registered separately get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Ordered set of listeners, in registration order
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub(crate) fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns `false` if the listener was already removed
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(entry, _)| *entry == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Listeners registered right now, for one notification pass
    pub(crate) fn snapshot(&self) -> Vec<(ListenerId, Listener)> {
        self.entries.clone()
    }
}

/// Removes listeners by id. Implemented by the store so a subscription does
/// not need to know the state and action types.
pub(crate) trait ListenerRegistry: Send + Sync {
    fn remove_listener(&self, id: ListenerId) -> bool;
    fn has_listener(&self, id: ListenerId) -> bool;
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe)
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] on teardown.
#[must_use = "dropping a Subscription does not unsubscribe; keep it to call unsubscribe() later"]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<dyn ListenerRegistry>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, registry: Weak<dyn ListenerRegistry>) -> Self {
        Self { id, registry }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove exactly this listener. Calling it again is a no-op, as is calling
    /// it after the store is gone.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.remove_listener(self.id) {
                log::trace!("Listener {:?} unsubscribed", self.id);
            }
        }
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.has_listener(self.id))
            .unwrap_or(false)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
