//! Replay a list of actions through a fresh store

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use statebox::{Action, Store, StoreBuilder, StoreConfig};

use crate::actions::TodoAction;
use crate::reducers::app_reducer::todo_app;
use crate::state::TodoState;

/// What a completed replay did
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    /// Actions dispatched successfully
    pub applied: usize,
    /// Listener notifications observed
    pub notifications: usize,
    pub state: Arc<TodoState>,
}

/// Build a todo store from `config` and dispatch every action in order.
///
/// `on_change` is subscribed for the duration of the replay and sees the
/// state after every transition. Stops at the first failing action.
pub fn replay<F>(actions: Vec<TodoAction>, config: StoreConfig, on_change: F) -> Result<ReplayOutcome>
where
    F: Fn(&TodoState) + Send + Sync + 'static,
{
    let store = StoreBuilder::fallible(todo_app())
        .from_config(config)
        .build()
        .context("Failed to create todo store")?;

    let notifications = Arc::new(AtomicUsize::new(0));
    let handle = store.clone();
    let counter = Arc::clone(&notifications);
    let subscription = store.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        on_change(&handle.state());
    });

    let result = dispatch_all(&store, actions);
    // The listener holds a store handle; unsubscribing releases it
    subscription.unsubscribe();
    let applied = result?;

    Ok(ReplayOutcome {
        applied,
        notifications: notifications.load(Ordering::SeqCst),
        state: store.state(),
    })
}

fn dispatch_all(store: &Store<TodoState, TodoAction>, actions: Vec<TodoAction>) -> Result<usize> {
    let total = actions.len();
    for (index, action) in actions.into_iter().enumerate() {
        let kind = action.kind();
        store
            .dispatch(action)
            .with_context(|| format!("Action #{} ({}) failed", index, kind))?;
    }
    log::info!("Replayed {} actions", total);
    Ok(total)
}
