use crate::action::Action;
use crate::store::Store;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs inside the store's critical section, in the order it was
/// added. It may dispatch follow-up actions through `store`; those run to
/// completion (including their own notification pass) before `handle` returns.
pub trait Middleware<S, A>: Send + Sync {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current state (read-only snapshot)
    /// - `store`: Use to dispatch follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&self, action: &A, state: &S, store: &Store<S, A>) -> bool;
}

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S, A: Action> Middleware<S, A> for LoggingMiddleware {
    fn handle(&self, action: &A, _state: &S, _store: &Store<S, A>) -> bool {
        log::debug!("Action: {:?}", action);
        true
    }
}
