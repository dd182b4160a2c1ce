use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::ReentrantMutex;
use statebox_config::StoreConfig;

use crate::action::Action;
use crate::error::{BoxError, StoreError};
use crate::middleware::{LoggingMiddleware, Middleware};
use crate::subscription::{ListenerId, ListenerRegistry, Listeners, Subscription};

type BoxedReducer<S, A> = Box<dyn Fn(Option<&S>, &A) -> Result<S, BoxError> + Send + Sync>;

/// Everything that changes over the store's lifetime
struct Shared<S> {
    state: Arc<S>,
    listeners: Listeners,
    /// Number of dispatch calls currently running on the owning thread
    depth: usize,
    /// Set while the reducer runs
    reducing: bool,
}

struct Inner<S, A> {
    shared: ReentrantMutex<RefCell<Shared<S>>>,
    reducer: BoxedReducer<S, A>,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
    config: StoreConfig,
}

/// Store - holds application state and manages the Redux loop
///
/// The store is a cheap handle; clones share the same state and listeners.
/// Pass it explicitly to whatever needs it.
///
/// All calls go through one re-entrant critical section: a listener or
/// middleware may dispatch again on the same thread (the nested dispatch runs
/// to completion first), while other threads wait for the outermost dispatch
/// to return.
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    /// Create a store from an infallible reducer.
    ///
    /// The reducer is invoked once with `(None, A::init())` to seed the state.
    pub fn new<F>(reducer: F) -> Self
    where
        F: Fn(Option<&S>, &A) -> S + Send + Sync + 'static,
    {
        let initial = reducer(None, &A::init());
        Self::assemble(
            Box::new(move |state: Option<&S>, action: &A| -> Result<S, BoxError> {
                Ok(reducer(state, action))
            }),
            Vec::new(),
            StoreConfig::default(),
            initial,
        )
    }

    /// Create a store from a fallible reducer.
    ///
    /// Fails if the reducer cannot produce the initial state.
    pub fn try_new<F>(reducer: F) -> Result<Self, StoreError>
    where
        F: Fn(Option<&S>, &A) -> Result<S, BoxError> + Send + Sync + 'static,
    {
        StoreBuilder::fallible(reducer).build()
    }

    fn assemble(
        reducer: BoxedReducer<S, A>,
        middleware: Vec<Box<dyn Middleware<S, A>>>,
        config: StoreConfig,
        initial: S,
    ) -> Self {
        log::debug!(
            "Store created with {} middleware, dispatch depth limit {}",
            middleware.len(),
            config.dispatch_depth_limit()
        );
        Self {
            inner: Arc::new(Inner {
                shared: ReentrantMutex::new(RefCell::new(Shared {
                    state: Arc::new(initial),
                    listeners: Listeners::default(),
                    depth: 0,
                    reducing: false,
                })),
                reducer,
                middleware,
                config,
            }),
        }
    }

    /// Get the current state
    ///
    /// Returns the same `Arc` until the next successful transition.
    pub fn state(&self) -> Arc<S> {
        let guard = self.inner.shared.lock();
        let state = Arc::clone(&guard.borrow().state);
        state
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        let guard = self.inner.shared.lock();
        let count = guard.borrow().listeners.len();
        count
    }

    /// Register a listener, called with no arguments after every completed
    /// transition, in registration order.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let guard = self.inner.shared.lock();
        let id = guard.borrow_mut().listeners.insert(Arc::new(listener));
        drop(guard);

        log::trace!("Listener {:?} subscribed", id);
        let weak = Arc::downgrade(&self.inner);
        let registry: Weak<dyn ListenerRegistry> = weak;
        Subscription::new(id, registry)
    }

    /// Process an action through middleware chain and reducer, then notify listeners
    ///
    /// If the reducer fails, the error is returned, the state is left as it
    /// was and no listener is called.
    pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
        let guard = self.inner.shared.lock();
        let cell: &RefCell<Shared<S>> = &guard;

        {
            let mut shared = cell.borrow_mut();
            if shared.reducing {
                log::error!("Reducer attempted to dispatch {}", action.kind());
                return Err(StoreError::DispatchFromReducer(action.kind()));
            }
            let limit = self.inner.config.dispatch_depth_limit();
            if shared.depth >= limit {
                log::error!(
                    "Dropping {}: nested dispatch limit of {} reached",
                    action.kind(),
                    limit
                );
                return Err(StoreError::DispatchDepthExceeded(limit));
            }
            shared.depth += 1;
        }
        let _depth = DepthGuard(cell);

        let snapshot = Arc::clone(&cell.borrow().state);
        for middleware in &self.inner.middleware {
            if !middleware.handle(&action, &snapshot, self) {
                log::debug!("Action {} consumed by middleware", action.kind());
                return Ok(());
            }
        }

        // Middleware may have dispatched follow-ups; reduce against the latest state
        let current = Arc::clone(&cell.borrow().state);
        let result = {
            let _reducing = ReducingGuard::enter(cell);
            (self.inner.reducer)(Some(&current), &action)
        };
        let next = result.map_err(|source| {
            log::warn!("Transition failed for {}: {}", action.kind(), source);
            StoreError::Transition {
                action: action.kind(),
                source,
            }
        })?;

        cell.borrow_mut().state = Arc::new(next);
        notify(cell);
        Ok(())
    }
}

/// Run one notification pass over the listeners registered right now.
///
/// Listeners removed during the pass are skipped; listeners added during the
/// pass wait for the next dispatch.
fn notify<S>(cell: &RefCell<Shared<S>>) {
    let snapshot = cell.borrow().listeners.snapshot();
    for (id, listener) in snapshot {
        if cell.borrow().listeners.contains(id) {
            listener();
        }
    }
}

struct DepthGuard<'a, S>(&'a RefCell<Shared<S>>);

impl<S> Drop for DepthGuard<'_, S> {
    fn drop(&mut self) {
        self.0.borrow_mut().depth -= 1;
    }
}

struct ReducingGuard<'a, S>(&'a RefCell<Shared<S>>);

impl<'a, S> ReducingGuard<'a, S> {
    fn enter(cell: &'a RefCell<Shared<S>>) -> Self {
        cell.borrow_mut().reducing = true;
        Self(cell)
    }
}

impl<S> Drop for ReducingGuard<'_, S> {
    fn drop(&mut self) {
        self.0.borrow_mut().reducing = false;
    }
}

impl<S: Send + Sync, A> ListenerRegistry for Inner<S, A> {
    fn remove_listener(&self, id: ListenerId) -> bool {
        let guard = self.shared.lock();
        let removed = guard.borrow_mut().listeners.remove(id);
        removed
    }

    fn has_listener(&self, id: ListenerId) -> bool {
        let guard = self.shared.lock();
        let present = guard.borrow().listeners.contains(id);
        present
    }
}

impl<S, A> fmt::Debug for Store<S, A>
where
    S: fmt::Debug + Send + Sync + 'static,
    A: Action,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state())
            .field("listeners", &self.listener_count())
            .field("middleware", &self.inner.middleware.len())
            .finish()
    }
}

/// Builder for stores with middleware or a non-default configuration
///
/// ```rust,ignore
/// let store = StoreBuilder::fallible(todo_app())
///     .from_config(StoreConfig::load())
///     .middleware(AuditMiddleware::new())
///     .build()?;
/// ```
pub struct StoreBuilder<S, A> {
    reducer: BoxedReducer<S, A>,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
    config: StoreConfig,
    /// Put a [`LoggingMiddleware`] in front of the chain on build
    log_actions: bool,
}

impl<S, A> StoreBuilder<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    pub fn new<F>(reducer: F) -> Self
    where
        F: Fn(Option<&S>, &A) -> S + Send + Sync + 'static,
    {
        Self::fallible(move |state: Option<&S>, action: &A| -> Result<S, BoxError> {
            Ok(reducer(state, action))
        })
    }

    pub fn fallible<F>(reducer: F) -> Self
    where
        F: Fn(Option<&S>, &A) -> Result<S, BoxError> + Send + Sync + 'static,
    {
        Self {
            reducer: Box::new(reducer),
            middleware: Vec::new(),
            config: StoreConfig::default(),
            log_actions: false,
        }
    }

    /// Use `config` as is
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `config` and install the middleware it asks for
    /// (`log_actions` puts a [`LoggingMiddleware`] first in the chain).
    ///
    /// The last call wins; logging is installed at most once.
    pub fn from_config(mut self, config: StoreConfig) -> Self {
        self.log_actions = config.log_actions;
        self.config(config)
    }

    /// Add middleware; it runs in the order it was added.
    pub fn middleware<M>(mut self, middleware: M) -> Self
    where
        M: Middleware<S, A> + 'static,
    {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Seed the initial state and create the store
    pub fn build(mut self) -> Result<Store<S, A>, StoreError> {
        if self.log_actions {
            self.middleware.insert(0, Box::new(LoggingMiddleware::new()));
        }

        let init = A::init();
        let initial = (self.reducer)(None, &init).map_err(|source| StoreError::Transition {
            action: init.kind(),
            source,
        })?;
        Ok(Store::assemble(
            self.reducer,
            self.middleware,
            self.config,
            initial,
        ))
    }
}
