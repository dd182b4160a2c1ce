//! Redux-style observable state container
//!
//! The store follows the Redux pattern:
//! - A single state value, replaced (never mutated) on each action
//! - Actions are dispatched to request state changes
//! - Pure reducers compute the next state from the previous state and the action
//! - Listeners are notified synchronously after every completed transition
//!
//! ```rust,ignore
//! let store = Store::new(counter);
//! let subscription = store.subscribe(|| log::info!("state changed"));
//! store.dispatch(CounterAction::Increment)?;
//! subscription.unsubscribe();
//! ```

pub mod action;
pub mod combine;
pub mod error;
pub mod middleware;
pub mod store;
pub mod subscription;

pub use action::Action;
pub use combine::{infallible, CombinedReducer, Slices};
pub use error::{BoxError, StoreError};
pub use middleware::{LoggingMiddleware, Middleware};
pub use statebox_config::StoreConfig;
pub use store::{Store, StoreBuilder};
pub use subscription::{ListenerId, Subscription};
