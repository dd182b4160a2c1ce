//! Todo list application on top of the statebox store
//!
//! - `actions`: every action the app understands
//! - `action_creators`: helpers that build actions
//! - `state`: the state tree
//! - `reducers`: field reducers and the combined root reducer
//! - `selectors`: derived data (visible todos)
//! - `script`: decoding action scripts from JSON
//! - `replay`: running a script through a store
//! - `view`: plain-text rendering of the state

pub mod action_creators;
pub mod actions;
pub mod reducers;
pub mod replay;
pub mod script;
pub mod selectors;
pub mod state;
pub mod view;

pub use action_creators::ActionCreators;
pub use actions::TodoAction;
pub use reducers::app_reducer::todo_app;
pub use replay::{replay, ReplayOutcome};
pub use state::{Todo, TodoState, VisibilityFilter};
