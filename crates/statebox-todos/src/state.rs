//! Todo application state

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Which todos the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowActive,
    ShowCompleted,
}

/// Root state
///
/// The todo list is shared copy-on-write: a transition that does not touch
/// it hands the same allocation to the next state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoState {
    pub todos: Arc<Vec<Todo>>,
    pub visibility_filter: VisibilityFilter,
}
