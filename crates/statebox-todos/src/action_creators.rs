//! Action creators
//!
//! Build actions from the minimal arguments a caller has, and document what
//! the app can be asked to do.

use crate::actions::TodoAction;
use crate::state::VisibilityFilter;

/// Hands out todo ids for [`ActionCreators::add_todo`]
#[derive(Debug, Default, Clone)]
pub struct ActionCreators {
    next_todo_id: u64,
}

impl ActionCreators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start numbering after ids that are already taken
    pub fn starting_at(next_todo_id: u64) -> Self {
        Self { next_todo_id }
    }

    pub fn add_todo(&mut self, text: impl Into<String>) -> TodoAction {
        let id = self.next_todo_id;
        self.next_todo_id += 1;
        TodoAction::AddTodo {
            id,
            text: text.into(),
        }
    }
}

pub fn toggle_todo(id: u64) -> TodoAction {
    TodoAction::ToggleTodo { id }
}

pub fn remove_todo(id: u64) -> TodoAction {
    TodoAction::RemoveTodo { id }
}

pub fn set_visibility_filter(filter: VisibilityFilter) -> TodoAction {
    TodoAction::SetVisibilityFilter { filter }
}
