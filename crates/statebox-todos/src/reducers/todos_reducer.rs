//! Todos Reducer
//!
//! Handles the todo list slice. Updates go through `Arc::make_mut`, so the
//! previous list is copied only when it is still shared with an older state.

use std::sync::Arc;

use statebox::BoxError;
use thiserror::Error;

use crate::actions::TodoAction;
use crate::state::Todo;

/// Errors for todo list transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo {0} already exists")]
    DuplicateTodo(u64),
}

/// Reduce the todo list
///
/// Toggling or removing an unknown id leaves the list untouched (same `Arc`).
pub fn reduce_todos(
    state: Option<&Arc<Vec<Todo>>>,
    action: &TodoAction,
) -> Result<Arc<Vec<Todo>>, BoxError> {
    let mut todos = state.cloned().unwrap_or_default();

    match action {
        TodoAction::AddTodo { id, text } => {
            if todos.iter().any(|todo| todo.id == *id) {
                return Err(TodoError::DuplicateTodo(*id).into());
            }
            Arc::make_mut(&mut todos).push(Todo::new(*id, text.clone()));
        }
        TodoAction::ToggleTodo { id } => {
            if let Some(index) = todos.iter().position(|todo| todo.id == *id) {
                let todo = &mut Arc::make_mut(&mut todos)[index];
                todo.completed = !todo.completed;
            } else {
                log::debug!("Toggle ignored, no todo with id {}", id);
            }
        }
        TodoAction::RemoveTodo { id } => {
            if todos.iter().any(|todo| todo.id == *id) {
                Arc::make_mut(&mut todos).retain(|todo| todo.id != *id);
            } else {
                log::debug!("Remove ignored, no todo with id {}", id);
            }
        }
        TodoAction::Init | TodoAction::SetVisibilityFilter { .. } => {}
    }

    Ok(todos)
}
