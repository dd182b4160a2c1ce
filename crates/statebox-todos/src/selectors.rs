use crate::state::{Todo, TodoState, VisibilityFilter};

/// Todos shown under `filter`, in list order
pub fn visible_todos(todos: &[Todo], filter: VisibilityFilter) -> Vec<&Todo> {
    todos
        .iter()
        .filter(|todo| match filter {
            VisibilityFilter::ShowAll => true,
            VisibilityFilter::ShowActive => !todo.completed,
            VisibilityFilter::ShowCompleted => todo.completed,
        })
        .collect()
}

/// Todos shown under the state's own filter
pub fn visible_todos_in(state: &TodoState) -> Vec<&Todo> {
    visible_todos(&state.todos, state.visibility_filter)
}

/// Number of todos not yet completed
pub fn active_count(state: &TodoState) -> usize {
    state.todos.iter().filter(|todo| !todo.completed).count()
}
