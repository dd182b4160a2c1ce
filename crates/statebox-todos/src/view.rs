//! Plain-text rendering of the todo list

use std::fmt::Write;

use crate::selectors::{active_count, visible_todos_in};
use crate::state::{TodoState, VisibilityFilter};

fn filter_label(filter: VisibilityFilter) -> &'static str {
    match filter {
        VisibilityFilter::ShowAll => "all",
        VisibilityFilter::ShowActive => "active",
        VisibilityFilter::ShowCompleted => "completed",
    }
}

/// Render the visible todos, one per line, under a summary header
pub fn render(state: &TodoState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Todos ({}, {} of {} left):",
        filter_label(state.visibility_filter),
        active_count(state),
        state.todos.len()
    );

    let visible = visible_todos_in(state);
    if visible.is_empty() {
        out.push_str("  (nothing to show)\n");
    }
    for todo in visible {
        let mark = if todo.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{}] #{} {}", mark, todo.id, todo.text);
    }
    out
}
