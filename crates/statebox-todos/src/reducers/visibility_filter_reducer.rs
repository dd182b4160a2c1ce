use crate::actions::TodoAction;
use crate::state::VisibilityFilter;

/// Reduce the visibility filter
pub fn reduce_visibility_filter(
    state: Option<&VisibilityFilter>,
    action: &TodoAction,
) -> VisibilityFilter {
    match action {
        TodoAction::SetVisibilityFilter { filter } => *filter,
        _ => state.copied().unwrap_or_default(),
    }
}
