use statebox::{combine_reducers, infallible, BoxError};

use crate::actions::TodoAction;
use crate::reducers::todos_reducer::reduce_todos;
use crate::reducers::visibility_filter_reducer::reduce_visibility_filter;
use crate::state::TodoState;

/// Root reducer - hands each field of the state tree to its own reducer
pub fn todo_app(
) -> impl Fn(Option<&TodoState>, &TodoAction) -> Result<TodoState, BoxError> + Send + Sync + 'static
{
    combine_reducers!(TodoState {
        todos: reduce_todos,
        visibility_filter: infallible(reduce_visibility_filter),
    })
}
