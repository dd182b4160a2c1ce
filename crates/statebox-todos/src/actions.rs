use serde::{Deserialize, Serialize};
use statebox::Action;
use strum::IntoStaticStr;

use crate::state::VisibilityFilter;

/// Actions represent all possible state changes in the todo app.
///
/// Serialized with an external `type` tag, e.g.
/// `{"type": "ADD_TODO", "id": 0, "text": "Learn Redux"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Store initialization; never part of a script
    #[serde(skip)]
    Init,

    /// ## Todo list actions
    AddTodo { id: u64, text: String },
    ToggleTodo { id: u64 },
    RemoveTodo { id: u64 },

    /// ## Visibility filter actions
    SetVisibilityFilter { filter: VisibilityFilter },
}

impl Action for TodoAction {
    fn init() -> Self {
        TodoAction::Init
    }

    fn kind(&self) -> &'static str {
        self.into()
    }
}
