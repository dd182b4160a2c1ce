//! Action scripts
//!
//! A script is a JSON array of tagged actions:
//!
//! ```json
//! [
//!   { "type": "ADD_TODO", "id": 0, "text": "Learn Redux" },
//!   { "type": "TOGGLE_TODO", "id": 0 },
//!   { "type": "SET_VISIBILITY_FILTER", "filter": "SHOW_COMPLETED" }
//! ]
//! ```
//!
//! Every entry must carry a string `type` tag naming a known action.

use serde_json::Value;
use statebox::StoreError;

use crate::actions::TodoAction;

/// Decode a script into actions, failing on the first malformed entry
pub fn parse_actions(json: &str) -> Result<Vec<TodoAction>, StoreError> {
    let entries: Vec<Value> = serde_json::from_str(json)
        .map_err(|e| StoreError::MalformedAction(format!("script is not a JSON array: {}", e)))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_action(index, entry))
        .collect()
}

fn parse_action(index: usize, entry: Value) -> Result<TodoAction, StoreError> {
    match entry.get("type") {
        Some(Value::String(_)) => {}
        Some(_) => {
            return Err(StoreError::MalformedAction(format!(
                "action #{}: \"type\" must be a string",
                index
            )))
        }
        None => {
            return Err(StoreError::MalformedAction(format!(
                "action #{} is missing its \"type\" tag",
                index
            )))
        }
    }

    serde_json::from_value(entry)
        .map_err(|e| StoreError::MalformedAction(format!("action #{}: {}", index, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VisibilityFilter;
    use pretty_assertions::assert_eq;

    fn malformed_message(json: &str) -> String {
        match parse_actions(json) {
            Err(StoreError::MalformedAction(message)) => message,
            other => panic!("expected MalformedAction, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_script() {
        let actions = parse_actions(
            r#"[
                {"type": "ADD_TODO", "id": 0, "text": "Learn Redux"},
                {"type": "TOGGLE_TODO", "id": 0},
                {"type": "REMOVE_TODO", "id": 0},
                {"type": "SET_VISIBILITY_FILTER", "filter": "SHOW_ACTIVE"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            actions,
            vec![
                TodoAction::AddTodo {
                    id: 0,
                    text: "Learn Redux".into()
                },
                TodoAction::ToggleTodo { id: 0 },
                TodoAction::RemoveTodo { id: 0 },
                TodoAction::SetVisibilityFilter {
                    filter: VisibilityFilter::ShowActive
                },
            ]
        );
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_actions("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_tag() {
        let message = malformed_message(r#"[{"type": "TOGGLE_TODO", "id": 0}, {"id": 1}]"#);
        assert!(message.contains("#1"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_non_string_tag() {
        let message = malformed_message(r#"[{"type": 7}]"#);
        assert!(message.contains("must be a string"));
    }

    #[test]
    fn test_unknown_tag() {
        let message = malformed_message(r#"[{"type": "DELETE_EVERYTHING"}]"#);
        assert!(message.contains("#0"));
    }

    #[test]
    fn test_init_cannot_be_scripted() {
        malformed_message(r#"[{"type": "INIT"}]"#);
    }

    #[test]
    fn test_bad_payload() {
        let message = malformed_message(r#"[{"type": "TOGGLE_TODO", "id": "zero"}]"#);
        assert!(message.contains("#0"));
    }

    #[test]
    fn test_not_an_array() {
        let message = malformed_message(r#"{"type": "TOGGLE_TODO", "id": 0}"#);
        assert!(message.contains("not a JSON array"));
    }
}
