use thiserror::Error;

/// Error type reducers return when a transition cannot be computed
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while creating a store or dispatching to it
#[derive(Debug, Error)]
pub enum StoreError {
    /// The reducer failed; the state was left unchanged and no listener fired.
    #[error("Transition failed for action {action}: {source}")]
    Transition {
        action: &'static str,
        #[source]
        source: BoxError,
    },

    /// An action could not be decoded or is missing its type tag.
    #[error("Malformed action: {0}")]
    MalformedAction(String),

    /// A reducer tried to dispatch while computing the next state.
    #[error("Reducers may not dispatch actions (attempted {0})")]
    DispatchFromReducer(&'static str),

    /// Listeners or middleware nested dispatch calls beyond the configured limit.
    #[error("Nested dispatch exceeded the limit of {0}")]
    DispatchDepthExceeded(usize),
}
