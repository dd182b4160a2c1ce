use std::fmt::Debug;

/// Actions represent all possible state changes of an application.
///
/// Implement this on a closed enum of every action kind. Deriving
/// `strum::IntoStaticStr` gives a ready-made tag for [`Action::kind`].
pub trait Action: Debug + Send + Sync + 'static {
    /// Sentinel action dispatched exactly once, when a store is created.
    ///
    /// Reducers must not match it; their fallback branch returns the initial state.
    fn init() -> Self;

    /// Discriminator tag, used in logs and errors
    fn kind(&self) -> &'static str;
}
