//! Reducer composition
//!
//! Reducers are plain functions, so a parent reducer can hand each field of
//! its state to a dedicated field reducer. Two forms are provided:
//!
//! - [`combine_reducers!`](crate::combine_reducers) for a typed record (struct)
//! - [`CombinedReducer`] for a keyed record ([`Slices`]) assembled at runtime
//!
//! Both recompute every field on every action and always build a new record,
//! even when no field changed.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::BoxError;

/// Keyed record produced by a [`CombinedReducer`]
pub type Slices<T> = BTreeMap<&'static str, T>;

type SliceReducer<T, A> = Box<dyn Fn(Option<&T>, &A) -> Result<T, BoxError> + Send + Sync>;

/// Lift an infallible reducer into the fallible form composition expects
pub fn infallible<T, A, F>(reducer: F) -> impl Fn(Option<&T>, &A) -> Result<T, BoxError>
where
    F: Fn(Option<&T>, &A) -> T,
{
    move |state: Option<&T>, action: &A| -> Result<T, BoxError> { Ok(reducer(state, action)) }
}

/// Combine field reducers into a reducer for a whole struct
///
/// Each field reducer receives that field of the previous state (`None` on
/// the first call) and the action, and returns `Result<Field, BoxError>`.
/// The first failing field aborts the transition.
///
/// ```rust,ignore
/// let todo_app = combine_reducers!(TodoState {
///     todos: reduce_todos,
///     visibility_filter: infallible(reduce_visibility_filter),
/// });
/// let store = Store::try_new(todo_app)?;
/// ```
#[macro_export]
macro_rules! combine_reducers {
    ($record:ident { $($field:ident : $reducer:expr),+ $(,)? }) => {
        move |state: ::core::option::Option<&$record>,
              action: &_|
              -> ::core::result::Result<$record, $crate::BoxError> {
            ::core::result::Result::Ok($record {
                $($field: ($reducer)(state.map(|previous| &previous.$field), action)?,)+
            })
        }
    };
}

/// Runtime equivalent of `combineReducers({ key: reducer, ... })`
///
/// Builds a reducer over [`Slices`]: every registered slice is recomputed on
/// every action, a slice missing from the previous record is passed as `None`,
/// and the result is always a freshly built map.
pub struct CombinedReducer<T, A> {
    reducers: Vec<(&'static str, SliceReducer<T, A>)>,
}

impl<T, A> Default for CombinedReducer<T, A> {
    fn default() -> Self {
        Self {
            reducers: Vec::new(),
        }
    }
}

impl<T, A> CombinedReducer<T, A>
where
    T: 'static,
    A: 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the reducer for slice `name`, replacing any earlier one.
    pub fn slice<F>(mut self, name: &'static str, reducer: F) -> Self
    where
        F: Fn(Option<&T>, &A) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        match self.reducers.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = Box::new(reducer),
            None => self.reducers.push((name, Box::new(reducer))),
        }
        self
    }

    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.reducers.iter().map(|(name, _)| *name)
    }

    /// Compute the next record
    pub fn reduce(&self, state: Option<&Slices<T>>, action: &A) -> Result<Slices<T>, BoxError> {
        let mut next = Slices::new();
        for (name, reducer) in &self.reducers {
            let previous = state.and_then(|slices| slices.get(name));
            next.insert(*name, reducer(previous, action)?);
        }
        Ok(next)
    }

    /// Turn the combination into a reducer a store accepts
    pub fn into_reducer(
        self,
    ) -> impl Fn(Option<&Slices<T>>, &A) -> Result<Slices<T>, BoxError> + Send + Sync + 'static
    {
        move |state: Option<&Slices<T>>, action: &A| self.reduce(state, action)
    }
}

impl<T, A> fmt::Debug for CombinedReducer<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.reducers.iter().map(|(name, _)| name))
            .finish()
    }
}
