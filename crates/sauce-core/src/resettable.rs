//! Reducers that snap back to their initial state on a reset action

use crate::error::{Error, Result};
use crate::{Action, Reducer};
use tracing::debug;

/// A reset wrapper waiting for the reducer to wrap
///
/// Returned by [`resettable_reducer`]. Wrapping has no side effects beyond
/// running the wrapped reducer once, so one `ResetOn` can wrap any number of
/// reducers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetOn {
    reset_type: String,
}

impl ResetOn {
    /// The action type that triggers a reset
    pub fn reset_type(&self) -> &str {
        &self.reset_type
    }

    /// Wrap a reducer
    ///
    /// The reset state is what `reducer` returns for no state and an empty
    /// action, computed once, here.
    pub fn wrap<S>(&self, reducer: Reducer<S>) -> Reducer<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let reset_state = reducer.reduce(None, Some(&Action::empty()));
        let reset_type = self.reset_type.clone();
        debug!(reset_type = %reset_type, "wrapped resettable reducer");

        Reducer::from_fn(move |state: Option<S>, action: Option<&Action>| {
            if action.and_then(Action::action_type) == Some(reset_type.as_str()) {
                return reset_state.clone();
            }
            let state = state.unwrap_or_else(|| reset_state.clone());
            reducer.reduce(Some(state), action)
        })
    }
}

/// Start a reset wrapper for `type_to_reset`
///
/// ```
/// use sauce_core::{create_reducer, resettable_reducer, Action, Handlers};
///
/// let counter = create_reducer(
///     0i64,
///     Handlers::new().on("INCREMENT", |count: i64, _: &Action| count + 1),
/// )
/// .unwrap();
///
/// let reducer = resettable_reducer("RESET").unwrap().wrap(counter);
/// assert_eq!(reducer.reduce(Some(41), Some(&Action::new("INCREMENT"))), 42);
/// assert_eq!(reducer.reduce(Some(41), Some(&Action::new("RESET"))), 0);
/// ```
pub fn resettable_reducer(type_to_reset: &str) -> Result<ResetOn> {
    if type_to_reset.is_empty() {
        return Err(Error::invalid("A valid reset type is required."));
    }
    Ok(ResetOn {
        reset_type: type_to_reset.to_string(),
    })
}

/// Wrap `reducer` so that `type_to_reset` returns it to its initial state
pub fn resettable_reducer_with<S>(type_to_reset: &str, reducer: Reducer<S>) -> Result<Reducer<S>>
where
    S: Clone + Send + Sync + 'static,
{
    Ok(resettable_reducer(type_to_reset)?.wrap(reducer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_reducer, Handlers};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> Reducer<i64> {
        create_reducer(
            10i64,
            Handlers::new()
                .on("INCREMENT", |count: i64, _: &Action| count + 1)
                .on("RESET", |_: i64, _: &Action| -100),
        )
        .unwrap()
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let reducer = resettable_reducer_with("RESET", counter()).unwrap();
        for state in [None, Some(0), Some(99), Some(-5)] {
            assert_eq!(reducer.reduce(state, Some(&Action::new("RESET"))), 10);
        }
    }

    #[test]
    fn test_other_actions_delegate() {
        let reducer = resettable_reducer_with("RESET", counter()).unwrap();
        assert_eq!(reducer.reduce(Some(1), Some(&Action::new("INCREMENT"))), 2);
        assert_eq!(reducer.reduce(None, Some(&Action::new("INCREMENT"))), 11);
        assert_eq!(reducer.reduce(Some(7), None), 7);
        assert_eq!(reducer.reduce(Some(7), Some(&Action::empty())), 7);
    }

    #[test]
    fn test_reset_state_computed_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let original = Reducer::from_fn(move |state: Option<i64>, _: Option<&Action>| {
            seen.fetch_add(1, Ordering::SeqCst);
            state.unwrap_or(3)
        });

        let reducer = resettable_reducer_with("CLEAR", original).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(reducer.reduce(Some(8), Some(&Action::new("CLEAR"))), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_curried_wrapper_is_reusable() {
        let reset = resettable_reducer("app/RESET").unwrap();
        assert_eq!(reset.reset_type(), "app/RESET");

        let a = reset.wrap(counter());
        let b = reset.wrap(create_reducer(String::from("idle"), Handlers::new()).unwrap());

        assert_eq!(a.reduce(Some(50), Some(&Action::new("app/RESET"))), 10);
        assert_eq!(
            b.reduce(Some("busy".into()), Some(&Action::new("app/RESET"))),
            "idle"
        );
    }

    #[test]
    fn test_reset_type_required() {
        assert!(matches!(
            resettable_reducer(""),
            Err(Error::InvalidArgument(_))
        ));
        assert!(resettable_reducer_with("", counter()).is_err());
    }
}
