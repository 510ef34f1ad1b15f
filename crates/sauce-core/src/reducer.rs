//! Reducers: total functions folding an action into a new state

use crate::error::{Error, Result};
use crate::{Action, Value, DEFAULT};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Handler-map key rejected at build time; it shows up when a handler map is
/// keyed by a type lookup that found nothing
const UNDEFINED_KEY: &str = "undefined";

/// State types usable as a reducer's initial state
///
/// Types with a "nothing here" value report it through `is_absent`, which
/// makes [`create_reducer`] refuse it as an initial state. Plain data types
/// implement this with the default method.
pub trait InitialState {
    fn is_absent(&self) -> bool {
        false
    }
}

impl InitialState for Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T> InitialState for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

macro_rules! present_state {
    ($($ty:ty),* $(,)?) => {
        $(impl InitialState for $ty {})*
    };
}

present_state!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, String);

impl<T> InitialState for Vec<T> {}
impl<K, V> InitialState for IndexMap<K, V> {}

type HandlerFn<S> = dyn Fn(S, &Action) -> S + Send + Sync;
type ReduceFn<S> = dyn Fn(Option<S>, Option<&Action>) -> S + Send + Sync;

/// Handler map: action type (or [`DEFAULT`]) to handler
///
/// Registering the same key twice keeps the last handler.
pub struct Handlers<S> {
    handlers: IndexMap<String, Arc<HandlerFn<S>>>,
}

impl<S> Handlers<S> {
    /// Create an empty handler map
    pub fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
        }
    }

    /// Handle actions of the given type
    pub fn on<F>(mut self, action_type: impl Into<String>, handler: F) -> Self
    where
        F: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        self.handlers.insert(action_type.into(), Arc::new(handler));
        self
    }

    /// Handle every action no other handler matches
    pub fn on_default<F>(self, handler: F) -> Self
    where
        F: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        self.on(DEFAULT, handler)
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handlers are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Check if a key has a handler
    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }
}

impl<S> Default for Handlers<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A reducer: `(state, action) -> state`
///
/// `None` state means no state yet; `None` action means no action at all.
/// Built reducers never panic on odd input and hand the state back instead.
pub struct Reducer<S> {
    reduce: Arc<ReduceFn<S>>,
}

impl<S> Reducer<S> {
    /// Wrap a hand-written reducer
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<S>, Option<&Action>) -> S + Send + Sync + 'static,
    {
        Self { reduce: Arc::new(f) }
    }

    /// Fold an action into the state
    pub fn reduce(&self, state: Option<S>, action: Option<&Action>) -> S {
        (self.reduce)(state, action)
    }

    /// Fold a sequence of actions, starting from the reducer's own initial state
    pub fn fold<'a, I>(&self, actions: I) -> S
    where
        I: IntoIterator<Item = &'a Action>,
    {
        actions
            .into_iter()
            .fold(self.reduce(None, None), |state, action| {
                self.reduce(Some(state), Some(action))
            })
    }
}

impl<S> Clone for Reducer<S> {
    fn clone(&self) -> Self {
        Self {
            reduce: Arc::clone(&self.reduce),
        }
    }
}

impl<S> fmt::Debug for Reducer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer").finish_non_exhaustive()
    }
}

/// Build a reducer from an initial state and a handler map
///
/// Dispatch, in order:
/// 1. no state: use `initial_state`
/// 2. no action, or no `type` field: return the state
/// 3. handler for the type, else the [`DEFAULT`] handler
/// 4. no handler: return the state
/// 5. return whatever the handler returns
///
/// ```
/// use sauce_core::{create_reducer, Action, Handlers};
///
/// let reducer = create_reducer(
///     0i64,
///     Handlers::new().on("INCREMENT", |count: i64, _: &Action| count + 1),
/// )
/// .unwrap();
///
/// assert_eq!(reducer.reduce(None, Some(&Action::new("INCREMENT"))), 1);
/// assert_eq!(reducer.reduce(Some(5), Some(&Action::empty())), 5);
/// ```
pub fn create_reducer<S>(initial_state: S, handlers: Handlers<S>) -> Result<Reducer<S>>
where
    S: InitialState + Clone + Send + Sync + 'static,
{
    if initial_state.is_absent() {
        return Err(Error::invalid("initial state is required"));
    }

    if handlers.contains(UNDEFINED_KEY) {
        return Err(Error::invalid("handlers cannot have an undefined key"));
    }

    debug!(
        handlers = handlers.len(),
        has_default = handlers.contains(DEFAULT),
        "built reducer"
    );

    let handlers = handlers.handlers;
    Ok(Reducer::from_fn(move |state: Option<S>, action: Option<&Action>| {
        let state = state.unwrap_or_else(|| initial_state.clone());

        let action = match action {
            Some(action) if action.has_type() => action,
            _ => return state,
        };

        let handler = action
            .action_type()
            .and_then(|action_type| handlers.get(action_type))
            .or_else(|| handlers.get(DEFAULT));

        match handler {
            Some(handler) => handler(state, action),
            None => {
                trace!(action_type = ?action.action_type(), "no handler for action");
                state
            }
        }
    }))
}
