//! Sauce Core - action types, action creators and reducers
//!
//! Helpers for the three artifacts of a string-tagged reducer architecture:
//! - Type registries (`create_types`) mapping names to qualified action types
//! - Action creators (`create_action_creator`, `create_actions`) building flat,
//!   tagged `Action` records
//! - Reducers (`create_reducer`) with a `DEFAULT` wildcard handler, and reset
//!   wrappers (`resettable_reducer`) that return a reducer to its initial state
//!
//! Nothing here dispatches or stores state. Everything is built once, up front,
//! and errors only surface while building.
//!
//! ## Example
//!
//! ```
//! use sauce_core::{create_actions, create_reducer, ActionConfig, ExtraProps, Handlers, Options, Value};
//!
//! let actions = create_actions(
//!     ActionConfig::new().action("addTodo", ExtraProps::fields(["text"])),
//!     &Options::default(),
//! )
//! .unwrap();
//!
//! let todos = create_reducer(
//!     Value::List(vec![]),
//!     Handlers::new().on("ADD_TODO", |state: Value, action: &sauce_core::Action| {
//!         let mut items = state.as_list().map(<[Value]>::to_vec).unwrap_or_default();
//!         items.extend(action.get("text").cloned());
//!         Value::List(items)
//!     }),
//! )
//! .unwrap();
//!
//! let add = actions.create("addTodo", &["write docs".into()]).unwrap();
//! assert_eq!(todos.reduce(None, Some(&add)), Value::from(vec!["write docs"]));
//! ```

mod action;
mod actions;
mod config;
mod creator;
mod error;
mod reducer;
mod resettable;
mod types;
mod value;

pub use action::{Action, TYPE_FIELD};
pub use actions::{create_actions, ActionConfig, Actions, CreatorDecl};
pub use config::Options;
pub use creator::{create_action_creator, ActionCreator, ExtraProps, FieldSpec};
pub use error::{Error, Result};
pub use reducer::{create_reducer, Handlers, InitialState, Reducer};
pub use resettable::{resettable_reducer, resettable_reducer_with, ResetOn};
pub use types::{camel_to_screaming_snake, create_types, TypeRegistry, DEFAULT};
pub use value::{Value, ValueMap};
