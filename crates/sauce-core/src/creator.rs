//! Action creators: functions that build tagged actions
//!
//! A creator is synthesized from a name and an [`ExtraProps`] declaration:
//! - `None`: the action carries only its type
//! - `Positional`: arguments bind to field names in order, with optional
//!   inline defaults
//! - `Defaults`: a value object is filtered against a map of field defaults

use crate::error::{Error, Result};
use crate::{camel_to_screaming_snake, Action, Options, Value, ValueMap};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// One element of a positional field declaration
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    /// A field bound to the next positional argument
    Name(String),
    /// Default fields merged in with the lowest precedence
    Defaults(ValueMap),
}

impl From<&str> for FieldSpec {
    fn from(name: &str) -> Self {
        FieldSpec::Name(name.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(name: String) -> Self {
        FieldSpec::Name(name)
    }
}

impl From<ValueMap> for FieldSpec {
    fn from(defaults: ValueMap) -> Self {
        FieldSpec::Defaults(defaults)
    }
}

/// Extra fields an action creator attaches besides `type`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExtraProps {
    /// Type-only actions
    #[default]
    None,
    /// Fields bound to positional arguments
    Positional(Vec<FieldSpec>),
    /// Field name to default value; callers pass a value object
    Defaults(ValueMap),
}

impl ExtraProps {
    /// Positional fields from plain names
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FieldSpec>,
    {
        ExtraProps::Positional(names.into_iter().map(Into::into).collect())
    }

    /// Collapse empty declarations to `None`
    fn normalized(self) -> Self {
        match self {
            ExtraProps::Positional(specs) if specs.is_empty() => ExtraProps::None,
            ExtraProps::Defaults(defaults) if defaults.is_empty() => ExtraProps::None,
            other => other,
        }
    }
}

impl TryFrom<Value> for ExtraProps {
    type Error = Error;

    /// Read a declaration written as plain data (`()`, `["text"]`, `{"done": false}`)
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(ExtraProps::None),
            Value::String(s) if s.is_empty() => Ok(ExtraProps::None),
            Value::List(items) => Ok(ExtraProps::Positional(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(name) => Some(FieldSpec::Name(name)),
                        Value::Map(defaults) => Some(FieldSpec::Defaults(defaults)),
                        _ => None,
                    })
                    .collect(),
            )),
            Value::Map(defaults) => Ok(ExtraProps::Defaults(defaults)),
            _ => Err(Error::invalid(
                "action props must be a null/array/object/function",
            )),
        }
    }
}

type CreateFn = dyn Fn(&[Value]) -> Action + Send + Sync;

/// A function producing actions from arguments
///
/// Cheap to clone; all clones share the same closure.
#[derive(Clone)]
pub struct ActionCreator {
    action_type: Option<String>,
    create: Arc<CreateFn>,
}

impl ActionCreator {
    /// Wrap a hand-written creator
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Action + Send + Sync + 'static,
    {
        Self {
            action_type: None,
            create: Arc::new(f),
        }
    }

    /// Build an action from positional arguments
    pub fn create(&self, args: &[Value]) -> Action {
        (self.create)(args)
    }

    /// Build an action without arguments
    pub fn create_empty(&self) -> Action {
        self.create(&[])
    }

    /// Build an action from a value object
    pub fn create_with(&self, values: ValueMap) -> Action {
        self.create(&[Value::Map(values)])
    }

    /// The type this creator stamps on its actions; `None` for hand-written creators
    pub fn action_type(&self) -> Option<&str> {
        self.action_type.as_deref()
    }
}

impl fmt::Debug for ActionCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCreator")
            .field("action_type", &self.action_type)
            .finish_non_exhaustive()
    }
}

/// Synthesize an action creator for `name`
///
/// The action type is the prefixed SCREAMING_SNAKE_CASE form of `name`.
///
/// ```
/// use sauce_core::{create_action_creator, ExtraProps, Options, Value};
///
/// let add_todo = create_action_creator("addTodo", ExtraProps::fields(["text"]), &Options::default());
/// let action = add_todo.create(&["hi".into()]);
/// assert_eq!(action.action_type(), Some("ADD_TODO"));
/// assert_eq!(action.get("text"), Some(&Value::from("hi")));
/// ```
pub fn create_action_creator(name: &str, props: ExtraProps, options: &Options) -> ActionCreator {
    let action_type = options.qualify(&camel_to_screaming_snake(name));
    debug!(name, action_type = %action_type, "built action creator");

    let create: Arc<CreateFn> = match props.normalized() {
        ExtraProps::None => {
            let action_type = action_type.clone();
            Arc::new(move |_: &[Value]| Action::new(action_type.clone()))
        }
        ExtraProps::Positional(specs) => {
            let mut names = Vec::new();
            let mut defaults = ValueMap::new();
            for spec in specs {
                match spec {
                    FieldSpec::Name(name) => names.push(name),
                    FieldSpec::Defaults(map) => defaults.extend(map),
                }
            }

            let action_type = action_type.clone();
            Arc::new(move |args: &[Value]| {
                let mut action = Action::new(action_type.clone()).into_fields();
                action.extend(defaults.iter().map(|(k, v)| (k.clone(), v.clone())));
                action.extend(names.iter().cloned().zip(args.iter().cloned()));
                Action::from_fields(action)
            })
        }
        ExtraProps::Defaults(defaults) => {
            let action_type = action_type.clone();
            Arc::new(move |args: &[Value]| {
                let provided = args.first().and_then(Value::as_map);
                let mut action = Action::new(action_type.clone()).into_fields();
                for (key, default) in &defaults {
                    let value = provided.and_then(|p| p.get(key)).unwrap_or(default);
                    action.insert(key.clone(), value.clone());
                }
                Action::from_fields(action)
            })
        }
    };

    ActionCreator {
        action_type: Some(action_type),
        create,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, Value)]) -> ValueMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_type_only_creator() {
        let creator = create_action_creator("logout", ExtraProps::None, &Options::default());
        assert_eq!(creator.action_type(), Some("LOGOUT"));
        assert_eq!(creator.create(&["ignored".into()]), Action::new("LOGOUT"));
    }

    #[test]
    fn test_empty_declarations_are_type_only() {
        let creator = create_action_creator("a", ExtraProps::Positional(vec![]), &Options::default());
        assert_eq!(creator.create(&["x".into()]), Action::new("A"));

        let creator = create_action_creator("a", ExtraProps::Defaults(ValueMap::new()), &Options::default());
        assert_eq!(creator.create_with(map(&[("b", 1.into())])), Action::new("A"));
    }

    #[test]
    fn test_positional_creator() {
        let creator = create_action_creator(
            "moveTo",
            ExtraProps::fields(["x", "y"]),
            &Options::with_prefix("map/"),
        );
        let action = creator.create(&[1.into(), 2.into()]);
        assert_eq!(action, Action::new("map/MOVE_TO").with("x", 1).with("y", 2));
    }

    #[test]
    fn test_positional_creator_short_args() {
        let creator = create_action_creator("moveTo", ExtraProps::fields(["x", "y"]), &Options::default());
        let action = creator.create(&[1.into()]);
        assert_eq!(action.get("x"), Some(&Value::Int(1)));
        assert!(action.get("y").is_none());
    }

    #[test]
    fn test_positional_creator_with_inline_defaults() {
        let creator = create_action_creator(
            "addTodo",
            ExtraProps::Positional(vec![
                FieldSpec::from("text"),
                FieldSpec::Defaults(map(&[("done", false.into()), ("text", "untitled".into())])),
                FieldSpec::Defaults(map(&[("priority", 1.into())])),
            ]),
            &Options::default(),
        );

        let action = creator.create(&["hi".into()]);
        assert_eq!(action.get("text"), Some(&Value::from("hi")));
        assert_eq!(action.get("done"), Some(&Value::Bool(false)));
        assert_eq!(action.get("priority"), Some(&Value::Int(1)));

        let action = creator.create_empty();
        assert_eq!(action.get("text"), Some(&Value::from("untitled")));
    }

    #[test]
    fn test_defaults_creator() {
        let creator = create_action_creator(
            "setFilter",
            ExtraProps::Defaults(map(&[("filter", "all".into()), ("page", 1.into())])),
            &Options::default(),
        );

        let action = creator.create_with(map(&[("page", 3.into()), ("extra", true.into())]));
        assert_eq!(
            action,
            Action::new("SET_FILTER").with("filter", "all").with("page", 3)
        );
        assert!(action.get("extra").is_none());
    }

    #[test]
    fn test_defaults_creator_without_values() {
        let creator = create_action_creator(
            "setFilter",
            ExtraProps::Defaults(map(&[("filter", "all".into())])),
            &Options::default(),
        );
        assert_eq!(creator.create_empty(), Action::new("SET_FILTER").with("filter", "all"));
        assert_eq!(
            creator.create(&[5.into()]),
            Action::new("SET_FILTER").with("filter", "all")
        );
    }

    #[test]
    fn test_extra_props_from_value() {
        assert_eq!(ExtraProps::try_from(Value::Null).unwrap(), ExtraProps::None);
        assert_eq!(
            ExtraProps::try_from(Value::from(vec![Value::from("text"), Value::Int(3)])).unwrap(),
            ExtraProps::fields(["text"])
        );
        assert!(matches!(
            ExtraProps::try_from(Value::Map(map(&[("a", 1.into())]))).unwrap(),
            ExtraProps::Defaults(_)
        ));
    }

    #[test]
    fn test_extra_props_rejects_scalars() {
        for value in [Value::Int(1), Value::Bool(true), Value::from("text")] {
            assert!(matches!(
                ExtraProps::try_from(value),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_custom_creator() {
        let creator = ActionCreator::from_fn(|args| {
            Action::new("CUSTOM").with("count", args.len() as i64)
        });
        assert_eq!(creator.action_type(), None);
        assert_eq!(creator.create(&[1.into(), 2.into()]).get("count"), Some(&Value::Int(2)));
    }
}
