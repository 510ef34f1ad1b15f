//! Compile one declarative config into action types and action creators

use crate::error::{Error, Result};
use crate::{
    camel_to_screaming_snake, create_action_creator, create_types, Action, ActionCreator,
    ExtraProps, Options, TypeRegistry, Value,
};
use indexmap::IndexMap;
use tracing::debug;

/// How to get the creator for one action
#[derive(Debug, Clone)]
pub enum CreatorDecl {
    /// Synthesize a creator from a field declaration
    Props(ExtraProps),
    /// Use this creator as is
    Custom(ActionCreator),
}

impl From<ExtraProps> for CreatorDecl {
    fn from(props: ExtraProps) -> Self {
        CreatorDecl::Props(props)
    }
}

impl From<ActionCreator> for CreatorDecl {
    fn from(creator: ActionCreator) -> Self {
        CreatorDecl::Custom(creator)
    }
}

/// Bare action name to creator declaration, in declaration order
#[derive(Debug, Clone, Default)]
pub struct ActionConfig {
    decls: IndexMap<String, CreatorDecl>,
}

impl ActionConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an action
    pub fn action(mut self, name: impl Into<String>, decl: impl Into<CreatorDecl>) -> Self {
        self.insert(name, decl);
        self
    }

    /// Declare an action in place, replacing any earlier declaration
    pub fn insert(&mut self, name: impl Into<String>, decl: impl Into<CreatorDecl>) {
        self.decls.insert(name.into(), decl.into());
    }

    /// Check if an action is declared
    pub fn contains(&self, name: &str) -> bool {
        self.decls.contains_key(name)
    }

    /// Number of declared actions
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Check if nothing is declared
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CreatorDecl)> for ActionConfig {
    fn from_iter<I: IntoIterator<Item = (K, CreatorDecl)>>(iter: I) -> Self {
        Self {
            decls: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Compiled action types and creators
#[derive(Debug, Clone)]
pub struct Actions {
    /// SCREAMING_SNAKE_CASE name to qualified type
    pub types: TypeRegistry,
    /// Bare name to creator
    pub creators: IndexMap<String, ActionCreator>,
}

impl Actions {
    /// Qualified type for a bare (camelCase) action name
    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.types.get(&camel_to_screaming_snake(name))
    }

    /// Creator for a bare action name
    pub fn creator(&self, name: &str) -> Option<&ActionCreator> {
        self.creators.get(name)
    }

    /// Look up a creator and run it
    pub fn create(&self, name: &str, args: &[Value]) -> Option<Action> {
        self.creator(name).map(|creator| creator.create(args))
    }
}

/// Build action types and creators from one config
///
/// Type registry keys are the SCREAMING_SNAKE_CASE forms of the config keys;
/// creators stay keyed by the names as declared.
///
/// ```
/// use sauce_core::{create_actions, ActionConfig, ExtraProps, Options};
///
/// let actions = create_actions(
///     ActionConfig::new().action("addTodo", ExtraProps::fields(["text"])),
///     &Options::default(),
/// )
/// .unwrap();
///
/// assert_eq!(actions.types.get("ADD_TODO"), Some("ADD_TODO"));
/// assert_eq!(actions.type_of("addTodo"), Some("ADD_TODO"));
/// ```
pub fn create_actions(config: ActionConfig, options: &Options) -> Result<Actions> {
    if config.is_empty() {
        return Err(Error::invalid("empty objects are not supported"));
    }

    let names = config
        .decls
        .keys()
        .map(|name| camel_to_screaming_snake(name))
        .collect::<Vec<_>>()
        .join(" ");
    let types = create_types(&names, options)?;

    let creators: IndexMap<String, ActionCreator> = config
        .decls
        .into_iter()
        .map(|(name, decl)| {
            let creator = match decl {
                CreatorDecl::Custom(creator) => creator,
                CreatorDecl::Props(props) => create_action_creator(&name, props, options),
            };
            (name, creator)
        })
        .collect();

    debug!(
        types = types.len(),
        creators = creators.len(),
        prefix = options.prefix(),
        "built actions"
    );
    Ok(Actions { types, creators })
}
