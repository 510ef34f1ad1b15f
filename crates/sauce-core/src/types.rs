//! Action type registries and type-name derivation

use crate::error::{Error, Result};
use crate::Options;
use indexmap::IndexMap;
use std::ops::Index;
use tracing::debug;

/// Handler-map key consulted when no handler matches the action type exactly
pub const DEFAULT: &str = "REDUXSAUCE.DEFAULT";

/// Convert a camelCase name into SCREAMING_SNAKE_CASE
///
/// An underscore goes before each uppercase letter that is neither the first
/// nor the last character and follows a lowercase letter or digit. Already
/// screaming names pass through unchanged.
///
/// ```
/// use sauce_core::camel_to_screaming_snake;
///
/// assert_eq!(camel_to_screaming_snake("addTodo"), "ADD_TODO");
/// assert_eq!(camel_to_screaming_snake("ADD_TODO"), "ADD_TODO");
/// ```
pub fn camel_to_screaming_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let last = chars.len().saturating_sub(1);
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 && i < last {
            let prev = chars[i - 1];
            if prev.is_lowercase() || prev.is_ascii_digit() {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }
    out
}

/// Immutable lookup table from bare name to qualified action type
///
/// Keeps the order names were declared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRegistry {
    types: IndexMap<String, String>,
}

impl TypeRegistry {
    /// Get the qualified type for a bare name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.types.get(name).map(String::as_str)
    }

    /// Check if a bare name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// A built registry is never empty, but the check is cheap
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Bare names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// `(bare name, qualified type)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Index<&str> for TypeRegistry {
    type Output = str;

    /// Panics if the name is not registered; use [`TypeRegistry::get`] otherwise
    fn index(&self, name: &str) -> &str {
        match self.types.get(name) {
            Some(qualified) => qualified,
            None => panic!("unknown action type name: {}", name),
        }
    }
}

/// Build a type registry from a whitespace-separated list of names
///
/// Each name maps to `prefix + name`. Fails if the list holds no names.
///
/// ```
/// use sauce_core::{create_types, Options};
///
/// let types = create_types("LOGIN LOGOUT", &Options::with_prefix("auth/")).unwrap();
/// assert_eq!(types.get("LOGIN"), Some("auth/LOGIN"));
/// ```
pub fn create_types(types: &str, options: &Options) -> Result<TypeRegistry> {
    let types: IndexMap<String, String> = types
        .split_whitespace()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| (name.to_string(), options.qualify(name)))
        .collect();

    if types.is_empty() {
        return Err(Error::invalid("valid types are required"));
    }

    debug!(count = types.len(), prefix = options.prefix(), "built type registry");
    Ok(TypeRegistry { types })
}
