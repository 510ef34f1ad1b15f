//! Builder options shared by type registries and action creators

use serde::{Deserialize, Serialize};

/// Options for [`create_types`](crate::create_types),
/// [`create_action_creator`](crate::create_action_creator) and
/// [`create_actions`](crate::create_actions)
///
/// # Example
///
/// ```
/// use sauce_core::Options;
///
/// let options = Options::default();
/// assert_eq!(options.prefix(), "");
///
/// let options = Options::with_prefix("todos/");
/// assert_eq!(options.prefix(), "todos/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Prepended to every derived action type, used to namespace actions
    prefix: String,
}

impl Options {
    /// Create options with the given type prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Get the type prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Qualify a type name with the prefix
    pub(crate) fn qualify(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_qualify() {
        assert_eq!(Options::default().qualify("ADD"), "ADD");
        assert_eq!(Options::with_prefix("app/").qualify("ADD"), "app/ADD");
    }

    #[test]
    fn test_options_from_ron() {
        let options: Options = ron::from_str(r#"(prefix: "todos/")"#).unwrap();
        assert_eq!(options.prefix(), "todos/");

        let options: Options = ron::from_str("()").unwrap();
        assert_eq!(options, Options::default());
    }
}
