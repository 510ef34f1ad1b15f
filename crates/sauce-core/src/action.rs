//! Flat, string-tagged action records

use crate::{Value, ValueMap};
use serde::{Deserialize, Serialize};

/// Field that carries the action type
pub const TYPE_FIELD: &str = "type";

/// A plain action: a `type` tag plus payload fields, all in one flat map
///
/// The `type` field is optional at the data level so that reducers can be
/// handed arbitrary records; built reducers treat a missing tag as a no-op.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action {
    fields: ValueMap,
}

impl Action {
    /// Create an action carrying only its type
    pub fn new(action_type: impl Into<String>) -> Self {
        let mut fields = ValueMap::new();
        fields.insert(TYPE_FIELD.to_string(), Value::String(action_type.into()));
        Self { fields }
    }

    /// Create an action with no fields at all, not even a type
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an existing field map
    pub fn from_fields(fields: ValueMap) -> Self {
        Self { fields }
    }

    /// Add a payload field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Whether the record has a `type` field, whatever its value
    pub fn has_type(&self) -> bool {
        self.fields.contains_key(TYPE_FIELD)
    }

    /// The action type, if present and a string
    pub fn action_type(&self) -> Option<&str> {
        self.fields.get(TYPE_FIELD).and_then(Value::as_str)
    }

    /// Get a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields, `type` included
    pub fn fields(&self) -> &ValueMap {
        &self.fields
    }

    /// Consume the action and return its fields
    pub fn into_fields(self) -> ValueMap {
        self.fields
    }
}

impl From<ValueMap> for Action {
    fn from(fields: ValueMap) -> Self {
        Self::from_fields(fields)
    }
}
