//! Field-level validation messages carried in the `errors` channel of a
//! [`DetailedResponse`](crate::DetailedResponse).

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mapping from field name to its ordered validation messages.
///
/// Serializes as a plain JSON object: `{"email": ["required", "invalid"]}`.
/// Fields are kept in sorted order so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ValidationErrors::push`].
    pub fn add(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.push(field, message);
        self
    }

    /// Append `message` to the list for `field`, keeping insertion order.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_value(self) -> Value {
        Value::Object(
            self.0
                .into_iter()
                .map(|(field, messages)| (field, Value::from(messages)))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, Vec<String>>> for ValidationErrors {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

impl From<HashMap<String, Vec<String>>> for ValidationErrors {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl From<ValidationErrors> for Value {
    fn from(errors: ValidationErrors) -> Self {
        errors.into_value()
    }
}
