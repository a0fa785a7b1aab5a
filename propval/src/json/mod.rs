//! Conversions between property trees and plain JSON documents.
//!
//! These are in-memory conversions for callers that hold ordinary
//! [`serde_json::Value`] data, such as provider configuration read from a
//! file. JSON has no notion of secrets, unknowns, or blob handles, so
//! importing never produces them and exporting has to decide what to do when
//! it meets one.

mod handling;

use serde_json::{Map, Number, Value};

use crate::{PropertyMap, PropertyPath, PropertyValue, ValueError, ValueResult};

pub use handling::SecretHandling;

impl PropertyValue {
    /// Converts a plain JSON value. Numbers become `f64`.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => number.as_f64().map_or(Self::Null, Self::Number),
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from_json).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, entry)| (key, Self::from_json(entry)))
                    .collect(),
            ),
        }
    }

    /// Converts this value to plain JSON.
    ///
    /// Resolved outputs are replaced by their value and secrets are treated as
    /// `secrets` dictates.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] naming the offending node when the tree holds
    /// an unknown value, a non-finite number, an asset or archive handle, or a
    /// secret while `secrets` is [`SecretHandling::Reject`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propval::{PropertyValue, SecretHandling};
    /// use serde_json::json;
    ///
    /// let value = PropertyValue::object([
    ///     ("user", PropertyValue::string("admin")),
    ///     ("password", PropertyValue::secret("hunter2")),
    /// ]);
    /// let exported = value.to_json(SecretHandling::Redact)?;
    /// assert_eq!(exported, json!({"user": "admin", "password": "[secret]"}));
    /// # Ok::<_, propval::ValueError>(())
    /// ```
    pub fn to_json(&self, secrets: SecretHandling) -> ValueResult<Value> {
        JsonExport::new(secrets).export(self)
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::from_json(value)
    }
}

/// Converts a JSON object into a property map.
///
/// # Errors
///
/// Returns [`ValueError::NotAnObject`] when `document` is not an object.
pub fn property_map_from_json(document: Value) -> ValueResult<PropertyMap> {
    match PropertyValue::from_json(document) {
        PropertyValue::Object(map) => Ok(map),
        other => Err(ValueError::NotAnObject {
            found: other.type_name(),
        }),
    }
}

/// Converts a property map into a JSON object.
///
/// # Errors
///
/// Fails under the same conditions as [`PropertyValue::to_json`].
pub fn property_map_to_json(map: &PropertyMap, secrets: SecretHandling) -> ValueResult<Value> {
    JsonExport::new(secrets).export_map(map).map(Value::Object)
}

/// Export state: the policy and the location of the node being exported.
struct JsonExport {
    secrets: SecretHandling,
    path: PropertyPath,
}

impl JsonExport {
    const fn new(secrets: SecretHandling) -> Self {
        Self {
            secrets,
            path: PropertyPath::root(),
        }
    }

    fn export(&mut self, value: &PropertyValue) -> ValueResult<Value> {
        match value {
            PropertyValue::Null => Ok(Value::Null),
            PropertyValue::Bool(flag) => Ok(Value::Bool(*flag)),
            PropertyValue::Number(number) => Number::from_f64(*number)
                .map(Value::Number)
                .ok_or_else(|| ValueError::NonFiniteNumber {
                    path: self.path.clone(),
                    value: *number,
                }),
            PropertyValue::String(text) => Ok(Value::String(text.clone())),
            PropertyValue::Asset(_) | PropertyValue::Archive(_) => Err(ValueError::Opaque {
                path: self.path.clone(),
                kind: value.kind(),
            }),
            PropertyValue::Computed | PropertyValue::Output { known: false, .. } => {
                Err(ValueError::Unknown {
                    path: self.path.clone(),
                })
            }
            PropertyValue::Output { value: inner, known: true } => self.export(inner),
            PropertyValue::Array(items) => self.export_items(items).map(Value::Array),
            PropertyValue::Object(map) => self.export_map(map).map(Value::Object),
            PropertyValue::Secret(inner) => self.export_secret(inner),
        }
    }

    fn export_secret(&mut self, inner: &PropertyValue) -> ValueResult<Value> {
        match self.secrets {
            SecretHandling::Reveal => self.export(inner),
            SecretHandling::Redact => Ok(Value::String(crate::value::REDACTED.to_owned())),
            SecretHandling::Reject => Err(ValueError::SecretRejected {
                path: self.path.clone(),
            }),
        }
    }

    fn export_items(&mut self, items: &[PropertyValue]) -> ValueResult<Vec<Value>> {
        let mut exported = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            self.path.push_index(index);
            exported.push(self.export(item)?);
            self.path.pop();
        }
        Ok(exported)
    }

    fn export_map(&mut self, map: &PropertyMap) -> ValueResult<Map<String, Value>> {
        let mut exported = Map::new();
        for (key, entry) in map {
            self.path.push_key(key.as_str());
            exported.insert(key.clone(), self.export(entry)?);
            self.path.pop();
        }
        Ok(exported)
    }
}

#[cfg(test)]
mod tests;
