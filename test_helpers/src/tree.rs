//! Terse builders and lookups for property trees.
//!
//! # Examples
//!
//! ```
//! use propval_test_helpers::tree::{map, obj, secret, string};
//!
//! let props = map([("db", obj([("password", secret(string("pw")))]))]);
//! assert!(props["db"].contains_secrets());
//! ```

use std::collections::BTreeSet;

use anyhow::{Result, anyhow};
use propval::{PropertyMap, PropertyPath, PropertyValue};

/// Builds a property map from `(key, value)` pairs.
#[must_use]
pub fn map<I, K>(entries: I) -> PropertyMap
where
    I: IntoIterator<Item = (K, PropertyValue)>,
    K: Into<String>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect()
}

/// Builds an object value from `(key, value)` pairs.
#[must_use]
pub fn obj<I, K>(entries: I) -> PropertyValue
where
    I: IntoIterator<Item = (K, PropertyValue)>,
    K: Into<String>,
{
    PropertyValue::Object(map(entries))
}

/// Builds an array value.
#[must_use]
pub fn arr<I>(items: I) -> PropertyValue
where
    I: IntoIterator<Item = PropertyValue>,
{
    PropertyValue::Array(items.into_iter().collect())
}

/// Marks `value` secret.
#[must_use]
pub fn secret(value: PropertyValue) -> PropertyValue {
    value.make_secret()
}

/// Builds a string value.
#[must_use]
pub fn string(text: &str) -> PropertyValue {
    PropertyValue::string(text)
}

/// Builds a number value.
#[must_use]
pub const fn number(value: f64) -> PropertyValue {
    PropertyValue::number(value)
}

/// Returns the keys of `map` as an ordered set.
#[must_use]
pub fn key_set(map: &PropertyMap) -> BTreeSet<String> {
    map.keys().cloned().collect()
}

/// Parses a dotted path such as `b.c` or `items.1.name`.
///
/// Segments made only of digits are treated as array indices.
#[must_use]
pub fn path(dotted: &str) -> PropertyPath {
    let mut parsed = PropertyPath::root();
    for segment in dotted.split('.').filter(|segment| !segment.is_empty()) {
        match segment.parse::<usize>() {
            Ok(index) => parsed.push_index(index),
            Err(_) => parsed.push_key(segment),
        }
    }
    parsed
}

/// Looks up the node at `dotted` within `map`.
///
/// # Errors
///
/// Returns an error naming the path when no node exists there.
pub fn node_at<'a>(map: &'a PropertyMap, dotted: &str) -> Result<&'a PropertyValue> {
    let target = path(dotted);
    let mut segments = target.segments().iter();
    let first = match segments.next() {
        Some(propval::PathSegment::Key(key)) => map.get(key),
        Some(propval::PathSegment::Index(_)) | None => None,
    };
    let rest: PropertyPath = segments.cloned().collect();
    first
        .and_then(|node| node.get_path(&rest))
        .ok_or_else(|| anyhow!("no property at '{target}'"))
}

#[cfg(test)]
mod tests {
    use super::{arr, map, node_at, number, obj, path, secret, string};

    #[test]
    fn path_parses_keys_and_indices() {
        assert_eq!(path("items.1.name").to_string(), "items[1].name");
        assert!(path("").is_root());
    }

    #[test]
    fn node_at_walks_into_secrets() {
        let props = map([(
            "items",
            arr([number(0.0), secret(obj([("name", string("x"))]))]),
        )]);
        assert_eq!(
            node_at(&props, "items.1.name").ok(),
            Some(&string("x"))
        );
        assert!(node_at(&props, "items.2").is_err());
        assert!(node_at(&props, "missing").is_err());
    }
}
