//! Secret propagation between corresponding property trees.
//!
//! A provider often returns freshly computed outputs that no longer carry the
//! secret markers present on the inputs they were derived from. The functions
//! here copy those markers across: every node of the destination whose
//! counterpart in the source is secret becomes secret too, while the data of
//! the destination is left as it was.

use std::mem;

use crate::{PropertyMap, PropertyPath, PropertyValue};

/// Copies the secrecy of `source` onto `destination` in place.
///
/// Keys are matched recursively through objects, and array elements by
/// index. For each pair of matching nodes:
/// - a secret source node makes the destination node secret, keeping the
///   destination's own contents and without looking any deeper;
/// - two objects or two arrays are matched entry by entry;
/// - anything else leaves the destination node untouched.
///
/// Keys that only exist in `source` are never added to `destination`, keys
/// that only exist in `destination` are preserved, and array elements beyond
/// the shorter of two arrays are ignored. The walk never fails: nodes whose
/// shapes disagree are simply left alone.
///
/// # Examples
///
/// ```rust
/// use propval::{PropertyMap, PropertyValue, propagate_secrets};
///
/// let source = PropertyMap::from([(
///     "db".to_owned(),
///     PropertyValue::object([("password", PropertyValue::secret("pw"))]),
/// )]);
/// let mut destination = PropertyMap::from([(
///     "db".to_owned(),
///     PropertyValue::object([("password", "pw"), ("host", "db.internal")]),
/// )]);
///
/// propagate_secrets(&mut destination, &source);
///
/// let db = destination["db"].as_object().expect("db stays an object");
/// assert!(db["password"].is_secret());
/// assert!(!db["host"].is_secret());
/// ```
pub fn propagate_secrets(destination: &mut PropertyMap, source: &PropertyMap) {
    let mut walk = SecretWalk::default();
    walk.merge_map(destination, source);
    walk.report();
}

/// Copies the secrecy of `source` onto `destination` for a single pair of
/// nodes, following the same rules as [`propagate_secrets`].
pub fn propagate_value_secrets(destination: &mut PropertyValue, source: &PropertyValue) {
    let mut walk = SecretWalk::default();
    walk.merge_node(destination, source);
    walk.report();
}

/// Value-semantics form of [`propagate_secrets`]: consumes `destination` and
/// returns it with the secrecy of `source` applied.
#[must_use]
pub fn with_propagated_secrets(mut destination: PropertyMap, source: &PropertyMap) -> PropertyMap {
    propagate_secrets(&mut destination, source);
    destination
}

/// Method-call access to [`propagate_secrets`].
///
/// ```rust
/// use propval::{PropagateSecretsExt, PropertyMap, PropertyValue};
///
/// let inputs = PropertyMap::from([("key".to_owned(), PropertyValue::secret("k"))]);
/// let mut outputs = PropertyMap::from([("key".to_owned(), PropertyValue::string("k"))]);
/// outputs.propagate_secrets_from(&inputs);
/// assert!(outputs["key"].is_secret());
/// ```
pub trait PropagateSecretsExt {
    /// Copies the secrecy of `source` onto `self`.
    fn propagate_secrets_from(&mut self, source: &PropertyMap);
}

impl PropagateSecretsExt for PropertyMap {
    fn propagate_secrets_from(&mut self, source: &PropertyMap) {
        propagate_secrets(self, source);
    }
}

/// State carried through one propagation walk.
#[derive(Debug, Default)]
struct SecretWalk {
    path: PropertyPath,
    wrapped: usize,
    matched: usize,
    unmatched: usize,
}

impl SecretWalk {
    fn merge_map(&mut self, destination: &mut PropertyMap, source: &PropertyMap) {
        for (key, node) in destination.iter_mut() {
            let Some(counterpart) = source.get(key) else {
                self.unmatched += 1;
                continue;
            };
            self.matched += 1;
            self.path.push_key(key.as_str());
            self.merge_node(node, counterpart);
            self.path.pop();
        }
    }

    fn merge_items(&mut self, destination: &mut [PropertyValue], source: &[PropertyValue]) {
        for (index, (node, counterpart)) in destination.iter_mut().zip(source).enumerate() {
            self.path.push_index(index);
            self.merge_node(node, counterpart);
            self.path.pop();
        }
    }

    fn merge_node(&mut self, destination: &mut PropertyValue, source: &PropertyValue) {
        match source {
            PropertyValue::Secret(_) => self.mark_secret(destination),
            PropertyValue::Object(source_map) => {
                if let PropertyValue::Object(destination_map) = destination {
                    self.merge_map(destination_map, source_map);
                }
            }
            PropertyValue::Array(source_items) => {
                if let PropertyValue::Array(destination_items) = destination {
                    self.merge_items(destination_items, source_items);
                }
            }
            PropertyValue::Null
            | PropertyValue::Bool(_)
            | PropertyValue::Number(_)
            | PropertyValue::String(_)
            | PropertyValue::Asset(_)
            | PropertyValue::Archive(_)
            | PropertyValue::Computed
            | PropertyValue::Output { .. } => {}
        }
    }

    fn mark_secret(&mut self, destination: &mut PropertyValue) {
        if destination.is_secret() {
            return;
        }
        let plain = mem::take(destination);
        *destination = PropertyValue::Secret(Box::new(plain));
        self.wrapped += 1;
        tracing::trace!(path = %self.path, "marked property secret");
    }

    fn report(&self) {
        tracing::debug!(
            wrapped = self.wrapped,
            matched = self.matched,
            unmatched = self.unmatched,
            "propagated secrets"
        );
    }
}
