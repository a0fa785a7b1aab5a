//! Canonical property trees for secret propagation suites.
//!
//! The annotated source carries secrets at the top level of scalars, arrays
//! and objects, and nested inside an array and an object. The plain
//! destination has the same shape and data with no secrets at all.

use propval::{PropertyMap, PropertyValue};

use crate::tree::{arr, map, obj, secret, string};

fn abc() -> PropertyValue {
    arr([string("a"), string("b"), string("c")])
}

fn abc_with_secret_b() -> PropertyValue {
    arr([string("a"), secret(string("b")), string("c")])
}

fn abc_object() -> PropertyValue {
    obj([
        ("a", string("aValue")),
        ("b", string("bValue")),
        ("c", string("cValue")),
    ])
}

fn abc_object_with_secret_b() -> PropertyValue {
    obj([
        ("a", string("aValue")),
        ("b", secret(string("bValue"))),
        ("c", string("cValue")),
    ])
}

/// Source tree with secrets at every shape of position.
#[must_use]
pub fn annotated_source() -> PropertyMap {
    map([
        ("stringValue", secret(string("hello"))),
        ("numberValue", secret(PropertyValue::number(1.0))),
        ("boolValue", secret(PropertyValue::bool(true))),
        ("secretArrayValue", secret(abc())),
        ("arrayWithSecretsValue", abc_with_secret_b()),
        ("secretObjectValue", secret(abc_object())),
        ("objectWithSecretValue", abc_object_with_secret_b()),
    ])
}

/// Destination tree matching [`annotated_source`] without any secrets.
#[must_use]
pub fn plain_destination() -> PropertyMap {
    map([
        ("stringValue", string("hello")),
        ("numberValue", PropertyValue::number(1.0)),
        ("boolValue", PropertyValue::bool(true)),
        ("secretArrayValue", abc()),
        ("arrayWithSecretsValue", abc()),
        ("secretObjectValue", abc_object()),
        ("objectWithSecretValue", abc_object()),
    ])
}

/// [`annotated_source`] plus a key the destination does not have.
#[must_use]
pub fn divergent_source() -> PropertyMap {
    let mut source = annotated_source();
    source.insert("extraFromValue".into(), string("extraFromValue"));
    source
}

/// [`plain_destination`] with one object already secret and a key the source
/// does not have.
#[must_use]
pub fn divergent_destination() -> PropertyMap {
    let mut destination = plain_destination();
    destination.insert("secretObjectValue".into(), secret(abc_object()));
    destination.insert("extraToValue".into(), string("extraToValue"));
    destination
}
