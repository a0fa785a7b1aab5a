//! Unit tests for error rendering and path lookup.

use rstest::rstest;

use super::ValueError;
use crate::{PropertyKind, PropertyPath};

fn nested_path() -> PropertyPath {
    let mut path = PropertyPath::root();
    path.push_key("tags");
    path.push_index(2);
    path
}

#[rstest]
#[case::unknown(
    ValueError::Unknown { path: nested_path() },
    "value at 'tags[2]' is not known yet"
)]
#[case::opaque(
    ValueError::Opaque { path: nested_path(), kind: PropertyKind::Archive },
    "archive at 'tags[2]' has no plain data representation"
)]
#[case::rejected(
    ValueError::SecretRejected { path: PropertyPath::root() },
    "secret at '<root>' rejected by the secret handling policy"
)]
#[case::not_an_object(
    ValueError::NotAnObject { found: "array" },
    "expected an object at the document root, found array"
)]
fn renders_messages(#[case] err: ValueError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn exposes_path_for_located_errors() {
    let err = ValueError::NonFiniteNumber {
        path: nested_path(),
        value: f64::NAN,
    };
    assert_eq!(err.path(), Some(&nested_path()));
}

#[test]
fn has_no_path_for_document_errors() {
    let err = ValueError::InvalidSecretHandling {
        value: "shout".into(),
    };
    assert!(err.path().is_none());
}
