//! Unit tests for JSON interop and the secret handling policy.

use rstest::rstest;
use serde_json::json;

use super::{SecretHandling, property_map_from_json, property_map_to_json};
use crate::{Asset, PropertyKind, PropertyPath, PropertyValue, ValueError};

#[test]
fn imports_nested_documents() {
    let value = PropertyValue::from(json!({
        "name": "web",
        "replicas": 3,
        "labels": {"tier": "frontend"},
        "ports": [80, 443],
        "public": true,
        "owner": null,
    }));

    assert_eq!(
        value,
        PropertyValue::object([
            ("name", PropertyValue::string("web")),
            ("replicas", PropertyValue::number(3.0)),
            ("labels", PropertyValue::object([("tier", "frontend")])),
            ("ports", PropertyValue::array([80, 443])),
            ("public", PropertyValue::bool(true)),
            ("owner", PropertyValue::null()),
        ])
    );
    assert!(!value.contains_secrets());
}

#[test]
fn map_import_rejects_non_objects() {
    let err = property_map_from_json(json!([1, 2])).expect_err("arrays are not maps");
    assert_eq!(err, ValueError::NotAnObject { found: "array" });
}

#[rstest]
#[case::reveal(SecretHandling::Reveal, json!({"token": "abc", "user": "me"}))]
#[case::redact(SecretHandling::Redact, json!({"token": "[secret]", "user": "me"}))]
fn exports_secrets_per_policy(
    #[case] handling: SecretHandling,
    #[case] expected: serde_json::Value,
) {
    let mut map =
        property_map_from_json(json!({"token": "abc", "user": "me"})).expect("object imports");
    if let Some(token) = map.get_mut("token") {
        *token = std::mem::take(token).make_secret();
    }

    let exported = property_map_to_json(&map, handling).expect("export succeeds");
    assert_eq!(exported, expected);
}

#[test]
fn reject_policy_names_the_secret() {
    let value = PropertyValue::object([(
        "creds",
        PropertyValue::array([PropertyValue::null(), PropertyValue::secret("pw")]),
    )]);
    let err = value
        .to_json(SecretHandling::Reject)
        .expect_err("secrets are rejected");
    assert_eq!(
        err,
        ValueError::SecretRejected {
            path: PropertyPath::root().child_key("creds").child_index(1),
        }
    );
}

#[rstest]
#[case::computed(PropertyValue::computed())]
#[case::unknown_output(PropertyValue::unknown_output())]
fn unknowns_cannot_be_exported(#[case] unknown: PropertyValue) {
    let value = PropertyValue::object([("id", unknown)]);
    let err = value
        .to_json(SecretHandling::Reveal)
        .expect_err("unknowns fail");
    assert_eq!(
        err,
        ValueError::Unknown {
            path: PropertyPath::root().child_key("id"),
        }
    );
}

#[test]
fn known_outputs_export_their_value() {
    let value = PropertyValue::output(PropertyValue::string("arn:aws:s3:::b"), true);
    assert_eq!(
        value.to_json(SecretHandling::Reject).expect("known output"),
        json!("arn:aws:s3:::b")
    );
}

#[test]
fn assets_are_opaque() {
    let value = PropertyValue::array([PropertyValue::asset(Asset::from_text("x"))]);
    let err = value
        .to_json(SecretHandling::Reveal)
        .expect_err("assets fail");
    assert_eq!(
        err,
        ValueError::Opaque {
            path: PropertyPath::root().child_index(0),
            kind: PropertyKind::Asset,
        }
    );
}

#[test]
fn non_finite_numbers_fail() {
    let err = PropertyValue::number(f64::INFINITY)
        .to_json(SecretHandling::Reveal)
        .expect_err("infinity fails");
    assert!(matches!(err, ValueError::NonFiniteNumber { path, .. } if path.is_root()));
}

#[rstest]
#[case::lowercase("reveal", SecretHandling::Reveal)]
#[case::mixed_case("Redact", SecretHandling::Redact)]
#[case::padded("  REJECT ", SecretHandling::Reject)]
fn parses_secret_handling(#[case] text: &str, #[case] expected: SecretHandling) {
    assert_eq!(text.parse::<SecretHandling>(), Ok(expected));
}

#[test]
fn rejects_unknown_secret_handling() {
    let err = "shout"
        .parse::<SecretHandling>()
        .expect_err("unknown policy");
    assert_eq!(
        err,
        ValueError::InvalidSecretHandling {
            value: "shout".into(),
        }
    );
}

#[test]
fn secret_handling_defaults_to_redact() {
    assert_eq!(SecretHandling::default(), SecretHandling::Redact);
    assert_eq!(SecretHandling::default().to_string(), "redact");
}
