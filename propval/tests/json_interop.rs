//! Reconciling provider outputs received as plain JSON.
//!
//! Outputs arrive without secret markers; after propagating the secrecy of
//! the inputs they can be exported for display with secrets redacted.

use anyhow::Result;
use propval::{
    PropertyValue, SecretHandling, ValueError, property_map_from_json, property_map_to_json,
    propagate_secrets,
};
use serde_json::json;
use test_helpers::tree::{map, obj, secret, string};

#[test]
fn propagated_outputs_export_redacted() -> Result<()> {
    let inputs = map([
        ("masterPassword", secret(string("hunter2"))),
        ("tags", obj([("owner", string("ops"))])),
    ]);
    let mut outputs = property_map_from_json(json!({
        "masterPassword": "hunter2",
        "endpoint": "db.internal:5432",
        "tags": {"owner": "ops"},
    }))?;

    propagate_secrets(&mut outputs, &inputs);

    let redacted = property_map_to_json(&outputs, SecretHandling::Redact)?;
    assert_eq!(
        redacted,
        json!({
            "masterPassword": "[secret]",
            "endpoint": "db.internal:5432",
            "tags": {"owner": "ops"},
        })
    );

    let revealed = property_map_to_json(&outputs, SecretHandling::Reveal)?;
    assert_eq!(revealed["masterPassword"], json!("hunter2"));
    Ok(())
}

#[test]
fn strict_export_points_at_propagated_secret() -> Result<()> {
    let inputs = map([("auth", obj([("key", secret(string("k")))]))]);
    let mut outputs = property_map_from_json(json!({"auth": {"key": "k", "user": "u"}}))?;

    propagate_secrets(&mut outputs, &inputs);

    let err = property_map_to_json(&outputs, SecretHandling::Reject)
        .expect_err("propagated secret must be rejected");
    let path = err.path().map(ToString::to_string);
    assert_eq!(path.as_deref(), Some("auth.key"));
    assert!(matches!(err, ValueError::SecretRejected { .. }));
    Ok(())
}

#[test]
fn display_never_shows_propagated_secrets() -> Result<()> {
    let inputs = map([("token", secret(string("t0ps3cret")))]);
    let mut outputs = property_map_from_json(json!({"token": "t0ps3cret"}))?;

    propagate_secrets(&mut outputs, &inputs);

    let rendered = PropertyValue::Object(outputs).to_string();
    assert_eq!(rendered, r#"{"token": [secret]}"#);
    Ok(())
}
