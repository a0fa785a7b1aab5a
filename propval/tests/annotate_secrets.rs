//! Integration tests for secret propagation over whole resource property
//! maps.
//!
//! Covers trees of identical shape, trees whose key sets diverge, and the
//! mixed scalar/object scenario used in the crate documentation.

use anyhow::{Result, ensure};
use propval::{PropertyMap, PropertyValue, propagate_secrets};
use rstest::{fixture, rstest};
use test_helpers::fixtures::{
    annotated_source, divergent_destination, divergent_source, plain_destination,
};
use test_helpers::tree::{map, node_at, number, obj, secret, string};

#[test]
fn identical_shapes_take_on_every_secret() {
    let source = annotated_source();
    let mut destination = plain_destination();

    propagate_secrets(&mut destination, &source);

    assert_eq!(destination, source);
}

#[test]
fn divergent_shapes_only_touch_shared_keys() -> Result<()> {
    let source = divergent_source();
    let mut destination = divergent_destination();

    propagate_secrets(&mut destination, &source);

    for (key, value) in &destination {
        let Some(expected) = source.get(key) else {
            continue;
        };
        ensure!(
            value == expected,
            "expected property {key} to equal {expected}, found {value}"
        );
    }
    ensure!(
        !destination.contains_key("extraFromValue"),
        "source-only key leaked into the destination"
    );
    ensure!(
        destination.get("extraToValue") == Some(&string("extraToValue")),
        "destination-only key was not preserved"
    );
    Ok(())
}

#[fixture]
fn scenario_source() -> PropertyMap {
    map([
        ("a", secret(string("x"))),
        (
            "b",
            obj([("c", secret(PropertyValue::bool(true))), ("d", number(1.0))]),
        ),
    ])
}

#[fixture]
fn scenario_destination() -> PropertyMap {
    map([
        ("a", string("x")),
        (
            "b",
            obj([("c", PropertyValue::bool(true)), ("d", number(1.0))]),
        ),
        ("e", string("kept")),
    ])
}

#[rstest]
#[case::top_level_secret("a", secret(string("x")))]
#[case::nested_secret("b.c", secret(PropertyValue::bool(true)))]
#[case::nested_plain("b.d", number(1.0))]
#[case::destination_only("e", string("kept"))]
fn mixed_scenario(
    scenario_source: PropertyMap,
    mut scenario_destination: PropertyMap,
    #[case] dotted: &str,
    #[case] expected: PropertyValue,
) -> Result<()> {
    propagate_secrets(&mut scenario_destination, &scenario_source);

    let found = node_at(&scenario_destination, dotted)?;
    ensure!(
        found == &expected,
        "unexpected value at {dotted}: {found} (expected {expected})"
    );
    ensure!(
        !scenario_destination["b"].is_secret(),
        "container with only nested secrets must not be wrapped"
    );
    Ok(())
}
