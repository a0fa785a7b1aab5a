//! The recursive property value model.
//!
//! [`PropertyValue`] represents dynamically shaped resource data: scalars,
//! opaque blob handles, placeholders for values that are not known yet,
//! containers, and the [`PropertyValue::Secret`] wrapper that marks a whole
//! subtree confidential. Secrecy is a wrapper rather than a flag, so a value is
//! secret exactly when its outermost tag is `Secret`.

mod asset;
mod display;
mod eq;

use std::collections::BTreeMap;
use std::fmt;

pub use asset::{Archive, ArchiveMember, ArchiveSource, Asset, AssetSource};

/// Text emitted in place of a secret's contents.
pub(crate) const REDACTED: &str = "[secret]";

/// Keyed container of property values.
///
/// Keys are unique and kept in sorted order, so iteration is deterministic and
/// equality does not depend on insertion order.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// A dynamically shaped property value.
///
/// Values are plain data: cloning copies the whole tree and equality is
/// structural. `Secret(Secret(x))` is never produced by the constructors and
/// compares equal to `Secret(x)`.
#[derive(Clone, Debug, Default)]
pub enum PropertyValue {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(f64),
    /// Text scalar.
    String(String),
    /// Handle to a single blob.
    Asset(Asset),
    /// Handle to a collection of blobs.
    Archive(Archive),
    /// Placeholder for a value that is not known yet.
    Computed,
    /// Placeholder for a value computed elsewhere, which may already be
    /// resolved.
    Output {
        /// Resolved value; meaningful only when `known` is set.
        value: Box<PropertyValue>,
        /// Whether `value` has been resolved.
        known: bool,
    },
    /// Ordered sequence of values.
    Array(Vec<PropertyValue>),
    /// Keyed container of values.
    Object(PropertyMap),
    /// Marks the wrapped subtree confidential.
    Secret(Box<PropertyValue>),
}

/// Discriminant of a [`PropertyValue`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PropertyKind {
    /// See [`PropertyValue::Null`].
    Null,
    /// See [`PropertyValue::Bool`].
    Bool,
    /// See [`PropertyValue::Number`].
    Number,
    /// See [`PropertyValue::String`].
    String,
    /// See [`PropertyValue::Asset`].
    Asset,
    /// See [`PropertyValue::Archive`].
    Archive,
    /// See [`PropertyValue::Computed`].
    Computed,
    /// See [`PropertyValue::Output`].
    Output,
    /// See [`PropertyValue::Array`].
    Array,
    /// See [`PropertyValue::Object`].
    Object,
    /// See [`PropertyValue::Secret`].
    Secret,
}

impl PropertyKind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Asset => "asset",
            Self::Archive => "archive",
            Self::Computed => "computed",
            Self::Output => "output",
            Self::Array => "array",
            Self::Object => "object",
            Self::Secret => "secret",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PropertyValue {
    /// Creates a null value.
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Creates a boolean value.
    #[must_use]
    pub const fn bool(value: bool) -> Self {
        Self::Bool(value)
    }

    /// Creates a numeric value.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a text value.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates an asset value.
    #[must_use]
    pub const fn asset(asset: Asset) -> Self {
        Self::Asset(asset)
    }

    /// Creates an archive value.
    #[must_use]
    pub const fn archive(archive: Archive) -> Self {
        Self::Archive(archive)
    }

    /// Creates a placeholder for a value that is not known yet.
    #[must_use]
    pub const fn computed() -> Self {
        Self::Computed
    }

    /// Creates an output placeholder around `value`.
    #[must_use]
    pub fn output(value: impl Into<Self>, known: bool) -> Self {
        Self::Output {
            value: Box::new(value.into()),
            known,
        }
    }

    /// Creates an output placeholder whose value has not been resolved.
    #[must_use]
    pub fn unknown_output() -> Self {
        Self::output(Self::Null, false)
    }

    /// Creates an array from `items`.
    #[must_use]
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Creates an object from `entries`.
    ///
    /// Later entries replace earlier entries with the same key.
    #[must_use]
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Marks `value` confidential.
    ///
    /// A value that is already secret is returned unchanged rather than
    /// wrapped twice.
    #[must_use]
    pub fn secret(value: impl Into<Self>) -> Self {
        value.into().make_secret()
    }

    /// Wraps this value in [`PropertyValue::Secret`] unless it already is one.
    #[must_use]
    pub fn make_secret(self) -> Self {
        if self.is_secret() {
            self
        } else {
            Self::Secret(Box::new(self))
        }
    }

    /// Returns `true` when the outermost tag is [`PropertyValue::Secret`].
    #[must_use]
    pub const fn is_secret(&self) -> bool {
        matches!(self, Self::Secret(_))
    }

    /// Removes one level of secrecy.
    ///
    /// Returns the wrapped value when this value is secret and the value
    /// itself otherwise. Secrets nested further down are left in place.
    #[must_use]
    pub fn unwrap_secret(&self) -> &Self {
        match self {
            Self::Secret(inner) => inner.as_ref(),
            other => other,
        }
    }

    /// Owned counterpart of [`PropertyValue::unwrap_secret`].
    #[must_use]
    pub fn into_unwrapped_secret(self) -> Self {
        match self {
            Self::Secret(inner) => *inner,
            other => other,
        }
    }

    /// Returns the discriminant of this value.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::Null => PropertyKind::Null,
            Self::Bool(_) => PropertyKind::Bool,
            Self::Number(_) => PropertyKind::Number,
            Self::String(_) => PropertyKind::String,
            Self::Asset(_) => PropertyKind::Asset,
            Self::Archive(_) => PropertyKind::Archive,
            Self::Computed => PropertyKind::Computed,
            Self::Output { .. } => PropertyKind::Output,
            Self::Array(_) => PropertyKind::Array,
            Self::Object(_) => PropertyKind::Object,
            Self::Secret(_) => PropertyKind::Secret,
        }
    }

    /// Returns the lowercase name of this value's kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns `true` for [`PropertyValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`PropertyValue::Computed`].
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed)
    }

    /// Returns `true` for [`PropertyValue::Output`], known or not.
    #[must_use]
    pub const fn is_output(&self) -> bool {
        matches!(self, Self::Output { .. })
    }

    /// Returns `false` for computed values and unresolved outputs.
    ///
    /// Only the outermost tag is inspected; see
    /// [`PropertyValue::contains_unknowns`] for a deep check.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Computed | Self::Output { known: false, .. })
    }

    /// Returns the boolean payload.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric payload.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text payload.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the asset handle.
    #[must_use]
    pub const fn as_asset(&self) -> Option<&Asset> {
        match self {
            Self::Asset(asset) => Some(asset),
            _ => None,
        }
    }

    /// Returns the archive handle.
    #[must_use]
    pub const fn as_archive(&self) -> Option<&Archive> {
        match self {
            Self::Archive(archive) => Some(archive),
            _ => None,
        }
    }

    /// Returns the array elements.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the array elements for modification.
    pub const fn as_array_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the object entries.
    #[must_use]
    pub const fn as_object(&self) -> Option<&PropertyMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the object entries for modification.
    pub const fn as_object_mut(&mut self) -> Option<&mut PropertyMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns `true` when a secret is reachable anywhere in this value.
    ///
    /// Arrays, objects and resolved outputs are searched; asset and archive
    /// handles are opaque and never are.
    #[must_use]
    pub fn contains_secrets(&self) -> bool {
        match self {
            Self::Secret(_) => true,
            Self::Output { value, known: true } => value.contains_secrets(),
            Self::Array(items) => items.iter().any(Self::contains_secrets),
            Self::Object(map) => map.values().any(Self::contains_secrets),
            Self::Null
            | Self::Bool(_)
            | Self::Number(_)
            | Self::String(_)
            | Self::Asset(_)
            | Self::Archive(_)
            | Self::Computed
            | Self::Output { known: false, .. } => false,
        }
    }

    /// Returns `true` when a computed value or unresolved output is reachable
    /// anywhere in this value, including inside secrets.
    #[must_use]
    pub fn contains_unknowns(&self) -> bool {
        match self {
            Self::Computed | Self::Output { known: false, .. } => true,
            Self::Output { value, known: true } => value.contains_unknowns(),
            Self::Secret(inner) => inner.contains_unknowns(),
            Self::Array(items) => items.iter().any(Self::contains_unknowns),
            Self::Object(map) => map.values().any(Self::contains_unknowns),
            Self::Null
            | Self::Bool(_)
            | Self::Number(_)
            | Self::String(_)
            | Self::Asset(_)
            | Self::Archive(_) => false,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Asset> for PropertyValue {
    fn from(asset: Asset) -> Self {
        Self::Asset(asset)
    }
}

impl From<Archive> for PropertyValue {
    fn from(archive: Archive) -> Self {
        Self::Archive(archive)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(items)
    }
}

impl From<PropertyMap> for PropertyValue {
    fn from(map: PropertyMap) -> Self {
        Self::Object(map)
    }
}

impl FromIterator<PropertyValue> for PropertyValue {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, PropertyValue)> for PropertyValue {
    fn from_iter<I: IntoIterator<Item = (String, Self)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().collect())
    }
}
