//! Error types produced when converting property values.
//!
//! Secret propagation itself never fails; these errors only arise at the
//! boundaries where property trees are turned into other representations.

use thiserror::Error;

use crate::{PropertyKind, PropertyPath};

/// Result alias used throughout the crate.
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors raised while converting property trees.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ValueError {
    /// A document expected to hold a property map had another shape.
    #[error("expected an object at the document root, found {found}")]
    NotAnObject {
        /// Type name of the value that was found instead.
        found: &'static str,
    },

    /// A computed or unknown output value has no concrete representation.
    #[error("value at '{path}' is not known yet")]
    Unknown {
        /// Location of the unknown value.
        path: PropertyPath,
    },

    /// A number was NaN or infinite.
    #[error("number at '{path}' is not finite: {value}")]
    NonFiniteNumber {
        /// Location of the number.
        path: PropertyPath,
        /// The offending number.
        value: f64,
    },

    /// An asset or archive handle cannot be represented as plain data.
    #[error("{kind} at '{path}' has no plain data representation")]
    Opaque {
        /// Location of the handle.
        path: PropertyPath,
        /// Kind of the handle.
        kind: PropertyKind,
    },

    /// A secret was encountered while the secret handling policy rejects them.
    #[error("secret at '{path}' rejected by the secret handling policy")]
    SecretRejected {
        /// Location of the secret.
        path: PropertyPath,
    },

    /// A secret handling policy name was not recognised.
    #[error("unknown secret handling '{value}', expected one of: reveal, redact, reject")]
    InvalidSecretHandling {
        /// The text that failed to parse.
        value: String,
    },
}

impl ValueError {
    /// Returns the location of the offending node, when the error has one.
    #[must_use]
    pub const fn path(&self) -> Option<&PropertyPath> {
        match self {
            Self::Unknown { path }
            | Self::NonFiniteNumber { path, .. }
            | Self::Opaque { path, .. }
            | Self::SecretRejected { path } => Some(path),
            Self::NotAnObject { .. } | Self::InvalidSecretHandling { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests;
