//! Structural equality for property values.

use super::PropertyValue;

impl PropertyValue {
    /// Skips directly nested secret wrappers, keeping the innermost one.
    fn collapse_secrets(&self) -> &Self {
        let mut node = self;
        while let Self::Secret(inner) = node {
            if !inner.is_secret() {
                break;
            }
            node = inner.as_ref();
        }
        node
    }
}

impl PartialEq for PropertyValue {
    /// Compares tags and contents recursively.
    ///
    /// Objects compare by key set and values, arrays by position, and a
    /// doubly wrapped secret equals the singly wrapped one.
    fn eq(&self, other: &Self) -> bool {
        match (self.collapse_secrets(), other.collapse_secrets()) {
            (Self::Null, Self::Null) | (Self::Computed, Self::Computed) => true,
            (Self::Bool(lhs), Self::Bool(rhs)) => lhs == rhs,
            #[expect(clippy::float_cmp, reason = "structural equality compares exact numbers")]
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::String(lhs), Self::String(rhs)) => lhs == rhs,
            (Self::Asset(lhs), Self::Asset(rhs)) => lhs == rhs,
            (Self::Archive(lhs), Self::Archive(rhs)) => lhs == rhs,
            (
                Self::Output {
                    value: lhs,
                    known: lhs_known,
                },
                Self::Output {
                    value: rhs,
                    known: rhs_known,
                },
            ) => lhs_known == rhs_known && lhs == rhs,
            (Self::Array(lhs), Self::Array(rhs)) => lhs == rhs,
            (Self::Object(lhs), Self::Object(rhs)) => lhs == rhs,
            (Self::Secret(lhs), Self::Secret(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}
