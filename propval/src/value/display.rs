//! Redacting text rendering of property values.

use std::fmt;

use super::{PropertyValue, REDACTED};

const UNKNOWN: &str = "[unknown]";

/// Renders a compact JSON-like form that is safe to log.
///
/// Secrets print as `[secret]` and unresolved placeholders as `[unknown]`;
/// asset and archive handles print their source but not their contents.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value:?}"),
            Self::Asset(asset) => write!(f, "asset({})", asset.source()),
            Self::Archive(archive) => write!(f, "archive({})", archive.source()),
            Self::Computed | Self::Output { known: false, .. } => f.write_str(UNKNOWN),
            Self::Output { value, known: true } => write!(f, "{value}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (position, item) in items.iter().enumerate() {
                    if position > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (position, (key, value)) in map.iter().enumerate() {
                    if position > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Secret(_) => f.write_str(REDACTED),
        }
    }
}
