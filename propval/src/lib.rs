//! Property value trees with secret markers.
//!
//! This crate defines [`PropertyValue`], the recursive value model used for
//! resource inputs and outputs exchanged between a provisioning engine and its
//! providers, together with [`propagate_secrets`], which copies the secrecy
//! annotations of one tree onto a structurally corresponding tree.
//!
//! ```rust
//! use propval::{PropertyMap, PropertyValue, propagate_secrets};
//!
//! let mut source = PropertyMap::new();
//! source.insert("password".into(), PropertyValue::secret("hunter2"));
//!
//! let mut destination = PropertyMap::new();
//! destination.insert("password".into(), PropertyValue::string("hunter2"));
//! destination.insert("region".into(), PropertyValue::string("eu-west-1"));
//!
//! propagate_secrets(&mut destination, &source);
//!
//! assert!(destination["password"].is_secret());
//! assert!(!destination["region"].is_secret());
//! ```

mod error;
#[cfg(feature = "serde_json")]
pub mod json;
mod path;
mod propagate;
pub mod value;

pub use error::{ValueError, ValueResult};
#[cfg(feature = "serde_json")]
pub use json::{SecretHandling, property_map_from_json, property_map_to_json};
pub use path::{PathSegment, PropertyPath};
pub use propagate::{
    PropagateSecretsExt, propagate_secrets, propagate_value_secrets, with_propagated_secrets,
};
pub use value::{
    Archive, ArchiveMember, ArchiveSource, Asset, AssetSource, PropertyKind, PropertyMap,
    PropertyValue,
};
