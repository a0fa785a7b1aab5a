//! Locations of nodes within a property tree.
//!
//! Paths are used for diagnostics only: errors and trace events name the node
//! they concern without ever printing its value.

use std::fmt;

use crate::PropertyValue;

/// One step from a container to one of its children.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathSegment {
    /// Key within an object.
    Key(String),
    /// Position within an array.
    Index(usize),
}

/// Ordered list of segments leading from a tree's root to one of its nodes.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct PropertyPath {
    segments: Vec<PathSegment>,
}

impl PropertyPath {
    /// Returns the path of the root node.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns `true` when the path has no segments.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segments in root-to-leaf order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Descends into the object entry named `key`.
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    /// Descends into the array element at `index`.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    /// Ascends one level, returning the removed segment.
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Returns a new path extended by the object entry named `key`.
    #[must_use]
    pub fn child_key(&self, key: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push_key(key);
        child
    }

    /// Returns a new path extended by the array element at `index`.
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.push_index(index);
        child
    }
}

impl FromIterator<PathSegment> for PropertyPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if is_plain_key(key) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathSegment::Key(key) => write!(f, "[{key:?}]")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl PropertyValue {
    /// Resolves `path` against this value.
    ///
    /// Secret wrappers along the way are stepped through, so a path reaches
    /// into confidential subtrees; the node found at the end is returned as
    /// is, wrapper included. Returns `None` when a segment names a missing key
    /// or index, or when it meets a node that is not a container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propval::{PropertyPath, PropertyValue};
    ///
    /// let tree = PropertyValue::object([(
    ///     "db",
    ///     PropertyValue::secret(PropertyValue::object([("port", 5432)])),
    /// )]);
    /// let path = PropertyPath::root().child_key("db").child_key("port");
    /// assert_eq!(tree.get_path(&path), Some(&PropertyValue::number(5432.0)));
    /// ```
    #[must_use]
    pub fn get_path(&self, path: &PropertyPath) -> Option<&Self> {
        path.segments().iter().try_fold(self, |node, segment| {
            match (node.unwrap_secret(), segment) {
                (Self::Object(map), PathSegment::Key(key)) => map.get(key),
                (Self::Array(items), PathSegment::Index(index)) => items.get(*index),
                _ => None,
            }
        })
    }
}
