//! Opaque asset and archive handles.
//!
//! Assets and archives refer to blobs that live outside the property tree.
//! This crate carries them around but never looks inside them.

use std::collections::BTreeMap;
use std::fmt;

use camino::Utf8PathBuf;

/// Where an asset's contents come from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssetSource {
    /// Inline text contents.
    Text(String),
    /// File on the local filesystem.
    Path(Utf8PathBuf),
    /// Remote location.
    Uri(String),
}

/// Handle to a single blob of data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Asset {
    source: AssetSource,
    hash: Option<String>,
}

impl Asset {
    /// Creates an asset holding `text` inline.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(AssetSource::Text(text.into()))
    }

    /// Creates an asset backed by the file at `path`.
    #[must_use]
    pub fn from_path(path: impl Into<Utf8PathBuf>) -> Self {
        Self::new(AssetSource::Path(path.into()))
    }

    /// Creates an asset fetched from `uri`.
    #[must_use]
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self::new(AssetSource::Uri(uri.into()))
    }

    const fn new(source: AssetSource) -> Self {
        Self { source, hash: None }
    }

    /// Records the content hash computed for this asset.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Returns where the asset's contents come from.
    #[must_use]
    pub const fn source(&self) -> &AssetSource {
        &self.source
    }

    /// Returns the content hash, if one has been computed.
    #[must_use]
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }
}

/// Entry of an archive assembled from individual members.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArchiveMember {
    /// A single file.
    Asset(Asset),
    /// A nested archive.
    Archive(Archive),
}

/// Where an archive's contents come from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArchiveSource {
    /// Members keyed by their path inside the archive.
    Members(BTreeMap<String, ArchiveMember>),
    /// Archive file or directory on the local filesystem.
    Path(Utf8PathBuf),
    /// Remote location.
    Uri(String),
}

/// Handle to a collection of blobs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Archive {
    source: ArchiveSource,
    hash: Option<String>,
}

impl Archive {
    /// Creates an archive assembled from `members`.
    #[must_use]
    pub fn from_members<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, ArchiveMember)>,
        K: Into<String>,
    {
        let entries = members
            .into_iter()
            .map(|(name, member)| (name.into(), member))
            .collect();
        Self::new(ArchiveSource::Members(entries))
    }

    /// Creates an archive backed by the file or directory at `path`.
    #[must_use]
    pub fn from_path(path: impl Into<Utf8PathBuf>) -> Self {
        Self::new(ArchiveSource::Path(path.into()))
    }

    /// Creates an archive fetched from `uri`.
    #[must_use]
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self::new(ArchiveSource::Uri(uri.into()))
    }

    const fn new(source: ArchiveSource) -> Self {
        Self { source, hash: None }
    }

    /// Records the content hash computed for this archive.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Returns where the archive's contents come from.
    #[must_use]
    pub const fn source(&self) -> &ArchiveSource {
        &self.source
    }

    /// Returns the content hash, if one has been computed.
    #[must_use]
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }
}

impl From<Asset> for ArchiveMember {
    fn from(asset: Asset) -> Self {
        Self::Asset(asset)
    }
}

impl From<Archive> for ArchiveMember {
    fn from(archive: Archive) -> Self {
        Self::Archive(archive)
    }
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "text:{} bytes", text.len()),
            Self::Path(path) => write!(f, "path:{path}"),
            Self::Uri(uri) => write!(f, "uri:{uri}"),
        }
    }
}

impl fmt::Display for ArchiveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Members(members) => write!(f, "members:{}", members.len()),
            Self::Path(path) => write!(f, "path:{path}"),
            Self::Uri(uri) => write!(f, "uri:{uri}"),
        }
    }
}
