use serde::{Deserialize, Deserializer, Serialize};

use crate::classify::{self, ContentTag};
use crate::error::{Error, Result};

pub const MANIFEST_PATH: &str = "manifest.json";

/// A Chrome extension reconstructed from its packaged archive.
#[derive(Debug, Clone, Default)]
pub struct Extension {
    pub manifest: Option<Manifest>,
    /// `manifest.json` first, then every other file ordered by path.
    pub files: Vec<ExtractedFile>,
}

impl Extension {
    pub fn new(manifest: Option<Manifest>, files: Vec<ExtractedFile>) -> Self {
        Self { manifest, files }
    }

    pub fn name(&self) -> Option<&str> {
        self.manifest
            .as_ref()
            .map(|m| m.name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn renderable_files(&self) -> impl Iterator<Item = &ExtractedFile> {
        self.files.iter().filter(|f| f.is_renderable)
    }

    pub fn binary_files(&self) -> impl Iterator<Item = &ExtractedFile> {
        self.files.iter().filter(|f| !f.is_renderable)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFile {
    /// Archive-relative, forward-slash separated.
    pub path: String,
    pub content: Vec<u8>,
    pub content_tag: ContentTag,
    /// Uncompressed size declared by the archive.
    pub size: u64,
    pub is_renderable: bool,
}

impl ExtractedFile {
    pub fn new(path: impl Into<String>, content: Vec<u8>, size: u64) -> Self {
        let path = path.into();
        let content_tag = classify::classify(&path);
        Self {
            is_renderable: content_tag.is_renderable(),
            path,
            content,
            content_tag,
            size,
        }
    }

    pub fn is_manifest(&self) -> bool {
        self.path == MANIFEST_PATH
    }

    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Manifest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub manifest_version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    /// The manifest bytes exactly as they appeared in the archive.
    #[serde(skip)]
    pub raw: Vec<u8>,
}

/// `null` reads as the zero value, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Manifest {
    /// Parses `manifest.json`, ignoring unknown keys and keeping the raw bytes.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let mut manifest: Manifest = serde_json::from_slice(raw).map_err(Error::InvalidManifest)?;
        manifest.raw = raw.to_vec();
        Ok(manifest)
    }
}
