use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::models::{Extension, ExtractedFile, MANIFEST_PATH, Manifest};

/// One file entry as it comes out of the archive, before classification.
#[derive(Debug)]
pub struct RawEntry {
    pub path: String,
    pub bytes: Vec<u8>,
    pub declared_size: u64,
}

impl From<RawEntry> for ExtractedFile {
    fn from(entry: RawEntry) -> Self {
        ExtractedFile::new(entry.path, entry.bytes, entry.declared_size)
    }
}

/// Builds an [`Extension`] from a ZIP payload.
///
/// Any entry that fails to decompress aborts the whole extraction. When the
/// archive lists the same path twice, the later entry replaces the earlier one.
pub fn extract(payload: &[u8]) -> Result<Extension> {
    let mut archive = ZipArchive::new(Cursor::new(payload)).map_err(Error::MalformedArchive)?;

    let mut files: Vec<ExtractedFile> = Vec::with_capacity(archive.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for index in 0..archive.len() {
        let Some(entry) = read_entry(&mut archive, index)? else {
            continue;
        };

        let file = ExtractedFile::from(entry);
        match positions.get(&file.path) {
            Some(&at) => files[at] = file,
            None => {
                positions.insert(file.path.clone(), files.len());
                files.push(file);
            }
        }
    }

    let manifest = files
        .iter()
        .find(|f| f.is_manifest())
        .map(|f| Manifest::parse(&f.content))
        .transpose()?;

    files.sort_by(file_order);

    Ok(Extension::new(manifest, files))
}

/// Reads entry `index` fully, or `None` for directory records.
fn read_entry<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    index: usize,
) -> Result<Option<RawEntry>> {
    // The raw record gives the name even when the data cannot be decompressed
    let path = archive
        .by_index_raw(index)
        .map(|raw| raw.name().to_string())
        .unwrap_or_else(|_| format!("entry #{index}"));

    let mut file = match archive.by_index(index) {
        Ok(file) => file,
        Err(source) => {
            return Err(Error::EntryRead {
                path,
                source: source.into(),
            });
        }
    };

    if file.is_dir() {
        return Ok(None);
    }

    let mut bytes = Vec::new();
    if let Err(source) = file.read_to_end(&mut bytes) {
        return Err(Error::EntryRead { path, source });
    }

    Ok(Some(RawEntry {
        path,
        bytes,
        declared_size: file.size(),
    }))
}

/// `manifest.json` sorts before everything else, remaining paths compare bytewise.
pub fn path_order(a: &str, b: &str) -> Ordering {
    (a != MANIFEST_PATH)
        .cmp(&(b != MANIFEST_PATH))
        .then_with(|| a.cmp(b))
}

pub fn file_order(a: &ExtractedFile, b: &ExtractedFile) -> Ordering {
    path_order(&a.path, &b.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_sorts_first() {
        let mut paths = vec!["b.js", "manifest.json", "a.js", "_locales/en/messages.json"];
        paths.sort_by(|a, b| path_order(a, b));
        assert_eq!(paths, vec!["manifest.json", "_locales/en/messages.json", "a.js", "b.js"]);
    }

    #[test]
    fn test_nested_manifest_is_not_special() {
        let mut paths = vec!["sub/manifest.json", "manifest.json", "a/manifest.json"];
        paths.sort_by(|a, b| path_order(a, b));
        assert_eq!(paths, vec!["manifest.json", "a/manifest.json", "sub/manifest.json"]);
    }

    #[test]
    fn test_order_is_bytewise() {
        assert_eq!(path_order("Z.js", "a.js"), Ordering::Less);
        assert_eq!(path_order("a.js", "a.js"), Ordering::Equal);
        assert_eq!(path_order("manifest.json", "manifest.json"), Ordering::Equal);
    }

    #[test]
    fn test_garbage_payload_is_malformed() {
        assert!(matches!(
            extract(b"PK definitely not a zip"),
            Err(Error::MalformedArchive(_))
        ));
    }
}
