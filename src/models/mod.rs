mod extension;

pub use extension::{Extension, ExtractedFile, MANIFEST_PATH, Manifest};
