use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Fence tag attached to every extracted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentTag {
    JavaScript,
    TypeScript,
    Css,
    Html,
    Json,
    Xml,
    Svg,
    Markdown,
    Yaml,
    Text,
    Binary,
}

impl ContentTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentTag::JavaScript => "javascript",
            ContentTag::TypeScript => "typescript",
            ContentTag::Css => "css",
            ContentTag::Html => "html",
            ContentTag::Json => "json",
            ContentTag::Xml => "xml",
            ContentTag::Svg => "svg",
            ContentTag::Markdown => "markdown",
            ContentTag::Yaml => "yaml",
            ContentTag::Text => "text",
            ContentTag::Binary => "binary",
        }
    }

    pub fn is_renderable(&self) -> bool {
        !matches!(self, ContentTag::Binary)
    }
}

static CODE_EXTENSIONS: Lazy<HashMap<&'static str, ContentTag>> = Lazy::new(|| {
    HashMap::from([
        ("js", ContentTag::JavaScript),
        ("jsx", ContentTag::JavaScript),
        ("ts", ContentTag::TypeScript),
        ("tsx", ContentTag::TypeScript),
        ("css", ContentTag::Css),
        ("html", ContentTag::Html),
        ("htm", ContentTag::Html),
        ("json", ContentTag::Json),
        ("xml", ContentTag::Xml),
        ("svg", ContentTag::Svg),
        ("md", ContentTag::Markdown),
        ("txt", ContentTag::Text),
        ("yaml", ContentTag::Yaml),
        ("yml", ContentTag::Yaml),
    ])
});

static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // images
        "png", "jpg", "jpeg", "gif", "webp", "ico",
        // fonts
        "woff", "woff2", "ttf", "otf", "eot",
        // audio
        "mp3", "wav",
        // compiled
        "wasm", "map",
    ])
});

/// Lowercased text after the last `.` of the final path component.
fn extension_of(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Classifies an archive path by its final extension.
///
/// Unknown and missing extensions are treated as plain text so nothing is
/// silently dropped from the document.
pub fn classify(path: &str) -> ContentTag {
    let Some(ext) = extension_of(path) else {
        return ContentTag::Text;
    };

    if let Some(tag) = CODE_EXTENSIONS.get(ext.as_str()) {
        return *tag;
    }

    if BINARY_EXTENSIONS.contains(ext.as_str()) {
        return ContentTag::Binary;
    }

    ContentTag::Text
}
