use anyhow::{Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static EXTENSION_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]{32}$").unwrap());
static WEB_STORE_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:chromewebstore\.google\.com|chrome\.google\.com/webstore)/detail/(?:[^/?#]+/)?([a-z]{32})").unwrap()
});

#[derive(Debug, Clone, PartialEq)]
pub enum InputType {
    ExtensionId(String),
    LocalFile(PathBuf),
}

/// Works out where the extension bytes should come from.
///
/// URLs must point at a Chrome Web Store detail page. Local `.crx`/`.zip`
/// files must exist. Unpacked extension directories are rejected.
pub fn detect_input(input: &str) -> Result<InputType> {
    let input = input.trim();
    let input_lower = input.to_lowercase();

    if input_lower.starts_with("http://") || input_lower.starts_with("https://") {
        return match extract_extension_id_from_url(input) {
            Some(id) => Ok(InputType::ExtensionId(id)),
            None => bail!("could not extract extension ID from URL: {}", input),
        };
    }

    if input_lower.ends_with(".crx") || input_lower.ends_with(".zip") {
        let path = Path::new(input);
        if !path.is_file() {
            bail!("file not found: {}", input);
        }
        return Ok(InputType::LocalFile(path.to_path_buf()));
    }

    if EXTENSION_ID_RE.is_match(input) {
        return Ok(InputType::ExtensionId(input.to_string()));
    }

    if Path::new(input).is_dir() {
        bail!("unpacked extension directories are not supported: {}", input);
    }

    bail!(
        "unrecognized input: {} (expected a Chrome Web Store URL, a .crx/.zip file, or a 32-character extension ID)",
        input
    )
}

pub fn extract_extension_id_from_url(url: &str) -> Option<String> {
    WEB_STORE_ID_RE.captures(url).map(|c| c[1].to_lowercase())
}
