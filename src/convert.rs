use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::download::{ChromeDownloader, Downloader};
use crate::extract::extract;
use crate::input::InputType;
use crate::models::Extension;
use crate::unpack;

/// Unpacks a CRX2, CRX3 or bare ZIP buffer into an [`Extension`].
pub fn unpack_bytes(data: &[u8]) -> crate::Result<Extension> {
    let (_, payload) = unpack::payload(data)?;
    extract(payload)
}

/// Reads a local package or downloads one by extension ID.
pub async fn load_source(input: &InputType, downloader: &ChromeDownloader) -> Result<Vec<u8>> {
    match input {
        InputType::LocalFile(path) => {
            debug!(path = %path.display(), "reading local package");
            tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        InputType::ExtensionId(id) => downloader.download(id).await,
    }
}

/// Runs detection and extraction, adding stage context to core errors.
pub fn convert(data: &[u8]) -> Result<Extension> {
    let format = unpack::detect_format(data).context("parse CRX")?;
    let location = unpack::locate(data, format).context("parse CRX")?;
    debug!(%format, offset = location.offset, "located ZIP payload");

    let extension = extract(location.slice(data)).context("extract extension")?;
    info!(
        name = extension.name().unwrap_or("unknown"),
        files = extension.files.len(),
        "extracted extension"
    );

    Ok(extension)
}
