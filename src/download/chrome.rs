use super::Downloader;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

pub const DEFAULT_UPDATE_URL: &str = "https://clients2.google.com/service/update2/crx";

/// Fetches packed extensions from the Chrome update service.
pub struct ChromeDownloader {
    client: reqwest::Client,
    update_url: String,
}

impl ChromeDownloader {
    pub fn new() -> Result<Self> {
        Self::with_update_url(DEFAULT_UPDATE_URL)
    }

    pub fn with_update_url(update_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            update_url: update_url.into(),
        })
    }

    pub fn build_download_url(&self, extension_id: &str) -> String {
        format!(
            "{}?response=redirect&prodversion=131.0&\
             acceptformat=crx2,crx3&x=id%3D{}%26installsource%3Dondemand%26uc",
            self.update_url.trim_end_matches('/'),
            extension_id
        )
    }
}

#[async_trait]
impl Downloader for ChromeDownloader {
    async fn download(&self, extension_id: &str) -> Result<Vec<u8>> {
        let url = self.build_download_url(extension_id);
        debug!(%url, "requesting extension package");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("download extension {extension_id}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(
                "download failed with status {} (extension ID: {})",
                status.as_u16(),
                extension_id
            );
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("read package body for {extension_id}"))?;

        info!(extension_id, bytes = bytes.len(), "downloaded extension package");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url_generation() {
        let downloader = ChromeDownloader::new().unwrap();
        let url = downloader.build_download_url("nkbihfbeogaeaoehlefnkodbefgpgknn");

        assert!(url.starts_with("https://clients2.google.com/service/update2/crx?"));
        assert!(url.contains("acceptformat=crx2,crx3"));
        assert!(url.ends_with("x=id%3Dnkbihfbeogaeaoehlefnkodbefgpgknn%26installsource%3Dondemand%26uc"));
    }

    #[test]
    fn test_custom_update_url() {
        let downloader = ChromeDownloader::with_update_url("http://127.0.0.1:9000/crx/").unwrap();
        let url = downloader.build_download_url("abc");
        assert!(url.starts_with("http://127.0.0.1:9000/crx?response=redirect"));
    }
}
