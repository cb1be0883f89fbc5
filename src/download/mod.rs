pub mod chrome;

use anyhow::Result;
use async_trait::async_trait;

pub use chrome::ChromeDownloader;

#[async_trait]
pub trait Downloader {
    async fn download(&self, id: &str) -> Result<Vec<u8>>;
}
