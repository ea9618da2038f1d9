use crate::errors::{ErrorKind, Result, ResultExt};

use bytes::Bytes;
use flate2::read::MultiGzDecoder;
use log::debug;
use std::io::Read;

/// Fetches Contents files from a mirror.
#[derive(Debug, Clone, Default)]
pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    pub fn new() -> Downloader {
        Downloader::default()
    }

    /// Downloads the whole body at `url`.
    ///
    /// Fails with `ErrorKind::Network` when the mirror can't be reached or
    /// answers with a non-success status.
    pub async fn download(&self, url: &str) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .chain_err(|| ErrorKind::Network(url.to_string()))?;

        debug!("{} answered {}", url, response.status());

        let content: Bytes = response
            .error_for_status()
            .chain_err(|| ErrorKind::Network(url.to_string()))?
            .bytes()
            .await
            .chain_err(|| ErrorKind::Network(url.to_string()))?;

        debug!("Downloaded {} bytes from {}", content.len(), url);
        Ok(content)
    }
}

/// Decompresses a gzip encoded Contents file into text.
pub fn decompress(compressed: &[u8]) -> Result<String> {
    let mut decompressed = Vec::new();
    MultiGzDecoder::new(compressed)
        .read_to_end(&mut decompressed)
        .chain_err(|| ErrorKind::Format("not a gzip file".to_string()))?;

    debug!(
        "Decompressed {} bytes into {} bytes",
        compressed.len(),
        decompressed.len()
    );

    String::from_utf8(decompressed).chain_err(|| ErrorKind::Format("not UTF-8 text".to_string()))
}
