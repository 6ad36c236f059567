//! Fetching logo and headshot bitmaps

use std::time::Duration;

use image::RgbaImage;
use reqwest::blocking::Client;

use crate::error::FetchError;

/// Something that can turn a URL into a decoded bitmap
pub trait BitmapSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<RgbaImage, FetchError>;
}

/// Downloads bitmaps over HTTP(S) with a bounded timeout
pub struct HttpBitmapSource {
    client: Client,
}

impl HttpBitmapSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl BitmapSource for HttpBitmapSource {
    fn fetch(&self, url: &str) -> Result<RgbaImage, FetchError> {
        log::debug!("Fetching {}", url);
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let bytes = resp.bytes()?;
        decode_bitmap(&bytes)
    }
}

/// Source used with `--offline`: every fetch fails, so placeholders are drawn
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBitmapSource;

impl BitmapSource for OfflineBitmapSource {
    fn fetch(&self, url: &str) -> Result<RgbaImage, FetchError> {
        Err(FetchError::Unavailable(url.to_string()))
    }
}

/// Decode PNG/JPEG bytes into RGBA
pub fn decode_bitmap(bytes: &[u8]) -> Result<RgbaImage, FetchError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}
