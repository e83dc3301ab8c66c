use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{Res, catalog::PreviewFetcher};

/// Downloads preview clips over plain HTTP(S). Preview URLs are public, no
/// token is sent.
#[derive(Debug, Clone, Default)]
pub struct HttpPreviewFetcher {
    http: Client,
}

impl HttpPreviewFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreviewFetcher for HttpPreviewFetcher {
    async fn fetch_preview(&self, url: &str) -> Res<Option<Vec<u8>>> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.bytes().await?;
        Ok(Some(body.to_vec()))
    }
}
