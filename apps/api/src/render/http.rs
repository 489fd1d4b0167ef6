use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::{PageOptions, PdfRenderer, RenderError};

const RENDER_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    html: &'a str,
    options: &'a PageOptions,
}

#[derive(Debug, Deserialize)]
struct RendererErrorBody {
    message: String,
}

/// Client for the headless HTML-to-PDF conversion service. Posts the markup
/// document plus page options as JSON and receives the PDF bytes back. A
/// backend fault is reported to the caller immediately; the pipeline never
/// retries.
#[derive(Clone)]
pub struct HttpPdfRenderer {
    client: Client,
    url: String,
}

impl HttpPdfRenderer {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(RENDER_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }
}

#[async_trait]
impl PdfRenderer for HttpPdfRenderer {
    async fn render(&self, html: &str, options: &PageOptions) -> Result<Bytes, RenderError> {
        let response = self
            .client
            .post(&self.url)
            .json(&RenderRequest { html, options })
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the backend's diagnostic message, not just the status.
            let message = serde_json::from_str::<RendererErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(RenderError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        debug!("Renderer returned {} bytes", bytes.len());
        Ok(bytes)
    }
}
