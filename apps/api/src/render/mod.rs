//! Rendering Backend: converts one markup document into one PDF byte
//! buffer. The conversion itself is an opaque external collaborator behind
//! the `PdfRenderer` trait: single document in, single buffer out,
//! asynchronous completion, no partial or streamed output, no retries.

pub mod http;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

pub use http::HttpPdfRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Renderer error (status {status}): {message}")]
    Backend { status: u16, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Page geometry sent verbatim to the conversion backend.
#[derive(Debug, Clone, Serialize)]
pub struct PageOptions {
    pub format: &'static str,
    pub margin: Margin,
}

impl PageOptions {
    /// A4 with a uniform 20-unit margin on all four sides.
    pub fn a4() -> Self {
        Self {
            format: "A4",
            margin: Margin {
                top: 20,
                right: 20,
                bottom: 20,
                left: 20,
            },
        }
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self::a4()
    }
}

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str, options: &PageOptions) -> Result<Bytes, RenderError>;
}

/// A transient rendered document: PDF bytes plus the suggested display
/// filename. Never persisted.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Bytes,
    pub filename: String,
}

/// Display filename for a rendered résumé: every whitespace run in the full
/// name becomes a single underscore, suffixed `_resume.pdf`.
pub fn suggested_filename(full_name: &str) -> String {
    let name = full_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{name}_resume.pdf")
}
