//! Scripted `PdfRenderer` doubles for pipeline and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use crate::render::{PageOptions, PdfRenderer, RenderError};

/// Returns a fixed PDF byte buffer and counts invocations.
#[derive(Default)]
pub struct StubPdfRenderer {
    pub calls: AtomicUsize,
}

pub const STUB_PDF: &[u8] = b"%PDF-1.4 stub document";

#[async_trait]
impl PdfRenderer for StubPdfRenderer {
    async fn render(&self, _html: &str, _options: &PageOptions) -> Result<Bytes, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Bytes::from_static(STUB_PDF))
    }
}

/// Fails every conversion with a backend diagnostic.
pub struct FailingPdfRenderer;

#[async_trait]
impl PdfRenderer for FailingPdfRenderer {
    async fn render(&self, _html: &str, _options: &PageOptions) -> Result<Bytes, RenderError> {
        Err(RenderError::Backend {
            status: 500,
            message: "conversion backend exploded".to_string(),
        })
    }
}
