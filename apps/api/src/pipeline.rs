//! Document Pipeline: drives one render request from record fetch to PDF.
//!
//! Stages run strictly in order: fetch the record snapshot, bind it into the
//! compiled template, hand the markup to the rendering backend. Each stage
//! fails into its own error class and nothing is retried. The snapshot taken
//! at fetch time serves the whole render: an update committing for the same
//! identifier mid-render does not invalidate an in-flight document, and a
//! disconnected client's render runs to completion and is discarded.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::{suggested_filename, PageOptions, PdfRenderer, RenderedDocument};
use crate::store::ResumeStore;
use crate::template::ResumeTemplate;

/// One pipeline instance per request; the collaborators behind it are shared
/// immutably across all in-flight requests.
pub struct DocumentPipeline {
    store: Arc<dyn ResumeStore>,
    template: ResumeTemplate,
    renderer: Arc<dyn PdfRenderer>,
}

impl DocumentPipeline {
    pub fn new(
        store: Arc<dyn ResumeStore>,
        template: ResumeTemplate,
        renderer: Arc<dyn PdfRenderer>,
    ) -> Self {
        Self {
            store,
            template,
            renderer,
        }
    }

    /// Fetch → bind → render. An unknown identifier fails before any bind or
    /// render work happens.
    pub async fn run(&self, id: Uuid) -> Result<RenderedDocument, AppError> {
        debug!("Fetching resume {id}");
        let record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

        debug!("Binding resume {id} into template");
        let markup = self.template.bind(&record)?;

        debug!("Rendering PDF for resume {id}");
        let bytes = self
            .renderer
            .render(&markup, &PageOptions::default())
            .await?;

        info!("PDF generated for resume {id} ({} bytes)", bytes.len());

        Ok(RenderedDocument {
            filename: suggested_filename(&record.full_name),
            bytes,
        })
    }
}
