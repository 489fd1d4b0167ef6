use std::sync::Arc;

use crate::pipeline::DocumentPipeline;
use crate::render::PdfRenderer;
use crate::store::ResumeStore;
use crate::template::ResumeTemplate;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResumeStore>,
    /// Compiled once at startup; immutable for the process lifetime.
    pub template: ResumeTemplate,
    pub renderer: Arc<dyn PdfRenderer>,
}

impl AppState {
    /// Builds the per-request document pipeline over the shared collaborators.
    pub fn pipeline(&self) -> DocumentPipeline {
        DocumentPipeline::new(
            self.store.clone(),
            self.template.clone(),
            self.renderer.clone(),
        )
    }
}
