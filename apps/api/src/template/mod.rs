//! Template Engine: compiles the fixed résumé template exactly once for the
//! lifetime of the process, then binds record data into it per request.
//!
//! Binding goes through an explicit whitelisted view of the record: plain
//! strings only, absent optionals rendered as empty. The template evaluator
//! never sees the record object itself, so field values cannot reach
//! anything beyond escaped text substitution.

use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tera::Tera;
use thiserror::Error;

use crate::models::resume::{Education, ResumeRecord, WorkExperience};

/// Registered under an `.html` name so Tera's HTML auto-escaping applies to
/// every substituted value.
const TEMPLATE_NAME: &str = "resume.html";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template compile error: {0}")]
    Compile(#[source] tera::Error),

    #[error("Template bind error: {0}")]
    Bind(#[source] tera::Error),
}

/// The compiled résumé template. Immutable after construction; cloning
/// shares the underlying compiled state.
#[derive(Clone)]
pub struct ResumeTemplate {
    tera: Arc<Tera>,
}

impl ResumeTemplate {
    /// Parses the template source into an executable binder. Unbalanced or
    /// malformed binding expressions fail here, not at bind time.
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(TemplateError::Compile)?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Reads the template asset from disk and compiles it. Called once at
    /// startup; a missing or broken asset aborts the process.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Resume template asset '{path}' could not be read"))?;
        Ok(Self::compile(&source)?)
    }

    /// Substitutes record fields into the template positions. Read-only with
    /// respect to the record; missing optional nested fields render as empty.
    pub fn bind(&self, record: &ResumeRecord) -> Result<String, TemplateError> {
        let view = ResumeView::from(record);
        let context = tera::Context::from_serialize(&view).map_err(TemplateError::Bind)?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(TemplateError::Bind)
    }
}

// The whitelisted binding context. Exactly the declared record schema, as
// plain data; no methods, no extra objects.

#[derive(Debug, Serialize)]
struct ResumeView {
    full_name: String,
    email: String,
    phone: String,
    location: String,
    work_experience: Vec<JobView>,
    education: Vec<EducationView>,
    skills: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JobView {
    job_title: String,
    company: String,
    start_date: String,
    end_date: String,
    job_description: String,
}

#[derive(Debug, Serialize)]
struct EducationView {
    degree: String,
    institution: String,
    graduation_year: String,
}

impl From<&ResumeRecord> for ResumeView {
    fn from(record: &ResumeRecord) -> Self {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            location: record.location.clone(),
            work_experience: record.work_experience.0.iter().map(JobView::from).collect(),
            education: record.education.0.iter().map(EducationView::from).collect(),
            skills: record.skills.clone(),
        }
    }
}

impl From<&WorkExperience> for JobView {
    fn from(job: &WorkExperience) -> Self {
        Self {
            job_title: job.job_title.clone().unwrap_or_default(),
            company: job.company.clone().unwrap_or_default(),
            start_date: job.start_date.clone().unwrap_or_default(),
            end_date: job.end_date.clone().unwrap_or_default(),
            job_description: job.job_description.clone().unwrap_or_default(),
        }
    }
}

impl From<&Education> for EducationView {
    fn from(entry: &Education) -> Self {
        Self {
            degree: entry.degree.clone().unwrap_or_default(),
            institution: entry.institution.clone().unwrap_or_default(),
            graduation_year: entry
                .graduation_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
        }
    }
}
