use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One work experience entry. Every field is optional free text; entries are
/// kept in insertion order and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub graduation_year: Option<i32>,
}

/// A persisted résumé. Doubles as the `resumes` row mapping and the API
/// response shape; wire field names are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub work_experience: Json<Vec<WorkExperience>>,
    pub education: Json<Vec<Education>>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload: a full record minus identifier and timestamp.
/// Missing scalar fields deserialize to empty strings and are rejected by
/// `validate`, so absent and empty inputs fail with the same message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResume {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl NewResume {
    /// Checks that the four required scalar fields are present and non-empty.
    pub fn validate(&self) -> Result<(), String> {
        required("fullName", &self.full_name)?;
        required("email", &self.email)?;
        required("phone", &self.phone)?;
        required("location", &self.location)?;
        Ok(())
    }
}

/// Patch payload: any subset of the record's top-level fields. Supplied
/// fields are overwritten; nested sequences are replaced wholesale, never
/// merged element-wise.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<Vec<String>>,
}

impl ResumeUpdate {
    /// A supplied scalar field must stay non-empty; an update may not blank
    /// out a required field.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(v) = &self.full_name {
            required("fullName", v)?;
        }
        if let Some(v) = &self.email {
            required("email", v)?;
        }
        if let Some(v) = &self.phone {
            required("phone", v)?;
        }
        if let Some(v) = &self.location {
            required("location", v)?;
        }
        Ok(())
    }

    /// Applies the partial-overwrite rule to an existing record. Identifier
    /// and creation timestamp are untouched.
    pub fn apply(&self, record: &mut ResumeRecord) {
        if let Some(v) = &self.full_name {
            record.full_name = v.clone();
        }
        if let Some(v) = &self.email {
            record.email = v.clone();
        }
        if let Some(v) = &self.phone {
            record.phone = v.clone();
        }
        if let Some(v) = &self.location {
            record.location = v.clone();
        }
        if let Some(v) = &self.work_experience {
            record.work_experience = Json(v.clone());
        }
        if let Some(v) = &self.education {
            record.education = Json(v.clone());
        }
        if let Some(v) = &self.skills {
            record.skills = v.clone();
        }
    }
}

fn required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("Field '{field}' is required"))
    } else {
        Ok(())
    }
}
