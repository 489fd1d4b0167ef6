//! In-memory `ResumeStore` used by unit and router tests. Observable
//! semantics match `PgResumeStore`; the partial-overwrite rule is shared
//! through `ResumeUpdate::apply`.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::resume::{NewResume, ResumeRecord, ResumeUpdate};
use crate::store::{ResumeStore, StoreError};

#[derive(Default)]
pub struct MemoryResumeStore {
    records: Mutex<Vec<ResumeRecord>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn insert(&self, resume: NewResume) -> Result<ResumeRecord, StoreError> {
        let record = ResumeRecord {
            id: Uuid::new_v4(),
            full_name: resume.full_name,
            email: resume.email,
            phone: resume.phone,
            location: resume.location,
            work_experience: Json(resume.work_experience),
            education: Json(resume.education),
            skills: resume.skills,
            created_at: Utc::now(),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ResumeRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<ResumeRecord>, StoreError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn replace(
        &self,
        id: Uuid,
        update: ResumeUpdate,
    ) -> Result<Option<ResumeRecord>, StoreError> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                update.apply(record);
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::WorkExperience;

    fn payload() -> NewResume {
        NewResume {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-0100".to_string(),
            location: "Remote".to_string(),
            work_experience: vec![
                WorkExperience {
                    job_title: Some("Engineer".to_string()),
                    company: Some("Acme".to_string()),
                    start_date: Some("2020-01".to_string()),
                    end_date: Some("2022-06".to_string()),
                    job_description: Some("Built things".to_string()),
                },
                WorkExperience {
                    job_title: Some("Senior Engineer".to_string()),
                    company: None,
                    start_date: None,
                    end_date: None,
                    job_description: None,
                },
            ],
            education: vec![],
            skills: vec!["Rust".to_string(), "SQL".to_string(), "Rust".to_string()],
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_preserves_fields_and_order() {
        let store = MemoryResumeStore::new();
        let created = store.insert(payload()).await.unwrap();
        let found = store.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(found.full_name, "Jane Doe");
        assert_eq!(found.email, "jane@x.com");
        assert_eq!(found.work_experience.0.len(), 2);
        assert_eq!(
            found.work_experience.0[0].job_title.as_deref(),
            Some("Engineer")
        );
        // Duplicates survive and order is preserved.
        assert_eq!(found.skills, vec!["Rust", "SQL", "Rust"]);
        assert_eq!(found.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_replace_subset_leaves_rest_unchanged() {
        let store = MemoryResumeStore::new();
        let created = store.insert(payload()).await.unwrap();

        let update = ResumeUpdate {
            location: Some("Berlin".to_string()),
            skills: Some(vec!["Go".to_string()]),
            ..Default::default()
        };
        let updated = store.replace(created.id, update).await.unwrap().unwrap();

        assert_eq!(updated.location, "Berlin");
        assert_eq!(updated.skills, vec!["Go"]);
        assert_eq!(updated.full_name, created.full_name);
        assert_eq!(updated.work_experience.0, created.work_experience.0);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_returns_none() {
        let store = MemoryResumeStore::new();
        let result = store
            .replace(Uuid::new_v4(), ResumeUpdate::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_terminal() {
        let store = MemoryResumeStore::new();
        let created = store.insert(payload()).await.unwrap();

        assert!(store.delete_by_id(created.id).await.unwrap());
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
        // Deleting again reports absence, not a fault.
        assert!(!store.delete_by_id(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_lists_every_record() {
        let store = MemoryResumeStore::new();
        store.insert(payload()).await.unwrap();
        store.insert(payload()).await.unwrap();
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }
}
