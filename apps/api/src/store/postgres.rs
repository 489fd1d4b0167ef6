use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::{NewResume, ResumeRecord, ResumeUpdate};
use crate::store::{ResumeStore, StoreError};

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert(&self, resume: NewResume) -> Result<ResumeRecord, StoreError> {
        sqlx::query_as::<_, ResumeRecord>(
            r#"
            INSERT INTO resumes
                (id, full_name, email, phone, location, work_experience, education, skills)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&resume.full_name)
        .bind(&resume.email)
        .bind(&resume.phone)
        .bind(&resume.location)
        .bind(Json(&resume.work_experience))
        .bind(Json(&resume.education))
        .bind(&resume.skills)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ResumeRecord>, StoreError> {
        Ok(
            sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_all(&self) -> Result<Vec<ResumeRecord>, StoreError> {
        Ok(
            sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn replace(
        &self,
        id: Uuid,
        update: ResumeUpdate,
    ) -> Result<Option<ResumeRecord>, StoreError> {
        let ResumeUpdate {
            full_name,
            email,
            phone,
            location,
            work_experience,
            education,
            skills,
        } = update;

        // COALESCE keeps the stored value for every field absent from the
        // payload; supplied sequences overwrite the whole column.
        sqlx::query_as::<_, ResumeRecord>(
            r#"
            UPDATE resumes SET
                full_name       = COALESCE($2, full_name),
                email           = COALESCE($3, email),
                phone           = COALESCE($4, phone),
                location        = COALESCE($5, location),
                work_experience = COALESCE($6, work_experience),
                education       = COALESCE($7, education),
                skills          = COALESCE($8, skills)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(location)
        .bind(work_experience.map(Json))
        .bind(education.map(Json))
        .bind(skills)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// SQLSTATE 23505 (unique violation) becomes the distinct `Duplicate` class;
/// everything else stays a database error.
fn map_constraint(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return StoreError::Duplicate(db_err.message().to_string());
        }
    }
    StoreError::Database(err)
}
