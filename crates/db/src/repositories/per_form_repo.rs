//! Repositories for PER forms (`per_forms`) and their answers (`per_form_data`).

use sqlx::{PgConnection, PgPool};
use go_core::types::DbId;
use uuid::Uuid;

use crate::models::per_form::{
    CreateForm, Form, FormAnswer, FormData, FormListParams, UpdateForm, DEFAULT_IP_ADDRESS,
};

const COLUMNS: &str = "id, code, name, language, user_id, country_id, ns, created_at, \
    updated_at, submitted_at, started_at, ended_at, finalized, validated, ip_address, \
    unique_id, comment";

const DATA_COLUMNS: &str = "id, form_id, question_id, selected_option, notes";

/// Provides CRUD operations for PER form headers.
pub struct FormRepo;

impl FormRepo {
    /// Insert a form and its initial answers in one transaction.
    ///
    /// A fresh v4 `unique_id` is generated for every form.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateForm,
    ) -> Result<Form, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO per_forms
                (code, name, language, user_id, country_id, ns, started_at, ended_at,
                 submitted_at, finalized, validated, ip_address, unique_id, comment)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), COALESCE($8, NOW()),
                     COALESCE($9, NOW()), COALESCE($10, FALSE), COALESCE($11, FALSE),
                     COALESCE($12, $13), $14, $15)
             RETURNING {COLUMNS}"
        );
        let form = sqlx::query_as::<_, Form>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(input.language)
            .bind(user_id)
            .bind(input.country_id)
            .bind(&input.ns)
            .bind(input.started_at)
            .bind(input.ended_at)
            .bind(input.submitted_at)
            .bind(input.finalized)
            .bind(input.validated)
            .bind(&input.ip_address)
            .bind(DEFAULT_IP_ADDRESS)
            .bind(Uuid::new_v4())
            .bind(&input.comment)
            .fetch_one(&mut *tx)
            .await?;

        for answer in &input.data {
            upsert_answer(&mut tx, form.id, answer).await?;
        }

        tx.commit().await?;
        Ok(form)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM per_forms WHERE id = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &FormListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Form>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM per_forms
             WHERE ($1::BIGINT IS NULL OR country_id = $1)
               AND ($2::TEXT IS NULL OR code = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(params.country)
            .bind(&params.code)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update the header of a form that is not finalized yet. Answers are
    /// changed through [`FormDataRepo`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateForm,
    ) -> Result<Option<Form>, sqlx::Error> {
        let query = format!(
            "UPDATE per_forms SET
                name = COALESCE($2, name),
                language = COALESCE($3, language),
                country_id = COALESCE($4, country_id),
                ns = COALESCE($5, ns),
                started_at = COALESCE($6, started_at),
                ended_at = COALESCE($7, ended_at),
                validated = COALESCE($8, validated),
                ip_address = COALESCE($9, ip_address),
                comment = COALESCE($10, comment)
             WHERE id = $1 AND NOT finalized
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.language)
            .bind(input.country_id)
            .bind(&input.ns)
            .bind(input.started_at)
            .bind(input.ended_at)
            .bind(input.validated)
            .bind(&input.ip_address)
            .bind(&input.comment)
            .fetch_optional(pool)
            .await
    }

    /// Mark a form as finalized. The first call stamps `submitted_at`.
    pub async fn finalize(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query = format!(
            "UPDATE per_forms SET
                submitted_at = CASE WHEN finalized THEN submitted_at ELSE NOW() END,
                finalized = TRUE
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a form; its answers cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM per_forms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Answers of a PER form, one row per question.
pub struct FormDataRepo;

impl FormDataRepo {
    pub async fn list_by_form(pool: &PgPool, form_id: DbId) -> Result<Vec<FormData>, sqlx::Error> {
        let query = format!(
            "SELECT {DATA_COLUMNS} FROM per_form_data WHERE form_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, FormData>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await
    }

    /// Insert or replace a batch of answers atomically.
    pub async fn upsert_many(
        pool: &PgPool,
        form_id: DbId,
        answers: &[FormAnswer],
    ) -> Result<Vec<FormData>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut rows = Vec::with_capacity(answers.len());
        for answer in answers {
            rows.push(upsert_answer(&mut tx, form_id, answer).await?);
        }
        tx.commit().await?;
        Ok(rows)
    }
}

async fn upsert_answer(
    conn: &mut PgConnection,
    form_id: DbId,
    answer: &FormAnswer,
) -> Result<FormData, sqlx::Error> {
    let query = format!(
        "INSERT INTO per_form_data (form_id, question_id, selected_option, notes)
         VALUES ($1, $2, $3, COALESCE($4, ''))
         ON CONFLICT ON CONSTRAINT uq_per_form_data_question
         DO UPDATE SET selected_option = EXCLUDED.selected_option, notes = EXCLUDED.notes
         RETURNING {DATA_COLUMNS}"
    );
    sqlx::query_as::<_, FormData>(&query)
        .bind(form_id)
        .bind(&answer.question_id)
        .bind(answer.selected_option)
        .bind(&answer.notes)
        .fetch_one(conn)
        .await
}
