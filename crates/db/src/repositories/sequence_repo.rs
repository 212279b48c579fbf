//! Repository for the `sequences` table.
//!
//! Every method is scoped by `user_id`: a sequence owned by someone else is
//! indistinguishable from a missing one, so callers can't probe for other
//! users' sequence ids.

use sqlx::PgPool;
use yogaflow_core::types::{DbId, UserId};

use crate::models::sequence::{CreateSequence, Sequence, UpdateSequence, Visibility};

/// Column list for sequences queries.
const COLUMNS: &str = "id, user_id, name, visibility, created_at, updated_at";

/// Provides owner-scoped CRUD for sequences.
pub struct SequenceRepo;

impl SequenceRepo {
    /// Create a sequence for a user. Name must be unique per owner
    /// (violations surface as a unique-constraint error on `uq_sequences_user_name`).
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        input: &CreateSequence,
    ) -> Result<Sequence, sqlx::Error> {
        let query = format!(
            "INSERT INTO sequences (user_id, name, visibility)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sequence>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.visibility.unwrap_or(Visibility::Private))
            .fetch_one(pool)
            .await
    }

    /// Find a sequence by id, only if owned by `user_id`.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: UserId,
    ) -> Result<Option<Sequence>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sequences WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Sequence>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's sequences, most recently updated first.
    pub async fn list_for_user(pool: &PgPool, user_id: UserId) -> Result<Vec<Sequence>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sequences
             WHERE user_id = $1
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Sequence>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Rename a sequence or change its visibility. Only non-`None` fields
    /// are applied. Returns `None` when absent or not owned.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: UserId,
        input: &UpdateSequence,
    ) -> Result<Option<Sequence>, sqlx::Error> {
        let query = format!(
            "UPDATE sequences SET
                name = COALESCE($3, name),
                visibility = COALESCE($4, visibility)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sequence>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.visibility)
            .fetch_optional(pool)
            .await
    }

    /// Delete a sequence (entries cascade). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: UserId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sequences WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
