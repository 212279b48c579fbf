//! Repository for the `poses` table.
//!
//! Every content change snapshots an immutable `pose_versions` row and
//! repoints `current_version_id`, so sequence entries built against older
//! content keep displaying it.

use sqlx::PgPool;
use yogaflow_core::search::{clamp_limit, clamp_offset, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use yogaflow_core::types::DbId;

use crate::models::pose::{Pose, PoseContent, PoseFilter};

/// Column list for poses queries (excludes the generated search vector).
const COLUMNS: &str = "id, name, sanskrit_name, description, difficulty, category, \
    image_url, current_version_id, created_at, updated_at";

/// Columns inserted into a `pose_versions` snapshot.
const VERSION_FIELDS: &str = "pose_id, version, name, sanskrit_name, description, \
    difficulty, category, image_url";

/// Provides catalog CRUD with version snapshotting.
pub struct PoseRepo;

impl PoseRepo {
    /// Create a pose along with its version-1 snapshot, in one transaction.
    pub async fn create(pool: &PgPool, content: &PoseContent) -> Result<Pose, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let pose_id: (DbId,) = sqlx::query_as(
            "INSERT INTO poses (name, sanskrit_name, description, difficulty, category, image_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&content.name)
        .bind(&content.sanskrit_name)
        .bind(&content.description)
        .bind(&content.difficulty)
        .bind(&content.category)
        .bind(&content.image_url)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO pose_versions ({VERSION_FIELDS})
             VALUES ($1, 1, $2, $3, $4, $5, $6, $7)
             RETURNING id"
        );
        let version_id: (DbId,) = sqlx::query_as(&query)
            .bind(pose_id.0)
            .bind(&content.name)
            .bind(&content.sanskrit_name)
            .bind(&content.description)
            .bind(&content.difficulty)
            .bind(&content.category)
            .bind(&content.image_url)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "UPDATE poses SET current_version_id = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let pose = sqlx::query_as::<_, Pose>(&query)
            .bind(pose_id.0)
            .bind(version_id.0)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(pose)
    }

    /// Find a pose by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pose>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM poses WHERE id = $1");
        sqlx::query_as::<_, Pose>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List catalog poses with optional full-text search and filters.
    ///
    /// `filter.q` must already be converted to a tsquery string by the
    /// caller (see `yogaflow_core::search::build_tsquery`). With a search
    /// term, results are ranked by relevance; otherwise sorted by name.
    pub async fn list(
        pool: &PgPool,
        tsquery: Option<&str>,
        filter: &PoseFilter,
    ) -> Result<Vec<Pose>, sqlx::Error> {
        let limit = clamp_limit(filter.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);
        let offset = clamp_offset(filter.offset);

        let query = format!(
            "SELECT {COLUMNS} FROM poses
             WHERE ($1::text IS NULL OR search_vector @@ to_tsquery('english', $1))
               AND ($2::text IS NULL OR category = $2)
               AND ($3::text IS NULL OR difficulty = $3)
             ORDER BY
                 CASE WHEN $1::text IS NOT NULL
                      THEN ts_rank(search_vector, to_tsquery('english', $1))
                 END DESC NULLS LAST,
                 name ASC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Pose>(&query)
            .bind(tsquery)
            .bind(&filter.category)
            .bind(&filter.difficulty)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Publish new canonical content for a pose: snapshot an immutable
    /// version with the next per-pose version number and repoint
    /// `current_version_id`, atomically.
    ///
    /// Returns `None` if no pose with the given `id` exists. Entries in
    /// existing sequences keep referencing the versions they were built
    /// against.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &PoseContent,
    ) -> Result<Option<Pose>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Lock the pose row so concurrent publishes can't race on the
        // version number.
        let exists: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM poses WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO pose_versions ({VERSION_FIELDS})
             VALUES (
                 $1,
                 (SELECT COALESCE(MAX(version), 0) + 1 FROM pose_versions WHERE pose_id = $1),
                 $2, $3, $4, $5, $6, $7
             )
             RETURNING id"
        );
        let version_id: (DbId,) = sqlx::query_as(&query)
            .bind(id)
            .bind(&content.name)
            .bind(&content.sanskrit_name)
            .bind(&content.description)
            .bind(&content.difficulty)
            .bind(&content.category)
            .bind(&content.image_url)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "UPDATE poses SET
                name = $2,
                sanskrit_name = $3,
                description = $4,
                difficulty = $5,
                category = $6,
                image_url = $7,
                current_version_id = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let pose = sqlx::query_as::<_, Pose>(&query)
            .bind(id)
            .bind(&content.name)
            .bind(&content.sanskrit_name)
            .bind(&content.description)
            .bind(&content.difficulty)
            .bind(&content.category)
            .bind(&content.image_url)
            .bind(version_id.0)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(pose))
    }

    /// Permanently delete a pose. Fails with a foreign-key violation if any
    /// sequence entry still references one of its versions.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM poses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
