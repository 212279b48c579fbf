//! Repository for the `pose_versions` table.
//!
//! Versions are immutable: this repo only reads. Rows are created by
//! `PoseRepo::create` / `PoseRepo::update_content`.

use sqlx::PgPool;
use yogaflow_core::types::DbId;

use crate::models::pose_version::PoseVersion;

/// Column list for pose_versions queries.
const COLUMNS: &str = "id, pose_id, version, name, sanskrit_name, description, \
    difficulty, category, image_url, created_at";

/// Provides read operations for pose content snapshots.
pub struct PoseVersionRepo;

impl PoseVersionRepo {
    /// Find a version by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PoseVersion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pose_versions WHERE id = $1");
        sqlx::query_as::<_, PoseVersion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a specific version of a pose by its per-pose version number.
    pub async fn find_by_pose_and_version(
        pool: &PgPool,
        pose_id: DbId,
        version: i32,
    ) -> Result<Option<PoseVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pose_versions WHERE pose_id = $1 AND version = $2"
        );
        sqlx::query_as::<_, PoseVersion>(&query)
            .bind(pose_id)
            .bind(version)
            .fetch_optional(pool)
            .await
    }

    /// List all versions for a pose, newest first.
    pub async fn list_by_pose(
        pool: &PgPool,
        pose_id: DbId,
    ) -> Result<Vec<PoseVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pose_versions
             WHERE pose_id = $1
             ORDER BY version DESC"
        );
        sqlx::query_as::<_, PoseVersion>(&query)
            .bind(pose_id)
            .fetch_all(pool)
            .await
    }
}
