//! Pose entity model and DTOs.
//!
//! A pose is the canonical, editable catalog record. Its displayable content
//! is also snapshotted into `pose_versions`; `current_version_id` points at
//! the snapshot matching the canonical fields.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yogaflow_core::types::{DbId, Timestamp};

/// A row from the `poses` table (without the generated search vector).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pose {
    pub id: DbId,
    pub name: String,
    pub sanskrit_name: Option<String>,
    pub description: String,
    pub difficulty: String,
    pub category: String,
    pub image_url: Option<String>,
    pub current_version_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Displayable pose content, used both to create a pose and to publish a new
/// content revision (each call snapshots a new immutable version).
#[derive(Debug, Clone, Deserialize)]
pub struct PoseContent {
    pub name: String,
    pub sanskrit_name: Option<String>,
    pub description: String,
    pub difficulty: String,
    pub category: String,
    pub image_url: Option<String>,
}

/// Filters for catalog listing (`?q=&category=&difficulty=`).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PoseFilter {
    pub q: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
