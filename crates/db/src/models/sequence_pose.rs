//! Sequence pose entry model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yogaflow_core::types::{DbId, Timestamp};

/// A row from the `sequence_poses` table: one slot in a sequence's ordered
/// list. `position` is the 1-based dense rank within the parent sequence.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SequencePose {
    pub id: DbId,
    pub sequence_id: DbId,
    pub pose_id: DbId,
    pub pose_version_id: DbId,
    pub position: i32,
    pub added_at: Timestamp,
}

/// An entry joined with the display metadata of its pinned version.
///
/// The joined fields come from `pose_versions`, not `poses`, so the response
/// shows the content the entry was built against even after catalog edits.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SequencePoseDetail {
    pub id: DbId,
    pub sequence_id: DbId,
    pub pose_id: DbId,
    pub pose_version_id: DbId,
    pub position: i32,
    pub added_at: Timestamp,
    pub pose_version: i32,
    pub pose_name: String,
    pub pose_sanskrit_name: Option<String>,
    pub pose_difficulty: String,
    pub pose_category: String,
    pub pose_image_url: Option<String>,
}

/// DTO for inserting a pose into a sequence.
///
/// `pose_version` pins a specific per-pose version number; omitted, the
/// pose's current version is used. `position` omitted means append.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSequencePose {
    pub pose_id: DbId,
    pub pose_version: Option<i32>,
    pub position: Option<i32>,
}

/// DTO for updating an entry. Only `position` is wired to storage today;
/// `duration_secs` and `instructions` are accepted by the schema but
/// rejected with a distinct not-supported error rather than ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSequencePose {
    pub position: Option<i32>,
    pub duration_secs: Option<i32>,
    pub instructions: Option<String>,
}
