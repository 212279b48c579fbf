//! Pose version model.
//!
//! Versions are immutable snapshots created whenever a pose's canonical
//! content changes; sequence entries reference them so past sequences keep
//! displaying the content their author saw.

use serde::Serialize;
use sqlx::FromRow;
use yogaflow_core::types::{DbId, Timestamp};

/// A row from the `pose_versions` table. Never updated after insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PoseVersion {
    pub id: DbId,
    pub pose_id: DbId,
    pub version: i32,
    pub name: String,
    pub sanskrit_name: Option<String>,
    pub description: String,
    pub difficulty: String,
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}
