//! Sequence entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yogaflow_core::types::{DbId, Timestamp, UserId};

/// Who can see a sequence. The MVP only ever sets `private`; the other
/// variants exist so the column doesn't need a migration when sharing lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Unlisted,
    Public,
}

/// A row from the `sequences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sequence {
    pub id: DbId,
    pub user_id: UserId,
    pub name: String,
    pub visibility: Visibility,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a sequence. Visibility defaults to private.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSequence {
    pub name: String,
    pub visibility: Option<Visibility>,
}

/// DTO for renaming a sequence or changing its visibility.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSequence {
    pub name: Option<String>,
    pub visibility: Option<Visibility>,
}
