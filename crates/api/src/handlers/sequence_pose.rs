//! Endpoints for the ordered pose entries of a sequence.
//!
//! These are thin shims over `SequencePoseRepo`, which owns the
//! dense-position invariant. The handlers only translate the HTTP shape
//! (path params, request bodies, status codes) and reject the `PATCH`
//! fields that storage does not carry yet.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yogaflow_core::error::CoreError;
use yogaflow_core::types::DbId;
use yogaflow_db::models::sequence_pose::{
    CreateSequencePose, SequencePoseDetail, UpdateSequencePose,
};
use yogaflow_db::repositories::sequence_pose_repo::SequencePoseRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/sequences/{sequence_id}/poses
///
/// Entries in position order, each with the display metadata of its pinned
/// version.
pub async fn list_entries(
    State(state): State<AppState>,
    user: AuthUser,
    Path(sequence_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<SequencePoseDetail>>>> {
    let entries = SequencePoseRepo::list_detail(&state.pool, sequence_id, user.user_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/sequences/{sequence_id}/poses
///
/// Omitted `position` appends; omitted `pose_version` pins the pose's
/// current version.
pub async fn insert_entry(
    State(state): State<AppState>,
    user: AuthUser,
    Path(sequence_id): Path<DbId>,
    Json(input): Json<CreateSequencePose>,
) -> AppResult<(StatusCode, Json<DataResponse<SequencePoseDetail>>)> {
    let entry = SequencePoseRepo::insert(&state.pool, sequence_id, user.user_id, &input).await?;
    tracing::info!(
        sequence_id,
        entry_id = entry.id,
        position = entry.position,
        user_id = %user.user_id,
        "Inserted sequence entry"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PATCH /api/v1/sequences/{sequence_id}/poses/{entry_id}
///
/// Only `position` is updatable. `duration_secs` and `instructions` are
/// rejected explicitly so clients never mistake a dropped field for a
/// stored one.
pub async fn update_entry(
    State(state): State<AppState>,
    user: AuthUser,
    Path((sequence_id, entry_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateSequencePose>,
) -> AppResult<Json<DataResponse<SequencePoseDetail>>> {
    if input.duration_secs.is_some() {
        return Err(AppError::Core(CoreError::FeatureNotSupported(
            "duration_secs",
        )));
    }
    if input.instructions.is_some() {
        return Err(AppError::Core(CoreError::FeatureNotSupported(
            "instructions",
        )));
    }

    let new_position = input
        .position
        .ok_or_else(|| CoreError::Validation("position is required".into()))?;

    let entry = SequencePoseRepo::move_entry(
        &state.pool,
        sequence_id,
        user.user_id,
        entry_id,
        new_position,
    )
    .await?;
    tracing::info!(
        sequence_id,
        entry_id,
        position = entry.position,
        user_id = %user.user_id,
        "Moved sequence entry"
    );
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/sequences/{sequence_id}/poses/{entry_id}
pub async fn remove_entry(
    State(state): State<AppState>,
    user: AuthUser,
    Path((sequence_id, entry_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    SequencePoseRepo::remove(&state.pool, sequence_id, user.user_id, entry_id).await?;
    tracing::info!(sequence_id, entry_id, user_id = %user.user_id, "Removed sequence entry");
    Ok(StatusCode::NO_CONTENT)
}
