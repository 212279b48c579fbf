//! CRUD endpoints for a user's sequences.
//!
//! Every operation is scoped to the authenticated user; a sequence owned by
//! someone else answers exactly like a missing one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yogaflow_core::error::CoreError;
use yogaflow_core::types::DbId;
use yogaflow_db::models::sequence::{CreateSequence, Sequence, UpdateSequence};
use yogaflow_db::repositories::sequence_repo::SequenceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/sequences
pub async fn list_sequences(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Sequence>>>> {
    let sequences = SequenceRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: sequences }))
}

/// POST /api/v1/sequences
///
/// A duplicate name for the same owner surfaces as 409.
pub async fn create_sequence(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateSequence>,
) -> AppResult<(StatusCode, Json<DataResponse<Sequence>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }

    let sequence = SequenceRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(sequence_id = sequence.id, user_id = %user.user_id, "Created sequence");
    Ok((StatusCode::CREATED, Json(DataResponse { data: sequence })))
}

/// GET /api/v1/sequences/{id}
pub async fn get_sequence(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Sequence>>> {
    let sequence = SequenceRepo::find_for_user(&state.pool, id, user.user_id)
        .await?
        .ok_or(CoreError::SequenceNotFound { id })?;
    Ok(Json(DataResponse { data: sequence }))
}

/// PATCH /api/v1/sequences/{id}
///
/// Renames the sequence and/or changes its visibility.
pub async fn update_sequence(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSequence>,
) -> AppResult<Json<DataResponse<Sequence>>> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "name must not be empty".into(),
            )));
        }
    }

    let sequence = SequenceRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(CoreError::SequenceNotFound { id })?;
    Ok(Json(DataResponse { data: sequence }))
}

/// DELETE /api/v1/sequences/{id}
///
/// Entries cascade with the sequence.
pub async fn delete_sequence(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SequenceRepo::delete(&state.pool, id, user.user_id).await?;
    if !deleted {
        return Err(CoreError::SequenceNotFound { id }.into());
    }

    tracing::info!(sequence_id = id, user_id = %user.user_id, "Deleted sequence");
    Ok(StatusCode::NO_CONTENT)
}
