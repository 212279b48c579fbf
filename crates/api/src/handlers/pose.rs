//! Read-only catalog endpoints for poses and their version history.

use axum::extract::{Path, Query, State};
use axum::Json;
use yogaflow_core::catalog::{validate_category, validate_difficulty};
use yogaflow_core::search::build_tsquery;
use yogaflow_core::types::DbId;
use yogaflow_db::models::pose::{Pose, PoseFilter};
use yogaflow_db::models::pose_version::PoseVersion;
use yogaflow_db::repositories::pose_repo::PoseRepo;
use yogaflow_db::repositories::pose_version_repo::PoseVersionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/poses
///
/// Supports `?q=` full-text search (prefix-matched on the last term),
/// `?category=` / `?difficulty=` filters, and `?limit=` / `?offset=`
/// pagination.
pub async fn list_poses(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(filter): Query<PoseFilter>,
) -> AppResult<Json<DataResponse<Vec<Pose>>>> {
    if let Some(category) = &filter.category {
        validate_category(category)?;
    }
    if let Some(difficulty) = &filter.difficulty {
        validate_difficulty(difficulty)?;
    }

    let tsquery = filter.q.as_deref().and_then(build_tsquery);
    let poses = PoseRepo::list(&state.pool, tsquery.as_deref(), &filter).await?;
    Ok(Json(DataResponse { data: poses }))
}

/// GET /api/v1/poses/{id}
pub async fn get_pose(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Pose>>> {
    let pose = PoseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pose {id} not found")))?;
    Ok(Json(DataResponse { data: pose }))
}

/// GET /api/v1/poses/{id}/versions
///
/// Immutable content snapshots, newest first.
pub async fn list_pose_versions(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<PoseVersion>>>> {
    if PoseRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound(format!("Pose {id} not found")));
    }

    let versions = PoseVersionRepo::list_by_pose(&state.pool, id).await?;
    Ok(Json(DataResponse { data: versions }))
}
