//! Route definitions for the pose catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::pose;
use crate::state::AppState;

/// Catalog routes mounted at `/poses`.
///
/// ```text
/// GET /                 -> list_poses (search + filters + pagination)
/// GET /{id}             -> get_pose
/// GET /{id}/versions    -> list_pose_versions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pose::list_poses))
        .route("/{id}", get(pose::get_pose))
        .route("/{id}/versions", get(pose::list_pose_versions))
}
