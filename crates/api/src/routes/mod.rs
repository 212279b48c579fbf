pub mod health;
pub mod pose;
pub mod sequence;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /poses                                   list (search + filters)
/// /poses/{id}                              get
/// /poses/{id}/versions                     version history
///
/// /sequences                               list, create
/// /sequences/{id}                          get, update, delete
/// /sequences/{sequence_id}/poses           list entries, insert entry
/// /sequences/{sequence_id}/poses/{entry_id}  move entry, remove entry
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog (read-only).
        .nest("/poses", pose::router())
        // Sequences and their ordered entries.
        .nest("/sequences", sequence::router())
}
