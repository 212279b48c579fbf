//! Route definitions for sequences and their ordered pose entries.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{sequence, sequence_pose};
use crate::state::AppState;

/// Sequence routes mounted at `/sequences`.
///
/// ```text
/// GET    /                                -> list_sequences
/// POST   /                                -> create_sequence
/// GET    /{id}                            -> get_sequence
/// PATCH  /{id}                            -> update_sequence
/// DELETE /{id}                            -> delete_sequence
/// GET    /{sequence_id}/poses             -> list_entries
/// POST   /{sequence_id}/poses             -> insert_entry
/// PATCH  /{sequence_id}/poses/{entry_id}  -> update_entry (move)
/// DELETE /{sequence_id}/poses/{entry_id}  -> remove_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(sequence::list_sequences).post(sequence::create_sequence),
        )
        .route(
            "/{id}",
            get(sequence::get_sequence)
                .patch(sequence::update_sequence)
                .delete(sequence::delete_sequence),
        )
        .route(
            "/{sequence_id}/poses",
            get(sequence_pose::list_entries).post(sequence_pose::insert_entry),
        )
        .route(
            "/{sequence_id}/poses/{entry_id}",
            patch(sequence_pose::update_entry).delete(sequence_pose::remove_entry),
        )
}
