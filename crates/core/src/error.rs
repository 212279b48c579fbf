use crate::types::DbId;

/// Domain error taxonomy shared by the repository and API layers.
///
/// Not-found variants deliberately carry no owner information: a sequence
/// that exists but belongs to someone else surfaces exactly like one that
/// does not exist, so callers cannot enumerate other users' sequences.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Sequence absent or not owned by the caller.
    #[error("Sequence {id} not found")]
    SequenceNotFound { id: DbId },

    /// Entry absent or not part of the given sequence.
    #[error("Sequence pose {id} not found")]
    SequencePoseNotFound { id: DbId },

    /// Pose does not exist (or has no current version).
    #[error("Pose {id} not found")]
    PoseNotFound { id: DbId },

    /// The named version does not exist for that pose.
    #[error("Version {version} of pose {pose_id} not found")]
    PoseVersionNotFound { pose_id: DbId, version: i32 },

    /// Structurally valid position outside the currently valid range.
    #[error("Position {position} is out of range (valid: 1..={max})")]
    InvalidPosition { position: i32, max: i32 },

    /// Field accepted by the schema but not yet wired to storage.
    /// Distinct from validation so clients aren't told valid input was malformed.
    #[error("Field '{0}' is not supported yet")]
    FeatureNotSupported(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
