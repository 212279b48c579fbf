//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod pose_repo;
pub mod pose_version_repo;
pub mod sequence_pose_repo;
pub mod sequence_repo;

pub use pose_repo::PoseRepo;
pub use pose_version_repo::PoseVersionRepo;
pub use sequence_pose_repo::SequencePoseRepo;
pub use sequence_repo::SequenceRepo;
