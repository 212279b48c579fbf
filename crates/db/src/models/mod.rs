//! Row structs and DTOs for each table.

pub mod pose;
pub mod pose_version;
pub mod sequence;
pub mod sequence_pose;
