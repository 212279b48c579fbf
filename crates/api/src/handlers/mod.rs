//! HTTP request handlers, grouped by resource.

pub mod pose;
pub mod sequence;
pub mod sequence_pose;
