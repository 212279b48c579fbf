use yogaflow_core::error::CoreError;

/// Error type for repository operations that mix domain validation with SQL.
///
/// Plain CRUD methods return `sqlx::Error` directly; the sequence position
/// manager also fails on domain grounds (ownership, out-of-range positions,
/// missing versions) before any write happens, so it returns this instead.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
