/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Users come from the external identity provider; their subject is a UUID.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
