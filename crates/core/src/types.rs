/// Job identifiers are opaque strings on the wire.
pub type JobId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh job identifier.
///
/// UUID v7 values are time-ordered and unique within the process, so two
/// jobs created in the same millisecond still get distinct ids.
pub fn new_job_id() -> JobId {
    uuid::Uuid::now_v7().to_string()
}
