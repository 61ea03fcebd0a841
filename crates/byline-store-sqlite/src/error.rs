//! Error type for `byline-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A stored row with exactly one half of the subject pair set; the schema
  /// CHECK makes this unreachable through this crate's own writes.
  #[error("activity {0} has a dangling subject reference")]
  DanglingSubject(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
