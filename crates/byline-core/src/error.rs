//! Error types for `byline-core`.

use thiserror::Error;
use uuid::Uuid;

/// Failure of a feed operation, generic over the backing store's error.
///
/// Tracking failures always name the attempted action so the caller can see
/// which event could not be recorded.
#[derive(Debug, Error)]
pub enum FeedError<E: std::error::Error> {
  /// The host's actor accessor yielded no id for the record being tracked.
  #[error("the action {action:?} can't be tracked: no actor id on this {entity_type}")]
  ActorMissing {
    action:      String,
    entity_type: &'static str,
  },

  /// The store failed to persist the activity.
  #[error("the action {action:?} can't be tracked: {source}")]
  Persist {
    action: String,
    #[source]
    source: E,
  },

  /// Destruction-time bulk removal failed; the destruction operation as a
  /// whole is considered failed.
  #[error("activity cleanup for {entity_type} {entity_id} failed: {source}")]
  Cleanup {
    entity_type: &'static str,
    entity_id:   Uuid,
    #[source]
    source:      E,
  },

  /// A feed read failed.
  #[error("activity query failed: {source}")]
  Query {
    #[source]
    source: E,
  },
}
