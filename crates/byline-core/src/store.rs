//! The `ActivityStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `byline-store-sqlite`).
//! The feed service depends on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use uuid::Uuid;

use crate::activity::{Activity, NewActivity, SubjectRef};

/// Abstraction over an activity feed storage backend.
///
/// Writes are append-only: a recorded activity is never updated. Removal
/// happens only through the bulk-delete operations driven by the feed's
/// destruction hooks.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait ActivityStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new activity. The store assigns `activity_id` and
  /// `recorded_at`.
  fn record_activity(
    &self,
    input: NewActivity,
  ) -> impl Future<Output = Result<Activity, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// All activities whose subject is `subject`, newest first.
  fn activities_for_subject<'a>(
    &'a self,
    subject: &'a SubjectRef,
  ) -> impl Future<Output = Result<Vec<Activity>, Self::Error>> + Send + 'a;

  /// All activities recorded under `user_id`, newest first.
  fn activities_for_user(
    &self,
    user_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Activity>, Self::Error>> + Send + '_;

  /// The `limit` most recent activities across the whole feed.
  fn recent(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Activity>, Self::Error>> + Send + '_;

  // ── Bulk deletes ──────────────────────────────────────────────────────

  /// Remove every activity recorded under `user_id`. Returns the number of
  /// rows removed.
  fn delete_for_user(
    &self,
    user_id: Uuid,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Remove every activity whose subject is `subject`. Returns the number
  /// of rows removed.
  fn delete_for_subject<'a>(
    &'a self,
    subject: &'a SubjectRef,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;
}
