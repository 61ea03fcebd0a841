//! [`ActivityFeed`] — wires entity lifecycle to activity persistence.
//!
//! The feed exposes explicit post-create and post-destroy hooks. The host
//! type's repository/persistence layer invokes them synchronously after the
//! corresponding storage operation commits; nothing here registers implicit
//! callbacks. A hook is not complete until its store call resolves, and a
//! store failure is surfaced to the caller — never retried, never dropped.

use tracing::debug;

use crate::{
  activity::{Activity, NewActivity, SubjectRef},
  capability::{CreationTracked, TracksUnlinked},
  error::FeedError,
  store::ActivityStore,
};

/// The activity feed service over one storage backend.
pub struct ActivityFeed<S> {
  store: S,
}

impl<S: ActivityStore> ActivityFeed<S> {
  pub fn new(store: S) -> Self { Self { store } }

  /// The backing store.
  pub fn store(&self) -> &S { &self.store }

  // ── Post-create hooks ─────────────────────────────────────────────────

  /// Post-create hook for self-linked hosts. Call once, after the host row
  /// has committed.
  ///
  /// Evaluates the host's predicate first; a `false` return suppresses
  /// recording and yields `Ok(None)`. Otherwise records an activity with
  /// the host's type name as action, the host as subject, and the host's
  /// actor as user. The hook runs after the host commit, so a recording
  /// failure fails the triggering operation while leaving the host row in
  /// place.
  pub async fn entity_created<E: CreationTracked>(
    &self,
    entity: &E,
  ) -> Result<Option<Activity>, FeedError<S::Error>> {
    if !entity.should_track() {
      debug!(
        entity_type = E::ENTITY_TYPE,
        "creation not tracked: predicate rejected record"
      );
      return Ok(None);
    }

    let action = E::ENTITY_TYPE;
    let user_id = entity.actor_id().ok_or(FeedError::ActorMissing {
      action:      action.to_owned(),
      entity_type: E::ENTITY_TYPE,
    })?;

    let input = NewActivity {
      action: action.to_owned(),
      user_id,
      subject: Some(SubjectRef::of(entity)),
    };
    let activity =
      self.store.record_activity(input).await.map_err(|source| {
        FeedError::Persist { action: action.to_owned(), source }
      })?;

    debug!(activity_id = %activity.activity_id, action, "creation recorded");
    Ok(Some(activity))
  }

  /// Record an ad-hoc named event for an unlinked host: credited to the
  /// host's own id, with no subject reference.
  pub async fn track_activity<E: TracksUnlinked>(
    &self,
    entity: &E,
    action: &str,
  ) -> Result<Activity, FeedError<S::Error>> {
    let input = NewActivity {
      action:  action.to_owned(),
      user_id: entity.entity_id(),
      subject: None,
    };
    let activity =
      self.store.record_activity(input).await.map_err(|source| {
        FeedError::Persist { action: action.to_owned(), source }
      })?;

    debug!(activity_id = %activity.activity_id, action, "activity recorded");
    Ok(activity)
  }

  // ── Post-destroy hooks ────────────────────────────────────────────────

  /// Post-destroy hook for self-linked hosts: cascade removal of every
  /// activity whose subject was the destroyed entity. Returns the number of
  /// activities removed.
  pub async fn subject_destroyed<E: CreationTracked>(
    &self,
    entity: &E,
  ) -> Result<u64, FeedError<S::Error>> {
    let subject = SubjectRef::of(entity);
    self
      .store
      .delete_for_subject(&subject)
      .await
      .map_err(|source| FeedError::Cleanup {
        entity_type: E::ENTITY_TYPE,
        entity_id: entity.entity_id(),
        source,
      })
  }

  /// Post-destroy hook for unlinked hosts: bulk removal of every activity
  /// recorded under the destroyed entity's id. Separate from the subject
  /// cascade — unlinked activities carry no subject to cascade through.
  pub async fn user_destroyed<E: TracksUnlinked>(
    &self,
    entity: &E,
  ) -> Result<u64, FeedError<S::Error>> {
    self
      .store
      .delete_for_user(entity.entity_id())
      .await
      .map_err(|source| FeedError::Cleanup {
        entity_type: E::ENTITY_TYPE,
        entity_id: entity.entity_id(),
        source,
      })
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Activities whose subject is `entity`, newest first.
  pub async fn activities_for<E: CreationTracked>(
    &self,
    entity: &E,
  ) -> Result<Vec<Activity>, FeedError<S::Error>> {
    let subject = SubjectRef::of(entity);
    self
      .store
      .activities_for_subject(&subject)
      .await
      .map_err(|source| FeedError::Query { source })
  }

  /// The `limit` most recent activities across the feed.
  pub async fn recent(
    &self,
    limit: usize,
  ) -> Result<Vec<Activity>, FeedError<S::Error>> {
    self
      .store
      .recent(limit)
      .await
      .map_err(|source| FeedError::Query { source })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
