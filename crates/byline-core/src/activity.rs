//! Activity types — one persisted record of who did what to which subject.
//!
//! Activities are written once by the feed service and never mutated.
//! Removal happens only through the destruction hooks on
//! [`crate::feed::ActivityFeed`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capability::FeedEntity;

// ─── SubjectRef ──────────────────────────────────────────────────────────────

/// Tagged reference to the entity an action was performed upon.
///
/// Stored as a plain `(entity_type, entity_id)` pair; the feed never follows
/// the reference, it only matches on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRef {
  /// The host type's [`FeedEntity::ENTITY_TYPE`].
  pub entity_type: String,
  pub entity_id:   Uuid,
}

impl SubjectRef {
  /// The reference naming `entity` as subject.
  pub fn of<E: FeedEntity>(entity: &E) -> Self {
    Self {
      entity_type: E::ENTITY_TYPE.to_owned(),
      entity_id:   entity.entity_id(),
    }
  }
}

// ─── Activity ────────────────────────────────────────────────────────────────

/// A recorded event: who (`user_id`) did what (`action`) to which subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
  pub activity_id: Uuid,
  /// Free-form action name; creation events use the host's
  /// [`FeedEntity::ENTITY_TYPE`].
  pub action:      String,
  /// The acting user.
  pub user_id:     Uuid,
  /// `None` for unlinked activities.
  pub subject:     Option<SubjectRef>,
  /// Store-assigned timestamp; never changes after creation.
  pub recorded_at: DateTime<Utc>,
}

// ─── NewActivity ─────────────────────────────────────────────────────────────

/// Input to [`crate::store::ActivityStore::record_activity`].
/// `activity_id` and `recorded_at` are always assigned by the store; they are
/// not accepted from callers.
#[derive(Debug, Clone)]
pub struct NewActivity {
  pub action:  String,
  pub user_id: Uuid,
  pub subject: Option<SubjectRef>,
}
