//! Capability traits a host entity type adopts to participate in the feed.
//!
//! Adoption is static: a type implements [`CreationTracked`],
//! [`TracksUnlinked`], or both. Each trait can be implemented at most once
//! per type, so there is no runtime registration to guard and no way to
//! install the shared surface twice — [`FeedEntity`] is the single base both
//! capabilities extend.

use uuid::Uuid;

/// Shared identity surface for feed-participating entities.
pub trait FeedEntity {
  /// Stable lower_snake_case name for the entity type. Doubles as the
  /// recorded action for creation events.
  const ENTITY_TYPE: &'static str;

  fn entity_id(&self) -> Uuid;
}

/// Self-linked activity: every creation of the host entity is recorded in
/// the feed, credited to the host's actor and linked back to the host as
/// subject.
pub trait CreationTracked: FeedEntity {
  /// The actor credited with the creation, usually the owning user.
  ///
  /// `None` makes recording fail loudly rather than store a null actor.
  fn actor_id(&self) -> Option<Uuid>;

  /// Evaluated after the host row is committed, so it can inspect persisted
  /// or derived fields. Returning `false` suppresses recording for exactly
  /// this record.
  fn should_track(&self) -> bool { true }
}

/// Unlinked activity: the host emits ad-hoc named events carrying no subject
/// reference, recorded under the host's own id.
pub trait TracksUnlinked: FeedEntity {}
