//! The post view model read by the rendering helpers.
//!
//! Posts are owned and persisted elsewhere in the application; this
//! subsystem only reads them, and records their creation in the feed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capability::{CreationTracked, FeedEntity};

/// A published post: a title and a rendered-HTML body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
  pub post_id:   Uuid,
  /// The authoring user. Absent for legacy or system-generated posts, in
  /// which case creation tracking fails rather than crediting nobody.
  pub author_id: Option<Uuid>,
  pub title:     String,
  /// Rendered HTML markup.
  pub body:      String,
}

impl FeedEntity for Post {
  const ENTITY_TYPE: &'static str = "post";

  fn entity_id(&self) -> Uuid { self.post_id }
}

impl CreationTracked for Post {
  fn actor_id(&self) -> Option<Uuid> { self.author_id }
}
