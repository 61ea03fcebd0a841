//! Integration tests for `SqliteStore` against an in-memory database.

use byline_core::{
  activity::{NewActivity, SubjectRef},
  capability::{FeedEntity, TracksUnlinked},
  error::FeedError,
  feed::ActivityFeed,
  post::Post,
  store::ActivityStore,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn unlinked(action: &str, user_id: Uuid) -> NewActivity {
  NewActivity { action: action.into(), user_id, subject: None }
}

fn linked(action: &str, user_id: Uuid, subject: SubjectRef) -> NewActivity {
  NewActivity {
    action: action.into(),
    user_id,
    subject: Some(subject),
  }
}

fn post_subject() -> SubjectRef {
  SubjectRef {
    entity_type: "post".into(),
    entity_id:   Uuid::new_v4(),
  }
}

// ─── Recording ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn record_and_read_back_by_user() {
  let s = store().await;
  let user = Uuid::new_v4();

  let recorded = s.record_activity(unlinked("logged_in", user)).await.unwrap();
  assert_eq!(recorded.action, "logged_in");
  assert_eq!(recorded.user_id, user);
  assert!(recorded.subject.is_none());

  let activities = s.activities_for_user(user).await.unwrap();
  assert_eq!(activities.len(), 1);
  assert_eq!(activities[0].activity_id, recorded.activity_id);
  assert!(activities[0].subject.is_none());
}

#[tokio::test]
async fn subject_reference_roundtrips() {
  let s = store().await;
  let subject = post_subject();

  s.record_activity(linked("post", Uuid::new_v4(), subject.clone()))
    .await
    .unwrap();

  let activities = s.activities_for_subject(&subject).await.unwrap();
  assert_eq!(activities.len(), 1);
  assert_eq!(activities[0].subject.as_ref(), Some(&subject));
}

#[tokio::test]
async fn reads_are_newest_first() {
  let s = store().await;
  let user = Uuid::new_v4();

  for action in ["one", "two", "three"] {
    s.record_activity(unlinked(action, user)).await.unwrap();
  }

  let activities = s.activities_for_user(user).await.unwrap();
  let actions: Vec<_> = activities.iter().map(|a| a.action.as_str()).collect();
  assert_eq!(actions, ["three", "two", "one"]);
}

#[tokio::test]
async fn recent_spans_users_and_honors_limit() {
  let s = store().await;

  s.record_activity(unlinked("one", Uuid::new_v4())).await.unwrap();
  s.record_activity(unlinked("two", Uuid::new_v4())).await.unwrap();
  s.record_activity(unlinked("three", Uuid::new_v4())).await.unwrap();

  let recent = s.recent(2).await.unwrap();
  let actions: Vec<_> = recent.iter().map(|a| a.action.as_str()).collect();
  assert_eq!(actions, ["three", "two"]);
}

// ─── Bulk deletes ────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_for_user_removes_only_matching_rows() {
  let s = store().await;
  let alice = Uuid::new_v4();
  let bob = Uuid::new_v4();

  s.record_activity(unlinked("logged_in", alice)).await.unwrap();
  s.record_activity(unlinked("logged_out", alice)).await.unwrap();
  s.record_activity(unlinked("logged_in", bob)).await.unwrap();

  let removed = s.delete_for_user(alice).await.unwrap();
  assert_eq!(removed, 2);

  assert!(s.activities_for_user(alice).await.unwrap().is_empty());
  assert_eq!(s.activities_for_user(bob).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_for_subject_removes_only_matching_rows() {
  let s = store().await;
  let first = post_subject();
  let second = post_subject();

  s.record_activity(linked("post", Uuid::new_v4(), first.clone()))
    .await
    .unwrap();
  s.record_activity(linked("post", Uuid::new_v4(), second.clone()))
    .await
    .unwrap();

  let removed = s.delete_for_subject(&first).await.unwrap();
  assert_eq!(removed, 1);

  assert!(s.activities_for_subject(&first).await.unwrap().is_empty());
  assert_eq!(s.activities_for_subject(&second).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_for_subject_distinguishes_entity_types() {
  let s = store().await;
  let shared_id = Uuid::new_v4();
  let as_post = SubjectRef { entity_type: "post".into(), entity_id: shared_id };
  let as_page = SubjectRef { entity_type: "page".into(), entity_id: shared_id };

  s.record_activity(linked("post", Uuid::new_v4(), as_post.clone()))
    .await
    .unwrap();
  s.record_activity(linked("page", Uuid::new_v4(), as_page.clone()))
    .await
    .unwrap();

  s.delete_for_subject(&as_post).await.unwrap();
  assert_eq!(s.activities_for_subject(&as_page).await.unwrap().len(), 1);
}

// ─── Feed end-to-end ─────────────────────────────────────────────────────────
//
// Drives the lifecycle hooks the way a repository layer would after its own
// commits, with the SQLite store underneath.

struct Member {
  member_id: Uuid,
}

impl FeedEntity for Member {
  const ENTITY_TYPE: &'static str = "member";

  fn entity_id(&self) -> Uuid { self.member_id }
}

impl TracksUnlinked for Member {}

fn post(author_id: Option<Uuid>) -> Post {
  Post {
    post_id: Uuid::new_v4(),
    author_id,
    title: "A day at the lake".into(),
    body: "<p>It was sunny.</p>".into(),
  }
}

#[tokio::test]
async fn post_creation_is_recorded_through_the_feed() {
  let s = store().await;
  let feed = ActivityFeed::new(s.clone());
  let author = Uuid::new_v4();
  let p = post(Some(author));

  let recorded = feed.entity_created(&p).await.unwrap().unwrap();
  assert_eq!(recorded.action, "post");
  assert_eq!(recorded.user_id, author);

  let activities = feed.activities_for(&p).await.unwrap();
  assert_eq!(activities.len(), 1);
  assert_eq!(activities[0].activity_id, recorded.activity_id);
  assert_eq!(activities[0].subject.as_ref(), Some(&SubjectRef::of(&p)));
}

#[tokio::test]
async fn authorless_post_creation_fails_and_stores_nothing() {
  let s = store().await;
  let feed = ActivityFeed::new(s.clone());
  let p = post(None);

  let err = feed.entity_created(&p).await.unwrap_err();
  assert!(matches!(err, FeedError::ActorMissing { .. }));
  assert!(s.recent(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn destroyed_post_cascades_its_activities() {
  let s = store().await;
  let feed = ActivityFeed::new(s.clone());
  let p = post(Some(Uuid::new_v4()));
  let other = post(Some(Uuid::new_v4()));

  feed.entity_created(&p).await.unwrap();
  feed.entity_created(&other).await.unwrap();

  let removed = feed.subject_destroyed(&p).await.unwrap();
  assert_eq!(removed, 1);
  assert!(feed.activities_for(&p).await.unwrap().is_empty());
  assert_eq!(feed.activities_for(&other).await.unwrap().len(), 1);
}

#[tokio::test]
async fn member_lifecycle_tracks_and_cleans_unlinked_events() {
  let s = store().await;
  let feed = ActivityFeed::new(s.clone());
  let alice = Member { member_id: Uuid::new_v4() };
  let bob = Member { member_id: Uuid::new_v4() };

  feed.track_activity(&alice, "logged_in").await.unwrap();
  feed.track_activity(&alice, "updated_profile").await.unwrap();
  feed.track_activity(&bob, "logged_in").await.unwrap();

  let removed = feed.user_destroyed(&alice).await.unwrap();
  assert_eq!(removed, 2);

  assert!(s.activities_for_user(alice.member_id).await.unwrap().is_empty());
  assert_eq!(s.activities_for_user(bob.member_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn feed_recent_interleaves_linked_and_unlinked() {
  let s = store().await;
  let feed = ActivityFeed::new(s.clone());
  let m = Member { member_id: Uuid::new_v4() };
  let p = post(Some(Uuid::new_v4()));

  feed.track_activity(&m, "logged_in").await.unwrap();
  feed.entity_created(&p).await.unwrap();

  let recent = feed.recent(10).await.unwrap();
  let actions: Vec<_> = recent.iter().map(|a| a.action.as_str()).collect();
  assert_eq!(actions, ["post", "logged_in"]);
}
