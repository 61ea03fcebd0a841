//! [`SqliteStore`] — the SQLite implementation of [`ActivityStore`].

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use byline_core::{
  activity::{Activity, NewActivity, SubjectRef},
  store::ActivityStore,
};

use crate::{
  Error, Result,
  encode::{RawActivity, encode_uuid, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Byline activity store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Map one `activities` row (in `SELECT` column order) to raw strings.
fn raw_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawActivity> {
  Ok(RawActivity {
    activity_id:  row.get(0)?,
    action:       row.get(1)?,
    user_id:      row.get(2)?,
    subject_type: row.get(3)?,
    subject_id:   row.get(4)?,
    recorded_at:  row.get(5)?,
  })
}

// ─── ActivityStore impl ──────────────────────────────────────────────────────

impl ActivityStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn record_activity(&self, input: NewActivity) -> Result<Activity> {
    let activity = Activity {
      activity_id: Uuid::new_v4(),
      action:      input.action,
      user_id:     input.user_id,
      subject:     input.subject,
      recorded_at: Utc::now(),
    };

    let id_str       = encode_uuid(activity.activity_id);
    let action       = activity.action.clone();
    let user_id_str  = encode_uuid(activity.user_id);
    let subject_type = activity.subject.as_ref().map(|s| s.entity_type.clone());
    let subject_id   = activity.subject.as_ref().map(|s| encode_uuid(s.entity_id));
    let at_str       = encode_dt(activity.recorded_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO activities (
             activity_id, action, user_id, subject_type, subject_id, recorded_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            action,
            user_id_str,
            subject_type,
            subject_id,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(activity)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn activities_for_subject(
    &self,
    subject: &SubjectRef,
  ) -> Result<Vec<Activity>> {
    let entity_type   = subject.entity_type.clone();
    let entity_id_str = encode_uuid(subject.entity_id);

    let raws: Vec<RawActivity> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT activity_id, action, user_id, subject_type, subject_id, recorded_at
           FROM activities
           WHERE subject_type = ?1 AND subject_id = ?2
           ORDER BY recorded_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![entity_type, entity_id_str], raw_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawActivity::into_activity).collect()
  }

  async fn activities_for_user(&self, user_id: Uuid) -> Result<Vec<Activity>> {
    let user_id_str = encode_uuid(user_id);

    let raws: Vec<RawActivity> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT activity_id, action, user_id, subject_type, subject_id, recorded_at
           FROM activities
           WHERE user_id = ?1
           ORDER BY recorded_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![user_id_str], raw_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawActivity::into_activity).collect()
  }

  async fn recent(&self, limit: usize) -> Result<Vec<Activity>> {
    let limit_val = limit as i64;

    let raws: Vec<RawActivity> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT activity_id, action, user_id, subject_type, subject_id, recorded_at
           FROM activities
           ORDER BY recorded_at DESC, rowid DESC
           LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val], raw_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawActivity::into_activity).collect()
  }

  // ── Bulk deletes ──────────────────────────────────────────────────────────

  async fn delete_for_user(&self, user_id: Uuid) -> Result<u64> {
    let user_id_str = encode_uuid(user_id);

    let removed = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM activities WHERE user_id = ?1",
          rusqlite::params![user_id_str],
        )?;
        Ok(n)
      })
      .await?;

    Ok(removed as u64)
  }

  async fn delete_for_subject(&self, subject: &SubjectRef) -> Result<u64> {
    let entity_type   = subject.entity_type.clone();
    let entity_id_str = encode_uuid(subject.entity_id);

    let removed = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM activities WHERE subject_type = ?1 AND subject_id = ?2",
          rusqlite::params![entity_type, entity_id_str],
        )?;
        Ok(n)
      })
      .await?;

    Ok(removed as u64)
  }
}
