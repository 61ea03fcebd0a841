//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings.

use byline_core::activity::{Activity, SubjectRef};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw strings read directly from an `activities` row.
pub struct RawActivity {
  pub activity_id:  String,
  pub action:       String,
  pub user_id:      String,
  pub subject_type: Option<String>,
  pub subject_id:   Option<String>,
  pub recorded_at:  String,
}

impl RawActivity {
  pub fn into_activity(self) -> Result<Activity> {
    let subject = match (self.subject_type, self.subject_id) {
      (Some(entity_type), Some(id)) => Some(SubjectRef {
        entity_type,
        entity_id: decode_uuid(&id)?,
      }),
      (None, None) => None,
      _ => return Err(Error::DanglingSubject(self.activity_id)),
    };

    Ok(Activity {
      activity_id: decode_uuid(&self.activity_id)?,
      action: self.action,
      user_id: decode_uuid(&self.user_id)?,
      subject,
      recorded_at: decode_dt(&self.recorded_at)?,
    })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn raw(subject_type: Option<&str>, subject_id: Option<Uuid>) -> RawActivity {
    RawActivity {
      activity_id:  encode_uuid(Uuid::new_v4()),
      action:       "post".into(),
      user_id:      encode_uuid(Uuid::new_v4()),
      subject_type: subject_type.map(str::to_owned),
      subject_id:   subject_id.map(encode_uuid),
      recorded_at:  encode_dt(Utc::now()),
    }
  }

  #[test]
  fn subject_pair_decodes() {
    let id = Uuid::new_v4();
    let activity = raw(Some("post"), Some(id)).into_activity().unwrap();
    let subject = activity.subject.unwrap();
    assert_eq!(subject.entity_type, "post");
    assert_eq!(subject.entity_id, id);
  }

  #[test]
  fn absent_subject_decodes_to_none() {
    let activity = raw(None, None).into_activity().unwrap();
    assert!(activity.subject.is_none());
  }

  #[test]
  fn dangling_subject_is_rejected() {
    let err = raw(Some("post"), None).into_activity().unwrap_err();
    assert!(matches!(err, Error::DanglingSubject(_)));

    let err = raw(None, Some(Uuid::new_v4())).into_activity().unwrap_err();
    assert!(matches!(err, Error::DanglingSubject(_)));
  }

  #[test]
  fn datetime_roundtrip() {
    let now = Utc::now();
    assert_eq!(decode_dt(&encode_dt(now)).unwrap(), now);
  }
}
