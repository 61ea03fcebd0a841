//! SQL schema for the Byline SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- One row per recorded event. Rows are inserted and bulk-deleted, never
-- updated.
CREATE TABLE IF NOT EXISTS activities (
    activity_id  TEXT PRIMARY KEY,
    action       TEXT NOT NULL,
    user_id      TEXT NOT NULL,   -- the acting user; never null
    subject_type TEXT,            -- ENTITY_TYPE of the subject, if any
    subject_id   TEXT,
    recorded_at  TEXT NOT NULL,   -- ISO 8601 UTC; store-assigned
    CHECK ((subject_type IS NULL) = (subject_id IS NULL))
);

CREATE INDEX IF NOT EXISTS activities_user_idx     ON activities(user_id);
CREATE INDEX IF NOT EXISTS activities_subject_idx  ON activities(subject_type, subject_id);
CREATE INDEX IF NOT EXISTS activities_recorded_idx ON activities(recorded_at);

PRAGMA user_version = 1;
";
