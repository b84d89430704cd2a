//! SQL schema for the Quill SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Entries are immutable: created and deleted, never updated.
-- No UPDATE statement exists anywhere in this crate.
CREATE TABLE IF NOT EXISTS entries (
    entry_id    TEXT PRIMARY KEY,
    owner_id    TEXT NOT NULL,   -- opaque principal identifier
    content     TEXT NOT NULL,
    created_at  TEXT NOT NULL    -- ISO 8601 UTC; assigned at write time
);

CREATE INDEX IF NOT EXISTS entries_owner_idx         ON entries(owner_id);
CREATE INDEX IF NOT EXISTS entries_owner_created_idx ON entries(owner_id, created_at);

PRAGMA user_version = 1;
";
