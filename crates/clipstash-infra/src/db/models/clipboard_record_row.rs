use diesel::prelude::*;
use serde::Serialize;

use crate::db::schema::clipboard_record;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = clipboard_record)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClipboardRecordRow {
    pub id: i64,
    pub html: Option<String>,
    pub plain: Option<String>,
    pub created_at_ms: i64,
    pub source_app: Option<String>,
    pub size_bytes: i64,
}

/// Insert form: the id is assigned by SQLite on insert.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clipboard_record)]
pub struct NewClipboardRecordRow {
    pub html: Option<String>,
    pub plain: Option<String>,
    pub created_at_ms: i64,
    pub source_app: Option<String>,
    pub size_bytes: i64,
}
