use anyhow::Result;
use clipstash_core::clipboard::{CapturedSnapshot, ClipboardRecord};
use clipstash_core::RecordId;

use crate::db::models::{ClipboardRecordRow, NewClipboardRecordRow};
use crate::db::ports::{InsertMapper, RowMapper};

#[derive(Clone, Copy)]
pub struct RecordRowMapper;

impl RowMapper<ClipboardRecordRow, ClipboardRecord> for RecordRowMapper {
    fn to_domain(&self, row: &ClipboardRecordRow) -> Result<ClipboardRecord> {
        Ok(ClipboardRecord {
            id: RecordId::new(row.id),
            html: row.html.clone(),
            plain: row.plain.clone(),
            created_at_ms: row.created_at_ms,
            source_app: row.source_app.clone(),
            size_bytes: row.size_bytes,
        })
    }
}

impl<'a> InsertMapper<(&'a CapturedSnapshot, i64), NewClipboardRecordRow> for RecordRowMapper {
    fn to_row(&self, (snapshot, created_at_ms): &(&'a CapturedSnapshot, i64)) -> Result<NewClipboardRecordRow> {
        Ok(NewClipboardRecordRow {
            html: snapshot.html().map(str::to_string),
            plain: snapshot.plain().map(str::to_string),
            created_at_ms: *created_at_ms,
            source_app: snapshot.source_app().map(str::to_string),
            size_bytes: snapshot.size_bytes() as i64,
        })
    }
}
