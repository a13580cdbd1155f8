use anyhow::Result;
use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug_span;

use clipstash_core::clipboard::{CapturedSnapshot, ClipboardRecord};
use clipstash_core::ports::{HistoryRepositoryPort, ListQuery};
use clipstash_core::RecordId;

use crate::db::mappers::RecordRowMapper;
use crate::db::models::ClipboardRecordRow;
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::clipboard_record::dsl;

/// SQLite-backed record storage.
///
/// Every method is a single statement (or a single transaction), so each
/// record is visible either fully or not at all to concurrent readers.
pub struct DieselHistoryRepository<E>
where
    E: DbExecutor,
{
    db: E,
    mapper: RecordRowMapper,
}

impl<E> DieselHistoryRepository<E>
where
    E: DbExecutor,
{
    pub fn new(db: E) -> Self {
        Self {
            db,
            mapper: RecordRowMapper,
        }
    }
}

#[async_trait]
impl<E> HistoryRepositoryPort for DieselHistoryRepository<E>
where
    E: DbExecutor,
{
    async fn insert(&self, snapshot: &CapturedSnapshot, created_at_ms: i64) -> Result<RecordId> {
        let span = debug_span!("infra.sqlite.insert_record", table = "clipboard_record");
        let _enter = span.enter();

        let row = self.mapper.to_row(&(snapshot, created_at_ms))?;
        self.db.run(|conn| {
            let id: i64 = diesel::insert_into(dsl::clipboard_record)
                .values(&row)
                .returning(dsl::id)
                .get_result(conn)?;
            Ok(RecordId::new(id))
        })
    }

    async fn latest(&self) -> Result<Option<ClipboardRecord>> {
        let row = self.db.run(|conn| {
            let row = dsl::clipboard_record
                .order((dsl::created_at_ms.desc(), dsl::id.desc()))
                .first::<ClipboardRecordRow>(conn)
                .optional()?;
            Ok(row)
        })?;

        row.map(|r| self.mapper.to_domain(&r)).transpose()
    }

    async fn get(&self, id: RecordId) -> Result<Option<ClipboardRecord>> {
        let span = debug_span!(
            "infra.sqlite.get_record",
            table = "clipboard_record",
            record_id = %id,
        );
        let _enter = span.enter();

        let row = self.db.run(|conn| {
            let row = dsl::clipboard_record
                .filter(dsl::id.eq(id.as_i64()))
                .first::<ClipboardRecordRow>(conn)
                .optional()?;
            Ok(row)
        })?;

        row.map(|r| self.mapper.to_domain(&r)).transpose()
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<ClipboardRecord>> {
        let rows = self.db.run(|conn| {
            let mut stmt = dsl::clipboard_record.into_boxed();

            if let Some(search) = &query.search {
                stmt = stmt.filter(dsl::plain.like(format!("%{}%", search)));
            }

            stmt = stmt.order((dsl::created_at_ms.desc(), dsl::id.desc()));

            if query.limit > 0 {
                stmt = stmt.limit(i64::from(query.limit));
            }
            if query.offset > 0 {
                stmt = stmt.offset(i64::from(query.offset));
            }

            let rows = stmt.load::<ClipboardRecordRow>(conn)?;
            Ok(rows)
        })?;

        rows.iter().map(|r| self.mapper.to_domain(r)).collect()
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        let span = debug_span!(
            "infra.sqlite.delete_record",
            table = "clipboard_record",
            record_id = %id,
        );
        let _enter = span.enter();

        self.db.run(|conn| {
            let removed = diesel::delete(dsl::clipboard_record.filter(dsl::id.eq(id.as_i64())))
                .execute(conn)?;
            Ok(removed > 0)
        })
    }

    async fn clear(&self) -> Result<u64> {
        self.db.run(|conn| {
            let removed = diesel::delete(dsl::clipboard_record).execute(conn)?;
            Ok(removed as u64)
        })
    }

    async fn delete_older_than(&self, cutoff_ms: i64) -> Result<u64> {
        let span = debug_span!(
            "infra.sqlite.sweep_records",
            table = "clipboard_record",
            cutoff_ms,
        );
        let _enter = span.enter();

        self.db.run(|conn| {
            let removed =
                diesel::delete(dsl::clipboard_record.filter(dsl::created_at_ms.lt(cutoff_ms)))
                    .execute(conn)?;
            Ok(removed as u64)
        })
    }

    async fn count(&self) -> Result<u64> {
        self.db.run(|conn| {
            let count: i64 = dsl::clipboard_record.count().get_result(conn)?;
            Ok(count as u64)
        })
    }

    async fn total_size_bytes(&self) -> Result<u64> {
        self.db.run(|conn| {
            // SQLite's `SUM` of an integer column is reported by diesel as
            // `Numeric`, which `i64` cannot deserialize from. Project it to a
            // `BigInt`-typed SQL expression so the integer sum loads directly.
            let total: Option<i64> = dsl::clipboard_record
                .select(diesel::dsl::sql::<diesel::sql_types::Nullable<diesel::sql_types::BigInt>>(
                    "SUM(size_bytes)",
                ))
                .get_result(conn)?;
            Ok(total.unwrap_or(0) as u64)
        })
    }
}
