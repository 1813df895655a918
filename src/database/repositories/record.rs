use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Record, RecordStatus};

/// Rows returned by an unfiltered listing. Filtered searches are uncapped.
const DEFAULT_LIST_LIMIT: u32 = 35;

const RECORD_COLUMNS: &str = "id, checkout_time, user_name, equipment_name, \
     checked_out_by, return_time, returned_by, status";

#[derive(Clone)]
pub struct RecordRepository {
    pool: SqlitePool,
}

impl RecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_checkout(&self, record: &Record) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO records (id, checkout_time, user_name, equipment_name, checked_out_by, return_time, returned_by, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(record.checkout_time)
        .bind(&record.user_name)
        .bind(&record.equipment_name)
        .bind(&record.checked_out_by)
        .bind(record.return_time)
        .bind(&record.returned_by)
        .bind(&record.status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Record>> {
        let record = sqlx::query_as::<_, Record>(&format!(
            "SELECT {} FROM records WHERE id = ?",
            RECORD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Close a pending record. Returns the updated row, or `None` when the
    /// record does not exist or is already complete.
    pub async fn mark_returned(&self, id: &str, returned_by: &str) -> Result<Option<Record>> {
        let now = Utc::now().naive_utc();

        let record = sqlx::query_as::<_, Record>(&format!(
            r#"
            UPDATE records
            SET return_time = ?, returned_by = ?, status = ?
            WHERE id = ? AND status = ?
            RETURNING {}
            "#,
            RECORD_COLUMNS
        ))
        .bind(now)
        .bind(returned_by)
        .bind(RecordStatus::Complete)
        .bind(id)
        .bind(RecordStatus::Pending)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Close every pending record among `record_ids` inside one transaction;
    /// complete records are skipped. Returns the number of rows mutated.
    pub async fn batch_return(&self, record_ids: &[String], returned_by: &str) -> Result<u64> {
        let now = Utc::now().naive_utc();
        let mut tx = self.pool.begin().await?;
        let mut updated = 0u64;

        for id in record_ids {
            let result = sqlx::query(
                r#"
                UPDATE records
                SET return_time = ?, returned_by = ?, status = ?
                WHERE id = ? AND status = ?
                "#,
            )
            .bind(now)
            .bind(returned_by)
            .bind(RecordStatus::Complete)
            .bind(id)
            .bind(RecordStatus::Pending)
            .execute(&mut *tx)
            .await?;

            updated += result.rows_affected();
        }

        tx.commit().await?;

        Ok(updated)
    }

    /// Filtered listing, newest checkout first. The `responsible` filter
    /// matches either responsible-party column, `equipment` matches the
    /// equipment name; both are case-insensitive substring matches. With no
    /// filters only the most recent rows are returned.
    pub async fn list(
        &self,
        responsible: Option<&str>,
        equipment: Option<&str>,
    ) -> Result<Vec<Record>> {
        let mut conditions: Vec<&str> = Vec::new();
        if responsible.is_some() {
            conditions.push(
                "(LOWER(checked_out_by) LIKE '%' || LOWER(?) || '%' \
                 OR LOWER(COALESCE(returned_by, '')) LIKE '%' || LOWER(?) || '%')",
            );
        }
        if equipment.is_some() {
            conditions.push("LOWER(equipment_name) LIKE '%' || LOWER(?) || '%'");
        }

        let mut query = format!("SELECT {} FROM records", RECORD_COLUMNS);
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY checkout_time DESC");
        if conditions.is_empty() {
            query.push_str(&format!(" LIMIT {}", DEFAULT_LIST_LIMIT));
        }

        let mut q = sqlx::query_as::<_, Record>(&query);
        if let Some(responsible) = responsible {
            q = q.bind(responsible).bind(responsible);
        }
        if let Some(equipment) = equipment {
            q = q.bind(equipment);
        }

        let records = q.fetch_all(&self.pool).await?;

        Ok(records)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
